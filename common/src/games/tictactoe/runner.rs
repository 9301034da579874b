use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, WeakUnboundedSender};

use crate::log;
use super::bot_scheduler::BotTurnScheduler;
use super::session::{SessionCommand, TicTacToeSession};

pub trait SessionBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, session: &TicTacToeSession);
}

/// Applies commands one at a time until `Quit` arrives or every strong sender is gone.
/// Returns the last accepted session.
pub async fn run_local_game(
    mut session: TicTacToeSession,
    mut command_rx: UnboundedReceiver<SessionCommand>,
    bot_sender: WeakUnboundedSender<SessionCommand>,
    broadcaster: impl SessionBroadcaster,
    bot_delay: Duration,
) -> TicTacToeSession {
    let mut scheduler = BotTurnScheduler::new(bot_delay);

    log!(
        "[runner] Starting {} game (seed {})",
        session.mode().label(),
        session.seed()
    );
    broadcaster.broadcast_state(&session);
    scheduler.sync(&session, &bot_sender);

    while let Some(command) = command_rx.recv().await {
        if command == SessionCommand::Quit {
            break;
        }

        match session.handle_command(&command) {
            Ok(next) => {
                if command == SessionCommand::Reset {
                    log!("[runner] Board reset");
                }
                session = next;
                broadcaster.broadcast_state(&session);
                scheduler.sync(&session, &bot_sender);
            }
            Err(e) => {
                log!("[runner] Rejected {:?}: {}", command, e);
            }
        }
    }

    scheduler.cancel();
    log!("[runner] Game loop stopped");
    session
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tokio::sync::mpsc;

    use super::*;
    use crate::games::tictactoe::{BotType, GameMode, Mark, TicTacToeSessionSettings};

    const DELAY: Duration = Duration::from_millis(400);

    #[derive(Clone, Default)]
    struct RecordingBroadcaster {
        snapshots: Arc<Mutex<Vec<TicTacToeSession>>>,
    }

    impl RecordingBroadcaster {
        fn count(&self) -> usize {
            self.snapshots.lock().unwrap().len()
        }
    }

    impl SessionBroadcaster for RecordingBroadcaster {
        fn broadcast_state(&self, session: &TicTacToeSession) {
            self.snapshots.lock().unwrap().push(session.clone());
        }
    }

    fn settings(mode: GameMode) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode,
            bot_type: BotType::Minimax,
            ..TicTacToeSessionSettings::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_computer_answers_after_delay() {
        let (tx, rx) = mpsc::unbounded_channel();
        let broadcaster = RecordingBroadcaster::default();
        let session = TicTacToeSession::new(&settings(GameMode::HumanVsComputer));
        let handle = tokio::spawn(run_local_game(
            session,
            rx,
            tx.downgrade(),
            broadcaster.clone(),
            DELAY,
        ));

        tx.send(SessionCommand::Select(4)).unwrap();
        tokio::time::sleep(DELAY * 2).await;
        tx.send(SessionCommand::Quit).unwrap();

        let session = handle.await.unwrap();
        assert_eq!(session.history_len(), 3);
        assert_eq!(session.current_grid().get(0), Some(Mark::O));
        assert_eq!(broadcaster.count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_during_delay_cancels_computer_move() {
        let (tx, rx) = mpsc::unbounded_channel();
        let broadcaster = RecordingBroadcaster::default();
        let session = TicTacToeSession::new(&settings(GameMode::HumanVsComputer));
        let handle = tokio::spawn(run_local_game(
            session,
            rx,
            tx.downgrade(),
            broadcaster.clone(),
            DELAY,
        ));

        tx.send(SessionCommand::Select(4)).unwrap();
        tokio::time::sleep(DELAY / 2).await;
        tx.send(SessionCommand::Reset).unwrap();
        tokio::time::sleep(DELAY * 3).await;
        tx.send(SessionCommand::Quit).unwrap();

        let session = handle.await.unwrap();
        assert_eq!(session.history_len(), 1);
        assert_eq!(broadcaster.count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_commands_are_not_broadcast() {
        let (tx, rx) = mpsc::unbounded_channel();
        let broadcaster = RecordingBroadcaster::default();
        let session = TicTacToeSession::new(&settings(GameMode::HumanVsHuman));
        let handle = tokio::spawn(run_local_game(
            session,
            rx,
            tx.downgrade(),
            broadcaster.clone(),
            DELAY,
        ));

        tx.send(SessionCommand::Select(4)).unwrap();
        tx.send(SessionCommand::Select(4)).unwrap();
        tx.send(SessionCommand::JumpTo(7)).unwrap();
        tx.send(SessionCommand::Quit).unwrap();

        let session = handle.await.unwrap();
        assert_eq!(session.history_len(), 2);
        assert_eq!(broadcaster.count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_senders_are_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let broadcaster = RecordingBroadcaster::default();
        let session = TicTacToeSession::new(&settings(GameMode::HumanVsHuman));
        let handle = tokio::spawn(run_local_game(
            session,
            rx,
            tx.downgrade(),
            broadcaster,
            DELAY,
        ));

        tx.send(SessionCommand::Select(0)).unwrap();
        drop(tx);

        let session = handle.await.unwrap();
        assert_eq!(session.history_len(), 2);
    }
}
