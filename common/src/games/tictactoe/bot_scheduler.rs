use std::time::Duration;

use tokio::sync::mpsc::WeakUnboundedSender;
use tokio::task::JoinHandle;

use super::session::{SessionCommand, TicTacToeSession};

pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(600);

/// Delays the computer's move by a fixed interval. At most one task is alive; it is aborted as
/// soon as the session moves to another generation.
pub struct BotTurnScheduler {
    delay: Duration,
    scheduled: Option<(u64, JoinHandle<()>)>,
}

impl BotTurnScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            scheduled: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn scheduled_generation(&self) -> Option<u64> {
        self.scheduled.as_ref().map(|(generation, _)| *generation)
    }

    pub fn sync(
        &mut self,
        session: &TicTacToeSession,
        sender: &WeakUnboundedSender<SessionCommand>,
    ) {
        let pending = session.pending_bot_turn().map(|turn| turn.generation);
        if pending.is_some() && pending == self.scheduled_generation() {
            return;
        }

        self.cancel();

        let Some(generation) = pending else {
            return;
        };

        let sender = sender.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(sender) = sender.upgrade() {
                let _ = sender.send(SessionCommand::BotTurn { generation });
            }
        });
        self.scheduled = Some((generation, handle));
    }

    pub fn cancel(&mut self) {
        if let Some((_, handle)) = self.scheduled.take() {
            handle.abort();
        }
    }
}

impl Drop for BotTurnScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
