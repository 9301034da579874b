use std::sync::{Arc, Mutex, PoisonError};

use eframe::egui;
use tictactoe_common::games::tictactoe::{SessionBroadcaster, TicTacToeSession};

/// Latest session snapshot published by the game loop and read by the UI thread.
#[derive(Clone, Default)]
pub struct SharedState {
    session: Arc<Mutex<Option<TicTacToeSession>>>,
    ctx: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.ctx.lock().unwrap_or_else(PoisonError::into_inner) = Some(ctx);
    }

    pub fn get_session(&self) -> Option<TicTacToeSession> {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_session(&self, session: TicTacToeSession) {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }
}

impl SessionBroadcaster for SharedState {
    fn broadcast_state(&self, session: &TicTacToeSession) {
        self.set_session(session.clone());
        if let Some(ctx) = self.ctx.lock().unwrap_or_else(PoisonError::into_inner).as_ref() {
            ctx.request_repaint();
        }
    }
}
