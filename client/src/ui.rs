use eframe::egui;
use tictactoe_common::games::tictactoe::SessionCommand;
use tokio::sync::mpsc;

use crate::game_ui::TicTacToeGameUi;
use crate::state::SharedState;

pub struct TicTacToeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    game_ui: TicTacToeGameUi,
}

impl TicTacToeApp {
    const INFO_PANEL_WIDTH: f32 = 240.0;

    pub fn new(shared_state: SharedState, command_tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self {
            shared_state,
            command_tx,
            game_ui: TicTacToeGameUi::new(),
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            let _ = self.command_tx.send(SessionCommand::Quit);
        }

        let Some(session) = self.shared_state.get_session() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            });
            return;
        };

        egui::SidePanel::right("info_panel")
            .exact_width(Self::INFO_PANEL_WIDTH)
            .show(ctx, |ui| {
                self.game_ui.render_info_panel(ui, &session, &self.command_tx);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.game_ui.render_board(ui, &session, &self.command_tx);
            });
        });
    }
}
