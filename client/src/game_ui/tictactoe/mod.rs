use eframe::egui;
use tictactoe_common::games::tictactoe::{
    BOARD_SIZE, BotType, GameMode, MAX_NAME_LENGTH, Mark, Outcome, SessionCommand,
    TicTacToeSession,
};
use tokio::sync::mpsc;

pub struct TicTacToeGameUi {
    name_inputs: Option<[String; 2]>,
}

impl TicTacToeGameUi {
    const BOARD_PADDING: f32 = 24.0;
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 160.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { name_inputs: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let available = available_width.min(available_height) - Self::BOARD_PADDING * 2.0;
        (available / BOARD_SIZE as f32).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    pub fn render_board(
        &mut self,
        ui: &mut egui::Ui,
        session: &TicTacToeSession,
        command_tx: &mpsc::UnboundedSender<SessionCommand>,
    ) {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_size = cell_size * BOARD_SIZE as f32;

        ui.add_space(Self::BOARD_PADDING);
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_size, board_size), egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        let outcome = session.outcome();
        let grid = session.current_grid();
        let accepts_clicks = !outcome.is_terminal() && !session.is_bot_turn();

        let hovered_cell = response
            .hover_pos()
            .and_then(|pos| Self::cell_at(rect, cell_size, pos))
            .filter(|&index| accepts_clicks && grid.is_empty_cell(index));

        for index in 0..BOARD_SIZE * BOARD_SIZE {
            let cell_rect = Self::cell_rect(rect, cell_size, index);

            if outcome.winning_line().is_some_and(|line| line.contains(index)) {
                painter.rect_filled(cell_rect, 0.0, egui::Color32::from_rgb(255, 230, 120));
            } else if hovered_cell == Some(index) {
                painter.rect_filled(
                    cell_rect,
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                );
            }

            match grid.get(index) {
                Some(Mark::X) => Self::draw_x(painter, cell_rect),
                Some(Mark::O) => Self::draw_o(painter, cell_rect),
                None => {}
            }
        }

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
        }

        if response.clicked()
            && let Some(index) = response
                .interact_pointer_pos()
                .and_then(|pos| Self::cell_at(rect, cell_size, pos))
        {
            let _ = command_tx.send(SessionCommand::Select(index));
        }
    }

    fn cell_at(rect: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
        if !rect.contains(pos) {
            return None;
        }
        let x = (((pos.x - rect.left()) / cell_size) as usize).min(BOARD_SIZE - 1);
        let y = (((pos.y - rect.top()) / cell_size) as usize).min(BOARD_SIZE - 1);
        Some(y * BOARD_SIZE + x)
    }

    fn cell_rect(rect: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
        let x = (index % BOARD_SIZE) as f32;
        let y = (index / BOARD_SIZE) as f32;
        egui::Rect::from_min_size(
            egui::pos2(rect.left() + x * cell_size, rect.top() + y * cell_size),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let radius = rect.width() / 2.0 - rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));
        painter.circle_stroke(rect.center(), radius, stroke);
    }

    pub fn render_info_panel(
        &mut self,
        ui: &mut egui::Ui,
        session: &TicTacToeSession,
        command_tx: &mpsc::UnboundedSender<SessionCommand>,
    ) {
        ui.heading("Tic-Tac-Toe");
        ui.separator();

        Self::render_status(ui, session);
        ui.separator();

        self.render_names(ui, session, command_tx);
        ui.separator();

        let scores = session.scores();
        ui.label(egui::RichText::new("Score").strong());
        for mark in [Mark::X, Mark::O] {
            ui.label(format!("{} ({}): {}", session.names().get(mark), mark, scores.wins(mark)));
        }
        ui.label(format!("Draws: {}", scores.draws));
        ui.separator();

        let mut mode = session.mode();
        for option in [GameMode::HumanVsHuman, GameMode::HumanVsComputer] {
            if ui.radio_value(&mut mode, option, option.label()).changed() {
                let _ = command_tx.send(SessionCommand::SetMode(mode));
            }
        }

        ui.add_enabled_ui(session.mode() == GameMode::HumanVsComputer, |ui| {
            let mut bot_type = session.bot_type();
            for option in [BotType::Random, BotType::Minimax] {
                if ui.radio_value(&mut bot_type, option, option.label()).changed() {
                    let _ = command_tx.send(SessionCommand::SetBotType(bot_type));
                }
            }
        });
        ui.separator();

        if ui.button("Reset board").clicked() {
            let _ = command_tx.send(SessionCommand::Reset);
        }
        ui.separator();

        Self::render_history(ui, session, command_tx);
    }

    fn render_status(ui: &mut egui::Ui, session: &TicTacToeSession) {
        let names = session.names();
        match session.outcome() {
            Outcome::Win(line) => {
                ui.colored_label(
                    egui::Color32::from_rgb(40, 160, 40),
                    format!("Winner: {} ({})", names.get(line.mark), line.mark),
                );
            }
            Outcome::Draw => {
                ui.label("Draw!");
            }
            Outcome::InProgress => {
                let mark = session.current_mark();
                if session.is_bot_turn() && session.is_viewing_latest() {
                    ui.label(format!("{} ({}) is thinking...", names.get(mark), mark));
                } else {
                    ui.label(format!("Next player: {} ({})", names.get(mark), mark));
                }
            }
        }

        if !session.is_viewing_latest() {
            ui.label(format!(
                "Viewing move #{} of {}",
                session.view_index(),
                session.history_len() - 1
            ));
        }
    }

    fn render_names(
        &mut self,
        ui: &mut egui::Ui,
        session: &TicTacToeSession,
        command_tx: &mpsc::UnboundedSender<SessionCommand>,
    ) {
        let inputs = self.name_inputs.get_or_insert_with(|| {
            [
                session.names().get(Mark::X).to_string(),
                session.names().get(Mark::O).to_string(),
            ]
        });

        for (mark, input) in [Mark::X, Mark::O].into_iter().zip(inputs.iter_mut()) {
            ui.horizontal(|ui| {
                ui.label(format!("{}:", mark));
                let response = ui.add(
                    egui::TextEdit::singleline(input)
                        .char_limit(MAX_NAME_LENGTH)
                        .desired_width(120.0),
                );
                if response.changed() {
                    let _ = command_tx.send(SessionCommand::Rename {
                        mark,
                        name: input.clone(),
                    });
                }
            });
        }
    }

    fn render_history(
        ui: &mut egui::Ui,
        session: &TicTacToeSession,
        command_tx: &mpsc::UnboundedSender<SessionCommand>,
    ) {
        ui.label(egui::RichText::new("Moves").strong());
        egui::ScrollArea::vertical()
            .id_salt("history_scroll")
            .show(ui, |ui| {
                for index in 0..session.history_len() {
                    let label = if index == 0 {
                        "Go to game start".to_string()
                    } else {
                        format!("Go to move #{}", index)
                    };
                    let is_current = index == session.view_index();
                    if ui.add_enabled(!is_current, egui::Button::new(label)).clicked() {
                        let _ = command_tx.send(SessionCommand::JumpTo(index));
                    }
                }
            });
    }
}
