mod board;
mod bot_controller;
mod bot_scheduler;
mod runner;
mod session;
mod settings;
mod types;
mod validate;
mod win_detector;

pub use board::Grid;
pub use bot_controller::{
    BotInput, BotType, calculate_minimax_move, calculate_move, calculate_random_move,
};
pub use bot_scheduler::{BotTurnScheduler, DEFAULT_BOT_DELAY};
pub use runner::{SessionBroadcaster, run_local_game};
pub use session::{
    BotTurn, COMPUTER_MARK, PlayerNames, ScoreBoard, SessionCommand, TicTacToeSession,
};
pub use settings::TicTacToeSessionSettings;
pub use types::{BOARD_SIZE, CELL_COUNT, GameMode, Mark, Outcome, WinningLine};
pub use validate::{MAX_NAME_LENGTH, validate_player_name};
pub use win_detector::{WINNING_LINES, check_win_with_line, evaluate};
