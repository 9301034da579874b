use super::bot_controller::BotType;
use super::session::PlayerNames;
use super::types::GameMode;

#[derive(Debug, Clone)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub bot_type: BotType,
    pub names: PlayerNames,
    pub seed: u64,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsHuman,
            bot_type: BotType::Minimax,
            names: PlayerNames::default(),
            seed: 0,
        }
    }
}
