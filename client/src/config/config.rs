use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::{
    BotType, DEFAULT_BOT_DELAY, GameMode, PlayerNames, TicTacToeSessionSettings, validate_player_name,
};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const MAX_BOT_DELAY_MS: u64 = 5000;

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player_x_name: String,
    pub player_o_name: String,
    #[serde(default)]
    pub mode: GameMode,
    #[serde(default)]
    pub bot_type: BotType,
    pub bot_delay_ms: u64,
}

impl Config {
    pub fn session_settings(&self, seed: u64) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode: self.mode,
            bot_type: self.bot_type,
            names: PlayerNames {
                x: self.player_x_name.clone(),
                o: self.player_o_name.clone(),
            },
            seed,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        validate_player_name(&self.player_x_name)?;
        validate_player_name(&self.player_o_name)?;
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}, got {}",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let names = PlayerNames::default();
        Self {
            player_x_name: names.x,
            player_o_name: names.o,
            mode: GameMode::HumanVsComputer,
            bot_type: BotType::Minimax,
            bot_delay_ms: DEFAULT_BOT_DELAY.as_millis() as u64,
        }
    }
}
