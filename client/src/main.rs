mod config;
mod game_ui;
mod state;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use eframe::egui;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{TicTacToeSession, run_local_game};
use tictactoe_common::{log, logger};
use tokio::sync::mpsc;

use config::{Config, get_config_manager};
use state::SharedState;
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Path to the YAML config file (defaults to one next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the computer opponent's random choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(path: Option<PathBuf>) -> Config {
    match get_config_manager(path).load_or_init() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(args.config);
    let seed = args.seed.unwrap_or_else(|| SessionRng::from_random().seed());
    let session = TicTacToeSession::new(&config.session_settings(seed));
    let bot_delay = Duration::from_millis(config.bot_delay_ms);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let runtime = tokio::runtime::Runtime::new()?;
    let bot_sender = command_tx.downgrade();
    let broadcaster = shared_state.clone();
    let game_thread = std::thread::spawn(move || {
        runtime.block_on(run_local_game(
            session,
            command_rx,
            bot_sender,
            broadcaster,
            bot_delay,
        ))
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 540.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    let app_state = shared_state.clone();
    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| {
            app_state.set_context(cc.egui_ctx.clone());
            Ok(Box::new(TicTacToeApp::new(app_state, command_tx)))
        }),
    )?;

    match game_thread.join() {
        Ok(session) => {
            let scores = session.scores();
            log!(
                "Final score: X {} / O {} / draws {}",
                scores.x_wins,
                scores.o_wins,
                scores.draws
            );
        }
        Err(_) => log!("Game loop thread panicked"),
    }

    Ok(())
}
