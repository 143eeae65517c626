mod command_sender;
mod config;
mod constants;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::config::FileContentConfigProvider;
use common::games::GameType;
use common::logger::init_logger;
use common::storage::LocalStorage;
use common::{log, log_warn};
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub use command_sender::CommandSender;
use config::{ConfigManager, get_config_manager, resolve_next_to_exe};
use constants::{LOG_PREFIX, WINDOW_SIZE};
use offline::{LocalGameSettings, local_game_task};
use state::SharedState;
use ui::MenuApp;

#[derive(Parser, Debug)]
#[command(version, about = "Mini games: tic-tac-toe, labyrinth and friends")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Screen to open on startup, e.g. `tictactoe` or `guess-number`
    #[arg(long)]
    game: Option<GameType>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(Some(LOG_PREFIX.to_string()));

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config = config_manager.get_config()?;
    let settings = LocalGameSettings::from_config(&config)?;

    let storage_path = resolve_next_to_exe(&config.storage.location);
    log!("Using storage {}", storage_path.display());
    let storage = LocalStorage::new(FileContentConfigProvider::new(storage_path)).into_shared();

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log_warn!("Failed to start game runtime: {}", e);
                shared_state_clone.set_error(format!("Failed to start game runtime: {}", e));
                return;
            }
        };
        rt.block_on(local_game_task(settings, storage, shared_state_clone, command_rx));
    });

    let initial_game = args.game.or(config.last_game);
    let command_sender = CommandSender::new(command_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title("Mini Games"),
        ..Default::default()
    };

    eframe::run_native(
        "Mini Games",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(MenuApp::new(
                shared_state,
                command_sender,
                config_manager,
                initial_game,
            )))
        }),
    )?;

    Ok(())
}
