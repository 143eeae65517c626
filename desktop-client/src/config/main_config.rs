use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::GameType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{ClickerConfig, LabyrinthConfig, ReactionConfig, StorageConfig, TicTacToeConfig};

const CONFIG_FILE_NAME: &str = "mini_games_config.yaml";

/// Relative paths land next to the executable; absolute ones are kept as is.
pub fn resolve_next_to_exe(location: impl AsRef<Path>) -> PathBuf {
    let location = location.as_ref();
    if location.is_absolute() {
        return location.to_path_buf();
    }
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(location);
    }
    location.to_path_buf()
}

pub fn get_config_manager()
-> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(resolve_next_to_exe(CONFIG_FILE_NAME))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub last_game: Option<GameType>,
    pub tictactoe: TicTacToeConfig,
    pub labyrinth: LabyrinthConfig,
    pub clicker: ClickerConfig,
    pub reaction: ReactionConfig,
    pub storage: StorageConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.labyrinth.validate()?;
        self.clicker.validate()?;
        self.reaction.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}
