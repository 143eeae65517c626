mod clicker_config;
mod labyrinth_config;
mod main_config;
mod reaction_config;
mod storage_config;
mod tictactoe_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use clicker_config::ClickerConfig;
pub use labyrinth_config::LabyrinthConfig;
pub use main_config::{Config, get_config_manager, resolve_next_to_exe};
pub use reaction_config::ReactionConfig;
pub use storage_config::StorageConfig;
pub use tictactoe_config::TicTacToeConfig;
