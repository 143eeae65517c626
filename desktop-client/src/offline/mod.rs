mod broadcaster;
mod local_game;
mod settings;

pub use broadcaster::LocalBroadcaster;
pub use local_game::local_game_task;
pub use settings::LocalGameSettings;
