mod game_state;
mod layout;
mod session;
mod settings;
mod types;

pub use game_state::LabyrinthGameState;
pub use layout::{DEFAULT_LAYOUT, Layout};
pub use session::{LabyrinthSession, LabyrinthSnapshot};
pub use settings::{DEFAULT_CLOCK_TICK_MS, LabyrinthSessionSettings};
pub use types::{Cell, Direction, GameStatus, Position};
