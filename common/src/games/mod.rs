mod broadcaster;
mod game_type;
mod scheduler;
mod session_rng;

pub mod adventure;
pub mod clicker;
pub mod guess_number;
pub mod labyrinth;
pub mod reaction;
pub mod tictactoe;

pub use broadcaster::{GameBroadcaster, GameOverNotification, GameStateUpdate};
pub use game_type::GameType;
pub use scheduler::ScheduledTask;
pub use session_rng::SessionRng;

#[cfg(test)]
pub(crate) use broadcaster::test_support;
