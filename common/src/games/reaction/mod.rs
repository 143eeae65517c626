mod game_state;
mod session;
mod settings;

pub use game_state::{ReactionGameState, ReactionStatus};
pub use session::{ReactionSession, ReactionSnapshot};
pub use settings::{
    DEFAULT_DURATION_SEC, DEFAULT_MAX_DELAY_MS, DEFAULT_MIN_DELAY_MS, ReactionSessionSettings,
};
