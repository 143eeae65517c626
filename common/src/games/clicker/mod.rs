mod game_state;
mod session;

pub use game_state::{ClickerGameState, ClickerStatus, DEFAULT_DURATION_SEC};
pub use session::{BEST_SCORE_KEY, ClickerSession, ClickerSnapshot, load_best_score};
