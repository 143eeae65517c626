use std::time::Duration;

pub const DEFAULT_DURATION_SEC: u32 = 30;
pub const DEFAULT_MIN_DELAY_MS: u64 = 1_000;
pub const DEFAULT_MAX_DELAY_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionSessionSettings {
    pub duration_sec: u32,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for ReactionSessionSettings {
    fn default() -> Self {
        Self {
            duration_sec: DEFAULT_DURATION_SEC,
            min_delay: Duration::from_millis(DEFAULT_MIN_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_MAX_DELAY_MS),
        }
    }
}
