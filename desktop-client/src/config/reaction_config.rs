use common::config::{Validate, validate_range};
use common::games::reaction::{
    DEFAULT_DURATION_SEC, DEFAULT_MAX_DELAY_MS, DEFAULT_MIN_DELAY_MS, ReactionSessionSettings,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct ReactionConfig {
    pub duration_sec: u32,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl ReactionConfig {
    pub fn session_settings(&self) -> ReactionSessionSettings {
        ReactionSessionSettings {
            duration_sec: self.duration_sec,
            min_delay: Duration::from_millis(self.min_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
        }
    }
}

impl Validate for ReactionConfig {
    fn validate(&self) -> Result<(), String> {
        validate_range(self.duration_sec, 1, 600, "reaction duration_sec")?;
        validate_range(self.min_delay_ms, 100, 60_000, "min_delay_ms")?;
        validate_range(self.max_delay_ms, 100, 60_000, "max_delay_ms")?;
        if self.min_delay_ms > self.max_delay_ms {
            return Err(format!(
                "min_delay_ms ({}) must not exceed max_delay_ms ({})",
                self.min_delay_ms, self.max_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            duration_sec: DEFAULT_DURATION_SEC,
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }
}
