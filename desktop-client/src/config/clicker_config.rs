use common::config::{Validate, validate_range};
use common::games::clicker::DEFAULT_DURATION_SEC;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct ClickerConfig {
    pub duration_sec: u32,
}

impl Validate for ClickerConfig {
    fn validate(&self) -> Result<(), String> {
        validate_range(self.duration_sec, 1, 600, "clicker duration_sec")
    }
}

impl Default for ClickerConfig {
    fn default() -> Self {
        Self {
            duration_sec: DEFAULT_DURATION_SEC,
        }
    }
}
