use common::config::{Validate, validate_range};
use common::games::labyrinth::{DEFAULT_CLOCK_TICK_MS, DEFAULT_LAYOUT, Layout};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LabyrinthConfig {
    pub layout: Vec<String>,
    pub clock_tick_ms: u64,
}

impl LabyrinthConfig {
    pub fn parse_layout(&self) -> Result<Layout, String> {
        Layout::parse(self.layout.as_slice()).map_err(|e| format!("labyrinth layout: {}", e))
    }
}

impl Validate for LabyrinthConfig {
    fn validate(&self) -> Result<(), String> {
        self.parse_layout()?;
        validate_range(self.clock_tick_ms, 10, 1_000, "clock_tick_ms")
    }
}

impl Default for LabyrinthConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.iter().map(|row| row.to_string()).collect(),
            clock_tick_ms: DEFAULT_CLOCK_TICK_MS,
        }
    }
}
