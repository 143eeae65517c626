use std::time::Duration;

use super::layout::Layout;

pub const DEFAULT_CLOCK_TICK_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabyrinthSessionSettings {
    pub layout: Layout,
    pub clock_tick: Duration,
}

impl LabyrinthSessionSettings {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            clock_tick: Duration::from_millis(DEFAULT_CLOCK_TICK_MS),
        }
    }
}
