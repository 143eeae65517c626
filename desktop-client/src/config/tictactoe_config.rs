use common::config::{Validate, validate_range};
use common::games::tictactoe::DEFAULT_CPU_MOVE_DELAY_MS;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct TicTacToeConfig {
    pub vs_cpu: bool,
    pub cpu_move_delay_ms: u64,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        validate_range(self.cpu_move_delay_ms, 50, 5_000, "cpu_move_delay_ms")
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            vs_cpu: false,
            cpu_move_delay_ms: DEFAULT_CPU_MOVE_DELAY_MS,
        }
    }
}
