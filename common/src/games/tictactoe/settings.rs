use std::time::Duration;

pub const DEFAULT_CPU_MOVE_DELAY_MS: u64 = 350;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub vs_cpu: bool,
    pub cpu_move_delay: Duration,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            vs_cpu: false,
            cpu_move_delay: Duration::from_millis(DEFAULT_CPU_MOVE_DELAY_MS),
        }
    }
}
