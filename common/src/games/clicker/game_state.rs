pub const DEFAULT_DURATION_SEC: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickerStatus {
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickerGameState {
    pub status: ClickerStatus,
    pub score: u32,
    pub time_left: u32,
    pub best: u32,
    pub new_record: bool,
    duration_sec: u32,
}

impl ClickerGameState {
    pub fn new(duration_sec: u32, best: u32) -> Self {
        Self {
            status: ClickerStatus::Idle,
            score: 0,
            time_left: duration_sec,
            best,
            new_record: false,
            duration_sec,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == ClickerStatus::Running
    }

    /// No-op while a round is already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.status = ClickerStatus::Running;
        self.score = 0;
        self.time_left = self.duration_sec;
        self.new_record = false;
        true
    }

    pub fn click(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.score += 1;
        true
    }

    /// One second passed. Returns `true` while the round keeps running.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.finish();
            return false;
        }
        true
    }

    pub fn reset(&mut self) {
        self.status = ClickerStatus::Idle;
        self.score = 0;
        self.time_left = self.duration_sec;
        self.new_record = false;
    }

    pub fn status_text(&self) -> String {
        match self.status {
            ClickerStatus::Idle => "Press Start and click as fast as you can.".to_string(),
            ClickerStatus::Running => "Go! Click!".to_string(),
            ClickerStatus::Finished if self.new_record => {
                format!("Time's up! Score: {}. New record!", self.score)
            }
            ClickerStatus::Finished => format!("Time's up! Score: {}.", self.score),
        }
    }

    fn finish(&mut self) {
        self.status = ClickerStatus::Finished;
        if self.score > self.best {
            self.best = self.score;
            self.new_record = true;
        }
    }
}
