use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionStatus {
    Idle,
    Active,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionGameState {
    pub status: ReactionStatus,
    pub hits: u32,
    pub total_reaction: Duration,
    pub time_left: u32,
    shown_at: Option<Instant>,
    duration_sec: u32,
}

impl ReactionGameState {
    pub fn new(duration_sec: u32) -> Self {
        Self {
            status: ReactionStatus::Idle,
            hits: 0,
            total_reaction: Duration::ZERO,
            time_left: duration_sec,
            shown_at: None,
            duration_sec,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ReactionStatus::Active
    }

    pub fn target_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    pub fn start(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.clear_round();
        self.status = ReactionStatus::Active;
        true
    }

    pub fn reset(&mut self) {
        self.clear_round();
        self.status = ReactionStatus::Idle;
    }

    /// Returns `true` while the round keeps running.
    pub fn tick(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.status = ReactionStatus::Finished;
            self.shown_at = None;
            return false;
        }
        true
    }

    pub fn show_target(&mut self, now: Instant) -> bool {
        if !self.is_active() || self.target_visible() {
            return false;
        }
        self.shown_at = Some(now);
        true
    }

    /// Hit on the target. Ignored unless it is currently shown.
    pub fn hit(&mut self, now: Instant) -> Option<Duration> {
        if !self.is_active() {
            return None;
        }
        let shown_at = self.shown_at.take()?;
        let reaction = now.saturating_duration_since(shown_at);
        self.hits += 1;
        self.total_reaction += reaction;
        Some(reaction)
    }

    pub fn average(&self) -> Option<Duration> {
        (self.hits > 0).then(|| self.total_reaction / self.hits)
    }

    pub fn format_average(&self) -> String {
        self.average()
            .map_or_else(|| "-".to_string(), |avg| format!("{:.2} s", avg.as_secs_f64()))
    }

    pub fn status_text(&self) -> String {
        match self.status {
            ReactionStatus::Idle => "Press Start.".to_string(),
            ReactionStatus::Active if self.target_visible() => "Hit it!".to_string(),
            ReactionStatus::Active => "Wait for the target...".to_string(),
            ReactionStatus::Finished => format!(
                "Time's up! Hits: {}. Average: {}.",
                self.hits,
                self.format_average()
            ),
        }
    }

    fn clear_round(&mut self) {
        self.hits = 0;
        self.total_reaction = Duration::ZERO;
        self.time_left = self.duration_sec;
        self.shown_at = None;
    }
}
