use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::games::{
    GameBroadcaster, GameOverNotification, GameStateUpdate, GameType, ScheduledTask, SessionRng,
};
use crate::log;
use super::game_state::ReactionGameState;
use super::settings::ReactionSessionSettings;

const TICK_PERIOD: Duration = Duration::from_secs(1);

pub type ReactionSnapshot = ReactionGameState;

struct SessionInner {
    game_state: ReactionGameState,
    rng: SessionRng,
    settings: ReactionSessionSettings,
    generation: u64,
    clock_task: Option<ScheduledTask>,
    show_task: Option<ScheduledTask>,
}

impl SessionInner {
    fn stop_timers(&mut self) {
        self.generation += 1;
        if let Some(task) = self.clock_task.take() {
            task.cancel();
        }
        if let Some(task) = self.show_task.take() {
            task.cancel();
        }
    }

    fn next_show_delay(&mut self) -> Duration {
        let min = self.settings.min_delay.as_millis() as u64;
        let max = (self.settings.max_delay.as_millis() as u64).max(min);
        Duration::from_millis(self.rng.random_range(min..=max))
    }
}

/// Reaction tester: a countdown clock plus a one-shot timer that reveals the target.
#[derive(Clone)]
pub struct ReactionSession<B: GameBroadcaster> {
    inner: Arc<Mutex<SessionInner>>,
    broadcaster: B,
}

impl<B: GameBroadcaster> ReactionSession<B> {
    pub fn new(settings: ReactionSessionSettings, seed: u64, broadcaster: B) -> Self {
        let inner = SessionInner {
            game_state: ReactionGameState::new(settings.duration_sec),
            rng: SessionRng::new(seed),
            settings,
            generation: 0,
            clock_task: None,
            show_task: None,
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
            broadcaster,
        }
    }

    pub async fn snapshot(&self) -> ReactionSnapshot {
        self.inner.lock().await.game_state.clone()
    }

    pub async fn publish(&self) {
        let inner = self.inner.lock().await;
        self.broadcast(&inner).await;
    }

    pub async fn start(&self) -> bool {
        let mut inner = self.inner.lock().await;
        if !inner.game_state.start() {
            return false;
        }
        inner.stop_timers();
        self.start_clock(&mut inner);
        self.schedule_show(&mut inner);
        self.broadcast(&inner).await;
        true
    }

    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.stop_timers();
        inner.game_state.reset();
        self.broadcast(&inner).await;
    }

    pub async fn hit(&self) -> Option<Duration> {
        let mut inner = self.inner.lock().await;
        let reaction = inner.game_state.hit(Instant::now().into_std())?;
        self.schedule_show(&mut inner);
        self.broadcast(&inner).await;
        Some(reaction)
    }

    fn start_clock(&self, inner: &mut SessionInner) {
        let session = self.clone();
        let generation = inner.generation;
        let task = ScheduledTask::every(TICK_PERIOD, move || {
            let session = session.clone();
            async move { session.on_tick(generation).await }
        });
        inner.clock_task = Some(task);
    }

    fn schedule_show(&self, inner: &mut SessionInner) {
        let session = self.clone();
        let generation = inner.generation;
        let delay = inner.next_show_delay();
        let task = ScheduledTask::after(delay, async move {
            session.show_target(generation).await;
        });
        inner.show_task = Some(task);
    }

    async fn show_target(&self, generation: u64) {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            return;
        }
        if let Some(task) = inner.show_task.take() {
            task.detach();
        }
        if inner.game_state.show_target(Instant::now().into_std()) {
            self.broadcast(&inner).await;
        }
    }

    async fn on_tick(&self, generation: u64) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            return false;
        }
        if inner.game_state.tick() {
            self.broadcast(&inner).await;
            return true;
        }

        inner.generation += 1;
        if let Some(task) = inner.clock_task.take() {
            task.detach();
        }
        if let Some(task) = inner.show_task.take() {
            task.cancel();
        }

        let summary = inner.game_state.status_text();
        log!("[reaction] {}", summary);
        self.broadcast(&inner).await;
        self.broadcaster
            .broadcast_game_over(GameOverNotification::new(GameType::Reaction, summary))
            .await;
        false
    }

    async fn broadcast(&self, inner: &SessionInner) {
        self.broadcaster
            .broadcast_state(GameStateUpdate::Reaction(inner.game_state.clone()))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::test_support::RecordingBroadcaster;
    use crate::games::reaction::ReactionStatus;

    fn fixed_delay_settings(duration_sec: u32, delay_ms: u64) -> ReactionSessionSettings {
        ReactionSessionSettings {
            duration_sec,
            min_delay: Duration::from_millis(delay_ms),
            max_delay: Duration::from_millis(delay_ms),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_target_appears_after_delay() {
        let session = ReactionSession::new(
            fixed_delay_settings(30, 1_500),
            3,
            RecordingBroadcaster::default(),
        );
        session.start().await;

        tokio::time::sleep(Duration::from_millis(1_400)).await;
        assert!(!session.snapshot().await.target_visible());
        assert_eq!(session.hit().await, None);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(session.snapshot().await.target_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_hit_measures_from_appearance() {
        let session = ReactionSession::new(
            fixed_delay_settings(30, 1_000),
            3,
            RecordingBroadcaster::default(),
        );
        session.start().await;

        tokio::time::sleep(Duration::from_millis(1_250)).await;
        assert_eq!(session.hit().await, Some(Duration::from_millis(250)));

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.hits, 1);
        assert!(!snapshot.target_visible());
        assert_eq!(snapshot.format_average(), "0.25 s");

        // Next appearance is scheduled from the hit.
        tokio::time::sleep(Duration::from_millis(1_010)).await;
        assert!(session.snapshot().await.target_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_random_delay_stays_in_range() {
        let settings = ReactionSessionSettings::default();
        let session = ReactionSession::new(settings, 99, RecordingBroadcaster::default());
        session.start().await;

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(!session.snapshot().await.target_visible());
        tokio::time::sleep(Duration::from_millis(4_002)).await;
        assert!(session.snapshot().await.target_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_ends_and_cancels_target() {
        let broadcaster = RecordingBroadcaster::default();
        let session = ReactionSession::new(fixed_delay_settings(2, 2_500), 3, broadcaster.clone());
        session.start().await;

        tokio::time::sleep(Duration::from_secs(4)).await;
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.status, ReactionStatus::Finished);
        assert!(!snapshot.target_visible());
        assert_eq!(snapshot.format_average(), "-");
        assert_eq!(broadcaster.game_overs().len(), 1);
        assert_eq!(broadcaster.game_overs()[0].summary, "Time's up! Hits: 0. Average: -.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_all_timers() {
        let broadcaster = RecordingBroadcaster::default();
        let session = ReactionSession::new(fixed_delay_settings(30, 1_000), 3, broadcaster.clone());
        session.start().await;
        tokio::time::sleep(Duration::from_millis(500)).await;
        session.reset().await;
        let updates = broadcaster.state_count();

        tokio::time::sleep(Duration::from_secs(5)).await;
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.status, ReactionStatus::Idle);
        assert!(!snapshot.target_visible());
        assert_eq!(broadcaster.state_count(), updates);
    }
}
