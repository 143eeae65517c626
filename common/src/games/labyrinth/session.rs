use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::games::{GameBroadcaster, GameOverNotification, GameStateUpdate, GameType, ScheduledTask};
use crate::log;
use super::game_state::LabyrinthGameState;
use super::settings::LabyrinthSessionSettings;
use super::types::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabyrinthSnapshot {
    pub game_state: LabyrinthGameState,
    pub elapsed: Duration,
}

impl LabyrinthSnapshot {
    /// Seconds with one decimal, the way the clock is displayed.
    pub fn elapsed_text(&self) -> String {
        format!("{:.1}", self.elapsed.as_secs_f64())
    }
}

struct SessionInner {
    game_state: LabyrinthGameState,
    clock_tick: Duration,
    generation: u64,
    clock_task: Option<ScheduledTask>,
}

impl SessionInner {
    fn stop_clock(&mut self) {
        self.generation += 1;
        if let Some(task) = self.clock_task.take() {
            task.cancel();
        }
    }

    fn snapshot(&self) -> LabyrinthSnapshot {
        let now = Instant::now().into_std();
        LabyrinthSnapshot {
            game_state: self.game_state.clone(),
            elapsed: self.game_state.elapsed(now),
        }
    }
}

#[derive(Clone)]
pub struct LabyrinthSession<B: GameBroadcaster> {
    inner: Arc<Mutex<SessionInner>>,
    broadcaster: B,
}

impl<B: GameBroadcaster> LabyrinthSession<B> {
    pub fn new(settings: LabyrinthSessionSettings, broadcaster: B) -> Self {
        let inner = SessionInner {
            game_state: LabyrinthGameState::new(settings.layout),
            clock_tick: settings.clock_tick,
            generation: 0,
            clock_task: None,
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
            broadcaster,
        }
    }

    pub async fn snapshot(&self) -> LabyrinthSnapshot {
        self.inner.lock().await.snapshot()
    }

    pub async fn publish(&self) {
        let inner = self.inner.lock().await;
        self.broadcast(&inner).await;
    }

    pub async fn start(&self) {
        let mut inner = self.inner.lock().await;
        inner.stop_clock();
        inner.game_state.start(Instant::now().into_std());
        self.start_clock(&mut inner);
        log!("[labyrinth] Run started");
        self.broadcast(&inner).await;
    }

    /// Same as [`LabyrinthSession::start`], from any state.
    pub async fn restart(&self) {
        self.start().await;
    }

    pub async fn try_move(&self, direction: Direction) -> bool {
        let mut inner = self.inner.lock().await;
        if !inner.game_state.try_move(direction, Instant::now().into_std()) {
            return false;
        }

        if inner.game_state.is_finished() {
            inner.stop_clock();
            let snapshot = inner.snapshot();
            let summary = format!(
                "Exit reached in {} s ({} moves)",
                snapshot.elapsed_text(),
                snapshot.game_state.moves_made
            );
            log!("[labyrinth] {}", summary);
            self.broadcast(&inner).await;
            self.broadcaster
                .broadcast_game_over(GameOverNotification::new(GameType::Labyrinth, summary))
                .await;
            return true;
        }

        self.broadcast(&inner).await;
        true
    }

    fn start_clock(&self, inner: &mut SessionInner) {
        let session = self.clone();
        let generation = inner.generation;
        let task = ScheduledTask::every(inner.clock_tick, move || {
            let session = session.clone();
            async move { session.on_clock_tick(generation).await }
        });
        inner.clock_task = Some(task);
    }

    async fn on_clock_tick(&self, generation: u64) -> bool {
        let inner = self.inner.lock().await;
        if inner.generation != generation || inner.game_state.is_finished() {
            return false;
        }
        self.broadcast(&inner).await;
        true
    }

    async fn broadcast(&self, inner: &SessionInner) {
        self.broadcaster
            .broadcast_state(GameStateUpdate::Labyrinth(inner.snapshot()))
            .await;
    }
}
