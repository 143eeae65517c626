use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::games::{GameBroadcaster, GameOverNotification, GameStateUpdate, GameType, ScheduledTask};
use crate::storage::{SharedStorage, with_storage};
use crate::{log, log_warn};
use super::game_state::ClickerGameState;

pub const BEST_SCORE_KEY: &str = "miniGames.clicker.best";

const TICK_PERIOD: Duration = Duration::from_secs(1);

pub type ClickerSnapshot = ClickerGameState;

/// Stored best score. Anything that is not a non-negative integer reads as 0.
pub fn load_best_score(storage: &SharedStorage) -> u32 {
    with_storage(storage, |storage| {
        storage
            .get_item(BEST_SCORE_KEY)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0)
    })
    .unwrap_or_else(|e| {
        log_warn!("[clicker] Could not read best score: {}", e);
        0
    })
}

fn save_best_score(storage: &SharedStorage, best: u32) {
    let result = with_storage(storage, |storage| storage.set_item(BEST_SCORE_KEY, best.to_string()))
        .and_then(|saved| saved);
    if let Err(e) = result {
        log_warn!("[clicker] Could not save best score {}: {}", best, e);
    }
}

struct SessionInner {
    game_state: ClickerGameState,
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
}

#[derive(Clone)]
pub struct ClickerSession<B: GameBroadcaster> {
    inner: Arc<Mutex<SessionInner>>,
    storage: SharedStorage,
    broadcaster: B,
}

impl<B: GameBroadcaster> ClickerSession<B> {
    pub fn new(duration_sec: u32, storage: SharedStorage, broadcaster: B) -> Self {
        let best = load_best_score(&storage);
        let inner = SessionInner {
            game_state: ClickerGameState::new(duration_sec, best),
            generation: 0,
            clock_task: None,
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
            storage,
            broadcaster,
        }
    }

    pub async fn snapshot(&self) -> ClickerSnapshot {
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
        inner.stop_clock();
        self.start_clock(&mut inner);
        self.broadcast(&inner).await;
        true
    }

    pub async fn click(&self) -> bool {
        let mut inner = self.inner.lock().await;
        if !inner.game_state.click() {
            return false;
        }
        self.broadcast(&inner).await;
        true
    }

    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.stop_clock();
        inner.game_state.reset();
        self.broadcast(&inner).await;
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
        if inner.game_state.new_record {
            save_best_score(&self.storage, inner.game_state.best);
        }

        let summary = inner.game_state.status_text();
        log!("[clicker] {}", summary);
        self.broadcast(&inner).await;
        self.broadcaster
            .broadcast_game_over(GameOverNotification::new(GameType::Clicker, summary))
            .await;
        false
    }

    async fn broadcast(&self, inner: &SessionInner) {
        self.broadcaster
            .broadcast_state(GameStateUpdate::Clicker(inner.game_state.clone()))
            .await;
    }
}
