use std::sync::Arc;
use tokio::sync::Mutex;

use crate::games::{
    GameBroadcaster, GameOverNotification, GameStateUpdate, GameType, ScheduledTask, SessionRng,
};
use crate::log;
use super::bot_controller::calculate_random_move;
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::Mark;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSnapshot {
    pub game_state: TicTacToeGameState,
    pub vs_cpu: bool,
    pub cpu_thinking: bool,
}

struct SessionInner {
    game_state: TicTacToeGameState,
    rng: SessionRng,
    settings: TicTacToeSessionSettings,
    /// Bumped whenever a pending computer move must not land anymore.
    generation: u64,
    cpu_task: Option<ScheduledTask>,
}

impl SessionInner {
    fn cpu_controls_turn(&self) -> bool {
        self.settings.vs_cpu
            && self.game_state.current_mark == Mark::O
            && !self.game_state.is_over()
    }

    fn invalidate_cpu_move(&mut self) {
        self.generation += 1;
        if let Some(task) = self.cpu_task.take() {
            task.cancel();
        }
    }

    fn snapshot(&self) -> TicTacToeSnapshot {
        TicTacToeSnapshot {
            game_state: self.game_state.clone(),
            vs_cpu: self.settings.vs_cpu,
            cpu_thinking: self.cpu_task.is_some(),
        }
    }
}

/// Tic-tac-toe controller: board, turn order, tally and the optional computer opponent.
///
/// Every transition runs under one lock and publishes its snapshot before releasing it,
/// so observers see transitions in order.
#[derive(Clone)]
pub struct TicTacToeSession<B: GameBroadcaster> {
    inner: Arc<Mutex<SessionInner>>,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(settings: TicTacToeSessionSettings, seed: u64, broadcaster: B) -> Self {
        let inner = SessionInner {
            game_state: TicTacToeGameState::new(),
            rng: SessionRng::new(seed),
            settings,
            generation: 0,
            cpu_task: None,
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
            broadcaster,
        }
    }

    pub async fn snapshot(&self) -> TicTacToeSnapshot {
        self.inner.lock().await.snapshot()
    }

    pub async fn publish(&self) {
        let inner = self.inner.lock().await;
        self.broadcast(&inner).await;
    }

    /// Human move. Ignored while the computer owns the turn.
    pub async fn place_mark(&self, index: usize) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.cpu_controls_turn() {
            log!("[tictactoe] Ignoring move at {}: computer is to move", index);
            return false;
        }
        self.apply_move(&mut inner, index).await
    }

    pub async fn restart(&self) {
        let mut inner = self.inner.lock().await;
        inner.invalidate_cpu_move();
        inner.game_state.restart();
        log!(
            "[tictactoe] Restarted (X {} : O {})",
            inner.game_state.score.x_wins,
            inner.game_state.score.o_wins
        );
        // X always opens, so a restart never hands the turn to the computer.
        self.broadcast(&inner).await;
    }

    pub async fn set_vs_cpu(&self, enabled: bool) {
        let mut inner = self.inner.lock().await;
        if inner.settings.vs_cpu == enabled {
            return;
        }
        inner.settings.vs_cpu = enabled;
        if enabled {
            if inner.cpu_controls_turn() {
                self.schedule_cpu_move(&mut inner);
            }
        } else {
            inner.invalidate_cpu_move();
        }
        self.broadcast(&inner).await;
    }

    async fn apply_move(&self, inner: &mut SessionInner, index: usize) -> bool {
        let mark = inner.game_state.current_mark;
        if let Err(e) = inner.game_state.place_mark(index) {
            log!("[tictactoe] {} failed to mark cell {}: {}", mark, index, e);
            return false;
        }

        if inner.game_state.is_over() {
            inner.invalidate_cpu_move();
            let summary = format!(
                "{} (X {} : O {})",
                inner.game_state.status_text(),
                inner.game_state.score.x_wins,
                inner.game_state.score.o_wins
            );
            log!("[tictactoe] {}", summary);
            self.broadcast(inner).await;
            self.broadcaster
                .broadcast_game_over(GameOverNotification::new(GameType::TicTacToe, summary))
                .await;
            return true;
        }

        if inner.cpu_controls_turn() {
            self.schedule_cpu_move(inner);
        }
        self.broadcast(inner).await;
        true
    }

    fn schedule_cpu_move(&self, inner: &mut SessionInner) {
        let session = self.clone();
        let generation = inner.generation;
        let task = ScheduledTask::after(inner.settings.cpu_move_delay, async move {
            session.play_cpu_turn(generation).await;
        });
        inner.cpu_task = Some(task);
    }

    async fn play_cpu_turn(&self, generation: u64) {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            return;
        }
        if let Some(task) = inner.cpu_task.take() {
            task.detach();
        }
        if !inner.cpu_controls_turn() {
            return;
        }

        let SessionInner {
            game_state, rng, ..
        } = &mut *inner;
        let Some(index) = calculate_random_move(&game_state.board, rng) else {
            return;
        };
        self.apply_move(&mut inner, index).await;
    }

    async fn broadcast(&self, inner: &SessionInner) {
        self.broadcaster
            .broadcast_state(GameStateUpdate::TicTacToe(inner.snapshot()))
            .await;
    }
}
