use common::games::{GameBroadcaster, GameOverNotification, GameStateUpdate};
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, state: GameStateUpdate) {
        self.shared_state.update_game_state(state);
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        self.shared_state.push_result(notification);
    }
}
