use std::future::Future;

use crate::contact_form::ContactFormSnapshot;
use super::GameType;
use super::adventure::AdventureSnapshot;
use super::clicker::ClickerSnapshot;
use super::guess_number::GuessNumberSnapshot;
use super::labyrinth::LabyrinthSnapshot;
use super::reaction::ReactionSnapshot;
use super::tictactoe::TicTacToeSnapshot;

#[derive(Debug, Clone)]
pub enum GameStateUpdate {
    TicTacToe(TicTacToeSnapshot),
    Labyrinth(LabyrinthSnapshot),
    Clicker(ClickerSnapshot),
    Reaction(ReactionSnapshot),
    GuessNumber(GuessNumberSnapshot),
    Adventure(AdventureSnapshot),
    ContactForm(ContactFormSnapshot),
}

impl GameStateUpdate {
    pub fn game_type(&self) -> GameType {
        match self {
            GameStateUpdate::TicTacToe(_) => GameType::TicTacToe,
            GameStateUpdate::Labyrinth(_) => GameType::Labyrinth,
            GameStateUpdate::Clicker(_) => GameType::Clicker,
            GameStateUpdate::Reaction(_) => GameType::Reaction,
            GameStateUpdate::GuessNumber(_) => GameType::GuessNumber,
            GameStateUpdate::Adventure(_) => GameType::Adventure,
            GameStateUpdate::ContactForm(_) => GameType::ContactForm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverNotification {
    pub game: GameType,
    pub summary: String,
}

impl GameOverNotification {
    pub fn new(game: GameType, summary: impl Into<String>) -> Self {
        Self {
            game,
            summary: summary.into(),
        }
    }
}

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: GameStateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
