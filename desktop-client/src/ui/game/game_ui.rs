use crate::CommandSender;
use common::games::{GameStateUpdate, GameType};
use eframe::egui;

use super::adventure::AdventureGameUi;
use super::clicker::ClickerGameUi;
use super::contact_form::ContactFormUi;
use super::guess_number::GuessNumberGameUi;
use super::labyrinth::LabyrinthGameUi;
use super::reaction::ReactionGameUi;
use super::tictactoe::TicTacToeGameUi;

/// Screen-local state for the open game; everything authoritative comes from the snapshot.
pub enum GameUi {
    TicTacToe(TicTacToeGameUi),
    Labyrinth(LabyrinthGameUi),
    Clicker(ClickerGameUi),
    Reaction(ReactionGameUi),
    GuessNumber(GuessNumberGameUi),
    Adventure(AdventureGameUi),
    ContactForm(ContactFormUi),
}

/// Something the menu should persist after a frame.
pub enum GameUiEvent {
    VsCpuChanged(bool),
}

impl GameUi {
    pub fn new(game: GameType) -> Self {
        match game {
            GameType::TicTacToe => GameUi::TicTacToe(TicTacToeGameUi::new()),
            GameType::Labyrinth => GameUi::Labyrinth(LabyrinthGameUi::new()),
            GameType::Clicker => GameUi::Clicker(ClickerGameUi::new()),
            GameType::Reaction => GameUi::Reaction(ReactionGameUi::new()),
            GameType::GuessNumber => GameUi::GuessNumber(GuessNumberGameUi::new()),
            GameType::Adventure => GameUi::Adventure(AdventureGameUi::new()),
            GameType::ContactForm => GameUi::ContactForm(ContactFormUi::new()),
        }
    }

    pub fn game_type(&self) -> GameType {
        match self {
            GameUi::TicTacToe(_) => GameType::TicTacToe,
            GameUi::Labyrinth(_) => GameType::Labyrinth,
            GameUi::Clicker(_) => GameType::Clicker,
            GameUi::Reaction(_) => GameType::Reaction,
            GameUi::GuessNumber(_) => GameType::GuessNumber,
            GameUi::Adventure(_) => GameType::Adventure,
            GameUi::ContactForm(_) => GameType::ContactForm,
        }
    }

    pub fn render_game(
        &mut self,
        egui_ui: &mut egui::Ui,
        ctx: &egui::Context,
        game_state: &Option<GameStateUpdate>,
        command_sender: &CommandSender,
    ) -> Option<GameUiEvent> {
        let Some(state) = game_state else {
            egui_ui.centered_and_justified(|ui| {
                ui.label("Waiting for game state...");
            });
            return None;
        };

        match (self, state) {
            (GameUi::TicTacToe(ui), GameStateUpdate::TicTacToe(snapshot)) => ui
                .render_game(egui_ui, snapshot, command_sender)
                .map(GameUiEvent::VsCpuChanged),
            (GameUi::Labyrinth(ui), GameStateUpdate::Labyrinth(snapshot)) => {
                ui.render_game(egui_ui, ctx, snapshot, command_sender);
                None
            }
            (GameUi::Clicker(ui), GameStateUpdate::Clicker(snapshot)) => {
                ui.render_game(egui_ui, snapshot, command_sender);
                None
            }
            (GameUi::Reaction(ui), GameStateUpdate::Reaction(snapshot)) => {
                ui.render_game(egui_ui, snapshot, command_sender);
                None
            }
            (GameUi::GuessNumber(ui), GameStateUpdate::GuessNumber(snapshot)) => {
                ui.render_game(egui_ui, snapshot, command_sender);
                None
            }
            (GameUi::Adventure(ui), GameStateUpdate::Adventure(snapshot)) => {
                ui.render_game(egui_ui, snapshot, command_sender);
                None
            }
            (GameUi::ContactForm(ui), GameStateUpdate::ContactForm(snapshot)) => {
                ui.render_game(egui_ui, snapshot, command_sender);
                None
            }
            _ => {
                egui_ui.label("Invalid game state");
                None
            }
        }
    }
}
