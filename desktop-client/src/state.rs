use chrono::{DateTime, Local};
use common::games::labyrinth::Direction;
use common::games::{GameOverNotification, GameStateUpdate, GameType};
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::constants::RESULT_LOG_SIZE;

#[derive(Debug, Clone)]
pub enum ClientCommand {
    Menu(MenuCommand),
    Game(GameCommand),
}

#[derive(Debug, Clone)]
pub enum MenuCommand {
    OpenGame(GameType),
    BackToMenu,
}

#[derive(Debug, Clone)]
pub enum GameCommand {
    TicTacToe(TicTacToeCommand),
    Labyrinth(LabyrinthCommand),
    Clicker(ClickerCommand),
    Reaction(ReactionCommand),
    GuessNumber(GuessNumberCommand),
    Adventure(AdventureCommand),
    ContactForm(ContactFormCommand),
}

#[derive(Debug, Clone)]
pub enum TicTacToeCommand {
    PlaceMark { index: usize },
    Restart,
    SetVsCpu { enabled: bool },
}

#[derive(Debug, Clone)]
pub enum LabyrinthCommand {
    Start,
    Restart,
    Move { direction: Direction },
}

#[derive(Debug, Clone)]
pub enum ClickerCommand {
    Start,
    Click,
    Reset,
}

#[derive(Debug, Clone)]
pub enum ReactionCommand {
    Start,
    Hit,
    Reset,
}

#[derive(Debug, Clone)]
pub enum GuessNumberCommand {
    Guess { input: String },
    Restart,
}

#[derive(Debug, Clone)]
pub enum AdventureCommand {
    Generate,
    Save,
    Clear,
}

#[derive(Debug, Clone)]
pub enum ContactFormCommand {
    Submit {
        name: String,
        email: String,
        message: String,
    },
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    InGame { game: GameType },
}

#[derive(Debug, Clone)]
pub struct ResultEntry {
    pub game: GameType,
    pub summary: String,
    pub finished_at: DateTime<Local>,
}

/// State shared between the UI thread and the local game task.
#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    snapshots: Arc<Mutex<HashMap<GameType, GameStateUpdate>>>,
    results: Arc<Mutex<AllocRingBuffer<ResultEntry>>>,
    error: Arc<Mutex<Option<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Menu)),
            snapshots: Arc::new(Mutex::new(HashMap::new())),
            results: Arc::new(Mutex::new(AllocRingBuffer::new(RESULT_LOG_SIZE))),
            error: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap() = Some(ctx);
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().unwrap() = state;
        self.request_repaint();
    }

    pub fn get_state(&self) -> AppState {
        *self.state.lock().unwrap()
    }

    pub fn update_game_state(&self, update: GameStateUpdate) {
        self.snapshots
            .lock()
            .unwrap()
            .insert(update.game_type(), update);
        self.request_repaint();
    }

    pub fn get_game_state(&self, game: GameType) -> Option<GameStateUpdate> {
        self.snapshots.lock().unwrap().get(&game).cloned()
    }

    pub fn push_result(&self, notification: GameOverNotification) {
        self.results.lock().unwrap().enqueue(ResultEntry {
            game: notification.game,
            summary: notification.summary,
            finished_at: Local::now(),
        });
        self.request_repaint();
    }

    /// Newest first.
    pub fn get_results(&self) -> Vec<ResultEntry> {
        let mut entries: Vec<ResultEntry> = self.results.lock().unwrap().iter().cloned().collect();
        entries.reverse();
        entries
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap() = Some(error);
        self.request_repaint();
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }

    pub fn clear_error(&self) {
        *self.error.lock().unwrap() = None;
    }
}
