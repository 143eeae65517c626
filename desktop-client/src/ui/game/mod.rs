mod adventure;
mod clicker;
mod contact_form;
mod game_ui;
mod guess_number;
mod labyrinth;
mod reaction;
mod tictactoe;

pub use game_ui::{GameUi, GameUiEvent};
