mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{
    BOARD_SIDE, Board, CELL_COUNT, board_from_str, count_marks, empty_board, get_available_moves,
    is_board_full,
};
pub use bot_controller::calculate_random_move;
pub use game_state::TicTacToeGameState;
pub use session::{TicTacToeSession, TicTacToeSnapshot};
pub use settings::{DEFAULT_CPU_MOVE_DELAY_MS, TicTacToeSessionSettings};
pub use types::{GameStatus, Mark, Score, WinningLine};
pub use win_detector::{GameResult, WIN_LINES, check_result, check_win, check_win_with_line};
