use super::board::{Board, is_board_full};
use super::types::{Mark, WinningLine};

pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Winner(Mark),
    Draw,
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let mark = board[a];
        if mark != Mark::Empty && mark == board[b] && mark == board[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// `None` while the game can continue.
pub fn check_result(board: &Board) -> Option<GameResult> {
    if let Some(mark) = check_win(board) {
        return Some(GameResult::Winner(mark));
    }
    if is_board_full(board) {
        return Some(GameResult::Draw);
    }
    None
}
