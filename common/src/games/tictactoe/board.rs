use super::types::Mark;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

pub type Board = [Mark; CELL_COUNT];

pub fn empty_board() -> Board {
    [Mark::Empty; CELL_COUNT]
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn count_marks(board: &Board) -> usize {
    board.iter().filter(|cell| **cell != Mark::Empty).count()
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|cell| *cell != Mark::Empty)
}

/// Builds a board from `"XO_"`-style rows; anything other than X/O is empty.
pub fn board_from_str(layout: &str) -> Board {
    let mut board = empty_board();
    for (cell, ch) in board
        .iter_mut()
        .zip(layout.chars().filter(|c| !c.is_whitespace()))
    {
        *cell = match ch {
            'X' | 'x' => Mark::X,
            'O' | 'o' => Mark::O,
            _ => Mark::Empty,
        };
    }
    board
}
