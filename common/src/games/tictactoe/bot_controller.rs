use crate::games::SessionRng;
use super::board::{Board, get_available_moves};

/// Uniformly random empty cell; no lookahead.
pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(board);
    rng.choose(&available_moves).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_str;
    use crate::games::tictactoe::types::Mark;

    #[test]
    fn test_random_move_targets_empty_cell() {
        let board = board_from_str("XOX OX_ O_X");
        let mut rng = SessionRng::new(99);
        for _ in 0..50 {
            let index = calculate_random_move(&board, &mut rng).unwrap();
            assert_eq!(board[index], Mark::Empty);
        }
    }

    #[test]
    fn test_random_move_on_full_board_is_none() {
        let board = board_from_str("XOX XOO OXX");
        let mut rng = SessionRng::new(1);
        assert_eq!(calculate_random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_random_move_reaches_every_empty_cell() {
        let board = board_from_str("X__ _O_ ___");
        let mut rng = SessionRng::new(3);
        let mut seen = [false; 9];
        for _ in 0..500 {
            if let Some(index) = calculate_random_move(&board, &mut rng) {
                seen[index] = true;
            }
        }
        let expected: Vec<bool> = board.iter().map(|cell| *cell == Mark::Empty).collect();
        assert_eq!(seen.to_vec(), expected);
    }
}
