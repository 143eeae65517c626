use super::board::{Board, CELL_COUNT, empty_board};
use super::types::{GameStatus, Mark, Score, WinningLine};
use super::win_detector::{GameResult, check_result, check_win_with_line};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub score: Score,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            score: Score::default(),
        }
    }

    /// Marks `index` for the current player. Rejections leave the state untouched.
    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is outside the board", index));
        }

        if self.board[index] != Mark::Empty {
            return Err(format!("Cell {} is already marked", index));
        }

        self.board[index] = self.current_mark;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    /// Clears the board for a new game; the score is kept.
    pub fn restart(&mut self) {
        self.board = empty_board();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.status.winner().is_none() {
            return None;
        }
        check_win_with_line(&self.board)
    }

    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn", self.current_mark),
            GameStatus::XWon => "X wins!".to_string(),
            GameStatus::OWon => "O wins!".to_string(),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        match check_result(&self.board) {
            Some(GameResult::Winner(mark)) => {
                if let Some(status) = GameStatus::won_by(mark) {
                    self.status = status;
                    self.score.record_win(mark);
                }
            }
            Some(GameResult::Draw) => self.status = GameStatus::Draw,
            None => {}
        }
    }
}
