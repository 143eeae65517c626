use std::time::{Duration, Instant};

use super::layout::Layout;
use super::types::{Direction, GameStatus, Position};

/// Maze run: player position, status and the run clock.
///
/// Time is passed in by the caller, so the state itself stays synchronous and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabyrinthGameState {
    layout: Layout,
    pub player: Position,
    pub status: GameStatus,
    pub moves_made: u32,
    started_at: Option<Instant>,
    finished_after: Option<Duration>,
}

impl LabyrinthGameState {
    pub fn new(layout: Layout) -> Self {
        let player = layout.start();
        Self {
            layout,
            player,
            status: GameStatus::NotStarted,
            moves_made: 0,
            started_at: None,
            finished_after: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn start(&mut self, now: Instant) {
        self.player = self.layout.start();
        self.status = GameStatus::Active;
        self.moves_made = 0;
        self.started_at = Some(now);
        self.finished_after = None;
    }

    pub fn restart(&mut self, now: Instant) {
        self.start(now);
    }

    /// Returns `true` if the player moved. Walls and the grid edge block alike.
    pub fn try_move(&mut self, direction: Direction, now: Instant) -> bool {
        if self.status != GameStatus::Active {
            return false;
        }

        let Some(target) = self
            .player
            .step(direction)
            .filter(|target| self.layout.is_open(*target))
        else {
            return false;
        };

        self.player = target;
        self.moves_made += 1;

        if target == self.layout.exit() {
            self.status = GameStatus::Finished;
            self.finished_after = Some(self.elapsed_since_start(now));
        }
        true
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.status {
            GameStatus::NotStarted => Duration::ZERO,
            GameStatus::Active => self.elapsed_since_start(now),
            GameStatus::Finished => self.finished_after.unwrap_or_default(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn status_text(&self) -> &'static str {
        match self.status {
            GameStatus::NotStarted => "Press Start to begin.",
            GameStatus::Active => "Find the exit.",
            GameStatus::Finished => "You found the exit!",
        }
    }

    fn elapsed_since_start(&self, now: Instant) -> Duration {
        self.started_at
            .map_or(Duration::ZERO, |started| now.saturating_duration_since(started))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::labyrinth::layout::DEFAULT_LAYOUT;

    const DEAD_END_PATH: [Direction; 8] = [
        Direction::Down,
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Up,
        Direction::Up,
        Direction::Right,
        Direction::Right,
    ];

    fn new_state() -> LabyrinthGameState {
        LabyrinthGameState::new(Layout::parse(&DEFAULT_LAYOUT).unwrap())
    }

    #[test]
    fn test_moves_ignored_before_start() {
        let mut state = new_state();
        assert!(!state.try_move(Direction::Right, Instant::now()));
        assert_eq!(state.player, Position::new(1, 1));
        assert_eq!(state.elapsed(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_wall_move_keeps_position() {
        let mut state = new_state();
        let now = Instant::now();
        state.start(now);

        assert!(!state.try_move(Direction::Up, now));
        assert!(!state.try_move(Direction::Left, now));
        assert_eq!(state.player, Position::new(1, 1));
        assert_eq!(state.moves_made, 0);
    }

    #[test]
    fn test_edge_of_open_grid_blocks() {
        let layout = Layout::parse(&["SE"]).unwrap();
        let mut state = LabyrinthGameState::new(layout);
        let now = Instant::now();
        state.start(now);

        assert!(!state.try_move(Direction::Up, now));
        assert!(!state.try_move(Direction::Left, now));
        assert!(state.try_move(Direction::Right, now));
        assert!(state.is_finished());
    }

    #[test]
    fn test_walk_to_exit_freezes_clock() {
        let mut state = new_state();
        let started = Instant::now();
        state.start(started);

        // Right along the top corridor, then down the right-hand column.
        let path = [
            Direction::Right,
            Direction::Right,
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Down,
            Direction::Down,
        ];
        for direction in path {
            assert!(state.try_move(direction, started));
        }
        assert_eq!(state.status, GameStatus::Active);
        assert_eq!(state.player, Position::new(4, 5));

        let finished = started + Duration::from_millis(4_200);
        assert!(state.try_move(Direction::Down, finished));
        assert_eq!(state.status, GameStatus::Finished);
        assert_eq!(state.player, Position::new(5, 5));
        assert_eq!(state.moves_made, 8);

        let later = finished + Duration::from_secs(10);
        assert_eq!(state.elapsed(later), Duration::from_millis(4_200));
        assert!(!state.try_move(Direction::Up, later));
    }

    #[test]
    fn test_dead_end_path_does_not_finish() {
        let mut state = new_state();
        let now = Instant::now();
        state.start(now);

        for direction in DEAD_END_PATH {
            state.try_move(direction, now);
        }
        assert_eq!(state.status, GameStatus::Active);
    }

    #[test]
    fn test_restart_resets_position_and_clock() {
        let mut state = new_state();
        let started = Instant::now();
        state.start(started);
        state.try_move(Direction::Right, started);
        state.try_move(Direction::Right, started);

        let restarted = started + Duration::from_secs(5);
        state.restart(restarted);

        assert_eq!(state.player, Position::new(1, 1));
        assert_eq!(state.status, GameStatus::Active);
        assert_eq!(state.moves_made, 0);
        assert_eq!(
            state.elapsed(restarted + Duration::from_millis(300)),
            Duration::from_millis(300)
        );
    }
}
