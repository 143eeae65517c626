use super::types::{Cell, Position};

pub const DEFAULT_LAYOUT: [&str; 7] = [
    "#######",
    "#S    #",
    "# ### #",
    "#   # #",
    "# # # #",
    "#   #E#",
    "#######",
];

/// Immutable maze grid with exactly one start and one exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: Vec<Vec<Cell>>,
    start: Position,
    exit: Position,
}

impl Layout {
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, String> {
        if rows.is_empty() {
            return Err("Layout must have at least one row".to_string());
        }

        let mut cells = Vec::with_capacity(rows.len());
        let mut start = None;
        let mut exit = None;
        let width = rows[0].as_ref().chars().count();

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != width {
                return Err(format!(
                    "Row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    width
                ));
            }

            let mut row_cells = Vec::with_capacity(width);
            for (col, marker) in line.chars().enumerate() {
                let cell = match marker {
                    '#' => Cell::Wall,
                    ' ' => Cell::Open,
                    'S' => Cell::Start,
                    'E' => Cell::Exit,
                    other => {
                        return Err(format!(
                            "Unknown marker '{}' at row {}, column {}",
                            other, row, col
                        ));
                    }
                };
                let slot = match cell {
                    Cell::Start => Some((&mut start, "start")),
                    Cell::Exit => Some((&mut exit, "exit")),
                    Cell::Wall | Cell::Open => None,
                };
                if let Some((slot, name)) = slot {
                    if slot.is_some() {
                        return Err(format!("Layout has more than one {} cell", name));
                    }
                    *slot = Some(Position::new(row, col));
                }
                row_cells.push(cell);
            }
            cells.push(row_cells);
        }

        let start = start.ok_or_else(|| "Layout has no start cell".to_string())?;
        let exit = exit.ok_or_else(|| "Layout has no exit cell".to_string())?;

        Ok(Self { cells, start, exit })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Out-of-bounds reads as a wall.
    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|cell| cell.is_open())
    }

    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(Cell::marker).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_markers() {
        let layout = Layout::parse(&DEFAULT_LAYOUT).unwrap();
        assert_eq!(layout.rows(), 7);
        assert_eq!(layout.cols(), 7);
        assert_eq!(layout.start(), Position::new(1, 1));
        assert_eq!(layout.exit(), Position::new(5, 5));
        assert_eq!(layout.to_rows(), DEFAULT_LAYOUT.to_vec());
    }

    #[test]
    fn test_out_of_bounds_is_not_open() {
        let layout = Layout::parse(&DEFAULT_LAYOUT).unwrap();
        assert!(!layout.is_open(Position::new(7, 1)));
        assert!(!layout.is_open(Position::new(1, 70)));
        assert!(layout.is_open(Position::new(1, 2)));
        assert!(!layout.is_open(Position::new(0, 0)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Layout::parse(&["###", "#S E#"]).unwrap_err();
        assert!(err.contains("Row 1"));
    }

    #[test]
    fn test_missing_exit_rejected() {
        assert!(Layout::parse(&["#S #"]).is_err());
    }

    #[test]
    fn test_duplicate_start_rejected() {
        let err = Layout::parse(&["SSE"]).unwrap_err();
        assert!(err.contains("more than one start"));
    }

    #[test]
    fn test_unknown_marker_rejected() {
        let err = Layout::parse(&["S.E"]).unwrap_err();
        assert!(err.contains("'.'"));
    }
}
