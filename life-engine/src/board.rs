// board.rs - Sparse Game of Life board

use std::collections::HashSet;
use std::fmt;

use crate::layout::Layout;

pub const DEFAULT_BOARD_SIZE: u32 = 20;
pub const MIN_BOARD_SIZE: u32 = 1;
pub const MAX_BOARD_SIZE: u32 = 100;

/// A cell coordinate. Presence in the board's live set means alive.
pub type Cell = (i32, i32);

#[derive(Debug)]
pub enum BoardError {
    InvalidDimension { rows: u32, columns: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimension { rows, columns } => {
                write!(f, "invalid board dimensions {}x{}", rows, columns)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// The board: current dimensions plus the set of live cell coordinates.
///
/// Coordinates are not bounds-checked on insertion; cells outside the
/// `rows x columns` rectangle can exist (via load or toggle) and survive
/// until the next `evolve()` rebuilds the set from the in-bounds scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u32,
    columns: u32,
    live: HashSet<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: DEFAULT_BOARD_SIZE,
            columns: DEFAULT_BOARD_SIZE,
            live: HashSet::new(),
        }
    }
}

impl Board {
    pub fn new(rows: u32, columns: u32) -> Result<Self, BoardError> {
        if rows < MIN_BOARD_SIZE || columns < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidDimension { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            live: HashSet::new(),
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.live.contains(&(x, y))
    }

    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live.iter().copied()
    }

    /// Kill the cell at `(x, y)` if it is alive, otherwise bring it to life.
    /// No bounds check: toggling outside the grid is allowed.
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        if !self.live.remove(&(x, y)) {
            self.live.insert((x, y));
        }
    }

    /// Live cells among the 8 neighbors of `(x, y)`, the cell itself excluded.
    pub fn neighbor_count(&self, x: i32, y: i32) -> u8 {
        count_neighbors(&self.live, x, y)
    }

    /// Advance one generation over the full `rows x columns` rectangle.
    ///
    /// Every cell is evaluated against a snapshot of the previous generation,
    /// then the live set is replaced wholesale with the computed result.
    /// Live cells outside the rectangle are never evaluated and drop out here.
    pub fn evolve(&mut self) {
        let snapshot = std::mem::take(&mut self.live);

        let mut next = HashSet::new();
        for x in 0..self.rows as i32 {
            for y in 0..self.columns as i32 {
                let n = count_neighbors(&snapshot, x, y);
                if n == 3 || (n == 2 && snapshot.contains(&(x, y))) {
                    next.insert((x, y));
                }
            }
        }

        self.live = next;
    }

    /// Change the grid dimensions. Live cells are kept as-is, including any
    /// that the new bounds no longer cover.
    pub fn resize(&mut self, rows: u32, columns: u32) -> Result<(), BoardError> {
        if rows < MIN_BOARD_SIZE || columns < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidDimension { rows, columns });
        }
        self.rows = rows;
        self.columns = columns;
        Ok(())
    }

    /// Remove every live cell. Dimensions are untouched.
    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Replace dimensions and live set from a parsed layout. Duplicate
    /// coordinates collapse. The board is untouched on error.
    pub fn load(&mut self, layout: &Layout) -> Result<(), BoardError> {
        if layout.rows < MIN_BOARD_SIZE || layout.columns < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidDimension {
                rows: layout.rows,
                columns: layout.columns,
            });
        }
        self.rows = layout.rows;
        self.columns = layout.columns;
        self.live = layout.cells.iter().copied().collect();
        Ok(())
    }

    /// Current dimensions and live cells, coordinates sorted so the
    /// serialized form is deterministic.
    pub fn layout(&self) -> Layout {
        let mut cells: Vec<Cell> = self.live.iter().copied().collect();
        cells.sort_unstable();
        Layout {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }
}

fn count_neighbors(live: &HashSet<Cell>, x: i32, y: i32) -> u8 {
    let mut count = 0;
    for i in -1..=1 {
        for j in -1..=1 {
            if i == 0 && j == 0 {
                continue;
            }
            if live.contains(&(x + i, y + j)) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[Cell]) -> Board {
        let mut board = Board::default();
        for &(x, y) in cells {
            board.toggle_cell(x, y);
        }
        board
    }

    #[test]
    fn toggle_twice_is_involution() {
        let mut board = board_with(&[(3, 4), (7, 7)]);
        let before = board.clone();

        board.toggle_cell(5, 5);
        board.toggle_cell(5, 5);

        assert_eq!(board, before);
    }

    #[test]
    fn neighbor_count_isolated_and_surrounded() {
        let board = board_with(&[(10, 10)]);
        assert_eq!(board.neighbor_count(10, 10), 0);

        let mut crowded = Board::default();
        for i in -1..=1 {
            for j in -1..=1 {
                if i != 0 || j != 0 {
                    crowded.toggle_cell(5 + i, 5 + j);
                }
            }
        }
        assert_eq!(crowded.neighbor_count(5, 5), 8);
    }

    #[test]
    fn neighbor_count_excludes_self() {
        let board = board_with(&[(2, 2), (2, 3)]);
        assert_eq!(board.neighbor_count(2, 2), 1);
    }

    #[test]
    fn evolve_empty_stays_empty() {
        let mut board = Board::default();
        board.evolve();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn lonely_cell_dies() {
        let mut board = board_with(&[(4, 4)]);
        board.evolve();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn block_is_still_life() {
        let mut board = board_with(&[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let before = board.clone();
        board.evolve();
        assert_eq!(board, before);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut board = board_with(&[(1, 0), (1, 1), (1, 2)]);

        board.evolve();
        let vertical: HashSet<Cell> = board.live_cells().collect();
        assert_eq!(vertical, [(0, 1), (1, 1), (2, 1)].into_iter().collect());

        board.evolve();
        let horizontal: HashSet<Cell> = board.live_cells().collect();
        assert_eq!(horizontal, [(1, 0), (1, 1), (1, 2)].into_iter().collect());
    }

    #[test]
    fn cells_cannot_be_born_outside_the_rectangle() {
        // A blinker butting against the top edge: the cell that would be
        // born at x = -1 is outside the scan and never appears.
        let mut board = board_with(&[(0, 0), (0, 1), (0, 2)]);
        board.evolve();
        let after: HashSet<Cell> = board.live_cells().collect();
        assert_eq!(after, [(0, 1), (1, 1)].into_iter().collect());
    }

    #[test]
    fn resize_keeps_out_of_bounds_cells_until_evolve() {
        let mut board = board_with(&[(1, 1), (1, 2), (2, 1), (2, 2), (15, 15)]);
        board.resize(5, 5).unwrap();

        assert_eq!(board.population(), 5);
        assert!(board.is_alive(15, 15));

        board.evolve();
        assert!(!board.is_alive(15, 15));
        assert_eq!(board.population(), 4); // the block survives
    }

    #[test]
    fn resize_rejects_zero_dimension() {
        let mut board = board_with(&[(0, 0)]);
        let before = board.clone();

        assert!(board.resize(0, 10).is_err());
        assert!(board.resize(10, 0).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn clear_is_idempotent_and_keeps_dimensions() {
        let mut board = board_with(&[(1, 1), (2, 2)]);
        board.resize(30, 40).unwrap();

        board.clear();
        board.clear();

        assert_eq!(board.population(), 0);
        assert_eq!((board.rows(), board.columns()), (30, 40));
    }

    #[test]
    fn load_collapses_duplicates() {
        let layout = Layout {
            rows: 3,
            columns: 3,
            cells: vec![(0, 0), (1, 1), (0, 0)],
        };

        let mut board = Board::default();
        board.load(&layout).unwrap();

        assert_eq!((board.rows(), board.columns()), (3, 3));
        assert_eq!(board.population(), 2);
        assert!(board.is_alive(0, 0));
        assert!(board.is_alive(1, 1));
    }

    #[test]
    fn load_rejects_zero_dimension_without_mutating() {
        let mut board = board_with(&[(7, 7)]);
        let before = board.clone();

        let layout = Layout {
            rows: 0,
            columns: 5,
            cells: vec![(1, 1)],
        };
        assert!(board.load(&layout).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn layout_is_sorted() {
        let board = board_with(&[(5, 0), (0, 5), (2, 2)]);
        let layout = board.layout();
        assert_eq!(layout.cells, vec![(0, 5), (2, 2), (5, 0)]);
    }
}
