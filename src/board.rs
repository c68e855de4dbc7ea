//! Fixed-size grid storage with bounds-checked access.

use crate::common::{BoardError, Mark};
use crate::config::BOARD_DIMENSION;

/// The playing grid. Empty cells hold `None`; occupied cells hold the mark
/// that was played there. A cell never reverts from a mark back to empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Mark>; BOARD_DIMENSION]; BOARD_DIMENSION],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[None; BOARD_DIMENSION]; BOARD_DIMENSION],
        }
    }

    /// Read the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Mark>, BoardError> {
        if row >= BOARD_DIMENSION || col >= BOARD_DIMENSION {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Write `mark` into the cell at `(row, col)`. Callers are expected to
    /// validate the move first; an out-of-bounds index here is a caller bug,
    /// not a game event.
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        if row >= BOARD_DIMENSION || col >= BOARD_DIMENSION {
            return Err(BoardError::OutOfBounds { row, col });
        }
        self.cells[row][col] = Some(mark);
        Ok(())
    }

    /// Coordinates of empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..BOARD_DIMENSION).flat_map(move |row| {
            (0..BOARD_DIMENSION).filter_map(move |col| {
                if self.cells[row][col].is_none() {
                    Some((row, col))
                } else {
                    None
                }
            })
        })
    }

    /// Number of empty cells remaining.
    pub fn empty_count(&self) -> usize {
        self.empty_cells().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
