//! Move validation and outcome detection.

use crate::board::Board;
use crate::common::{Mark, MoveError};
use crate::config::BOARD_DIMENSION;

/// A move is legal when it targets an empty, in-bounds cell.
pub fn is_valid(board: &Board, row: usize, col: usize) -> bool {
    matches!(board.get(row, col), Ok(None))
}

/// Place `mark` at `(row, col)` after validating the move. Exactly one cell
/// goes from empty to marked on success; the board is untouched on failure.
pub fn apply(board: &mut Board, mark: Mark, row: usize, col: usize) -> Result<(), MoveError> {
    if !is_valid(board, row, col) {
        return Err(MoveError::IllegalMove { row, col });
    }
    board.set(row, col, mark)?;
    Ok(())
}

fn owns(board: &Board, mark: Mark, row: usize, col: usize) -> bool {
    board.get(row, col).unwrap_or(None) == Some(mark)
}

/// True when `mark` fully occupies any row, any column, or either diagonal.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    for i in 0..BOARD_DIMENSION {
        if (0..BOARD_DIMENSION).all(|j| owns(board, mark, i, j)) {
            return true;
        }
        if (0..BOARD_DIMENSION).all(|j| owns(board, mark, j, i)) {
            return true;
        }
    }
    (0..BOARD_DIMENSION).all(|i| owns(board, mark, i, i))
        || (0..BOARD_DIMENSION).all(|i| owns(board, mark, i, BOARD_DIMENSION - 1 - i))
}

/// True when no empty cell remains. A full board is a draw only if the last
/// move did not win, so callers check `has_won` first.
pub fn is_full(board: &Board) -> bool {
    board.empty_cells().next().is_none()
}
