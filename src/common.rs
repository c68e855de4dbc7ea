//! Common types for tic-tac-toe: player marks and move errors.

use core::fmt;

/// One of the two players. Identity is purely the mark placed on the board;
/// there is no richer player object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Errors returned by raw board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is outside [0, BOARD_DIMENSION).
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is out of bounds", row, col)
            }
        }
    }
}

/// Errors returned when a candidate move is fed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The coordinate failed validation: out of range or already occupied.
    IllegalMove { row: usize, col: usize },
    /// The match has already been decided; no further moves are accepted.
    MatchOver,
    /// Underlying board access error. Unreachable when moves are validated
    /// before application.
    Board(BoardError),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { row, col } => {
                write!(f, "({}, {}) is not a legal move", row, col)
            }
            MoveError::MatchOver => write!(f, "the match is already over"),
            MoveError::Board(e) => write!(f, "board error: {}", e),
        }
    }
}
