//! The turn-taking state machine driving one match.

use crate::board::Board;
use crate::common::{Mark, MoveError};
use crate::config::FIRST_PLAYER;
use crate::rules;

/// Current status of a match. Derived from the board after every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// Core game logic holding the board and the active player. The engine owns
/// the board exclusively for the duration of a match; collaborators only see
/// `&Board` snapshots and feed in candidate moves.
pub struct GameEngine {
    board: Board,
    current: Mark,
    status: GameStatus,
}

impl GameEngine {
    /// Start a match with an empty board. X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: FIRST_PLAYER,
            status: GameStatus::InProgress,
        }
    }

    /// Snapshot of the board for rendering or move selection.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is awaited.
    pub fn current_player(&self) -> Mark {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Run one round for the active player: validate and apply the candidate
    /// move, then re-evaluate the outcome. The win check precedes the draw
    /// check since the winning move is often the one that fills the last
    /// cell. On success the turn passes to the other mark unless the match
    /// ended; on `IllegalMove` nothing changes and the same player stays
    /// active, so the caller can re-request a move from the same source.
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::MatchOver);
        }
        rules::apply(&mut self.board, self.current, row, col)?;
        if rules::has_won(&self.board, self.current) {
            self.status = GameStatus::Won(self.current);
            log::debug!("player {} wins", self.current);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            log::debug!("board full with no winner, draw");
        } else {
            self.current = self.current.other();
        }
        Ok(self.status)
    }

    /// A move source reported that no cell is available. Interpreted as a
    /// draw, never an error.
    pub fn no_moves_available(&mut self) -> GameStatus {
        if self.status == GameStatus::InProgress {
            self.status = GameStatus::Draw;
        }
        self.status
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new()
    }
}
