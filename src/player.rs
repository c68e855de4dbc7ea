use crate::board::Board;
use crate::common::{Mark, MoveError};
use rand::rngs::SmallRng;

/// Interface implemented by move sources: human input collectors or
/// automated policies.
pub trait Player {
    /// Produce a candidate move for `mark` given the current board, or
    /// `None` when no move is possible (no empty cell remains).
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> Option<(usize, usize)>;

    /// Inform the player that its last candidate was rejected and a new one
    /// will be requested.
    fn handle_rejected(&mut self, _coord: (usize, usize), _reason: &MoveError) {}
}
