use crate::board::Board;
use crate::common::Mark;
use crate::player::Player;
use rand::{rngs::SmallRng, Rng};

/// Automated player that picks uniformly at random among empty cells.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        RandomPlayer::new()
    }
}

/// Select an empty cell uniformly at random, or `None` when the board is
/// full. Pure in the empty-cell set; all randomness comes from `rng`.
pub fn random_empty_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let empties = board.empty_count();
    if empties == 0 {
        return None;
    }
    let pick = rng.random_range(0..empties);
    board.empty_cells().nth(pick)
}

impl Player for RandomPlayer {
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        _mark: Mark,
    ) -> Option<(usize, usize)> {
        random_empty_cell(board, rng)
    }
}
