use crate::common::Mark;

/// Side length of the square board.
pub const BOARD_DIMENSION: usize = 3;

/// The mark that moves first, by convention.
pub const FIRST_PLAYER: Mark = Mark::X;
