#![cfg(feature = "std")]

//! Terminal rendering of board snapshots.

use crate::board::Board;
use crate::config::BOARD_DIMENSION;

fn print_rule() {
    print!("   ");
    for _ in 0..BOARD_DIMENSION {
        print!("+---");
    }
    println!("+");
}

/// Print the board as a bordered grid with zero-based row and column labels.
pub fn print_board(board: &Board) {
    print!("   ");
    for col in 0..BOARD_DIMENSION {
        print!("  {} ", col);
    }
    println!();
    print_rule();
    for row in 0..BOARD_DIMENSION {
        print!(" {} ", row);
        for col in 0..BOARD_DIMENSION {
            match board.get(row, col).unwrap_or(None) {
                Some(mark) => print!("| {} ", mark),
                None => print!("|   "),
            }
        }
        println!("|");
        print_rule();
    }
}
