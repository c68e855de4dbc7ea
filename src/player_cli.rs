#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::board::Board;
use crate::common::{Mark, MoveError};
use crate::config::BOARD_DIMENSION;
use crate::player::Player;
use rand::rngs::SmallRng;

/// Move source that reads coordinates from stdin.
pub struct HumanPlayer;

impl HumanPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Reasons a line of input could not be turned into a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Expected exactly two whitespace-separated tokens.
    TokenCount { found: usize },
    /// A token was not a non-negative integer.
    NotAnInteger(String),
    /// A coordinate fell outside the board.
    OutOfRange { row: usize, col: usize },
}

impl std::fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseMoveError::TokenCount { found } => {
                write!(f, "expected two numbers (row and column), got {}", found)
            }
            ParseMoveError::NotAnInteger(token) => {
                write!(f, "'{}' is not a number", token)
            }
            ParseMoveError::OutOfRange { row, col } => {
                write!(
                    f,
                    "({}, {}) is off the board; coordinates range from 0 to {}",
                    row,
                    col,
                    BOARD_DIMENSION - 1
                )
            }
        }
    }
}

/// Parse a line of input as a zero-based `(row, col)` pair.
pub fn parse_move(input: &str) -> Result<(usize, usize), ParseMoveError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ParseMoveError::TokenCount {
            found: tokens.len(),
        });
    }
    let row: usize = tokens[0]
        .parse()
        .map_err(|_| ParseMoveError::NotAnInteger(tokens[0].to_string()))?;
    let col: usize = tokens[1]
        .parse()
        .map_err(|_| ParseMoveError::NotAnInteger(tokens[1].to_string()))?;
    if row >= BOARD_DIMENSION || col >= BOARD_DIMENSION {
        return Err(ParseMoveError::OutOfRange { row, col });
    }
    Ok((row, col))
}

impl Player for HumanPlayer {
    /// Prompt until a well-formed coordinate is entered. Malformed input is
    /// reported with a reason and re-prompted in a loop, never by recursion.
    /// Returns `None` only when stdin is closed.
    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        _board: &Board,
        mark: Mark,
    ) -> Option<(usize, usize)> {
        loop {
            print!("Player {}, enter row and column (e.g. 0 2): ", mark);
            io::stdout().flush().ok();
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            match parse_move(line.trim()) {
                Ok((row, col)) => return Some((row, col)),
                Err(reason) => println!("Invalid input: {}", reason),
            }
        }
    }

    fn handle_rejected(&mut self, coord: (usize, usize), reason: &MoveError) {
        println!("Move ({}, {}) rejected: {}", coord.0, coord.1, reason);
    }
}
