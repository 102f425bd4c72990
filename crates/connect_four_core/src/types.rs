//! Core domain types for Connect Four.

use serde::{Deserialize, Serialize};

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Number of columns on the board.
pub const COLS: usize = 7;

/// Tokens in a row needed to win.
pub const CONNECT: usize = 4;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Player {
    /// First player (moves first, marker `X`).
    #[strum(to_string = "player one")]
    One,
    /// Second player (marker `O`).
    #[strum(to_string = "player two")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell state this player's tokens occupy.
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// Zero-based seat index (0 for player one).
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Single-character board marker.
    pub fn marker(self) -> char {
        self.cell().marker()
    }
}

/// Occupancy state of one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No token.
    #[default]
    Empty,
    /// Token of player one.
    PlayerOne,
    /// Token of player two.
    PlayerTwo,
}

impl Cell {
    /// Marker used by the text renderer.
    pub fn marker(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }

    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A 1-based `(row, column)` board coordinate. Row 1 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row, 1 (top) through 6 (bottom).
    pub row: usize,
    /// Column, 1 (left) through 7 (right).
    pub column: usize,
}

impl Coord {
    /// Creates a coordinate from 1-based row and column.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub(crate) const fn from_zero_based(row: usize, col: usize) -> Self {
        Self {
            row: row + 1,
            column: col + 1,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}
