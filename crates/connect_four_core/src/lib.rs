//! Pure Connect Four game logic.
//!
//! - [`Board`]: the 6x7 grid with gravity drop, move validation, win and
//!   draw detection, and a text rendering
//! - [`rules`]: the win/draw scans the board delegates to
//! - [`Game`]: one round as a state machine (`InProgress`, `Won`, `Draw`)
//!   with turn alternation and reset
//! - [`invariants`]: properties every board and game maintains
//!
//! No I/O happens here; drivers feed columns in and read results out.
//!
//! # Example
//!
//! ```
//! use connect_four_core::{Board, Player, WinKind};
//!
//! let mut board = Board::new();
//! for column in 1..=4 {
//!     assert!(board.apply_move(column, Player::One));
//! }
//! let result = board.check_win(Player::One);
//! assert!(result.won());
//! assert_eq!(result.kind(), Some(WinKind::Horizontal));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use board::{Board, column_footer};
pub use game::{Game, GameStatus, Move, MoveError};
pub use rules::{WinKind, WinLine, WinResult};
pub use types::{COLS, CONNECT, Cell, Coord, Player, ROWS};
