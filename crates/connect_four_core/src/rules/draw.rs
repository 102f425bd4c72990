//! Draw detection logic for Connect Four.

use super::super::{Board, COLS, Player};
use super::win::check_win;
use tracing::instrument;

/// Checks if no column accepts another token.
///
/// Only the top row needs inspecting: column contiguity means a column is
/// full exactly when its top cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    (0..COLS).all(|col| !board.cell_at(0, col).is_empty())
}

/// A full board on which neither player has four in a row.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_win(board, Player::One).won() && !check_win(board, Player::Two).won()
}
