//! Column contiguity invariant: no floating tokens.

use super::Invariant;
use crate::{Board, COLS, ROWS};

/// Invariant: occupied cells in every column form an unbroken run from the
/// bottom row upward.
pub struct ColumnContiguityInvariant;

impl Invariant<Board> for ColumnContiguityInvariant {
    fn holds(board: &Board) -> bool {
        (0..COLS).all(|col| {
            // Walking bottom-up, once an empty cell is seen nothing above may be occupied.
            let mut seen_empty = false;
            (0..ROWS).rev().all(|row| {
                let empty = board.cell_at(row, col).is_empty();
                let ok = !(seen_empty && !empty);
                seen_empty |= empty;
                ok
            })
        })
    }

    fn description() -> &'static str {
        "Occupied cells in each column are contiguous from the bottom"
    }
}
