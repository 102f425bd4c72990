//! History consistency invariant: the board is exactly its move history.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: replaying the move history on an empty board reproduces the
/// current board, and every recorded landing row matches gravity.
///
/// This also covers monotonicity: a cell that changed owner or reverted to
/// empty could not be rebuilt from the history.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut rebuilt = Board::new();

        for mv in game.history() {
            if rebuilt.landing_row(mv.column) != Some(mv.row) {
                return false;
            }
            if !rebuilt.apply_move(mv.column, mv.player) {
                return false;
            }
        }

        rebuilt == *game.board()
    }

    fn description() -> &'static str {
        "Board matches its move history"
    }
}
