//! Alternating turn invariant: players alternate One, Two, One, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: players alternate turns.
///
/// The history starts with player one and never repeats a player twice in
/// a row. While the round is in progress, `to_move` is the player after the
/// last move; once it ends, `to_move` stays on the player who made it.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.to_move() == Player::One;
        };

        if first.player != Player::One {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let last = history[history.len() - 1].player;
        let expected = if game.is_over() {
            last
        } else {
            last.opponent()
        };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (One, Two, One, ...)"
    }
}
