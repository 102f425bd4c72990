//! Win/draw tally for one session.

use connect_four_core::{Player, WinLine};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RoundOutcome {
    /// A player connected four.
    Won {
        /// Winning side.
        winner: Player,
        /// Winner's display name.
        name: String,
        /// The winning line.
        line: WinLine,
    },
    /// Board filled without a winner.
    Draw,
}

/// Rounds won by each player and rounds drawn. Lives only as long as the
/// process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Scoreboard {
    /// Rounds won by player one.
    player_one_wins: u32,
    /// Rounds won by player two.
    player_two_wins: u32,
    /// Rounds drawn.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finished round.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &RoundOutcome) {
        match outcome {
            RoundOutcome::Won {
                winner: Player::One,
                ..
            } => self.player_one_wins += 1,
            RoundOutcome::Won {
                winner: Player::Two,
                ..
            } => self.player_two_wins += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
    }

    /// Rounds played.
    pub fn rounds(&self) -> u32 {
        self.player_one_wins + self.player_two_wins + self.draws
    }

    /// One-line summary using the players' names.
    pub fn summary(&self, player_one: &str, player_two: &str) -> String {
        format!(
            "{} round(s): {} {} - {} {}, {} draw(s)",
            self.rounds(),
            player_one,
            self.player_one_wins,
            self.player_two_wins,
            player_two,
            self.draws
        )
    }
}
