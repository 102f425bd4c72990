//! Move providers: anything that can choose a column for a player.

mod human;
mod names;
mod scripted;

pub use human::HumanPlayer;
pub use names::{ask_name, resolve_names};
pub use scripted::ScriptedPlayer;

use crate::console::LineIo;
use anyhow::Result;
use connect_four_core::{Board, Player};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait MoveProvider: Send {
    /// Gets the next column (1-7) from this player.
    ///
    /// The column is not guaranteed to be playable; the orchestrator asks
    /// again when the board rejects it.
    async fn next_move(&mut self, board: &Board, io: &mut dyn LineIo) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Which side this provider plays.
    fn token(&self) -> Player;
}
