//! Player that replays a fixed list of columns.

use super::MoveProvider;
use crate::console::LineIo;
use anyhow::Result;
use connect_four_core::{Board, Player};
use std::collections::VecDeque;
use tracing::debug;

/// Plays pre-chosen columns in order; useful for replays and tests.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    name: String,
    token: Player,
    columns: VecDeque<usize>,
}

impl ScriptedPlayer {
    /// Creates a scripted player.
    pub fn new(
        name: impl Into<String>,
        token: Player,
        columns: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            name: name.into(),
            token,
            columns: columns.into_iter().collect(),
        }
    }

    /// Columns not yet played.
    pub fn remaining(&self) -> usize {
        self.columns.len()
    }
}

#[async_trait::async_trait]
impl MoveProvider for ScriptedPlayer {
    async fn next_move(&mut self, _board: &Board, io: &mut dyn LineIo) -> Result<usize> {
        let Some(column) = self.columns.pop_front() else {
            anyhow::bail!("{} has no scripted moves left", self.name);
        };
        debug!(player = %self.name, column, "Scripted move");
        io.write_line(&format!("{} plays column {}", self.name, column))
            .await?;
        Ok(column)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn token(&self) -> Player {
        self.token
    }
}
