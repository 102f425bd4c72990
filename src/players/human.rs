//! Human player that types columns on the console.

use super::MoveProvider;
use crate::console::LineIo;
use crate::render::BoardRenderer;
use anyhow::Result;
use connect_four_core::{Board, COLS, Player};
use tracing::{debug, instrument};

/// Human player reading columns from the console.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    token: Player,
    renderer: BoardRenderer,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, token: Player) -> Self {
        Self {
            name: name.into(),
            token,
            renderer: BoardRenderer::plain(),
        }
    }

    /// Colors the marker shown in the prompt.
    pub fn with_renderer(mut self, renderer: BoardRenderer) -> Self {
        self.renderer = renderer;
        self
    }
}

#[async_trait::async_trait]
impl MoveProvider for HumanPlayer {
    #[instrument(skip(self, _board, io), fields(player = %self.name))]
    async fn next_move(&mut self, _board: &Board, io: &mut dyn LineIo) -> Result<usize> {
        let question = format!(
            "{} ({}), choose a column (1-{}): ",
            self.name,
            self.renderer.marker(self.token.cell()),
            COLS
        );

        loop {
            let Some(answer) = io.prompt(&question).await? else {
                anyhow::bail!("Input closed while waiting for {}'s move", self.name);
            };

            match answer.trim().parse::<usize>() {
                Ok(column) => {
                    debug!(column, "Column entered");
                    return Ok(column);
                }
                Err(_) => {
                    debug!(%answer, "Not a number");
                    io.write_line(&format!("Please enter a number between 1 and {}.", COLS))
                        .await?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn token(&self) -> Player {
        self.token
    }
}
