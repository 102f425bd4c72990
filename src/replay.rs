//! Replaying a column list outside an interactive session.

use crate::render::BoardRenderer;
use anyhow::{Context, Result};
use connect_four_core::{Game, GameStatus};
use tracing::{info, instrument};

/// Parses a comma-separated column list. Empty entries are skipped.
pub fn parse_moves(moves: &str) -> Result<Vec<usize>, String> {
    moves
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(|m| {
            m.parse::<usize>()
                .map_err(|_| format!("'{}' is not a column number", m))
        })
        .collect()
}

/// Plays `moves` from an empty board and describes the result.
///
/// Text output is the plain board followed by a status line; `json` gives
/// the whole game as pretty-printed JSON.
///
/// # Errors
///
/// Fails if the list does not parse or a move is rejected.
#[instrument]
pub fn replay_report(moves: &str, json: bool) -> Result<String> {
    let columns = parse_moves(moves).map_err(anyhow::Error::msg)?;
    let game = Game::replay(&columns).with_context(|| format!("Replaying \"{}\"", moves))?;
    info!(moves = game.history().len(), status = %game.status(), "Replay finished");

    if json {
        let mut out = serde_json::to_string_pretty(&game)?;
        out.push('\n');
        return Ok(out);
    }

    let status = match game.status() {
        GameStatus::InProgress => format!("In progress, {} to move", game.to_move()),
        GameStatus::Won { line, .. } => {
            let cells: Vec<String> = line.cells.iter().map(ToString::to_string).collect();
            format!("{} [{}]", game.status(), cells.join(" "))
        }
        GameStatus::Draw => game.status().to_string(),
    };
    let line = match game.status() {
        GameStatus::Won { line, .. } => Some(*line),
        _ => None,
    };
    let board = BoardRenderer::plain().render(game.board(), line.as_ref());
    Ok(format!("{}{}\n", board, status))
}
