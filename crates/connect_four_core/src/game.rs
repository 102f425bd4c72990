//! Turn-alternation state machine for a single round.
//!
//! A [`Game`] wraps a [`Board`] with whose turn it is, the round's
//! [`GameStatus`] and the move history. Transitions:
//!
//! - `InProgress --play--> InProgress | Won | Draw`
//! - `any --reset--> InProgress`

use super::invariants::{GameInvariants, InvariantSet};
use super::rules::WinLine;
use super::{Board, COLS, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A token drop that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who dropped the token.
    pub player: Player,
    /// 1-based column chosen.
    pub column: usize,
    /// 1-based row the token landed on.
    pub row: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> column {} (row {})", self.player, self.column, self.row)
    }
}

/// Error that can occur when playing a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The column is outside 1-7.
    #[display("Column {} is out of range (must be 1-{})", _0, COLS)]
    InvalidColumn(usize),

    /// The column has no empty cell left.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),

    /// The round already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Current status of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A player connected four.
    Won {
        /// The winning player.
        winner: Player,
        /// The line that won.
        line: WinLine,
    },
    /// Board full, no winner.
    Draw,
}

impl GameStatus {
    /// Whether the round has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if the round was won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, line } => write!(f, "{} wins ({})", winner, line.kind),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// One round of Connect Four. Player one always moves first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new round on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Replays a sequence of columns, alternating players from player one.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered, including
    /// [`MoveError::GameOver`] for columns left over after the round ended.
    #[instrument]
    pub fn replay(columns: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &column in columns {
            game.play(column)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// After the round ends this is the player who made the final move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the round status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Whether the round has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Drops the current player's token into `column` (1-7).
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the round is won or drawn
    /// - [`MoveError::InvalidColumn`] for columns outside 1-7
    /// - [`MoveError::ColumnFull`] when the column has no room
    ///
    /// The game is unchanged when an error is returned.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, column: usize) -> Result<&GameStatus, MoveError> {
        if self.is_over() {
            warn!("Move after game over");
            return Err(MoveError::GameOver);
        }

        if !(1..=COLS).contains(&column) {
            warn!("Column out of range");
            return Err(MoveError::InvalidColumn(column));
        }

        let player = self.to_move;
        let Some(row) = self.board.landing_row(column) else {
            warn!("Column full");
            return Err(MoveError::ColumnFull(column));
        };
        if !self.board.apply_move(column, player) {
            return Err(MoveError::ColumnFull(column));
        }
        self.history.push(Move {
            player,
            column,
            row,
        });
        debug!(row, moves = self.history.len(), "Move applied");

        self.update_status(player);

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated: {:?}",
            GameInvariants::check_all(self)
        );

        Ok(&self.status)
    }

    /// Updates status after `player` moved.
    fn update_status(&mut self, player: Player) {
        if let Some(line) = self.board.check_win(player).line() {
            info!(winner = %player, kind = %line.kind, "Game won");
            self.status = GameStatus::Won {
                winner: player,
                line,
            };
        } else if self.board.is_full() {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = player.opponent();
        }
    }

    /// Starts a fresh round: empty board, player one to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Player::One;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
