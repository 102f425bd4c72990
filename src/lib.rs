//! Connect Four for the terminal.
//!
//! Two players take turns at one console. The rules live in
//! [`connect_four_core`]; this crate adds the pieces around them.
//!
//! # Architecture
//!
//! - **Players**: [`MoveProvider`] implementations that choose columns
//!   (console input or a fixed script)
//! - **Orchestrator**: alternates turns, re-asks on rejected moves, announces
//!   results and offers another round
//! - **Console**: line-based I/O behind [`LineIo`]
//! - **Config**: TOML settings for names, colors and pacing
//! - **Replay**: plays a column list and reports the board, as text or JSON
//!
//! # Example
//!
//! ```no_run
//! use connect_four::{Console, HumanPlayer, Orchestrator, Player};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut orchestrator = Orchestrator::new(
//!     Box::new(HumanPlayer::new("Ada", Player::One)),
//!     Box::new(HumanPlayer::new("Grace", Player::Two)),
//!     Console::stdio(),
//! )?;
//! let scoreboard = orchestrator.run().await?;
//! println!("{} rounds played", scoreboard.rounds());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod orchestrator;
mod players;
mod render;
mod replay;
mod scoreboard;

// Crate-level exports - Configuration
pub use config::{
    ConfigError, DisplayConfig, GameConfig, MAX_NAME_LEN, MAX_TURN_DELAY_MS, PlayersConfig,
    validate_name,
};

// Crate-level exports - Console I/O
pub use console::{Console, LineIo};

// Crate-level exports - Orchestration
pub use orchestrator::{Orchestrator, is_affirmative};
pub use scoreboard::{RoundOutcome, Scoreboard};

// Crate-level exports - Players
pub use players::{HumanPlayer, MoveProvider, ScriptedPlayer, ask_name, resolve_names};

// Crate-level exports - Replay
pub use replay::{parse_moves, replay_report};

// Crate-level exports - Rendering
pub use render::BoardRenderer;

// Crate-level exports - Game types
pub use connect_four_core::{
    Board, COLS, Cell, Coord, Game, GameStatus, Move, MoveError, Player, ROWS, WinKind, WinLine,
    WinResult,
};
