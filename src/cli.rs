//! Command-line interface for connect_four.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "connect_four.toml";

/// Connect Four - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "connect_four")]
#[command(about = "Two-player Connect Four for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game at this terminal
    Play(PlayArgs),

    /// Replay a list of columns and print the resulting game
    Replay {
        /// Comma-separated columns, player one first (e.g. "4,4,3,5")
        moves: String,

        /// Print the game as JSON instead of a board
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration as TOML
    DefaultConfig,
}

/// Options for an interactive game
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to the configuration file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Name of player one (asked for if not given here or in the config)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of player two (asked for if not given here or in the config)
    #[arg(long)]
    pub player_two: Option<String>,

    /// Pause after each move, in milliseconds
    #[arg(long)]
    pub turn_delay_ms: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            player_one: None,
            player_two: None,
            turn_delay_ms: None,
            no_color: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::parse_from(["connect_four"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::parse_from([
            "connect_four",
            "-vv",
            "play",
            "--player-one",
            "Ada",
            "--turn-delay-ms",
            "250",
            "--no-color",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Play(args)) => {
                assert_eq!(args.player_one.as_deref(), Some("Ada"));
                assert_eq!(args.player_two, None);
                assert_eq!(args.turn_delay_ms, Some(250));
                assert!(args.no_color);
                assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
            }
            other => panic!("expected play, got {other:?}"),
        }
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::parse_from(["connect_four", "replay", "4,4,3", "--json"]);
        match cli.command {
            Some(Command::Replay { moves, json }) => {
                assert_eq!(moves, "4,4,3");
                assert!(json);
            }
            other => panic!("expected replay, got {other:?}"),
        }
    }
}
