//! Connect Four - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use connect_four::{
    BoardRenderer, Console, GameConfig, HumanPlayer, LineIo, Orchestrator, Player, replay_report,
    resolve_names,
};
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(args).await,
        Command::Replay { moves, json } => {
            print!("{}", replay_report(&moves, json)?);
            Ok(())
        }
        Command::DefaultConfig => {
            print!("{}", GameConfig::default_toml()?);
            Ok(())
        }
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(fallback)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive session at the terminal
#[instrument]
async fn run_play(args: PlayArgs) -> Result<()> {
    let config = GameConfig::load_or_default(&args.config)?.with_overrides(
        args.player_one,
        args.player_two,
        args.turn_delay_ms,
        args.no_color,
    );
    config.validate()?;
    info!(?config, "Configuration resolved");

    let renderer = BoardRenderer::new(*config.display().color());
    let mut console = Console::stdio();
    console.write_line("Welcome to Connect Four!").await?;

    let (one, two) = resolve_names(&config, &mut console).await?;

    let mut orchestrator = Orchestrator::new(
        Box::new(HumanPlayer::new(one, Player::One).with_renderer(renderer)),
        Box::new(HumanPlayer::new(two, Player::Two).with_renderer(renderer)),
        console,
    )?
    .with_renderer(renderer)
    .with_turn_delay(Duration::from_millis(*config.display().turn_delay_ms()));

    orchestrator.run().await?;
    Ok(())
}
