//! Game orchestration between two move providers.

use crate::console::LineIo;
use crate::players::MoveProvider;
use crate::render::BoardRenderer;
use crate::scoreboard::{RoundOutcome, Scoreboard};
use anyhow::{Result, ensure};
use connect_four_core::{Game, GameStatus, MoveError, Player, WinLine};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Runs rounds between two players on one console.
pub struct Orchestrator<IO> {
    game: Game,
    players: [Box<dyn MoveProvider>; 2],
    io: IO,
    renderer: BoardRenderer,
    turn_delay: Duration,
    scoreboard: Scoreboard,
}

impl<IO: LineIo> Orchestrator<IO> {
    /// Creates an orchestrator.
    ///
    /// # Errors
    ///
    /// Fails unless `player_one` plays [`Player::One`] and `player_two`
    /// plays [`Player::Two`].
    pub fn new(
        player_one: Box<dyn MoveProvider>,
        player_two: Box<dyn MoveProvider>,
        io: IO,
    ) -> Result<Self> {
        ensure!(
            player_one.token() == Player::One,
            "{} must play as player one",
            player_one.name()
        );
        ensure!(
            player_two.token() == Player::Two,
            "{} must play as player two",
            player_two.name()
        );

        Ok(Self {
            game: Game::new(),
            players: [player_one, player_two],
            io,
            renderer: BoardRenderer::plain(),
            turn_delay: Duration::ZERO,
            scoreboard: Scoreboard::new(),
        })
    }

    /// Sets how boards are drawn.
    pub fn with_renderer(mut self, renderer: BoardRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Sets the pause after each applied move.
    pub fn with_turn_delay(mut self, delay: Duration) -> Self {
        self.turn_delay = delay;
        self
    }

    /// The current round.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Results so far this session.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Consumes the orchestrator, returning its console.
    pub fn into_io(self) -> IO {
        self.io
    }

    fn name_of(&self, player: Player) -> &str {
        self.players[player.index()].name()
    }

    /// Plays rounds until the players decline another, then prints the
    /// session summary.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Scoreboard> {
        info!("Starting session");

        loop {
            self.play_round().await?;
            if !self.ask_play_again().await? {
                break;
            }
            self.game.reset();
        }

        let summary = self
            .scoreboard
            .summary(self.name_of(Player::One), self.name_of(Player::Two));
        self.io.write_line(&format!("\nThanks for playing! {}", summary)).await?;
        info!(rounds = self.scoreboard.rounds(), "Session finished");
        Ok(self.scoreboard)
    }

    /// Plays the current round to its end.
    #[instrument(skip(self))]
    pub async fn play_round(&mut self) -> Result<RoundOutcome> {
        info!(round = self.scoreboard.rounds() + 1, "Starting round");
        let header = format!(
            "\nRound {}: {} ({}) vs {} ({})",
            self.scoreboard.rounds() + 1,
            self.name_of(Player::One),
            self.renderer.marker(Player::One.cell()),
            self.name_of(Player::Two),
            self.renderer.marker(Player::Two.cell()),
        );
        self.io.write_line(&header).await?;

        loop {
            match *self.game.status() {
                GameStatus::InProgress => {
                    self.show_board(None).await?;
                    self.take_turn().await?;
                }
                GameStatus::Won { winner, line } => {
                    self.show_board(Some(&line)).await?;
                    let name = self.name_of(winner).to_string();
                    self.io
                        .write_line(&format!("{} wins with a {} line!", name, line.kind))
                        .await?;
                    info!(winner = %name, kind = %line.kind, "Round won");
                    let outcome = RoundOutcome::Won { winner, name, line };
                    self.scoreboard.record(&outcome);
                    return Ok(outcome);
                }
                GameStatus::Draw => {
                    self.show_board(None).await?;
                    self.io
                        .write_line("The board is full. It's a draw!")
                        .await?;
                    info!("Round drawn");
                    let outcome = RoundOutcome::Draw;
                    self.scoreboard.record(&outcome);
                    return Ok(outcome);
                }
            }
        }
    }

    /// Asks the player to move until the board accepts a column.
    async fn take_turn(&mut self) -> Result<()> {
        let seat = self.game.to_move();

        loop {
            let column = self.players[seat.index()]
                .next_move(self.game.board(), &mut self.io)
                .await?;

            match self.game.play(column) {
                Ok(_) => {
                    debug!(player = %seat, column, "Move applied");
                    if !self.turn_delay.is_zero() {
                        tokio::time::sleep(self.turn_delay).await;
                    }
                    return Ok(());
                }
                Err(e @ (MoveError::InvalidColumn(_) | MoveError::ColumnFull(_))) => {
                    warn!(player = %seat, column, error = %e, "Move rejected");
                    self.io.write_line(&format!("{}. Try again.", e)).await?;
                }
                Err(MoveError::GameOver) => {
                    anyhow::bail!("Move requested after the round ended");
                }
            }
        }
    }

    async fn show_board(&mut self, line: Option<&WinLine>) -> Result<()> {
        let rendered = self.renderer.render(self.game.board(), line);
        self.io.write(&format!("\n{}", rendered)).await
    }

    async fn ask_play_again(&mut self) -> Result<bool> {
        let answer = self.io.prompt("Play again? (yes/no): ").await?;
        let again = answer.as_deref().is_some_and(is_affirmative);
        debug!(?answer, again, "Play again answer");
        Ok(again)
    }
}

/// `yes` or `y`, any case, surrounding whitespace ignored.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}
