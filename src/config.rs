//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 32;

/// Longest accepted pacing delay between turns.
pub const MAX_TURN_DELAY_MS: u64 = 10_000;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player names.
    players: PlayersConfig,
    /// Console presentation.
    display: DisplayConfig,
}

/// Player names. A missing name is asked for on the console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Name of player one.
    one: Option<String>,
    /// Name of player two.
    two: Option<String>,
}

/// Console presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color tokens with ANSI escapes.
    color: bool,
    /// Pause after each move, in milliseconds.
    turn_delay_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            turn_delay_ms: 0,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            warn!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks names and delay bounds.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (seat, name) in [("one", &self.players.one), ("two", &self.players.two)] {
            if let Some(name) = name {
                validate_name(name).map_err(|e| {
                    ConfigError::new(format!("players.{}: {}", seat, e.message))
                })?;
            }
        }

        if let (Some(one), Some(two)) = (&self.players.one, &self.players.two)
            && one.trim() == two.trim()
        {
            return Err(ConfigError::new(format!(
                "players.one and players.two must differ (both '{}')",
                one.trim()
            )));
        }

        if self.display.turn_delay_ms > MAX_TURN_DELAY_MS {
            return Err(ConfigError::new(format!(
                "display.turn_delay_ms must be <= {}",
                MAX_TURN_DELAY_MS
            )));
        }

        Ok(())
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_one: Option<String>,
        player_two: Option<String>,
        turn_delay_ms: Option<u64>,
        no_color: bool,
    ) -> Self {
        if player_one.is_some() {
            self.players.one = player_one;
        }
        if player_two.is_some() {
            self.players.two = player_two;
        }
        if let Some(ms) = turn_delay_ms {
            self.display.turn_delay_ms = ms;
        }
        if no_color {
            self.display.color = false;
        }
        self
    }

    /// TOML with every default value, for writing a starter config file.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Checks a player name: non-blank and at most [`MAX_NAME_LEN`] characters.
#[instrument]
pub fn validate_name(name: &str) -> Result<(), ConfigError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::new("name must not be blank".to_string()));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ConfigError::new(format!(
            "name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
