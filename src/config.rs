//! Game configuration loaded from TOML.
//!
//! Every field is optional. A missing file yields the defaults, and any
//! player left unnamed is asked for interactively.

use crate::games::tictactoe::{Marker, Player, Players};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level configuration file.
#[derive(Debug, Clone, Getters, Deserialize)]
pub struct GameConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Player 1 settings.
    #[serde(default)]
    player_one: Option<PlayerOneConfig>,

    /// Player 2 settings.
    #[serde(default)]
    player_two: Option<PlayerTwoConfig>,
}

/// Player 1 entry.
#[derive(Debug, Clone, Getters, Deserialize)]
pub struct PlayerOneConfig {
    /// Display name.
    name: Option<String>,

    /// Marker character.
    #[serde(default = "default_marker")]
    marker: char,
}

/// Player 2 entry.
#[derive(Debug, Clone, Getters, Deserialize)]
pub struct PlayerTwoConfig {
    /// Display name.
    name: Option<String>,

    /// Marker character. Defaults to the counterpart of player 1's.
    marker: Option<char>,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_marker() -> char {
    Marker::X.symbol()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            player_one: None,
            player_two: None,
        }
    }
}

/// Values given on the command line, taking precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct PlayerOverrides {
    /// Player 1 name.
    pub player_one: Option<String>,
    /// Player 1 marker.
    pub marker: Option<char>,
    /// Player 2 name.
    pub player_two: Option<String>,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Combines file settings and overrides into a player pair.
    ///
    /// Returns `Ok(None)` when either name is still unknown, meaning the
    /// players have to be asked for.
    #[instrument(skip(self))]
    pub fn resolve_players(
        &self,
        overrides: &PlayerOverrides,
    ) -> Result<Option<Players>, ConfigError> {
        let first_name = overrides
            .player_one
            .clone()
            .or_else(|| self.player_one.as_ref().and_then(|p| p.name.clone()));
        let second_name = overrides
            .player_two
            .clone()
            .or_else(|| self.player_two.as_ref().and_then(|p| p.name.clone()));

        let (Some(first_name), Some(second_name)) = (first_name, second_name) else {
            debug!("Player names incomplete");
            return Ok(None);
        };
        if first_name == second_name {
            return Err(ConfigError::new(format!(
                "Players must have different names, both are {:?}",
                first_name
            )));
        }

        let first_marker = overrides
            .marker
            .or_else(|| self.player_one.as_ref().map(|p| p.marker))
            .map(board_marker)
            .transpose()?
            .unwrap_or(Marker::X);
        let second_marker = self
            .player_two
            .as_ref()
            .and_then(|p| p.marker)
            .map(board_marker)
            .transpose()?
            .or_else(|| first_marker.classic_opponent())
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "Player 2 needs a marker when player 1 uses {:?}",
                    first_marker.symbol()
                ))
            })?;

        let players = Players::new(
            Player::new(first_name, first_marker),
            Player::new(second_name, second_marker),
        )
        .map_err(|e| ConfigError::new(e.to_string()))?;
        Ok(Some(players))
    }
}

/// Turns a configured character into a marker.
///
/// Empty squares render as their number, so digits and whitespace would
/// be indistinguishable from open squares.
fn board_marker(symbol: char) -> Result<Marker, ConfigError> {
    if symbol.is_ascii_digit() || symbol.is_whitespace() {
        return Err(ConfigError::new(format!(
            "Marker {:?} cannot be a digit or whitespace",
            symbol
        )));
    }
    Ok(Marker::new(symbol.to_ascii_uppercase()))
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
