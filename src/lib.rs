//! Strictly Tic-Tac-Toe - a two-player console game
//!
//! The game logic is pure: a board that only ever fills squares, a rules
//! engine that evaluates a board snapshot, and a turn controller that
//! alternates two players. All text input and output goes through the
//! [`InputSource`] and [`OutputSink`] traits.
//!
//! # Architecture
//!
//! - **Games**: board, rules and turn loop (`games::tictactoe`)
//! - **Setup**: where the two players come from ([`PlayerDataProvider`])
//! - **Session**: one game between two players ([`GameSession`])
//! - **Config**: optional TOML settings ([`GameConfig`])
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe_console::{GameSession, Marker, Player, Players};
//!
//! let players = Players::new(Player::new("Ann", Marker::X), Player::new("Ben", Marker::O))?;
//! let mut session = GameSession::with_players(players);
//!
//! let mut moves = ["1", "4", "2", "5", "3"].into_iter().map(String::from);
//! let mut input = || moves.next();
//! let mut output = |_: &str| {};
//!
//! let outcome = session.play(&mut input, &mut output)?;
//! assert_eq!(outcome.winner().map(|p| p.name().as_str()), Some("Ann"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod io;
mod session;
mod setup;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, PlayerOneConfig, PlayerOverrides, PlayerTwoConfig};

// Crate-level exports - Text boundary
pub use io::{InputClosed, InputSource, OutputSink, StdinSource, StdoutSink};

// Crate-level exports - Session management
pub use session::{GameSession, SessionError};
pub use setup::{
    ConfiguredPlayers, ConsoleSetup, FALLBACK_NAME, MARKER_ATTEMPTS, NAME_ATTEMPTS,
    PlayerDataProvider, SetupError,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::rules;
pub use games::tictactoe::{
    Board, Cell, DuplicateMarker, INVALID_POSITION, Marker, Move, MoveError, Outcome, Player,
    Players, Position, ReplayError, Seat, TurnController, TurnResult, TurnState, evaluate,
};
