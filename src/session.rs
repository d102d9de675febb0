//! A game session: two players and one game between them.

use crate::games::tictactoe::{Outcome, Players, TurnController};
use crate::io::{InputClosed, InputSource, OutputSink};
use crate::setup::{PlayerDataProvider, SetupError};
use derive_more::{Display, Error, From};
use tracing::{info, instrument};

/// Why a session did not reach an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// Players could not be set up.
    #[display("Setup failed: {}", _0)]
    Setup(SetupError),

    /// Input ended before the game did.
    #[display("{}", _0)]
    InputClosed(InputClosed),
}

/// One game between two players.
#[derive(Debug, Clone)]
pub struct GameSession {
    controller: TurnController,
}

impl GameSession {
    /// Creates a session, asking the provider for both players.
    #[instrument(skip(provider))]
    pub fn new<P>(provider: &mut P) -> Result<Self, SessionError>
    where
        P: PlayerDataProvider + ?Sized,
    {
        let players = provider.player_data()?;
        info!(
            first = %players.first().name(),
            second = %players.second().name(),
            "Creating new game session"
        );
        Ok(Self::with_players(players))
    }

    /// Creates a session for players that are already known.
    pub fn with_players(players: Players) -> Self {
        Self {
            controller: TurnController::new(players),
        }
    }

    /// Returns the game being played.
    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    /// Plays the game to completion and returns its outcome.
    #[instrument(skip_all)]
    pub fn play<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<Outcome, SessionError>
    where
        I: InputSource,
        O: OutputSink,
    {
        let outcome = self.controller.run(input, output)?;
        info!(?outcome, "Session finished");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{DuplicateMarker, Marker, MoveError, Player, Position};
    use std::error::Error as _;

    #[test]
    fn test_errors_convert_and_chain() {
        let err = SessionError::from(SetupError::from(DuplicateMarker(Marker::X)));
        let setup = err.source().expect("setup error underneath");
        let duplicate = setup.source().expect("duplicate marker underneath");
        assert_eq!(duplicate.to_string(), "Both players use the marker \"X\"");
        assert!(duplicate.source().is_none());

        assert!(SessionError::from(InputClosed).source().is_some());
        assert!(SetupError::NoMarkerChosen.source().is_none());
    }

    #[test]
    fn test_replay_error_chains_move_error() {
        let players = Players::new(Player::new("Ann", Marker::X), Player::new("Ben", Marker::O))
            .expect("distinct markers");
        let err = TurnController::replay(players, &["5", "5"]).expect_err("square taken");
        assert_eq!(err.number, 2);
        let cause = err.source().expect("move error underneath");
        assert_eq!(
            cause.to_string(),
            MoveError::SquareOccupied(Position::Center).to_string()
        );
        assert!(cause.source().is_none());
    }
}
