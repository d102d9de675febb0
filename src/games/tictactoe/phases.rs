//! Turn states for the tic-tac-toe state machine.

use super::action::MoveError;
use super::rules::Outcome;
use super::types::Seat;

/// Where the turn controller currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the seated player to name a square.
    AwaitingMove(Seat),
    /// The game is over. The outcome is never [`Outcome::Ongoing`].
    Finished(Outcome),
}

impl TurnState {
    /// Returns the seat to move, if the game is still running.
    pub fn active_seat(&self) -> Option<Seat> {
        match self {
            TurnState::AwaitingMove(seat) => Some(*seat),
            TurnState::Finished(_) => None,
        }
    }

    /// Returns the final outcome once finished.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            TurnState::AwaitingMove(_) => None,
            TurnState::Finished(outcome) => Some(outcome),
        }
    }
}

/// What one submitted line of input did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    /// The move was refused; the same player moves again.
    Rejected(MoveError),
    /// The move was applied and the turn passed to the other player.
    Continue,
    /// The move was applied and ended the game.
    Finished(Outcome),
}
