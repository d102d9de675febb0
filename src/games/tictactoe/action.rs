//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They are recorded in the
//! turn history and can be replayed against a fresh board.

use super::position::Position;
use super::types::Seat;
use derive_new::new;

/// A move in tic-tac-toe: a seat placing its marker at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Move {
    /// The seat that made the move.
    pub seat: Seat,
    /// The position where the marker was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.seat, self.position.number())
    }
}

/// Why a requested move was rejected.
///
/// Players only ever see one message for all of these; the variants
/// exist so the rejection can be traced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Input did not parse as an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(#[error(not(source))] String),

    /// Input parsed but is not a square number (1-9).
    #[display("{} is outside 1-9", _0)]
    OutOfRange(#[error(not(source))] i64),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}
