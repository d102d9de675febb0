//! Tic-tac-toe domain: board, rules and the turn loop.

mod action;
mod controller;
#[cfg(any(debug_assertions, test))]
mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use controller::{INVALID_POSITION, ReplayError, TurnController};
pub use phases::{TurnResult, TurnState};
pub use position::Position;
pub use rules::{Outcome, evaluate};
pub use types::{Board, Cell, DuplicateMarker, Marker, Player, Players, Seat};
