//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from board storage and from turn handling so they
//! can be checked in isolation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, winning_line};

use super::{Board, Player};
use tracing::{instrument, warn};

/// Result of evaluating a board after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The player who just moved completed a line.
    Winner(Player),
    /// The board is full and no line is complete.
    Draw,
    /// The game continues.
    Ongoing,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }

    /// Returns true once the game cannot continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the closing announcement for a terminal outcome.
    pub fn announcement(&self) -> Option<String> {
        match self {
            Outcome::Winner(player) => Some(format!(
                "Congratulations {}! \"{}\" Wins!",
                player.name(),
                player.marker()
            )),
            Outcome::Draw => Some("DRAW".to_string()),
            Outcome::Ongoing => None,
        }
    }
}

/// Evaluates the board on behalf of the player who just moved.
///
/// A completed line is always credited to `active`. The board does not
/// record who owns a marker, so this is only correct when called right
/// after `active` moved and before the turn passes. A completed line in
/// someone else's marker is logged and still credited to `active`.
#[instrument(skip(board), fields(active = %active.name()))]
pub fn evaluate(board: &Board, active: &Player) -> Outcome {
    if let Some(won) = winning_line(board) {
        if won.marker != *active.marker() {
            warn!(
                line_marker = %won.marker,
                active_marker = %active.marker(),
                "Completed line does not carry the active player's marker"
            );
        }
        return Outcome::Winner(active.clone());
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
