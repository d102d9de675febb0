//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Marker, Position};
use tracing::instrument;

/// Every line that wins the game: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the marker filling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    /// The three squares of the line.
    pub line: [Position; 3],
    /// The marker occupying all three.
    pub marker: Marker,
}

/// Finds a line holding three identical markers.
///
/// Lines are scanned in [`LINES`] order and the first match is returned.
/// Normal play can only complete one line per move; a board with several
/// is reported by its first.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|line @ [a, b, c]| match board.get(a) {
        Cell::Occupied(marker) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(WinningLine { line, marker })
        }
        _ => None,
    })
}
