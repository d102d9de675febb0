//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Cell, TurnController};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must reproduce the
/// current board exactly, with no move landing on an occupied square.
pub struct MonotonicBoardInvariant;

impl Invariant<TurnController> for MonotonicBoardInvariant {
    fn holds(game: &TurnController) -> bool {
        let mut cells = [Cell::Empty; 9];

        for mov in game.history() {
            let cell = &mut cells[mov.position.to_index()];
            if *cell != Cell::Empty {
                return false;
            }
            *cell = Cell::Occupied(*game.players().get(mov.seat).marker());
        }

        Board::from_cells(cells) == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
