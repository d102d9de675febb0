//! Alternating turn invariant: seats alternate, player 1 first.

use super::super::{Seat, TurnController, TurnState};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must read First, Second, First, ... and, while the game
/// is running, the seat to move must be the one that continues the
/// pattern.
pub struct AlternatingTurnInvariant;

impl Invariant<TurnController> for AlternatingTurnInvariant {
    fn holds(game: &TurnController) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.seat == expected_seat(i));
        if !alternates {
            return false;
        }

        match game.state() {
            TurnState::AwaitingMove(seat) => *seat == expected_seat(history.len()),
            TurnState::Finished(_) => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (player 1, player 2, ...)"
    }
}

fn expected_seat(move_index: usize) -> Seat {
    if move_index % 2 == 0 {
        Seat::First
    } else {
        Seat::Second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Marker, Move, Player, Players, Position};

    fn players() -> Players {
        Players::new(Player::new("Alice", Marker::X), Player::new("Bob", Marker::O))
            .expect("distinct markers")
    }

    #[test]
    fn test_empty_game_holds() {
        let game = TurnController::new(players());
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_replayed_game_holds() {
        let game = TurnController::replay(players(), &["2", "4", "6"]).expect("valid");
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_seat_violates() {
        let mut game = TurnController::replay(players(), &["2"]).expect("valid");
        game.history.push(Move::new(Seat::First, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_seat_to_move_violates() {
        let mut game = TurnController::replay(players(), &["2"]).expect("valid");
        game.state = TurnState::AwaitingMove(Seat::First);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
