//! Turn controller: the game loop state machine.
//!
//! The controller owns the board and alternates two players over it.
//! [`TurnController::submit`] advances the state machine by one line of
//! input without any I/O; [`TurnController::run`] wraps it with rendering,
//! prompting and reading.

use super::action::{Move, MoveError};
use super::phases::{TurnResult, TurnState};
use super::rules::{self, Outcome};
use super::types::{Board, Player, Players, Seat};
use crate::io::{InputClosed, InputSource, OutputSink};
use tracing::{debug, info, instrument};

/// Message shown for every refused move.
pub const INVALID_POSITION: &str = "INVALID BOARD POSITION";

/// A move in a replayed sequence was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Move {} ({:?}) rejected: {}", number, input, error)]
pub struct ReplayError {
    /// 1-based index of the offending move in the sequence.
    pub number: usize,
    /// The raw input of the offending move.
    pub input: String,
    /// Why the move was refused.
    #[error(source)]
    pub error: MoveError,
}

/// Drives one game between two players.
#[derive(Debug, Clone)]
pub struct TurnController {
    pub(super) players: Players,
    pub(super) board: Board,
    pub(super) state: TurnState,
    pub(super) history: Vec<Move>,
}

impl TurnController {
    /// Starts a game on an empty board with player 1 to move.
    #[instrument(skip(players), fields(first = %players.first().name(), second = %players.second().name()))]
    pub fn new(players: Players) -> Self {
        Self {
            players,
            board: Board::new(),
            state: TurnState::AwaitingMove(Seat::First),
            history: Vec::new(),
        }
    }

    /// Returns the players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current turn state.
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Returns every accepted move, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player whose move is being solicited.
    pub fn active_player(&self) -> Option<&Player> {
        self.state.active_seat().map(|seat| self.players.get(seat))
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.state.outcome()
    }

    /// Applies one line of input from the active player.
    ///
    /// A refused move leaves the board, the history and the active player
    /// untouched. An accepted move is evaluated before the turn passes, so
    /// a completed line is credited to the player who completed it.
    #[instrument(skip(self))]
    pub fn submit(&mut self, input: &str) -> TurnResult {
        let seat = match &self.state {
            TurnState::AwaitingMove(seat) => *seat,
            TurnState::Finished(_) => return TurnResult::Rejected(MoveError::GameOver),
        };
        let active = self.players.get(seat);

        let position = match self.board.try_occupy(input, *active.marker()) {
            Ok(position) => position,
            Err(error) => {
                debug!(%seat, %error, "Move rejected");
                return TurnResult::Rejected(error);
            }
        };
        self.history.push(Move::new(seat, position));

        let outcome = rules::evaluate(&self.board, active);
        let result = if outcome.is_terminal() {
            info!(?outcome, moves = self.history.len(), "Game finished");
            self.state = TurnState::Finished(outcome.clone());
            TurnResult::Finished(outcome)
        } else {
            self.state = TurnState::AwaitingMove(seat.other());
            TurnResult::Continue
        };

        // State must be settled before the turn order is checked.
        self.check_invariants();
        result
    }

    /// Plays the game to completion over the given I/O boundary.
    ///
    /// Each turn renders the board, prompts the active player and reads one
    /// line. Refused moves print [`INVALID_POSITION`] and re-prompt the same
    /// player. The final board and the announcement are printed at the end.
    #[instrument(skip_all)]
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<Outcome, InputClosed>
    where
        I: InputSource,
        O: OutputSink,
    {
        loop {
            let name = match self.active_player() {
                Some(player) => player.name().clone(),
                None => break,
            };

            self.render_to(output);
            output.write_line(&format!("{} select a board position", name));
            let line = input.read_line().ok_or(InputClosed)?;

            match self.submit(&line) {
                TurnResult::Rejected(_) => output.write_line(INVALID_POSITION),
                TurnResult::Continue => {}
                TurnResult::Finished(_) => break,
            }
        }

        // Only a finished game leaves the loop.
        let outcome = self.outcome().cloned().unwrap_or(Outcome::Ongoing);
        self.render_to(output);
        if let Some(announcement) = outcome.announcement() {
            output.write_line(&announcement);
        }
        Ok(outcome)
    }

    /// Rebuilds a game from a sequence of square numbers.
    ///
    /// Stops at the first move that finishes the game; any move after that
    /// is refused, as is any invalid square.
    #[instrument(skip(players, moves), fields(count = moves.len()))]
    pub fn replay<S>(players: Players, moves: &[S]) -> Result<Self, ReplayError>
    where
        S: AsRef<str>,
    {
        let mut game = Self::new(players);
        for (index, raw) in moves.iter().enumerate() {
            if let TurnResult::Rejected(error) = game.submit(raw.as_ref()) {
                return Err(ReplayError {
                    number: index + 1,
                    input: raw.as_ref().to_string(),
                    error,
                });
            }
        }
        Ok(game)
    }

    fn render_to<O: OutputSink>(&self, output: &mut O) {
        for line in self.board.render().lines() {
            output.write_line(line);
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{GameInvariants, InvariantSet};

        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in violations {
                tracing::error!(description = %violation.description, "Invariant violated");
            }
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Marker, Position};

    fn players() -> Players {
        Players::new(Player::new("Alice", Marker::X), Player::new("Bob", Marker::O))
            .expect("distinct markers")
    }

    #[test]
    fn test_starts_with_player_one() {
        let game = TurnController::new(players());
        assert_eq!(game.state(), &TurnState::AwaitingMove(Seat::First));
        assert_eq!(game.active_player().map(|p| p.name().as_str()), Some("Alice"));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = TurnController::new(players());
        assert_eq!(game.submit("1"), TurnResult::Continue);
        assert_eq!(game.state().active_seat(), Some(Seat::Second));
        assert_eq!(game.submit("5"), TurnResult::Continue);
        assert_eq!(game.state().active_seat(), Some(Seat::First));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = TurnController::new(players());
        assert_eq!(game.submit("5"), TurnResult::Continue);

        let board = game.board().clone();
        assert_eq!(
            game.submit("5"),
            TurnResult::Rejected(MoveError::SquareOccupied(Position::Center))
        );
        assert!(matches!(game.submit("ten"), TurnResult::Rejected(MoveError::NotANumber(_))));
        assert_eq!(game.state().active_seat(), Some(Seat::Second));
        assert_eq!(game.board(), &board);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_no_moves_after_finish() {
        let mut game = TurnController::replay(players(), &["1", "4", "2", "5", "3"]).expect("valid");
        let board = game.board().clone();
        assert_eq!(game.submit("9"), TurnResult::Rejected(MoveError::GameOver));
        assert_eq!(game.board(), &board);
    }

    mod logging {
        use super::*;
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use tracing_subscriber::layer::{Context, SubscriberExt};
        use tracing_subscriber::Layer;

        /// Counts ERROR events emitted while installed.
        struct ErrorCounter(Arc<AtomicUsize>);

        impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                if *event.metadata().level() == tracing::Level::ERROR {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
            }
        }

        fn errors_logged(play: impl FnOnce()) -> usize {
            let count = Arc::new(AtomicUsize::new(0));
            let subscriber = tracing_subscriber::registry().with(ErrorCounter(count.clone()));
            tracing::subscriber::with_default(subscriber, play);
            count.load(Ordering::SeqCst)
        }

        #[test]
        fn test_legal_games_log_no_errors() {
            let errors = errors_logged(|| {
                let mut game = TurnController::new(players());
                assert_eq!(game.submit("1"), TurnResult::Continue);
                assert_eq!(game.submit("4"), TurnResult::Continue);
                assert!(matches!(game.submit("4"), TurnResult::Rejected(_)));
                assert_eq!(game.submit("2"), TurnResult::Continue);

                let won = TurnController::replay(players(), &["1", "4", "2", "5", "3"])
                    .expect("valid");
                assert!(won.outcome().is_some());

                let drawn = TurnController::replay(
                    players(),
                    &["1", "2", "3", "5", "4", "6", "8", "7", "9"],
                )
                .expect("valid");
                assert_eq!(drawn.outcome(), Some(&Outcome::Draw));
            });
            assert_eq!(errors, 0);
        }

        #[cfg(debug_assertions)]
        #[test]
        fn test_corrupted_game_logs_errors() {
            let errors = errors_logged(|| {
                let mut game = TurnController::new(players());
                game.state = TurnState::AwaitingMove(Seat::Second);
                game.check_invariants();
            });
            assert_eq!(errors, 1);
        }
    }

    #[test]
    fn test_history_records_seats() {
        let game = TurnController::replay(players(), &["5", "1"]).expect("valid");
        assert_eq!(
            game.history(),
            &[
                Move::new(Seat::First, Position::Center),
                Move::new(Seat::Second, Position::TopLeft),
            ]
        );
    }
}
