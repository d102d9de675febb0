//! Player setup: where the two players of a session come from.

use crate::games::tictactoe::{DuplicateMarker, Marker, Player, Players};
use crate::io::{InputSource, OutputSink};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument};

/// Attempts player 1 gets to pick a marker.
pub const MARKER_ATTEMPTS: usize = 3;

/// Attempts player 2 gets to pick a name different from player 1.
pub const NAME_ATTEMPTS: usize = 4;

/// Name given to player 2 after too many clashing answers.
pub const FALLBACK_NAME: &str = "player 2";

/// Provides the two players of a session.
pub trait PlayerDataProvider {
    /// Produces both players, player 1 first.
    fn player_data(&mut self) -> Result<Players, SetupError>;
}

/// Why setup could not produce two players.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SetupError {
    /// Input ended during setup.
    #[display("Input closed during player setup")]
    #[from(skip)]
    InputClosed,

    /// Player 1 never chose a valid marker.
    #[display("No marker chosen after {} attempts", MARKER_ATTEMPTS)]
    #[from(skip)]
    NoMarkerChosen,

    /// Both players ended up with the same marker.
    #[display("{}", _0)]
    DuplicateMarker(DuplicateMarker),
}

/// Players fixed ahead of time (config file or command line).
#[derive(Debug, Clone)]
pub struct ConfiguredPlayers {
    players: Players,
}

impl ConfiguredPlayers {
    /// Wraps an already validated pair.
    pub fn new(players: Players) -> Self {
        Self { players }
    }
}

impl PlayerDataProvider for ConfiguredPlayers {
    #[instrument(skip(self))]
    fn player_data(&mut self) -> Result<Players, SetupError> {
        debug!("Using configured players");
        Ok(self.players.clone())
    }
}

/// Interactive name and marker dialogue over the text boundary.
///
/// Player 1 names themselves and picks `X` or `O`; player 2 gets the other
/// marker and must pick a different name.
pub struct ConsoleSetup<'a, I, O> {
    input: &'a mut I,
    output: &'a mut O,
}

impl<'a, I, O> ConsoleSetup<'a, I, O>
where
    I: InputSource,
    O: OutputSink,
{
    /// Creates a dialogue over the given boundary.
    pub fn new(input: &'a mut I, output: &'a mut O) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, SetupError> {
        self.output.write_line(prompt);
        self.input.read_line().ok_or(SetupError::InputClosed)
    }

    fn choose_markers(&mut self, name: &str) -> Result<Option<(Marker, Marker)>, SetupError> {
        for attempt in 1..=MARKER_ATTEMPTS {
            let answer = self.ask(&format!("{}, select X or O", name))?.to_uppercase();
            match answer.as_str() {
                "X" => return Ok(Some((Marker::X, Marker::O))),
                "O" => return Ok(Some((Marker::O, Marker::X))),
                _ => debug!(attempt, %answer, "Unrecognised marker"),
            }
        }
        Ok(None)
    }

    fn choose_second_name(&mut self, first_name: &str) -> Result<String, SetupError> {
        for _ in 0..NAME_ATTEMPTS {
            let name = self.input.read_line().ok_or(SetupError::InputClosed)?;
            if name != first_name {
                return Ok(name);
            }
            self.output.write_line("player 2, please enter a different name");
        }
        Ok(FALLBACK_NAME.to_string())
    }
}

impl<I, O> PlayerDataProvider for ConsoleSetup<'_, I, O>
where
    I: InputSource,
    O: OutputSink,
{
    #[instrument(skip(self))]
    fn player_data(&mut self) -> Result<Players, SetupError> {
        let first_name = self.ask("Player 1 please enter your name")?;

        let Some((first_marker, second_marker)) = self.choose_markers(&first_name)? else {
            self.output.write_line("goodbye");
            return Err(SetupError::NoMarkerChosen);
        };

        self.output.write_line(&format!(
            "player 2, you are {}, please enter your name",
            second_marker
        ));
        let second_name = self.choose_second_name(&first_name)?;

        info!(%first_name, %second_name, "Players registered");
        Ok(Players::new(
            Player::new(first_name, first_marker),
            Player::new(second_name, second_marker),
        )?)
    }
}
