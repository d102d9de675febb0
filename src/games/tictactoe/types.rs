//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Token a player places on the board.
///
/// The engine never interprets the character. Markers are only compared
/// for equality, so any two distinct characters make a valid pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct Marker(char);

impl Marker {
    /// The traditional first marker.
    pub const X: Marker = Marker('X');
    /// The traditional second marker.
    pub const O: Marker = Marker('O');

    /// Creates a marker from any character.
    pub fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the character drawn on the board.
    pub fn symbol(self) -> char {
        self.0
    }

    /// Returns the traditional counterpart (`X` for `O` and back).
    pub fn classic_opponent(self) -> Option<Marker> {
        match self {
            Marker::X => Some(Marker::O),
            Marker::O => Some(Marker::X),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }
}

/// A named participant and the marker they place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker placed by this player.
    marker: Marker,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }
}

/// Which of the two configured players is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Seat {
    /// Player 1 (moves first).
    #[display("player 1")]
    First,
    /// Player 2.
    #[display("player 2")]
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Both players share a marker.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Both players use the marker \"{}\"", _0)]
pub struct DuplicateMarker(#[error(not(source))] pub Marker);

/// The two players of one session, with mutually exclusive markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    first: Player,
    second: Player,
}

impl Players {
    /// Pairs two players, rejecting a shared marker.
    #[instrument(skip_all, fields(first = %first.name, second = %second.name))]
    pub fn new(first: Player, second: Player) -> Result<Self, DuplicateMarker> {
        if first.marker == second.marker {
            return Err(DuplicateMarker(first.marker));
        }
        Ok(Self { first, second })
    }

    /// Returns the player sitting in the given seat.
    pub fn get(&self, seat: Seat) -> &Player {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    /// Player 1.
    pub fn first(&self) -> &Player {
        &self.first
    }

    /// Player 2.
    pub fn second(&self) -> &Player {
        &self.second
    }
}

const PADDING_ROW: &str = "     #     #     ";
const ROW_SEPARATOR: &str = "#################";

/// 3x3 tic-tac-toe board.
///
/// The only mutation is [`Board::try_occupy`] (and its boolean form
/// [`Board::occupy`]), which never overwrites a square. Once occupied, a
/// square keeps its marker for the life of the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board snapshot from explicit cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Places a marker on an empty square.
    #[instrument(skip(self, marker), fields(marker = %marker))]
    fn place(&mut self, pos: Position, marker: Marker) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(marker);
        Ok(())
    }

    /// Places a marker at the square named by one line of player input.
    ///
    /// Returns the position filled. The board is untouched on error.
    #[instrument(skip(self, marker), fields(marker = %marker))]
    pub fn try_occupy(&mut self, input: &str, marker: Marker) -> Result<Position, MoveError> {
        let pos = Position::parse(input)?;
        self.place(pos, marker)?;
        debug!(position = pos.number(), "Square occupied");
        Ok(pos)
    }

    /// Boolean form of [`Board::try_occupy`].
    ///
    /// Malformed, out-of-range and occupied squares are all reported as
    /// `false` with no further distinction.
    pub fn occupy(&mut self, input: &str, marker: Marker) -> bool {
        self.try_occupy(input, marker).is_ok()
    }

    /// Formats the board as ascii art.
    ///
    /// Empty squares show the number a player types to claim them.
    pub fn render(&self) -> String {
        let mut rows = Vec::with_capacity(11);
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                rows.push(ROW_SEPARATOR.to_string());
            }
            let symbols: Vec<char> = chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Occupied(marker) => marker.symbol(),
                    Cell::Empty => char::from_digit((row * 3 + col + 1) as u32, 10).unwrap_or('?'),
                })
                .collect();
            rows.push(PADDING_ROW.to_string());
            rows.push(format!(
                "  {}  #  {}  #  {}  ",
                symbols[0], symbols[1], symbols[2]
            ));
            rows.push(PADDING_ROW.to_string());
        }
        rows.join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_RENDER: &str = "     #     #     \n  1  #  2  #  3  \n     #     #     \n#################\n     #     #     \n  4  #  5  #  6  \n     #     #     \n#################\n     #     #     \n  7  #  8  #  9  \n     #     #     ";

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn test_occupy_writes_marker_one_based() {
        let mut board = Board::new();
        assert!(board.occupy("5", Marker::new('T')));
        assert_eq!(board.cells()[4], Cell::Occupied(Marker::new('T')));
    }

    #[test]
    fn test_occupied_square_is_not_overwritten() {
        let mut board = Board::new();
        assert!(board.occupy("5", Marker::new('T')));
        let before = board.clone();

        assert_eq!(
            board.try_occupy("5", Marker::new('U')),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_render_empty_board() {
        assert_eq!(Board::new().render(), EMPTY_RENDER);
    }

    #[test]
    fn test_render_shows_markers() {
        let mut board = Board::new();
        board.occupy("1", Marker::X);
        board.occupy("9", Marker::O);
        let rendered = board.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "  X  #  2  #  3  ");
        assert_eq!(lines[9], "  7  #  8  #  O  ");
    }

    #[test]
    fn test_players_reject_shared_marker() {
        let result = Players::new(Player::new("a", Marker::X), Player::new("b", Marker::X));
        assert_eq!(result, Err(DuplicateMarker(Marker::X)));
    }

    #[test]
    fn test_seat_alternates() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::First.other().other(), Seat::First);
    }
}
