//! Board coordinates for tic-tac-toe moves.

use super::action::MoveError;
use super::types::Board;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Players address squares by number (1-9, row-major); the board stores
/// them by index (0-8). This enum is the only bridge between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Position {
    /// Top-left (square 1)
    TopLeft,
    /// Top-center (square 2)
    TopCenter,
    /// Top-right (square 3)
    TopRight,
    /// Middle-left (square 4)
    MiddleLeft,
    /// Center (square 5)
    Center,
    /// Middle-right (square 6)
    MiddleRight,
    /// Bottom-left (square 7)
    BottomLeft,
    /// Bottom-center (square 8)
    BottomCenter,
    /// Bottom-right (square 9)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Converts position to the square number players type (1-9).
    pub fn number(self) -> usize {
        self.to_index() + 1
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Creates position from a square number (1-9).
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// Parses one line of player input into a position.
    ///
    /// Only a plain integer in `1..=9` is accepted. Surrounding whitespace
    /// is ignored; anything else is rejected.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, MoveError> {
        let trimmed = text.trim();
        let number = trimmed
            .parse::<i64>()
            .map_err(|_| MoveError::NotANumber(trimmed.to_string()))?;

        usize::try_from(number)
            .ok()
            .and_then(Self::from_number)
            .ok_or(MoveError::OutOfRange(number))
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn open(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_index_agree() {
        for pos in Position::iter() {
            assert_eq!(pos.number(), pos.to_index() + 1);
            assert_eq!(Position::from_index(pos.to_index()), Some(pos));
            assert_eq!(Position::from_number(pos.number()), Some(pos));
        }
    }

    #[test]
    fn test_from_number_bounds() {
        assert_eq!(Position::from_number(0), None);
        assert_eq!(Position::from_number(1), Some(Position::TopLeft));
        assert_eq!(Position::from_number(9), Some(Position::BottomRight));
        assert_eq!(Position::from_number(10), None);
    }

    #[test]
    fn test_parse_accepts_trimmed_digits() {
        assert_eq!(Position::parse("5"), Ok(Position::Center));
        assert_eq!(Position::parse("  7 \n"), Ok(Position::BottomLeft));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Position::parse("invalid data"),
            Err(MoveError::NotANumber("invalid data".to_string()))
        );
        assert_eq!(Position::parse("5x"), Err(MoveError::NotANumber("5x".to_string())));
        assert_eq!(Position::parse(""), Err(MoveError::NotANumber(String::new())));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(Position::parse("0"), Err(MoveError::OutOfRange(0)));
        assert_eq!(Position::parse("10"), Err(MoveError::OutOfRange(10)));
        assert_eq!(Position::parse("-3"), Err(MoveError::OutOfRange(-3)));
    }
}
