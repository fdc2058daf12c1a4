//! Error types for board construction and coordinates.

use std::fmt;

use super::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions that cannot host a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// No king of this color on the board
    MissingKing { color: Color },
    /// More than one king of this color on the board
    DuplicateKing { color: Color },
    /// Builder placed two pieces on one square
    SquareOccupied { square: Square },
    /// The side not on move is in check, so its king could be taken
    OpponentInCheck { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => write!(f, "{color} has no king"),
            PositionError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king")
            }
            PositionError::SquareOccupied { square } => {
                write!(f, "Square {square} is already occupied")
            }
            PositionError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but not on move")
            }
        }
    }
}

impl std::error::Error for PositionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_rank_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_file_bounds() {
        let err = SquareError::FileOutOfBounds { file: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_position_error_names_color() {
        let err = PositionError::MissingKing {
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_position_error_names_square() {
        let err = PositionError::SquareOccupied {
            square: Square(7, 4),
        };
        assert!(err.to_string().contains("e1"));
    }
}
