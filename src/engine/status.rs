//! Game status and command rejections.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Square};

/// Lifecycle of a game. Every state except `InProgress` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    InProgress,
    Checkmate,
    Stalemate,
    Resign,
    Timeout,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Resign => "resignation",
            GameStatus::Timeout => "timeout",
        };
        f.write_str(name)
    }
}

/// Why a command was refused. A refused command leaves the game untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The game already ended
    GameOver { status: GameStatus },
    /// The square lies outside the 8x8 grid
    OffBoard { square: Square },
    /// `move_to` without a prior `select`
    NothingSelected,
    /// The selected square holds no piece
    EmptySquare { square: Square },
    /// The selected piece belongs to the side not on move
    OutOfTurn { color: Color },
    /// The destination is not among the selected piece's legal moves
    IllegalDestination { from: Square, to: Square },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::GameOver { status } => write!(f, "Game is over ({status})"),
            Rejection::OffBoard { square } => {
                write!(f, "Square ({}, {}) is off the board", square.rank(), square.file())
            }
            Rejection::NothingSelected => write!(f, "No square selected"),
            Rejection::EmptySquare { square } => write!(f, "No piece on {square}"),
            Rejection::OutOfTurn { color } => write!(f, "It is not {color}'s turn"),
            Rejection::IllegalDestination { from, to } => {
                write!(f, "Illegal move {from} -> {to}")
            }
        }
    }
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Checkmate.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(GameStatus::Resign.is_terminal());
        assert!(GameStatus::Timeout.is_terminal());
    }

    #[test]
    fn test_rejection_messages() {
        let err = Rejection::IllegalDestination {
            from: Square(6, 4),
            to: Square(3, 4),
        };
        assert!(err.to_string().contains("e2"));
        assert!(err.to_string().contains("e5"));

        let err = Rejection::OutOfTurn {
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));

        let err = Rejection::GameOver {
            status: GameStatus::Checkmate,
        };
        assert!(err.to_string().contains("checkmate"));

        let err = Rejection::OffBoard {
            square: Square(7, 8),
        };
        assert_eq!(err.to_string(), "Square (7, 8) is off the board");
    }
}
