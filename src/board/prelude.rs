//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, CandidateMove, Color, MoveKind, Piece, PieceKind, PositionError, Square,
    SquareError,
};
pub use crate::engine::{Game, GameConfig, GameStatus, Rejection, SharedGame};
