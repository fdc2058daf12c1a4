//! Board representation and pseudo-legal move generation.
//!
//! The board is a grid of 64 cells holding handles into a piece arena.
//! Move generation walks rays from an origin square and tags each
//! destination with a `MoveKind`; it never looks at whose turn it is.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, MoveKind, Square};
//!
//! let board = Board::new();
//! let knight = board.pseudo_moves(Square(7, 6)); // g1
//! assert_eq!(knight.len(), 2);
//! assert!(knight.iter().all(|m| m.kind == MoveKind::Normal));
//! ```

mod builder;
mod display;
mod error;
pub mod movegen;
pub mod prelude;
mod probe;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{PositionError, SquareError};
pub use movegen::{generate, MoveTable};
pub use probe::{Probe, UndoRecord};
pub use state::{Board, Cell};
pub use types::{
    CandidateMove, CastleSide, Color, MoveKind, MoveList, Piece, PieceId, PieceKind, Role, Square,
    Tint,
};

pub(crate) use types::KING_START_FILE;
