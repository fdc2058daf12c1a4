//! Core board types.
//!
//! - `PieceKind`, `Role`, `Piece` and `Color` - piece model
//! - `PieceId` - arena handle for a piece instance
//! - `Square` and `Tint` - coordinates
//! - `MoveKind`, `CandidateMove` and `MoveList` - generated moves
//! - `CastleSide` - castling geometry

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastleSide;
pub(crate) use castling::KING_START_FILE;
pub use moves::{CandidateMove, MoveKind, MoveList};
pub use piece::{Color, Piece, PieceId, PieceKind, Role};
pub use square::{Square, Tint};
