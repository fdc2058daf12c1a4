//! Fluent builder for constructing positions directly.
//!
//! Lets tests and callers set up arbitrary positions piece by piece,
//! bypassing normal play.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .moved_piece(Square(3, 4), Color::White, PieceKind::Rook)
//!     .build();
//! assert!(board.validate().is_ok());
//! ```

use super::{Board, Color, PieceKind, Square};

#[derive(Clone, Copy, Debug)]
struct Placement {
    square: Square,
    color: Color,
    kind: PieceKind,
    moved: bool,
}

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    placements: Vec<Placement>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            placements: Vec::new(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for (sq, id) in board.occupied() {
            let piece = board.piece(id);
            builder = builder.piece(sq, piece.color, piece.kind());
        }
        builder
    }

    /// Place an unmoved piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.put(square, color, kind, false)
    }

    /// Place a piece that counts as having moved (no castling rights, no
    /// pawn double step).
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.put(square, color, kind, true)
    }

    fn put(mut self, square: Square, color: Color, kind: PieceKind, moved: bool) -> Self {
        self.placements.retain(|p| p.square != square);
        self.placements.push(Placement {
            square,
            color,
            kind,
            moved,
        });
        self
    }

    /// Mark the piece on a square as having moved.
    #[must_use]
    pub fn mark_moved(mut self, square: Square) -> Self {
        for placement in &mut self.placements {
            if placement.square == square {
                placement.moved = true;
            }
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.placements.retain(|p| p.square != square);
        self
    }

    /// Build the board. King counts are not checked here; see
    /// `Board::validate`.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for placement in self.placements {
            let id = board.spawn(placement.square, placement.color, placement.kind);
            board.piece_mut(id).has_moved = placement.moved;
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        let standard = Board::new();
        assert_eq!(built.census(), standard.census());
        for sq in Square::all() {
            assert_eq!(
                built.piece_at(sq).map(|p| (p.color, p.kind())),
                standard.piece_at(sq).map(|p| (p.color, p.kind()))
            );
        }
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, PieceKind::King)
            .piece(Square(0, 4), Color::Black, PieceKind::King)
            .build();

        assert!(board.piece_at(Square(7, 4)).is_some());
        assert!(board.piece_at(Square(0, 4)).is_some());
        assert!(board.piece_at(Square(0, 0)).is_none());
        assert_eq!(board.pieces().count(), 2);
    }

    #[test]
    fn test_later_placement_wins() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, PieceKind::Knight)
            .piece(Square(4, 4), Color::Black, PieceKind::Queen)
            .build();

        let piece = board.piece_at(Square(4, 4)).unwrap();
        assert_eq!((piece.color, piece.kind()), (Color::Black, PieceKind::Queen));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn test_moved_flags() {
        let board = BoardBuilder::starting_position()
            .mark_moved(Square(7, 4))
            .moved_piece(Square(4, 4), Color::White, PieceKind::Pawn)
            .build();

        assert!(board.piece_at(Square(7, 4)).unwrap().has_moved);
        assert!(board.piece_at(Square(4, 4)).unwrap().has_moved);
        assert!(!board.piece_at(Square(7, 0)).unwrap().has_moved);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square(7, 0))
            .build();

        assert!(board.piece_at(Square(7, 0)).is_none());
        assert!(board.piece_at(Square(7, 1)).is_some());
    }
}
