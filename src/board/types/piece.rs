//! Piece, role and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// The six chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All piece kinds in declaration order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        }
    }

    /// Material value credited to the capturing player.
    ///
    /// Pawn=100, Knight=300, Bishop=300, Rook=500, Queen=900, King=0.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    /// Parse a piece kind from a letter (k, q, r, b, n, p), case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    /// Unicode chess glyph for a piece of this kind and color
    #[must_use]
    pub const fn glyph(self, color: Color) -> char {
        match (color, self) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        };
        f.write_str(name)
    }
}

/// Side colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank index for this color (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank step a pawn of this color advances by (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Pawn starting rank index (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Rank a pawn of this color promotes on (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Stable handle into a board's piece arena.
///
/// Handles stay valid for the lifetime of a game; `Board::reset` issues a
/// fresh arena and invalidates all previously handed out handles.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kind-specific piece data. Only the king carries extra state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    King { in_check: bool },
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Role {
    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            Role::King { .. } => PieceKind::King,
            Role::Queen => PieceKind::Queen,
            Role::Rook => PieceKind::Rook,
            Role::Bishop => PieceKind::Bishop,
            Role::Knight => PieceKind::Knight,
            Role::Pawn => PieceKind::Pawn,
        }
    }
}

impl From<PieceKind> for Role {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::King => Role::King { in_check: false },
            PieceKind::Queen => Role::Queen,
            PieceKind::Rook => Role::Rook,
            PieceKind::Bishop => Role::Bishop,
            PieceKind::Knight => Role::Knight,
            PieceKind::Pawn => Role::Pawn,
        }
    }
}

/// A piece instance owned by the board arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub has_moved: bool,
    pub captured: bool,
    /// Square currently holding this piece; `None` once captured or while
    /// displaced by a probe.
    pub(crate) square: Option<Square>,
}

impl Piece {
    #[must_use]
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            role: Role::from(kind),
            has_moved: false,
            captured: false,
            square: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.role.kind()
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.kind().value()
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Option<Square> {
        self.square
    }

    /// `Some(in_check)` for kings, `None` for every other kind
    #[inline]
    #[must_use]
    pub const fn in_check(&self) -> Option<bool> {
        match self.role {
            Role::King { in_check } => Some(in_check),
            _ => None,
        }
    }

    /// Set the check flag. No-op for non-king pieces.
    pub(crate) fn set_in_check(&mut self, value: bool) {
        if let Role::King { in_check } = &mut self.role {
            *in_check = value;
        }
    }

    #[inline]
    #[must_use]
    pub const fn glyph(&self) -> char {
        self.kind().glyph(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
