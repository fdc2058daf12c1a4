//! Castling geometry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// File the king starts on; castling is only generated from here.
pub(crate) const KING_START_FILE: usize = 4;

/// Which rook the king castles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Corner file the rook starts on
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook lands on
    #[inline]
    #[must_use]
    pub const fn rook_destination_file(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// File the king lands on
    #[inline]
    #[must_use]
    pub const fn king_destination_file(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// File the king passes over on its way
    #[inline]
    #[must_use]
    pub const fn king_transit_file(self) -> usize {
        self.rook_destination_file()
    }

    /// Side implied by a castling king's destination file
    #[must_use]
    pub const fn from_king_destination(file: usize) -> Option<CastleSide> {
        match file {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// Files strictly between the king's start file and the rook's corner
    pub fn between_files(self) -> std::ops::Range<usize> {
        match self {
            CastleSide::Kingside => KING_START_FILE + 1..self.rook_file(),
            CastleSide::Queenside => self.rook_file() + 1..KING_START_FILE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_files() {
        assert_eq!(CastleSide::Kingside.between_files().collect::<Vec<_>>(), vec![5, 6]);
        assert_eq!(
            CastleSide::Queenside.between_files().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_destination_lookup() {
        assert_eq!(CastleSide::from_king_destination(6), Some(CastleSide::Kingside));
        assert_eq!(CastleSide::from_king_destination(2), Some(CastleSide::Queenside));
        assert_eq!(CastleSide::from_king_destination(4), None);
    }
}
