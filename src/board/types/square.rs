//! Square coordinates and tint.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (rank, file).
///
/// Rank 0 is the top row as rendered (Black's back rank, algebraic rank 8);
/// file 0 is file `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Whether both coordinates lie on the 8x8 grid
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Row-major index, 0..64
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Step by (Δrank, Δfile); `None` when the result leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_rank: isize, d_file: isize) -> Option<Square> {
        let rank = self.0.checked_add_signed(d_rank)?;
        let file = self.1.checked_add_signed(d_file)?;
        Square::new(rank, file)
    }

    /// Cosmetic square color: (0, 0) is light, alternating from there.
    #[inline]
    #[must_use]
    pub const fn tint(self) -> Tint {
        if (self.0 + self.1) % 2 == 0 {
            Tint::Light
        } else {
            Tint::Dark
        }
    }

    /// Iterate all 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let file = match file_ch.to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank_ch {
            '1'..='8' => 8 - (rank_ch as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(rank, file))
    }
}

/// Alternating light/dark square color. Purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tint {
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_orientation() {
        assert_eq!("a8".parse::<Square>().unwrap(), Square(0, 0));
        assert_eq!("e1".parse::<Square>().unwrap(), Square(7, 4));
        assert_eq!("h1".parse::<Square>().unwrap(), Square(7, 7));
        assert_eq!(Square(6, 4).to_string(), "e2");
        assert_eq!(Square(1, 3).to_string(), "d7");
    }

    #[test]
    fn test_invalid_notation() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a1b".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(0, 0).offset(0, -1), None);
        assert_eq!(Square(7, 7).offset(1, 1), None);
        assert_eq!(Square(4, 4).offset(-2, 1), Some(Square(2, 5)));
    }

    #[test]
    fn test_try_from_bounds() {
        assert!(Square::try_from((8, 0)).is_err());
        assert!(Square::try_from((0, 8)).is_err());
        assert_eq!(Square::try_from((3, 5)), Ok(Square(3, 5)));
    }

    #[test]
    fn test_tint_alternates() {
        assert_eq!(Square(0, 0).tint(), Tint::Light);
        assert_eq!(Square(0, 1).tint(), Tint::Dark);
        assert_eq!(Square(1, 0).tint(), Tint::Dark);
        assert_eq!(Square(7, 7).tint(), Tint::Light);
    }
}
