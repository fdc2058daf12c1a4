//! Candidate move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Tag attached to every generated destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    #[default]
    Normal,
    Capture,
    /// The destination holds the enemy king.
    Check,
    Castle,
    Promotion,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveKind::Normal => "normal",
            MoveKind::Capture => "capture",
            MoveKind::Check => "check",
            MoveKind::Castle => "castle",
            MoveKind::Promotion => "promotion",
        };
        f.write_str(name)
    }
}

/// A destination reachable from some origin, with its move kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateMove {
    pub to: Square,
    pub kind: MoveKind,
}

impl CandidateMove {
    #[inline]
    #[must_use]
    pub const fn new(to: Square, kind: MoveKind) -> Self {
        CandidateMove { to, kind }
    }
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Normal => write!(f, "{}", self.to),
            kind => write!(f, "{} ({kind})", self.to),
        }
    }
}

/// Candidate moves of a single piece.
pub type MoveList = Vec<CandidateMove>;
