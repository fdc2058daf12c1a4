//! Per-side bookkeeping: captured pieces and the running score.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, PieceId, PieceKind};

/// One side of the game.
///
/// Captured pieces are kept as arena handles in capture order; the pieces
/// themselves stay in the board's arena.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    color: Color,
    captured: Vec<PieceId>,
    wins: u32,
    losses: u32,
}

impl Player {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Player {
            color,
            captured: Vec::new(),
            wins: 0,
            losses: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Enemy pieces taken by this side, in capture order
    #[must_use]
    pub fn captured(&self) -> &[PieceId] {
        &self.captured
    }

    #[inline]
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    #[inline]
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Sum of the values of every captured piece.
    #[must_use]
    pub fn material(&self, board: &Board) -> u32 {
        self.captured.iter().map(|&id| board.piece(id).value()).sum()
    }

    #[must_use]
    pub fn captured_kinds(&self, board: &Board) -> Vec<PieceKind> {
        self.captured.iter().map(|&id| board.piece(id).kind()).collect()
    }

    pub(crate) fn record_capture(&mut self, id: PieceId) {
        self.captured.push(id);
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn record_loss(&mut self) {
        self.losses += 1;
    }

    /// Forget captures for a new game. Win/loss counters are kept.
    pub(crate) fn clear_captures(&mut self) {
        self.captured.clear();
    }
}
