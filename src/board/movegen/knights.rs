use super::super::{Board, MoveList, Piece, Square};
use super::KNIGHT_JUMPS;

impl Board {
    /// Each jump is a single-step ray, so knights pass over any piece.
    pub(crate) fn generate_knight_moves(&self, from: Square, piece: &Piece, moves: &mut MoveList) {
        for delta in KNIGHT_JUMPS {
            self.walk_ray(from, piece, delta, 1, moves);
        }
    }
}
