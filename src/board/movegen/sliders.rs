use super::super::{Board, MoveList, Piece, Square};
use super::{Delta, ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL, SLIDING_RANGE};

impl Board {
    fn generate_slider_moves(
        &self,
        from: Square,
        piece: &Piece,
        directions: &[Delta],
        moves: &mut MoveList,
    ) {
        for &delta in directions {
            self.walk_ray(from, piece, delta, SLIDING_RANGE, moves);
        }
    }

    pub(crate) fn generate_queen_moves(&self, from: Square, piece: &Piece, moves: &mut MoveList) {
        self.generate_slider_moves(from, piece, &ALL_DIRECTIONS, moves);
    }

    pub(crate) fn generate_rook_moves(&self, from: Square, piece: &Piece, moves: &mut MoveList) {
        self.generate_slider_moves(from, piece, &ORTHOGONAL, moves);
    }

    pub(crate) fn generate_bishop_moves(&self, from: Square, piece: &Piece, moves: &mut MoveList) {
        self.generate_slider_moves(from, piece, &DIAGONAL, moves);
    }
}
