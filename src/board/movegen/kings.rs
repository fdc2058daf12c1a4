use super::super::{
    Board, CandidateMove, CastleSide, MoveKind, MoveList, Piece, PieceKind, Square,
    KING_START_FILE,
};
use super::ALL_DIRECTIONS;

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, piece: &Piece, moves: &mut MoveList) {
        self.generate_castling_moves(from, piece, moves);
        for delta in ALL_DIRECTIONS {
            self.walk_ray(from, piece, delta, 1, moves);
        }
    }

    /// Castling is offered when the king is unmoved and not in check, the
    /// corner rook is unmoved, and every square between them is empty.
    ///
    /// Attacks on the transit and landing squares are not considered here.
    fn generate_castling_moves(&self, from: Square, king: &Piece, moves: &mut MoveList) {
        if king.has_moved || king.in_check() == Some(true) || from.file() != KING_START_FILE {
            return;
        }

        let rank = from.rank();
        for side in CastleSide::BOTH {
            let rook_ready = self
                .piece_at(Square(rank, side.rook_file()))
                .is_some_and(|rook| {
                    rook.kind() == PieceKind::Rook && rook.color == king.color && !rook.has_moved
                });
            if !rook_ready {
                continue;
            }

            let path_clear = side
                .between_files()
                .all(|file| self.is_empty(Square(rank, file)));
            if path_clear {
                moves.push(CandidateMove::new(
                    Square(rank, side.king_destination_file()),
                    MoveKind::Castle,
                ));
            }
        }
    }
}
