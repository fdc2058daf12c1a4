use super::super::{Board, MoveKind, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, piece: &Piece, moves: &mut MoveList) {
        let start = moves.len();
        let dir = piece.color.pawn_direction();
        let range = if piece.has_moved { 1 } else { 2 };

        let mut forward = MoveList::new();
        self.walk_ray(from, piece, (dir, 0), range, &mut forward);
        // No capturing straight ahead: an occupied end square is dropped.
        if forward.last().is_some_and(|m| m.kind != MoveKind::Normal) {
            forward.pop();
        }
        moves.extend(forward);

        for side in [-1, 1] {
            let mut diagonal = MoveList::new();
            self.walk_ray(from, piece, (dir, side), 1, &mut diagonal);
            moves.extend(diagonal.into_iter().filter(|m| m.kind != MoveKind::Normal));
        }

        let promotion_rank = piece.color.promotion_rank();
        for m in &mut moves[start..] {
            if m.to.rank() == promotion_rank && m.kind != MoveKind::Check {
                m.kind = MoveKind::Promotion;
            }
        }
    }
}
