//! Pseudo-legal move generation.
//!
//! Every kind except the pawn is described by a set of ray directions and a
//! range; all of them share `Board::walk_ray`. Generation reads the board only
//! and ignores whose turn it is beyond the moving piece's own color.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, CandidateMove, Color, MoveKind, MoveList, Piece, PieceId, PieceKind, Square};

/// (Δrank, Δfile) step
pub(crate) type Delta = (isize, isize);

pub(crate) const ORTHOGONAL: [Delta; 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [Delta; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ALL_DIRECTIONS: [Delta; 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];
pub(crate) const KNIGHT_JUMPS: [Delta; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Range of a sliding piece's ray
pub(crate) const SLIDING_RANGE: usize = 8;

type Generator = fn(&Board, Square, &Piece, &mut MoveList);

/// Move rules by kind, indexed by `PieceKind::index`.
const GENERATORS: [Generator; 6] = [
    Board::generate_king_moves,
    Board::generate_queen_moves,
    Board::generate_rook_moves,
    Board::generate_bishop_moves,
    Board::generate_knight_moves,
    Board::generate_pawn_moves,
];

impl Board {
    /// Step from `origin` along `delta` up to `range` squares.
    ///
    /// Empty squares are emitted as `Normal` and the walk continues; the first
    /// enemy piece is emitted as `Capture` (or `Check` for a king) and ends the
    /// walk; a friendly piece or the board edge ends it without emitting.
    pub(crate) fn walk_ray(
        &self,
        origin: Square,
        mover: &Piece,
        delta: Delta,
        range: usize,
        moves: &mut MoveList,
    ) {
        let mut current = origin;
        for _ in 0..range {
            let Some(next) = current.offset(delta.0, delta.1) else {
                return;
            };
            current = next;

            match self.piece_at(next) {
                None => moves.push(CandidateMove::new(next, MoveKind::Normal)),
                Some(target) if target.color == mover.color => return,
                Some(target) => {
                    let kind = if target.kind() == PieceKind::King {
                        MoveKind::Check
                    } else {
                        MoveKind::Capture
                    };
                    moves.push(CandidateMove::new(next, kind));
                    return;
                }
            }
        }
    }

    /// Pseudo-legal moves of the piece standing on `origin`.
    ///
    /// Returns an empty list for an empty square.
    #[must_use]
    pub fn pseudo_moves(&self, origin: Square) -> MoveList {
        let mut moves = MoveList::new();
        if let Some(piece) = self.piece_at(origin) {
            GENERATORS[piece.kind().index()](self, origin, piece, &mut moves);
        }
        moves
    }

    /// True if any piece of `attacker`'s color has a pseudo-legal move onto
    /// the opposing king.
    #[must_use]
    pub fn gives_check(&self, attacker: Color) -> bool {
        self.occupied()
            .filter(|&(_, id)| self.piece(id).color == attacker)
            .any(|(sq, _)| {
                self.pseudo_moves(sq)
                    .iter()
                    .any(|m| m.kind == MoveKind::Check)
            })
    }
}

/// Pseudo-legal moves of the piece on `origin`.
#[must_use]
pub fn generate(board: &Board, origin: Square) -> MoveList {
    board.pseudo_moves(origin)
}

/// Per-piece move lists, indexed by arena handle.
///
/// Pieces off the board (captured) always hold an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveTable {
    lists: Vec<MoveList>,
}

impl MoveTable {
    /// Pseudo-legal moves for every piece on the board
    #[must_use]
    pub fn generate(board: &Board) -> Self {
        let mut lists = vec![MoveList::new(); board.pieces.len()];
        for (sq, id) in board.occupied() {
            lists[id.index()] = board.pseudo_moves(sq);
        }
        MoveTable { lists }
    }

    #[must_use]
    pub fn get(&self, id: PieceId) -> &[CandidateMove] {
        self.lists.get(id.index()).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn set(&mut self, id: PieceId, moves: MoveList) {
        if let Some(slot) = self.lists.get_mut(id.index()) {
            *slot = moves;
        }
    }

    /// Number of moves across all pieces
    #[must_use]
    pub fn total(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }
}
