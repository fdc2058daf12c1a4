//! Check detection and the legality filter.
//!
//! Each pseudo-legal candidate of the side to move is tried on the live board
//! through a `Probe`, every enemy piece is regenerated against the resulting
//! position, and the candidate survives only if no enemy move lands on the
//! king. The probe guard restores the board before the next candidate.

use crate::board::{
    Board, CandidateMove, CastleSide, Color, MoveKind, MoveList, MoveTable, PieceId, Square,
};

use super::GameConfig;

/// Is `color`'s king attacked by any enemy piece right now?
#[must_use]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board.gives_check(color.opponent())
}

/// Narrow `side`'s lists in `table` to legal moves and refresh its king's
/// check flag.
///
/// `table` must hold pseudo-legal moves for the current position. Returns the
/// king of `side` when no piece of `side` has a legal move, leaving checkmate
/// versus stalemate to the caller; returns `None` while the game goes on (or
/// if `side` has no king).
pub fn filter_legal(
    board: &mut Board,
    table: &mut MoveTable,
    side: Color,
    config: &GameConfig,
) -> Option<PieceId> {
    let king = board.find_king(side)?;

    let attacked = board
        .occupied_by(side.opponent())
        .iter()
        .any(|&(_, id)| table.get(id).iter().any(|m| m.kind == MoveKind::Check));
    board.piece_mut(king).set_in_check(attacked);
    if attacked {
        log_event!(debug, "{side} king is in check");
    }

    // Castling availability reads the flag just set.
    if let Some(king_sq) = board.piece(king).square() {
        table.set(king, board.pseudo_moves(king_sq));
    }

    let mut any_legal = false;
    for (origin, id) in board.occupied_by(side) {
        let candidates = table.get(id).to_vec();
        let legal: MoveList = candidates
            .into_iter()
            .filter(|&candidate| is_legal(board, side, origin, candidate, config))
            .collect();
        any_legal |= !legal.is_empty();
        table.set(id, legal);
    }

    if any_legal {
        None
    } else {
        Some(king)
    }
}

fn is_legal(
    board: &mut Board,
    side: Color,
    origin: Square,
    candidate: CandidateMove,
    config: &GameConfig,
) -> bool {
    if candidate.kind == MoveKind::Castle && config.strict_castling {
        if let Some(castle) = CastleSide::from_king_destination(candidate.to.file()) {
            let transit = Square(origin.rank(), castle.king_transit_file());
            if !leaves_king_safe(board, side, origin, transit) {
                return false;
            }
        }
    }
    leaves_king_safe(board, side, origin, candidate.to)
}

/// Try `origin -> to` and report whether `side`'s king is unattacked
/// afterwards. The board is restored before returning.
fn leaves_king_safe(board: &mut Board, side: Color, origin: Square, to: Square) -> bool {
    match board.probe(origin, to) {
        Some(probe) => !probe.gives_check(side.opponent()),
        None => false,
    }
}
