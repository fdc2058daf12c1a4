//! Temporary moves used by the legality filter.
//!
//! A probe moves a piece without touching `has_moved`, capture state or
//! player bookkeeping, and is always undone. `Probe` is the RAII form: the
//! board is restored when the guard drops, whatever path the caller takes.

use std::ops::Deref;

use super::{Board, PieceId, Square};

/// Everything needed to reverse a probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) moved: PieceId,
    pub(crate) displaced: Option<PieceId>,
}

impl Board {
    /// Move the piece on `from` to `to`, keeping whatever stood on `to` so it
    /// can be put back. Returns `None` if `from` is empty.
    pub(crate) fn make_probe(&mut self, from: Square, to: Square) -> Option<UndoRecord> {
        let moved = self.occupant(from)?;
        let displaced = self.transfer(from, to);
        Some(UndoRecord {
            from,
            to,
            moved,
            displaced,
        })
    }

    pub(crate) fn unmake_probe(&mut self, undo: UndoRecord) {
        let from = undo.from.as_index();
        let to = undo.to.as_index();

        self.cells[from].occupant = Some(undo.moved);
        self.pieces[undo.moved.index()].square = Some(undo.from);

        self.cells[to].occupant = undo.displaced;
        if let Some(id) = undo.displaced {
            self.pieces[id.index()].square = Some(undo.to);
        }
    }

    /// Start a probe of `from` -> `to`. The move is undone when the returned
    /// guard is dropped.
    pub fn probe(&mut self, from: Square, to: Square) -> Option<Probe<'_>> {
        let undo = self.make_probe(from, to)?;
        Some(Probe {
            board: self,
            undo: Some(undo),
        })
    }
}

/// Guard over a board with one temporary move applied.
pub struct Probe<'a> {
    board: &'a mut Board,
    undo: Option<UndoRecord>,
}

impl Probe<'_> {
    /// The piece that was standing on the destination, if any
    #[must_use]
    pub fn displaced(&self) -> Option<PieceId> {
        self.undo.and_then(|undo| undo.displaced)
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.board.unmake_probe(undo);
        }
    }
}
