use once_cell::sync::Lazy;

use super::error::PositionError;
use super::{Color, MoveKind, Piece, PieceId, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard opening layout, indexed by `Square::as_index`.
static STARTING_LAYOUT: Lazy<[Option<(Color, PieceKind)>; 64]> = Lazy::new(|| {
    let mut layout = [None; 64];
    for color in Color::BOTH {
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            layout[Square(color.back_rank(), file).as_index()] = Some((color, kind));
            layout[Square(color.pawn_start_rank(), file).as_index()] =
                Some((color, PieceKind::Pawn));
        }
    }
    layout
});

/// One of the 64 board squares.
///
/// `selected` and `marker` are transient selection state, rebuilt on every
/// `select` and cleared after every ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Cell {
    pub(crate) occupant: Option<PieceId>,
    pub(crate) selected: bool,
    pub(crate) marker: Option<MoveKind>,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[inline]
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// True when the selected piece may move here
    #[inline]
    #[must_use]
    pub const fn is_legal(&self) -> bool {
        self.marker.is_some()
    }

    /// Move kind of the selected piece's move to this square, if legal
    #[inline]
    #[must_use]
    pub const fn marker(&self) -> Option<MoveKind> {
        self.marker
    }
}

/// An 8x8 board owning every piece instance through an arena.
///
/// Cells hold `PieceId` handles; the arena keeps captured pieces alive so
/// players can reference them after they leave the board.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [Cell; 64],
    pub(crate) pieces: Vec<Piece>,
}

impl Board {
    /// Board in the standard opening position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Board with no pieces
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [Cell::default(); 64],
            pieces: Vec::with_capacity(32),
        }
    }

    /// Restore the standard opening position with a fresh piece arena.
    pub fn reset(&mut self) {
        self.cells = [Cell::default(); 64];
        self.pieces.clear();
        for sq in Square::all() {
            if let Some((color, kind)) = STARTING_LAYOUT[sq.as_index()] {
                self.spawn(sq, color, kind);
            }
        }
    }

    /// Place a new piece on an empty square.
    pub fn place(
        &mut self,
        sq: Square,
        color: Color,
        kind: PieceKind,
    ) -> Result<PieceId, PositionError> {
        if self.cells[sq.as_index()].occupant.is_some() {
            return Err(PositionError::SquareOccupied { square: sq });
        }
        Ok(self.spawn(sq, color, kind))
    }

    pub(crate) fn spawn(&mut self, sq: Square, color: Color, kind: PieceKind) -> PieceId {
        // Arena never exceeds 64 live pieces, one per square.
        let id = PieceId(self.pieces.len() as u8);
        let mut piece = Piece::new(color, kind);
        piece.square = Some(sq);
        self.pieces.push(piece);
        self.cells[sq.as_index()].occupant = Some(id);
        id
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> &Cell {
        &self.cells[sq.as_index()]
    }

    #[inline]
    #[must_use]
    pub fn occupant(&self, sq: Square) -> Option<PieceId> {
        self.cells[sq.as_index()].occupant
    }

    #[inline]
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.occupant(sq).map(|id| self.piece(id))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.occupant(sq).is_none()
    }

    /// Every piece in the arena, captured ones included
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(idx, piece)| (PieceId(idx as u8), piece))
    }

    /// Occupied squares in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        Square::all().filter_map(move |sq| self.occupant(sq).map(|id| (sq, id)))
    }

    /// Occupied squares holding pieces of `color`, collected so the caller
    /// may mutate the board while walking them
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Vec<(Square, PieceId)> {
        self.occupied()
            .filter(|&(_, id)| self.piece(id).color == color)
            .collect()
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<PieceId> {
        self.occupied()
            .map(|(_, id)| id)
            .find(|&id| {
                let piece = self.piece(id);
                piece.color == color && piece.kind() == PieceKind::King
            })
    }

    /// Check that each color has exactly one king on the board.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::BOTH {
            let kings = self
                .occupied()
                .filter(|&(_, id)| {
                    let piece = self.piece(id);
                    piece.color == color && piece.kind() == PieceKind::King
                })
                .count();
            match kings {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                _ => return Err(PositionError::DuplicateKing { color }),
            }
        }
        Ok(())
    }

    /// Count of on-board pieces per color and kind
    #[must_use]
    pub fn census(&self) -> [[u8; 6]; 2] {
        let mut counts = [[0u8; 6]; 2];
        for (_, id) in self.occupied() {
            let piece = self.piece(id);
            counts[piece.color.index()][piece.kind().index()] += 1;
        }
        counts
    }

    /// Move whatever occupies `from` onto `to`, returning the piece that was
    /// displaced from `to`. The displaced piece is detached (no square) but
    /// not marked captured.
    pub(crate) fn transfer(&mut self, from: Square, to: Square) -> Option<PieceId> {
        let moving = self.cells[from.as_index()].occupant.take();
        let displaced = std::mem::replace(&mut self.cells[to.as_index()].occupant, moving);
        if let Some(id) = displaced {
            self.pieces[id.index()].square = None;
        }
        if let Some(id) = moving {
            self.pieces[id.index()].square = Some(to);
        }
        displaced
    }

    /// Remove the piece on `sq` from play.
    pub(crate) fn capture(&mut self, sq: Square) -> Option<PieceId> {
        let id = self.cells[sq.as_index()].occupant.take()?;
        let piece = &mut self.pieces[id.index()];
        piece.square = None;
        piece.captured = true;
        Some(id)
    }

    pub(crate) fn clear_markers(&mut self) {
        for cell in &mut self.cells {
            cell.marker = None;
        }
    }

    pub(crate) fn set_marker(&mut self, sq: Square, kind: MoveKind) {
        self.cells[sq.as_index()].marker = Some(kind);
    }

    pub(crate) fn set_selected(&mut self, sq: Square, selected: bool) {
        self.cells[sq.as_index()].selected = selected;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
