//! Read-only views of a game for rendering and scoreboards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, MoveKind, PieceKind, Square, Tint};

use super::{Game, GameStatus};

/// A piece as seen from outside the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceView {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
    /// Only set for kings
    pub in_check: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquareView {
    pub square: Square,
    pub tint: Tint,
    pub piece: Option<PieceView>,
    pub selected: bool,
    /// Kind of the selected piece's move onto this square
    pub marker: Option<MoveKind>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerView {
    pub color: Color,
    pub captured: Vec<PieceKind>,
    pub material: u32,
    pub wins: u32,
    pub losses: u32,
}

/// Everything a presentation layer needs to redraw after a command.
///
/// `squares` is in row-major order from rank 0 (the black back rank).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub turn: Color,
    pub status: GameStatus,
    pub subject: Option<Color>,
    pub selected: Option<Square>,
    pub squares: Vec<SquareView>,
    pub players: [PlayerView; 2],
}

impl GameSnapshot {
    #[must_use]
    pub fn capture(game: &Game) -> Self {
        let board = game.board();
        let squares = Square::all()
            .map(|square| {
                let cell = board.cell(square);
                SquareView {
                    square,
                    tint: square.tint(),
                    piece: board.piece_at(square).map(|p| PieceView {
                        color: p.color,
                        kind: p.kind(),
                        has_moved: p.has_moved,
                        in_check: p.in_check(),
                    }),
                    selected: cell.is_selected(),
                    marker: cell.marker(),
                }
            })
            .collect();

        let player_view = |color: Color| {
            let player = game.player(color);
            PlayerView {
                color,
                captured: player.captured_kinds(board),
                material: player.material(board),
                wins: player.wins(),
                losses: player.losses(),
            }
        };

        GameSnapshot {
            turn: game.turn(),
            status: game.status(),
            subject: game.subject(),
            selected: game.selected(),
            squares,
            players: [player_view(Color::White), player_view(Color::Black)],
        }
    }

    #[must_use]
    pub fn square(&self, sq: Square) -> Option<&SquareView> {
        sq.is_on_board().then(|| &self.squares[sq.as_index()])
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &PlayerView {
        &self.players[color.index()]
    }
}

impl Game {
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_snapshot() {
        let snap = Game::new().snapshot();
        assert_eq!(snap.squares.len(), 64);
        assert_eq!(snap.turn, Color::White);
        assert_eq!(snap.status, GameStatus::InProgress);

        let e1 = snap.square(Square(7, 4)).unwrap();
        assert_eq!(e1.piece.map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(e1.piece.and_then(|p| p.in_check), Some(false));
        assert_eq!(snap.square(Square(0, 0)).unwrap().tint, Tint::Light);
        assert_eq!(snap.player(Color::Black).material, 0);
    }

    #[test]
    fn test_snapshot_reflects_selection() {
        let mut game = Game::new();
        game.select(Square(7, 1)).unwrap();
        let snap = game.snapshot();

        assert_eq!(snap.selected, Some(Square(7, 1)));
        assert!(snap.square(Square(7, 1)).unwrap().selected);
        let marked: Vec<Square> = snap
            .squares
            .iter()
            .filter(|v| v.marker.is_some())
            .map(|v| v.square)
            .collect();
        assert_eq!(marked, vec![Square(5, 0), Square(5, 2)]);
    }
}
