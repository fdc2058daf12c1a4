//! Game controller: turn order, selection, move execution and game end.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Board, CandidateMove, CastleSide, Color, MoveKind, MoveTable, Piece, PieceKind,
    PositionError, Square,
};

use super::legality::{filter_legal, is_in_check};
use super::{GameConfig, GameStatus, Player, Rejection};

/// A move accepted by `Game::move_to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayedMove {
    pub color: Color,
    pub piece: PieceKind,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    /// Kind of the enemy piece removed by this move
    pub captured: Option<PieceKind>,
}

impl fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.captured.is_some() { 'x' } else { '-' };
        write!(
            f,
            "{} {}{}{}{}",
            self.color,
            self.piece.to_char().to_ascii_uppercase(),
            self.from,
            sep,
            self.to
        )?;
        match self.kind {
            MoveKind::Castle => write!(f, " (castle)"),
            MoveKind::Promotion => write!(f, " (promotion)"),
            _ => Ok(()),
        }
    }
}

/// A single game between two players sharing one board.
///
/// All commands are synchronous. Move generation and the legality filter run
/// to completion inside `move_to` (and the constructors), after which
/// `moves` holds legal lists for the side to move.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    turn: Color,
    status: GameStatus,
    subject: Option<Color>,
    selected: Option<Square>,
    moves: MoveTable,
    history: Vec<PlayedMove>,
    config: GameConfig,
}

impl Game {
    /// New game from the standard opening position
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        let mut game = Game {
            board: Board::new(),
            players: [Player::new(Color::White), Player::new(Color::Black)],
            turn: Color::White,
            status: GameStatus::InProgress,
            subject: None,
            selected: None,
            moves: MoveTable::default(),
            history: Vec::new(),
            config,
        };
        game.refresh();
        game
    }

    /// Start a game from an arbitrary position with `turn` to move.
    ///
    /// The position needs exactly one king per color, and the side not on
    /// move must not be in check. The position may already be terminal.
    pub fn from_position(
        mut board: Board,
        turn: Color,
        config: GameConfig,
    ) -> Result<Self, PositionError> {
        board.validate()?;
        if is_in_check(&board, turn.opponent()) {
            return Err(PositionError::OpponentInCheck {
                color: turn.opponent(),
            });
        }
        board.clear_markers();
        for sq in Square::all() {
            board.set_selected(sq, false);
        }

        let mut game = Game {
            board,
            players: [Player::new(Color::White), Player::new(Color::Black)],
            turn,
            status: GameStatus::InProgress,
            subject: None,
            selected: None,
            moves: MoveTable::default(),
            history: Vec::new(),
            config,
        };
        game.refresh();
        Ok(game)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side the terminal status refers to: the mating side for checkmate,
    /// the stalemated side for stalemate, the side that resigned or ran out
    /// of time otherwise. `None` while the game is in progress.
    #[inline]
    #[must_use]
    pub fn subject(&self) -> Option<Color> {
        self.subject
    }

    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Every accepted move since the last reset
    #[must_use]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Captured material of `color`
    #[must_use]
    pub fn material(&self, color: Color) -> u32 {
        self.player(color).material(&self.board)
    }

    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Moves of the piece on `sq`.
    ///
    /// Lists of the side to move are legal; pieces of the other side report
    /// their pseudo-legal moves from the last generation pass. Off-board
    /// squares have none.
    #[must_use]
    pub fn legal_moves(&self, sq: Square) -> &[CandidateMove] {
        if !sq.is_on_board() {
            return &[];
        }
        match self.board.occupant(sq) {
            Some(id) => self.moves.get(id),
            None => &[],
        }
    }

    /// All legal moves of the side to move as `(origin, move)` pairs
    #[must_use]
    pub fn legal_destinations(&self) -> Vec<(Square, CandidateMove)> {
        self.board
            .occupied_by(self.turn)
            .into_iter()
            .flat_map(|(sq, id)| self.moves.get(id).iter().map(move |&m| (sq, m)))
            .collect()
    }

    /// Select `sq` and mark its piece's destinations on the board.
    ///
    /// Selection is allowed for either color. Returns the selected piece, or
    /// `None` for an empty square.
    pub fn select(&mut self, sq: Square) -> Result<Option<Piece>, Rejection> {
        self.ensure_in_progress()?;
        self.ensure_on_board(sq)?;
        self.clear_selection();

        self.selected = Some(sq);
        self.board.set_selected(sq, true);
        self.mark_selection();

        let piece = self.board.piece_at(sq).copied();
        log_event!(trace, "selected {sq}: {:?}", piece.map(|p| p.glyph()));
        Ok(piece)
    }

    /// Move the selected piece to `to`.
    ///
    /// On rejection the game is left untouched.
    pub fn move_to(&mut self, to: Square) -> Result<PlayedMove, Rejection> {
        self.ensure_in_progress()?;
        self.ensure_on_board(to)?;
        let from = self
            .selected
            .ok_or_else(|| self.reject(Rejection::NothingSelected))?;
        let id = self
            .board
            .occupant(from)
            .ok_or_else(|| self.reject(Rejection::EmptySquare { square: from }))?;

        let mover = *self.board.piece(id);
        if mover.color != self.turn {
            return Err(self.reject(Rejection::OutOfTurn {
                color: mover.color,
            }));
        }
        let candidate = self
            .moves
            .get(id)
            .iter()
            .copied()
            .find(|m| m.to == to)
            .ok_or_else(|| self.reject(Rejection::IllegalDestination { from, to }))?;

        self.board.piece_mut(id).has_moved = true;

        let captured = match self.board.capture(to) {
            Some(victim) => {
                self.players[self.turn.index()].record_capture(victim);
                Some(self.board.piece(victim).kind())
            }
            None => None,
        };

        if candidate.kind == MoveKind::Castle {
            if let Some(side) = CastleSide::from_king_destination(to.file()) {
                self.castle_rook(from.rank(), side);
            }
        }

        self.board.transfer(from, to);
        self.clear_selection();
        if let Some(king) = self.board.find_king(self.turn) {
            self.board.piece_mut(king).set_in_check(false);
        }

        let played = PlayedMove {
            color: self.turn,
            piece: mover.kind(),
            from,
            to,
            kind: candidate.kind,
            captured,
        };
        log_event!(debug, "{played}");
        self.history.push(played);

        self.turn = self.turn.opponent();
        self.refresh();
        Ok(played)
    }

    /// Select `from` and move to `to` as one command.
    ///
    /// When the move is refused the previous selection and its markers are
    /// put back, so a rejected `play` leaves the game as it found it.
    pub fn play(&mut self, from: Square, to: Square) -> Result<PlayedMove, Rejection> {
        self.ensure_in_progress()?;
        self.ensure_on_board(from)?;
        self.ensure_on_board(to)?;

        let previous = self.selected;
        self.select(from)?;
        let result = self.move_to(to);
        if result.is_err() {
            self.clear_selection();
            if let Some(sq) = previous {
                self.selected = Some(sq);
                self.board.set_selected(sq, true);
                self.mark_selection();
            }
        }
        result
    }

    /// The side to move resigns. Returns the resigning color.
    pub fn resign(&mut self) -> Result<Color, Rejection> {
        self.ensure_in_progress()?;
        let loser = self.turn;
        self.conclude(GameStatus::Resign, loser);
        Ok(loser)
    }

    /// `color` ran out of time on an external clock.
    pub fn flag_timeout(&mut self, color: Color) -> Result<(), Rejection> {
        self.ensure_in_progress()?;
        self.conclude(GameStatus::Timeout, color);
        Ok(())
    }

    /// Start over from the opening position. Win/loss counters and the
    /// configuration carry over.
    pub fn reset(&mut self) {
        self.board.reset();
        for player in &mut self.players {
            player.clear_captures();
        }
        self.turn = Color::White;
        self.status = GameStatus::InProgress;
        self.subject = None;
        self.selected = None;
        self.history.clear();
        self.refresh();
        log_event!(debug, "game reset");
    }

    /// Replace the configuration and recompute legal moves.
    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
        if !self.status.is_terminal() {
            self.refresh();
            if self.selected.is_some() {
                self.board.clear_markers();
                self.mark_selection();
            }
        }
    }

    fn castle_rook(&mut self, rank: usize, side: CastleSide) {
        let rook_from = Square(rank, side.rook_file());
        let rook_to = Square(rank, side.rook_destination_file());
        if let Some(rook) = self.board.occupant(rook_from) {
            self.board.piece_mut(rook).has_moved = true;
            self.board.transfer(rook_from, rook_to);
        }
    }

    /// Regenerate every piece's moves and filter the side to move's lists.
    fn refresh(&mut self) {
        let mut table = MoveTable::generate(&self.board);
        let verdict = filter_legal(&mut self.board, &mut table, self.turn, &self.config);
        self.moves = table;

        if let Some(king) = verdict {
            if self.board.piece(king).in_check() == Some(true) {
                self.conclude(GameStatus::Checkmate, self.turn.opponent());
            } else {
                self.conclude(GameStatus::Stalemate, self.turn);
            }
        }
    }

    fn conclude(&mut self, status: GameStatus, subject: Color) {
        self.status = status;
        self.subject = Some(subject);
        self.clear_selection();

        match status {
            GameStatus::Checkmate => {
                self.players[subject.index()].record_win();
                self.players[subject.opponent().index()].record_loss();
            }
            GameStatus::Resign | GameStatus::Timeout => {
                self.players[subject.index()].record_loss();
                self.players[subject.opponent().index()].record_win();
            }
            GameStatus::Stalemate | GameStatus::InProgress => {}
        }
        log_event!(info, "game over: {status} ({subject})");
    }

    fn mark_selection(&mut self) {
        let Some(sq) = self.selected else {
            return;
        };
        if let Some(id) = self.board.occupant(sq) {
            let moves = self.moves.get(id).to_vec();
            for m in moves {
                self.board.set_marker(m.to, m.kind);
            }
        }
    }

    fn clear_selection(&mut self) {
        if let Some(prev) = self.selected.take() {
            self.board.set_selected(prev, false);
        }
        self.board.clear_markers();
    }

    fn ensure_in_progress(&self) -> Result<(), Rejection> {
        if self.status.is_terminal() {
            return Err(self.reject(Rejection::GameOver {
                status: self.status,
            }));
        }
        Ok(())
    }

    fn ensure_on_board(&self, sq: Square) -> Result<(), Rejection> {
        if sq.is_on_board() {
            Ok(())
        } else {
            Err(self.reject(Rejection::OffBoard { square: sq }))
        }
    }

    fn reject(&self, rejection: Rejection) -> Rejection {
        log_event!(debug, "rejected: {rejection}");
        rejection
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn play(game: &mut Game, from: &str, to: &str) -> PlayedMove {
        let from: Square = from.parse().unwrap();
        let to: Square = to.parse().unwrap();
        game.select(from).unwrap();
        game.move_to(to).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.subject(), None);
        assert_eq!(game.legal_destinations().len(), 20);
    }

    #[test]
    fn test_select_marks_destinations() {
        let mut game = Game::new();
        let piece = game.select(Square(6, 4)).unwrap().unwrap();
        assert_eq!(piece.kind(), PieceKind::Pawn);
        assert!(game.board().cell(Square(6, 4)).is_selected());
        assert!(game.board().cell(Square(5, 4)).is_legal());
        assert!(game.board().cell(Square(4, 4)).is_legal());
        assert!(!game.board().cell(Square(3, 4)).is_legal());

        // Reselecting elsewhere clears the old markers
        game.select(Square(7, 6)).unwrap();
        assert!(!game.board().cell(Square(6, 4)).is_selected());
        assert!(!game.board().cell(Square(4, 4)).is_legal());
        assert!(game.board().cell(Square(5, 5)).is_legal());
    }

    #[test]
    fn test_select_empty_square() {
        let mut game = Game::new();
        game.select(Square(6, 4)).unwrap();
        assert_eq!(game.select(Square(4, 4)).unwrap(), None);
        assert!(Square::all().all(|sq| !game.board().cell(sq).is_legal()));
        assert_eq!(
            game.move_to(Square(3, 4)),
            Err(Rejection::EmptySquare {
                square: Square(4, 4)
            })
        );
    }

    #[test]
    fn test_move_without_selection() {
        let mut game = Game::new();
        assert_eq!(game.move_to(Square(4, 4)), Err(Rejection::NothingSelected));
    }

    #[test]
    fn test_move_flips_turn_and_records() {
        let mut game = Game::new();
        let played = play(&mut game, "e2", "e4");
        assert_eq!(played.piece, PieceKind::Pawn);
        assert_eq!(played.kind, MoveKind::Normal);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.history(), &[played]);
        assert_eq!(game.selected(), None);

        let pawn = game.board().piece_at(Square(4, 4)).unwrap();
        assert!(pawn.has_moved);
        assert!(game.board().is_empty(Square(6, 4)));
    }

    #[test]
    fn test_illegal_destination_leaves_game() {
        let mut game = Game::new();
        game.select(Square(6, 4)).unwrap();
        assert_eq!(
            game.move_to(Square(3, 4)),
            Err(Rejection::IllegalDestination {
                from: Square(6, 4),
                to: Square(3, 4)
            })
        );
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.selected(), Some(Square(6, 4)));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_capture_updates_player() {
        let mut game = Game::new();
        play(&mut game, "e2", "e4");
        play(&mut game, "d7", "d5");
        let played = play(&mut game, "e4", "d5");

        assert_eq!(played.captured, Some(PieceKind::Pawn));
        assert_eq!(played.kind, MoveKind::Capture);
        assert_eq!(game.material(Color::White), 100);
        assert_eq!(game.player(Color::White).captured().len(), 1);
        let victim = game.player(Color::White).captured()[0];
        assert!(game.board().piece(victim).captured);
        assert_eq!(game.board().piece(victim).square(), None);
    }

    #[test]
    fn test_inverse_moves_restore_census() {
        let mut game = Game::new();
        let opening = game.board().census();

        play(&mut game, "g1", "f3");
        play(&mut game, "b8", "c6");
        play(&mut game, "f3", "g1");
        play(&mut game, "c6", "b8");
        assert_eq!(game.board().census(), opening);
        assert_eq!(game.board().piece_at(Square(7, 6)).unwrap().kind(), PieceKind::Knight);
        assert_eq!(game.board().piece_at(Square(0, 1)).unwrap().kind(), PieceKind::Knight);
        assert_eq!(game.legal_destinations().len(), 20);
    }

    #[test]
    fn test_victim_stays_captured_after_retreat() {
        let mut game = Game::new();
        play(&mut game, "g1", "f3");
        play(&mut game, "e7", "e5");
        let mut expected = game.board().census();
        expected[Color::Black.index()][PieceKind::Pawn.index()] -= 1;

        let taken = play(&mut game, "f3", "e5");
        assert_eq!(taken.captured, Some(PieceKind::Pawn));
        play(&mut game, "b8", "c6");
        play(&mut game, "e5", "f3");
        play(&mut game, "c6", "b8");

        assert_eq!(game.board().census(), expected);
        let victim = game.player(Color::White).captured()[0];
        let pawn = game.board().piece(victim);
        assert!(pawn.captured);
        assert_eq!(pawn.square(), None);
        assert!(game.board().is_empty(Square(3, 4)));
        assert_eq!(game.material(Color::White), 100);
    }

    #[test]
    fn test_castle_moves_rook() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, PieceKind::King)
            .piece(Square(7, 0), Color::White, PieceKind::Rook)
            .moved_piece(Square(0, 4), Color::Black, PieceKind::King)
            .build();
        let mut game = Game::from_position(board, Color::White, GameConfig::default()).unwrap();

        let played = play(&mut game, "e1", "c1");
        assert_eq!(played.kind, MoveKind::Castle);

        let rook = game.board().piece_at(Square(7, 3)).unwrap();
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert!(rook.has_moved);
        assert!(game.board().is_empty(Square(7, 0)));
        assert_eq!(
            game.board().piece_at(Square(7, 2)).unwrap().kind(),
            PieceKind::King
        );
    }

    #[test]
    fn test_resign_and_counters() {
        let mut game = Game::new();
        play(&mut game, "e2", "e4");
        assert_eq!(game.resign(), Ok(Color::Black));
        assert_eq!(game.status(), GameStatus::Resign);
        assert_eq!(game.subject(), Some(Color::Black));
        assert_eq!(game.player(Color::White).wins(), 1);
        assert_eq!(game.player(Color::Black).losses(), 1);

        assert!(matches!(
            game.select(Square(1, 4)),
            Err(Rejection::GameOver { .. })
        ));
        assert!(matches!(game.resign(), Err(Rejection::GameOver { .. })));

        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.player(Color::White).wins(), 1);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_flag_timeout() {
        let mut game = Game::new();
        game.flag_timeout(Color::White).unwrap();
        assert_eq!(game.status(), GameStatus::Timeout);
        assert_eq!(game.subject(), Some(Color::White));
        assert_eq!(game.player(Color::Black).wins(), 1);
        assert!(game.flag_timeout(Color::Black).is_err());
    }

    #[test]
    fn test_from_position_rejects_capturable_king() {
        let board = BoardBuilder::new()
            .moved_piece(Square(7, 4), Color::White, PieceKind::King)
            .moved_piece(Square(3, 4), Color::White, PieceKind::Rook)
            .moved_piece(Square(0, 4), Color::Black, PieceKind::King)
            .build();
        assert_eq!(
            Game::from_position(board, Color::White, GameConfig::default()).err(),
            Some(PositionError::OpponentInCheck {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_from_position_requires_kings() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, PieceKind::King)
            .build();
        assert_eq!(
            Game::from_position(board, Color::White, GameConfig::default()).err(),
            Some(PositionError::MissingKing {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_off_board_squares_are_rejected() {
        let mut game = Game::new();
        game.select(Square(6, 4)).unwrap();

        for sq in [Square(0, 8), Square(7, 8), Square(8, 0), Square(usize::MAX, 3)] {
            assert_eq!(game.select(sq), Err(Rejection::OffBoard { square: sq }));
            assert_eq!(game.move_to(sq), Err(Rejection::OffBoard { square: sq }));
            assert!(game.legal_moves(sq).is_empty());
        }

        // The earlier selection survives
        assert_eq!(game.selected(), Some(Square(6, 4)));
        assert!(game.board().cell(Square(4, 4)).is_legal());
        assert_eq!(game.turn(), Color::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_rejected_play_restores_selection() {
        let mut game = Game::new();
        game.select(Square(7, 6)).unwrap();

        assert_eq!(
            game.play(Square(6, 4), Square(3, 4)),
            Err(Rejection::IllegalDestination {
                from: Square(6, 4),
                to: Square(3, 4)
            })
        );
        assert_eq!(game.selected(), Some(Square(7, 6)));
        assert!(game.board().cell(Square(7, 6)).is_selected());
        assert!(!game.board().cell(Square(6, 4)).is_selected());
        assert!(game.board().cell(Square(5, 5)).is_legal());
        assert!(!game.board().cell(Square(4, 4)).is_legal());

        // Nothing selected before: nothing selected after
        let mut game = Game::new();
        assert!(game.play(Square(1, 4), Square(3, 4)).is_err());
        assert_eq!(game.selected(), None);
        assert!(Square::all().all(|sq| !game.board().cell(sq).is_legal()));

        let played = game.play(Square(6, 4), Square(4, 4)).unwrap();
        assert_eq!(played.to, Square(4, 4));
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_played_move_display() {
        let mut game = Game::new();
        let played = play(&mut game, "g1", "f3");
        assert_eq!(played.to_string(), "White Ng1-f3");
    }
}
