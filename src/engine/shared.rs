//! Thread-safe handle to a single game.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Color, Piece, Square};

use super::{Game, GameConfig, GameSnapshot, PlayedMove, Rejection};

/// A cloneable, lock-guarded `Game`.
///
/// Each command holds the lock for its whole duration, so the legality
/// filter's temporary board mutation is never visible to another caller.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new() -> Self {
        Self::from_game(Game::new())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_game(Game::with_config(config))
    }

    #[must_use]
    pub fn from_game(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    pub fn select(&self, sq: Square) -> Result<Option<Piece>, Rejection> {
        self.0.lock().select(sq)
    }

    pub fn move_to(&self, to: Square) -> Result<PlayedMove, Rejection> {
        self.0.lock().move_to(to)
    }

    /// `Game::play` under one lock acquisition. A refused move keeps the
    /// previous selection.
    pub fn play(&self, from: Square, to: Square) -> Result<PlayedMove, Rejection> {
        self.0.lock().play(from, to)
    }

    pub fn resign(&self) -> Result<Color, Rejection> {
        self.0.lock().resign()
    }

    pub fn flag_timeout(&self, color: Color) -> Result<(), Rejection> {
        self.0.lock().flag_timeout(color)
    }

    pub fn reset(&self) {
        self.0.lock().reset();
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.0.lock().snapshot()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::from_game(game)
    }
}
