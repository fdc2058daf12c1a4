//! Game rules on top of the board: legality, turn order and game end.
//!
//! `Game` is the single owner of a board and both players. `SharedGame`
//! wraps it for callers on more than one thread.

mod config;
mod controller;
pub mod legality;
mod player;
mod shared;
mod snapshot;
mod status;

pub use config::{ConfigError, GameConfig};
pub use controller::{Game, PlayedMove};
pub use legality::{filter_legal, is_in_check};
pub use player::Player;
pub use shared::SharedGame;
pub use snapshot::{GameSnapshot, PieceView, PlayerView, SquareView};
pub use status::{GameStatus, Rejection};
