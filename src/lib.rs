// Routes to the `log` crate when the `logging` feature is on; otherwise the
// arguments are type-checked and discarded.
#[cfg(feature = "logging")]
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        ::log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {{
        if false {
            let _ = ::std::format!($($arg)+);
        }
    }};
}

pub mod board;
pub mod console;
pub mod engine;

pub use board::{Board, CandidateMove, Color, MoveKind, Piece, PieceKind, Square};
pub use engine::{Game, GameConfig, GameStatus, Rejection, SharedGame};
