//! Commonly used types and utilities for ease of import.

pub use crate::{
    select_move, AiPlayer, Board, Cell, GameEngine, GamePhase, GameResult, Mark, Mode, MoveError,
    Player,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer, Session};
