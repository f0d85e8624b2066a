//! Commonly used types and utilities for ease of import.

pub use crate::{
    resolve_shot, AiPlayer, Board, Cell, CliPlayer, Coordinate, EventSink, Fleet, GameConfig,
    GameResult, GameState, InputSource, Outcome, Player, RandomSource, SeededRandom, Session,
    Side,
};

#[cfg(feature = "std")]
pub use crate::{ui::ConsoleSink, StdinInput};
