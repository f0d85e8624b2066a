#![cfg_attr(not(feature = "std"), no_std)]
//! Naval combat game engine: boards, fleet placement, shot resolution and
//! win detection, with console adapters behind the `std` feature.

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
pub mod coord;
mod fleet;
mod game;
pub mod interface;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod player;
pub mod prelude;
pub mod random;
mod session;
mod ship;
mod turn;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::{Coordinate, ParseError};
pub use fleet::*;
pub use game::*;
pub use interface::{EventSink, GameEvent, InputSource, LogSink, RecordingSink};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::{AiPlayer, Answer, CliPlayer, Player, TargetView};
#[cfg(feature = "std")]
pub use player::StdinInput;
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use session::*;
pub use ship::*;
pub use turn::resolve_shot;
