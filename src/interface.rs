//! Input and display boundaries.
//!
//! The engine never reads a terminal or draws a board itself. It asks an
//! [`InputSource`] for raw tokens and reports what happened to an
//! [`EventSink`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::Outcome;
use crate::coord::Coordinate;
use crate::game::{GameError, GameResult, GameState, Side};

/// Something that yields raw text tokens, typically a terminal.
pub trait InputSource {
    /// Read the next token after showing `prompt`. `None` means the input is
    /// closed, which abandons the game.
    fn read_token(&mut self, prompt: &str) -> Option<String>;

    /// Show an informational message, e.g. why the last token was rejected.
    fn notice(&mut self, _message: &str) {}
}

/// Observable things that happen during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameEvent {
    ShipPlaced {
        side: Side,
        name: &'static str,
        cells: Vec<Coordinate>,
    },
    /// Both fleets are placed and the first turn starts.
    BattleStarted,
    ShotResolved {
        attacker: Side,
        target: Coordinate,
        outcome: Outcome,
    },
    /// Input from `side` was refused; the same question will be asked again.
    InputRejected { side: Side, reason: String },
    GameOver { result: GameResult },
}

/// Display boundary. Receives every event together with the current state so
/// a renderer can redraw boards.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent, state: &GameState);
}

/// Sink that forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: &GameEvent, _state: &GameState) {
        match event {
            GameEvent::ShipPlaced { side, name, cells } => {
                log::debug!("{:?} placed {} at {:?}", side, name, cells)
            }
            GameEvent::BattleStarted => log::info!("battle started"),
            GameEvent::ShotResolved {
                attacker,
                target,
                outcome,
            } => log::info!("{:?} fired at {}: {:?}", attacker, target, outcome),
            GameEvent::InputRejected { side, reason } => {
                log::warn!("rejected input from {:?}: {}", side, reason)
            }
            GameEvent::GameOver { result } => log::info!("result: {:?}", result),
        }
    }
}

/// Sink that keeps every event, handy for tests and replays.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<GameEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of rejected inputs seen so far.
    pub fn rejections(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::InputRejected { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &GameEvent, _state: &GameState) {
        self.events.push(event.clone());
    }
}

pub(crate) fn rejection(side: Side, error: &GameError) -> GameEvent {
    use alloc::string::ToString;
    GameEvent::InputRejected {
        side,
        reason: error.to_string(),
    }
}
