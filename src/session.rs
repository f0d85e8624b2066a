//! Session: drives a `GameState` with two players.
//!
//! All retry-on-bad-input logic lives here. Validation stays in the codec,
//! board and state machine; the session only decides to ask again.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{
    common::BoardError,
    config::GameConfig,
    coord::{self, Coordinate},
    game::{GameError, GameResult, GameState, Phase, Side},
    interface::{rejection, EventSink, GameEvent},
    player::{Answer, Player, TargetView},
    random::RandomSource,
};

impl GameError {
    /// Errors caused by a bad proposal; the proposer is simply asked again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::AlreadyResolved(_)
                | GameError::Board(
                    BoardError::Parse(_) | BoardError::OutOfBounds(_) | BoardError::Overlap(_)
                )
        )
    }
}

pub struct Session<R> {
    state: GameState,
    player: Box<dyn Player>,
    opponent: Box<dyn Player>,
    rng: R,
}

impl<R: RandomSource> Session<R> {
    pub fn new(
        config: GameConfig,
        player: Box<dyn Player>,
        opponent: Box<dyn Player>,
        rng: R,
    ) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::new(config)?,
            player,
            opponent,
            rng,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play the game to the end: setup, then alternating turns.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> Result<GameResult, GameError> {
        if self.state.phase() == Phase::Setup {
            for side in [Side::Player, Side::Opponent] {
                if !self.place_fleet(side, sink)? {
                    return self.finish(sink);
                }
            }
            self.state.begin()?;
            sink.emit(&GameEvent::BattleStarted, &self.state);
        }
        while let Some(attacker) = self.state.phase().attacker() {
            self.play_turn(attacker, sink)?;
        }
        self.finish(sink)
    }

    fn finish(&mut self, sink: &mut dyn EventSink) -> Result<GameResult, GameError> {
        let result = self
            .state
            .result()
            .ok_or(GameError::WrongPhase(self.state.phase()))?;
        sink.emit(&GameEvent::GameOver { result }, &self.state);
        Ok(result)
    }

    /// Place every ship of `side`. Returns `false` if the side resigned.
    fn place_fleet(&mut self, side: Side, sink: &mut dyn EventSink) -> Result<bool, GameError> {
        let Session {
            state,
            player,
            opponent,
            rng,
        } = self;
        let seat = match side {
            Side::Player => player,
            Side::Opponent => opponent,
        };
        let size = state.config().board_size();

        while let Some(ship_type) = state.next_ship(side) {
            let answer = seat.propose_placement(rng, state.side(side).board(), ship_type);
            let cells: Vec<Coordinate> = match answer {
                Answer::Resign => {
                    state.resign(side)?;
                    return Ok(false);
                }
                Answer::Value(cells) => cells,
                Answer::Token(text) => match coord::parse_placement(&text, ship_type.length(), size) {
                    Ok(cells) => cells,
                    Err(e) => {
                        reject(seat.as_mut(), sink, state, side, e.into());
                        continue;
                    }
                },
            };
            let placed = state
                .place_ship(side, ship_type, cells)
                .map(|ship| GameEvent::ShipPlaced {
                    side,
                    name: ship.name(),
                    cells: ship.cells().to_vec(),
                });
            match placed {
                Ok(event) => sink.emit(&event, state),
                Err(e) if e.is_recoverable() => reject(seat.as_mut(), sink, state, side, e),
                Err(e) => return Err(e),
            }
        }
        Ok(true)
    }

    /// Ask `attacker` for targets until one is resolved or it resigns.
    fn play_turn(&mut self, attacker: Side, sink: &mut dyn EventSink) -> Result<(), GameError> {
        let Session {
            state,
            player,
            opponent,
            rng,
        } = self;
        let seat = match attacker {
            Side::Player => player,
            Side::Opponent => opponent,
        };
        let size = state.config().board_size();

        loop {
            let answer = {
                let view = TargetView::new(state.side(attacker.other()).board());
                seat.propose_target(rng, &view)
            };
            let target = match answer {
                Answer::Resign => {
                    state.resign(attacker)?;
                    return Ok(());
                }
                Answer::Value(target) => target,
                Answer::Token(text) => match coord::decode(&text, size) {
                    Ok(target) => target,
                    Err(e) => {
                        reject(seat.as_mut(), sink, state, attacker, e.into());
                        continue;
                    }
                },
            };
            match state.take_shot(target) {
                Ok(outcome) => {
                    let event = GameEvent::ShotResolved {
                        attacker,
                        target,
                        outcome,
                    };
                    sink.emit(&event, state);
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => reject(seat.as_mut(), sink, state, attacker, e),
                Err(e) => return Err(e),
            }
        }
    }
}

fn reject(
    seat: &mut dyn Player,
    sink: &mut dyn EventSink,
    state: &GameState,
    side: Side,
    error: GameError,
) {
    log::debug!("{:?} proposal rejected: {}", side, error);
    seat.handle_rejection(&error);
    sink.emit(&rejection(side, &error), state);
}
