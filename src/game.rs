//! Game state and the turn state machine.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    board::Board,
    common::{BoardError, Outcome},
    config::GameConfig,
    coord::Coordinate,
    fleet::Fleet,
    placement,
    random::RandomSource,
    ship::{Ship, ShipType},
    turn,
};

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    PlayerWon,
    OpponentWon,
    /// Turn limit reached with both fleets afloat.
    Draw,
    /// The given side gave up before the game finished.
    Abandoned(Side),
}

impl GameResult {
    fn win_for(side: Side) -> Self {
        match side {
            Side::Player => GameResult::PlayerWon,
            Side::Opponent => GameResult::OpponentWon,
        }
    }
}

/// Current phase of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    PlayerTurn,
    OpponentTurn,
    GameOver(GameResult),
}

impl Phase {
    /// Side whose turn it is, if a turn is in progress.
    pub fn attacker(self) -> Option<Side> {
        match self {
            Phase::PlayerTurn => Some(Side::Player),
            Phase::OpponentTurn => Some(Side::Opponent),
            _ => None,
        }
    }

    fn turn_of(side: Side) -> Phase {
        match side {
            Side::Player => Phase::PlayerTurn,
            Side::Opponent => Phase::OpponentTurn,
        }
    }
}

/// Errors from driving the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// Operation not allowed in the current phase.
    WrongPhase(Phase),
    /// Play cannot begin until this side has placed its whole fleet.
    FleetIncomplete(Side),
    /// Ship type is not the next one this side has to place.
    UnexpectedShip { expected: Option<ShipType>, found: ShipType },
    /// Target was already resolved; the turn is not consumed.
    AlreadyResolved(Coordinate),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<crate::coord::ParseError> for GameError {
    fn from(err: crate::coord::ParseError) -> Self {
        GameError::Board(err.into())
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::WrongPhase(p) => write!(f, "Not allowed during {:?}", p),
            GameError::FleetIncomplete(side) => write!(f, "{:?} has ships left to place", side),
            GameError::UnexpectedShip { expected, found } => match expected {
                Some(def) => write!(f, "Expected to place {}, got {}", def.name(), found.name()),
                None => write!(f, "Fleet is complete, cannot place {}", found.name()),
            },
            GameError::AlreadyResolved(c) => write!(f, "{} was already targeted", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// A side's own board and fleet.
#[derive(Debug, Clone)]
pub struct SideState {
    board: Board,
    fleet: Fleet,
}

impl SideState {
    fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            fleet: Fleet::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Both defeat formulations; they agree unless the state is corrupt.
    pub fn is_defeated(&self) -> bool {
        debug_assert_eq!(self.fleet.is_defeated(), self.board.is_defeated());
        self.fleet.is_defeated()
    }
}

/// A resolved shot, as recorded in the game's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotRecord {
    pub attacker: Side,
    pub target: Coordinate,
    pub outcome: Outcome,
}

/// Both sides, the phase indicator and the optional turn counter.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    player: SideState,
    opponent: SideState,
    phase: Phase,
    turns_remaining: Option<u32>,
    history: Vec<ShotRecord>,
}

impl GameState {
    /// Fresh game in the `Setup` phase with empty boards.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let size = config.board_size();
        Ok(Self {
            player: SideState::new(size)?,
            opponent: SideState::new(size)?,
            phase: Phase::Setup,
            turns_remaining: config.turn_limit(),
            history: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turns_remaining(&self) -> Option<u32> {
        self.turns_remaining
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Resolved shots in the order they were taken.
    pub fn history(&self) -> &[ShotRecord] {
        &self.history
    }

    /// Next ship `side` has to place, or `None` once its fleet is complete.
    pub fn next_ship(&self, side: Side) -> Option<ShipType> {
        let placed = self.side(side).fleet.len();
        self.config.fleet().get(placed).copied()
    }

    fn check_next_ship(&self, side: Side, ship_type: ShipType) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::WrongPhase(self.phase));
        }
        let expected = self.next_ship(side);
        if expected != Some(ship_type) {
            return Err(GameError::UnexpectedShip {
                expected,
                found: ship_type,
            });
        }
        Ok(())
    }

    /// Place `side`'s next ship on explicit cells; validated before commit.
    pub fn place_ship(
        &mut self,
        side: Side,
        ship_type: ShipType,
        cells: Vec<Coordinate>,
    ) -> Result<&Ship, GameError> {
        self.check_next_ship(side, ship_type)?;
        let state = self.side_mut(side);
        Ok(placement::place_manual(
            &mut state.board,
            &mut state.fleet,
            ship_type,
            cells,
        )?)
    }

    /// Place `side`'s next ship at a random legal position.
    pub fn place_ship_randomly<R: RandomSource + ?Sized>(
        &mut self,
        side: Side,
        ship_type: ShipType,
        rng: &mut R,
    ) -> Result<&Ship, GameError> {
        self.check_next_ship(side, ship_type)?;
        let state = self.side_mut(side);
        Ok(placement::place_random(
            rng,
            &mut state.board,
            &mut state.fleet,
            ship_type,
        )?)
    }

    /// Leave `Setup` once both fleets are complete. The player shoots first.
    pub fn begin(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::WrongPhase(self.phase));
        }
        for side in [Side::Player, Side::Opponent] {
            if self.next_ship(side).is_some() {
                return Err(GameError::FleetIncomplete(side));
            }
        }
        self.phase = Phase::PlayerTurn;
        log::info!("setup complete, player to move");
        Ok(())
    }

    /// Fire the current attacker's shot at `target`.
    ///
    /// `AlreadyResolved` is returned as an error and leaves the phase alone,
    /// so the same side shoots again.
    pub fn take_shot(&mut self, target: Coordinate) -> Result<Outcome, GameError> {
        let attacker = self.phase.attacker().ok_or(GameError::WrongPhase(self.phase))?;
        let defender = self.side_mut(attacker.other());
        let outcome = turn::resolve_shot(target, &mut defender.board, &mut defender.fleet)?;
        if !outcome.consumes_turn() {
            return Err(GameError::AlreadyResolved(target));
        }
        self.history.push(ShotRecord {
            attacker,
            target,
            outcome,
        });
        self.advance(attacker);
        Ok(outcome)
    }

    fn advance(&mut self, attacker: Side) {
        if self.side(attacker.other()).is_defeated() {
            self.finish(GameResult::win_for(attacker));
            return;
        }
        if let Some(turns) = self.turns_remaining.as_mut() {
            *turns = turns.saturating_sub(1);
            if *turns == 0 {
                self.finish(GameResult::Draw);
                return;
            }
        }
        self.phase = Phase::turn_of(attacker.other());
    }

    /// Abandon the game on behalf of `side`.
    pub fn resign(&mut self, side: Side) -> Result<GameResult, GameError> {
        if let Phase::GameOver(_) = self.phase {
            return Err(GameError::WrongPhase(self.phase));
        }
        let result = GameResult::Abandoned(side);
        self.finish(result);
        Ok(result)
    }

    fn finish(&mut self, result: GameResult) {
        log::info!("game over: {:?}", result);
        self.phase = Phase::GameOver(result);
    }
}
