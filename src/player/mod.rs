//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: random placement and uniform random targeting
//! - CliPlayer: interactive player reading tokens from an `InputSource`

use alloc::string::String;
use alloc::vec::Vec;

use crate::board::{Board, Cell};
use crate::coord::Coordinate;
use crate::game::GameError;
use crate::random::RandomSource;
use crate::ship::ShipType;

/// A player's reply to a question from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    /// Raw text to be decoded by the session.
    Token(String),
    /// An already structured value.
    Value(T),
    /// Abandon the game.
    Resign,
}

/// The opponent's board as the attacker may see it: afloat ship segments
/// are hidden.
#[derive(Debug, Clone, Copy)]
pub struct TargetView<'a> {
    board: &'a Board,
}

impl<'a> TargetView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Cell state with ships hidden; off-board cells read as `Empty`.
    pub fn cell(&self, coord: Coordinate) -> Cell {
        self.board.visible_cell(coord, false).unwrap_or(Cell::Empty)
    }

    /// Cells that have not been fired at yet.
    pub fn unresolved_cells(&self) -> Vec<Coordinate> {
        self.board.unresolved_cells()
    }
}

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Proposing ship placements
/// - Selecting targets to attack
/// - Reacting to rejected proposals
///
/// Proposals are validated by the session; a rejected proposal is reported
/// through [`handle_rejection`](Player::handle_rejection) and asked for again.
pub trait Player {
    /// Propose cells for `ship` on the player's own board.
    fn propose_placement(
        &mut self,
        rng: &mut dyn RandomSource,
        board: &Board,
        ship: ShipType,
    ) -> Answer<Vec<Coordinate>>;

    /// Choose the next target on the opponent's board.
    fn propose_target(
        &mut self,
        rng: &mut dyn RandomSource,
        view: &TargetView<'_>,
    ) -> Answer<Coordinate>;

    /// Inform the player that its last proposal was refused.
    fn handle_rejection(&mut self, _error: &GameError) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
#[cfg(feature = "std")]
pub use cli::StdinInput;
