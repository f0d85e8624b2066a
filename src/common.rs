//! Common types: board errors, shot results and turn outcomes.

use crate::bitboard::BitBoardError;
use crate::coord::{Coordinate, ParseError};

/// Result of applying a shot to a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    Miss,
    Hit,
    /// Cell was already hit, missed or sunk; nothing changed.
    AlreadyResolved,
}

/// Classification of a resolved shot against a side's board and fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    /// Guess missed all ships.
    Miss,
    /// Guess hit a ship that is still afloat.
    Hit,
    /// Guess sank a ship, carrying its name.
    Sunk(&'static str),
    /// Cell had been resolved before; no state changed.
    AlreadyResolved,
}

impl Outcome {
    /// Whether the shot consumed the attacker's turn.
    pub fn consumes_turn(&self) -> bool {
        !matches!(self, Outcome::AlreadyResolved)
    }
}

/// Why a set of cells cannot hold a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapKind {
    /// No cells were given.
    NoCells,
    /// Cell count differs from the ship's length.
    WrongLength { expected: usize, found: usize },
    /// The same cell appears twice.
    Duplicate(Coordinate),
    /// Cell is already occupied or resolved.
    Occupied(Coordinate),
    /// Cells share neither a row nor a column.
    NotStraight,
    /// Cells are in one line but leave a gap.
    Gap,
}

/// Errors returned by Board, placement and resolver operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Text token could not be decoded.
    Parse(ParseError),
    /// Coordinate lies outside the board.
    OutOfBounds(Coordinate),
    /// Ship placement is not a clear straight contiguous line.
    Overlap(OverlapKind),
    /// Board edge length outside the supported range.
    InvalidBoardSize(usize),
    /// Ship length is zero or exceeds the board.
    InvalidShipLength { length: usize, board_size: usize },
    /// Fleet configuration has no ships.
    EmptyFleet,
    /// Fleet needs more cells than the board has.
    FleetTooLarge,
    /// No legal position remains for a ship of this length.
    NoRoom { length: usize },
    /// A ship cell was hit but no ship in the fleet owns it.
    UnknownShipHit(Coordinate),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl From<ParseError> for BoardError {
    fn from(err: ParseError) -> Self {
        BoardError::Parse(err)
    }
}

impl core::fmt::Display for OverlapKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OverlapKind::NoCells => write!(f, "no cells given"),
            OverlapKind::WrongLength { expected, found } => {
                write!(f, "ship needs {} cells, got {}", expected, found)
            }
            OverlapKind::Duplicate(c) => write!(f, "cell {} listed twice", c),
            OverlapKind::Occupied(c) => write!(f, "cell {} is already taken", c),
            OverlapKind::NotStraight => write!(f, "cells are not in a single row or column"),
            OverlapKind::Gap => write!(f, "cells are not contiguous"),
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::Parse(e) => write!(f, "Parse error: {}", e),
            BoardError::OutOfBounds(c) => write!(f, "{} is off the board", c),
            BoardError::Overlap(kind) => write!(f, "Invalid placement: {}", kind),
            BoardError::InvalidBoardSize(n) => write!(f, "Unsupported board size {}", n),
            BoardError::InvalidShipLength { length, board_size } => write!(
                f,
                "Ship length {} does not fit a {}x{} board",
                length, board_size, board_size
            ),
            BoardError::EmptyFleet => write!(f, "Fleet has no ships"),
            BoardError::FleetTooLarge => write!(f, "Fleet does not fit on the board"),
            BoardError::NoRoom { length } => {
                write!(f, "No room left for a ship of length {}", length)
            }
            BoardError::UnknownShipHit(c) => write!(f, "Hit at {} belongs to no ship", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for crate::coord::ParseError {}
