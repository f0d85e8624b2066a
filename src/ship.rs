//! Ship classes and placed ships.

use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cells covered by a ship of `length` starting at `origin`.
    pub fn cells(self, origin: Coordinate, length: usize) -> Vec<Coordinate> {
        (0..length)
            .map(|i| match self {
                Orientation::Horizontal => Coordinate::new(origin.row, origin.col + i),
                Orientation::Vertical => Coordinate::new(origin.row + i, origin.col),
            })
            .collect()
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship type for a bare length, named after the usual class of that size.
    pub const fn sized(length: usize) -> Self {
        let name = match length {
            1 => "Patrol Boat",
            2 => "Destroyer",
            3 => "Cruiser",
            4 => "Battleship",
            5 => "Carrier",
            _ => "Dreadnought",
        };
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on the board.
///
/// `cells` never changes after placement; `remaining` loses a coordinate on
/// every hit and the ship is sunk once it is empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    cells: Vec<Coordinate>,
    remaining: Vec<Coordinate>,
}

impl Ship {
    /// Wrap already validated cells.
    pub(crate) fn new(ship_type: ShipType, cells: Vec<Coordinate>) -> Self {
        let remaining = cells.clone();
        Self {
            ship_type,
            cells,
            remaining,
        }
    }

    /// Remove `coord` from the remaining cells.
    /// Returns `true` if the coordinate belonged to this ship and was still afloat.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        match self.remaining.iter().position(|&c| c == coord) {
            Some(idx) => {
                self.remaining.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Whether `coord` is one of the ship's original cells.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    /// Full coordinate set as placed.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Cells not yet hit.
    pub fn remaining(&self) -> &[Coordinate] {
        &self.remaining
    }

    /// Orientation derived from the cells; single-cell ships read as horizontal.
    pub fn orientation(&self) -> Orientation {
        match self.cells.as_slice() {
            [a, b, ..] if a.col == b.col => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", cells: {:?}, orientation: {:?}, afloat: {} }}",
            self.ship_type.name(),
            self.cells,
            self.orientation(),
            self.remaining.len(),
        )
    }
}
