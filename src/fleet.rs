//! A side's fleet and the win detector.

use alloc::vec::Vec;

use crate::coord::Coordinate;
use crate::ship::Ship;

/// Ordered ships belonging to one side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub(crate) fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Index of the ship whose original cells include `coord`.
    pub fn position_of(&self, coord: Coordinate) -> Option<usize> {
        self.ships.iter().position(|ship| ship.occupies(coord))
    }

    /// Ships still afloat.
    pub fn afloat(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|ship| !ship.is_sunk())
    }

    /// Segments not yet hit across the whole fleet.
    pub fn remaining_cells(&self) -> usize {
        self.ships.iter().map(|ship| ship.remaining().len()).sum()
    }

    /// Returns `true` when all ships are sunk.
    pub fn is_defeated(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}
