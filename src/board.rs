//! Game board state backed by `BitBoard` layers.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, OverlapKind, ShotResult};
use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::coord::Coordinate;

type BB = BitBoard<u128, MAX_BOARD_SIZE>;

/// State of a single cell as seen by the board's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    ShipPresent,
    Hit,
    Miss,
    SunkMarker,
}

impl Cell {
    /// Whether a shot at this cell has already been resolved.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss | Cell::SunkMarker)
    }
}

/// Square board: ship placements, hits, misses and sunk markers.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    ship_map: BB,
    hits: BB,
    misses: BB,
    sunk: BB,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidBoardSize(size));
        }
        let empty = BB::try_new()?;
        Ok(Board {
            size,
            ship_map: empty,
            hits: empty,
            misses: empty,
            sunk: empty,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_within_bounds(&self, coord: Coordinate) -> bool {
        coord.fits(self.size)
    }

    fn check_bounds(&self, coord: Coordinate) -> Result<(), BoardError> {
        if self.is_within_bounds(coord) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds(coord))
        }
    }

    /// Owner's view of a cell.
    pub fn cell(&self, coord: Coordinate) -> Result<Cell, BoardError> {
        self.check_bounds(coord)?;
        let cell = if self.sunk.contains(coord) {
            Cell::SunkMarker
        } else if self.hits.contains(coord) {
            Cell::Hit
        } else if self.misses.contains(coord) {
            Cell::Miss
        } else if self.ship_map.contains(coord) {
            Cell::ShipPresent
        } else {
            Cell::Empty
        };
        Ok(cell)
    }

    /// Cell as shown to a viewer; unless `reveal` is set, afloat ship
    /// segments read as `Empty`.
    pub fn visible_cell(&self, coord: Coordinate, reveal: bool) -> Result<Cell, BoardError> {
        match self.cell(coord)? {
            Cell::ShipPresent if !reveal => Ok(Cell::Empty),
            cell => Ok(cell),
        }
    }

    /// Returns `true` iff `cells` can hold a new ship.
    pub fn can_place(&self, cells: &[Coordinate]) -> bool {
        self.check_placement(cells).is_ok()
    }

    /// Validate a ship placement without touching the board.
    pub fn check_placement(&self, cells: &[Coordinate]) -> Result<(), BoardError> {
        let first = *cells.first().ok_or(BoardError::Overlap(OverlapKind::NoCells))?;
        let mut seen = BB::new();
        for &coord in cells {
            self.check_bounds(coord)?;
            if seen.contains(coord) {
                return Err(BoardError::Overlap(OverlapKind::Duplicate(coord)));
            }
            seen.set(coord)?;
        }

        let same_row = cells.iter().all(|c| c.row == first.row);
        let same_col = cells.iter().all(|c| c.col == first.col);
        let (lo, hi) = match (same_row, same_col) {
            (true, _) => span(cells.iter().map(|c| c.col)),
            (false, true) => span(cells.iter().map(|c| c.row)),
            (false, false) => return Err(BoardError::Overlap(OverlapKind::NotStraight)),
        };
        // distinct cells on one line are contiguous iff they fill their span
        if hi - lo + 1 != cells.len() {
            return Err(BoardError::Overlap(OverlapKind::Gap));
        }

        if let Some(&taken) = cells.iter().find(|&&c| self.is_taken(c)) {
            return Err(BoardError::Overlap(OverlapKind::Occupied(taken)));
        }
        Ok(())
    }

    fn is_taken(&self, coord: Coordinate) -> bool {
        self.ship_map.contains(coord) || self.hits.contains(coord) || self.misses.contains(coord)
    }

    /// Mark `cells` as holding a ship. Nothing is written unless every cell passes.
    pub fn apply_ship(&mut self, cells: &[Coordinate]) -> Result<(), BoardError> {
        self.check_placement(cells)?;
        let mask = BB::from_cells(cells.iter().copied())?;
        self.ship_map = self.ship_map | mask;
        log::debug!("ship placed on {} cells starting at {}", cells.len(), cells[0]);
        Ok(())
    }

    /// Process a shot at `coord`, marking a hit or miss.
    pub fn apply_shot(&mut self, coord: Coordinate) -> Result<ShotResult, BoardError> {
        let result = match self.cell(coord)? {
            Cell::Empty => {
                self.misses.set(coord)?;
                ShotResult::Miss
            }
            Cell::ShipPresent => {
                self.hits.set(coord)?;
                ShotResult::Hit
            }
            Cell::Hit | Cell::Miss | Cell::SunkMarker => ShotResult::AlreadyResolved,
        };
        log::debug!("shot at {} -> {:?}", coord, result);
        Ok(result)
    }

    /// Replace the hit markers of a sunk ship with sunk markers.
    pub fn mark_sunk(&mut self, cells: &[Coordinate]) -> Result<(), BoardError> {
        for &coord in cells {
            self.check_bounds(coord)?;
        }
        for &coord in cells {
            if self.hits.contains(coord) {
                self.sunk.set(coord)?;
            }
        }
        Ok(())
    }

    /// Whether any ship segment has not been hit yet.
    pub fn has_ship_present(&self) -> bool {
        !(self.ship_map & !self.hits).is_empty()
    }

    /// Board-level defeat check: no cell is still `ShipPresent`.
    pub fn is_defeated(&self) -> bool {
        !self.has_ship_present()
    }

    /// Cells not yet hit or missed, row-major.
    pub fn unresolved_cells(&self) -> Vec<Coordinate> {
        let resolved = self.hits | self.misses;
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| Coordinate::new(row, col)))
            .filter(|&c| !resolved.contains(c))
            .collect()
    }

    /// Number of cells holding a ship segment, hit or not.
    pub fn ship_cell_count(&self) -> usize {
        self.ship_map.count_ones()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    pub fn miss_count(&self) -> usize {
        self.misses.count_ones()
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk.count_ones()
    }

    /// Iterate over every ship cell, hit or not.
    pub fn ship_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.ship_map.iter_set_bits()
    }
}

fn span(values: impl Iterator<Item = usize>) -> (usize, usize) {
    values.fold((usize::MAX, 0), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  sunk: {:?}\n}}",
            self.size, self.ship_map, self.hits, self.misses, self.sunk
        )
    }
}
