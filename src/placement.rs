//! Fleet placement: manual coordinate lists and random search.
//!
//! Both strategies validate against the board before anything is written,
//! so a rejected placement can simply be retried with new input.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{BoardError, OverlapKind};
use crate::config::RANDOM_PLACEMENT_ATTEMPTS;
use crate::coord::Coordinate;
use crate::fleet::Fleet;
use crate::random::RandomSource;
use crate::ship::{Orientation, Ship, ShipType};

/// Place `ship_type` on exactly the given cells.
pub fn place_manual<'f>(
    board: &mut Board,
    fleet: &'f mut Fleet,
    ship_type: ShipType,
    cells: Vec<Coordinate>,
) -> Result<&'f Ship, BoardError> {
    if cells.len() != ship_type.length() {
        return Err(BoardError::Overlap(OverlapKind::WrongLength {
            expected: ship_type.length(),
            found: cells.len(),
        }));
    }
    board.apply_ship(&cells)?;
    fleet.push(Ship::new(ship_type, cells));
    let ship = &fleet.ships()[fleet.len() - 1];
    log::debug!("{} placed at {:?}", ship.name(), ship.cells());
    Ok(ship)
}

/// Place `ship_type` at a random legal position.
pub fn place_random<'f, R: RandomSource + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    fleet: &'f mut Fleet,
    ship_type: ShipType,
) -> Result<&'f Ship, BoardError> {
    let cells = random_placement(rng, board, ship_type.length())?;
    place_manual(board, fleet, ship_type, cells)
}

/// Returns the cells of a random non-overlapping placement of `length`
/// without modifying the board.
///
/// Blind sampling runs for a bounded number of attempts; after that every
/// legal placement is enumerated and one is chosen uniformly, so the search
/// always terminates and reports `NoRoom` only when nothing fits.
pub fn random_placement<R: RandomSource + ?Sized>(
    rng: &mut R,
    board: &Board,
    length: usize,
) -> Result<Vec<Coordinate>, BoardError> {
    let size = board.size();
    if length == 0 || length > size {
        return Err(BoardError::InvalidShipLength {
            length,
            board_size: size,
        });
    }
    for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
        let orient = rng.orientation();
        let (rows, cols) = origin_range(orient, size, length);
        let origin = Coordinate::new(rng.below(rows), rng.below(cols));
        let cells = orient.cells(origin, length);
        if board.can_place(&cells) {
            return Ok(cells);
        }
    }

    log::debug!("blind placement gave up for length {}, enumerating", length);
    let mut candidates = legal_placements(board, length);
    if candidates.is_empty() {
        return Err(BoardError::NoRoom { length });
    }
    let pick = rng.below(candidates.len());
    Ok(candidates.swap_remove(pick))
}

/// Number of valid origins per axis for a ship of `length`.
fn origin_range(orient: Orientation, size: usize, length: usize) -> (usize, usize) {
    match orient {
        Orientation::Horizontal => (size, size - length + 1),
        Orientation::Vertical => (size - length + 1, size),
    }
}

/// Every placement of `length` that fits the board as it stands.
pub fn legal_placements(board: &Board, length: usize) -> Vec<Vec<Coordinate>> {
    let size = board.size();
    if length == 0 || length > size {
        return Vec::new();
    }
    let orientations: &[Orientation] = if length == 1 {
        &[Orientation::Horizontal]
    } else {
        &[Orientation::Horizontal, Orientation::Vertical]
    };
    let mut found = Vec::new();
    for &orient in orientations {
        let (rows, cols) = origin_range(orient, size, length);
        for r in 0..rows {
            for c in 0..cols {
                let cells = orient.cells(Coordinate::new(r, c), length);
                if board.can_place(&cells) {
                    found.push(cells);
                }
            }
        }
    }
    found
}
