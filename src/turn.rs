//! Turn resolution: one shot against a defender's board and fleet.

use crate::board::{Board, Cell};
use crate::common::{BoardError, Outcome, ShotResult};
use crate::coord::Coordinate;
use crate::fleet::Fleet;

/// Apply `guess` to the defender and classify the result.
///
/// Only the defender's board and fleet change. The owning ship is looked up
/// before the board is touched, so an error leaves both untouched.
pub fn resolve_shot(
    guess: Coordinate,
    board: &mut Board,
    fleet: &mut Fleet,
) -> Result<Outcome, BoardError> {
    let owner = match board.cell(guess)? {
        Cell::ShipPresent => Some(
            fleet
                .position_of(guess)
                .ok_or(BoardError::UnknownShipHit(guess))?,
        ),
        _ => None,
    };

    match (board.apply_shot(guess)?, owner) {
        (ShotResult::Miss, _) => Ok(Outcome::Miss),
        (ShotResult::AlreadyResolved, _) => Ok(Outcome::AlreadyResolved),
        (ShotResult::Hit, Some(idx)) => {
            let ship = &mut fleet.ships_mut()[idx];
            ship.register_hit(guess);
            if ship.is_sunk() {
                // mark the full placement, the remaining set is empty by now
                board.mark_sunk(ship.cells())?;
                log::debug!("{} sunk by shot at {}", ship.name(), guess);
                Ok(Outcome::Sunk(ship.name()))
            } else {
                Ok(Outcome::Hit)
            }
        }
        (ShotResult::Hit, None) => Err(BoardError::UnknownShipHit(guess)),
    }
}
