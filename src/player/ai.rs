use alloc::vec::Vec;

use crate::{
    board::Board,
    config::TargetPolicy,
    coord::Coordinate,
    placement,
    random::RandomSource,
    ship::ShipType,
};

use super::{Answer, Player, TargetView};

/// Automated player: random placement and uniform random targeting.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiPlayer {
    policy: TargetPolicy,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: TargetPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TargetPolicy {
        self.policy
    }
}

impl Player for AiPlayer {
    fn propose_placement(
        &mut self,
        rng: &mut dyn RandomSource,
        board: &Board,
        ship: ShipType,
    ) -> Answer<Vec<Coordinate>> {
        match placement::random_placement(rng, board, ship.length()) {
            Ok(cells) => Answer::Value(cells),
            Err(e) => {
                log::warn!("cannot place {}: {}", ship.name(), e);
                Answer::Resign
            }
        }
    }

    fn propose_target(
        &mut self,
        rng: &mut dyn RandomSource,
        view: &TargetView<'_>,
    ) -> Answer<Coordinate> {
        match self.policy {
            TargetPolicy::Unresolved => {
                let open = view.unresolved_cells();
                if open.is_empty() {
                    return Answer::Resign;
                }
                Answer::Value(open[rng.below(open.len())])
            }
            TargetPolicy::Blind => {
                let size = view.size();
                Answer::Value(Coordinate::new(rng.below(size), rng.below(size)))
            }
        }
    }
}
