use alloc::vec::Vec;

use crate::common::BoardError;
use crate::ship::ShipType;

/// Default board edge length.
pub const BOARD_SIZE: usize = 10;
/// Smallest supported board edge length.
pub const MIN_BOARD_SIZE: usize = 4;
/// Largest supported board edge length; bounded by the `u128` bitboards.
pub const MAX_BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Blind random placement attempts before falling back to enumeration.
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 200;

/// How the automated side picks its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetPolicy {
    /// Uniform over cells not yet resolved.
    #[default]
    Unresolved,
    /// Uniform over the whole board; repeats are rejected and retried.
    Blind,
}

/// Board and fleet settings shared by both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    board_size: usize,
    fleet: Vec<ShipType>,
    turn_limit: Option<u32>,
}

impl GameConfig {
    /// Standard 10×10 game with the five-ship fleet and no turn limit.
    pub fn standard() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: SHIPS.to_vec(),
            turn_limit: None,
        }
    }

    /// Build and validate a configuration.
    pub fn new(
        board_size: usize,
        fleet: Vec<ShipType>,
        turn_limit: Option<u32>,
    ) -> Result<Self, BoardError> {
        let config = Self {
            board_size,
            fleet,
            // a zero-turn limit would end the game before the first shot
            turn_limit: turn_limit.filter(|&n| n > 0),
        };
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from bare ship lengths.
    pub fn from_sizes(
        board_size: usize,
        sizes: &[usize],
        turn_limit: Option<u32>,
    ) -> Result<Self, BoardError> {
        let fleet = sizes.iter().map(|&len| ShipType::sized(len)).collect();
        Self::new(board_size, fleet, turn_limit)
    }

    /// Build a configuration from a comma separated list such as `5,4,3,3,2`.
    ///
    /// The board size is checked before the list is parsed.
    pub fn from_fleet_text(
        board_size: usize,
        fleet: &str,
        turn_limit: Option<u32>,
    ) -> Result<Self, BoardError> {
        check_board_size(board_size)?;
        let sizes = crate::coord::parse_fleet(fleet, board_size)?;
        Self::from_sizes(board_size, &sizes, turn_limit)
    }

    fn validate(&self) -> Result<(), BoardError> {
        check_board_size(self.board_size)?;
        if self.fleet.is_empty() {
            return Err(BoardError::EmptyFleet);
        }
        if let Some(def) = self
            .fleet
            .iter()
            .find(|def| def.length() == 0 || def.length() > self.board_size)
        {
            return Err(BoardError::InvalidShipLength {
                length: def.length(),
                board_size: self.board_size,
            });
        }
        // Ships need at least their own cells; anything denser is the
        // caller's precondition.
        if self.total_ship_cells() > self.board_size * self.board_size {
            return Err(BoardError::FleetTooLarge);
        }
        Ok(())
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    pub fn turn_limit(&self) -> Option<u32> {
        self.turn_limit
    }

    /// Total number of ship segments per side.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().map(|def| def.length()).sum()
    }
}

fn check_board_size(size: usize) -> Result<(), BoardError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::InvalidBoardSize(size))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
