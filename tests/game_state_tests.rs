use broadside::coord::decode;
use broadside::{
    BoardError, Coordinate, GameConfig, GameError, GameResult, GameState, Outcome, OverlapKind,
    Phase, ScriptedRandom, ShipType, Side,
};

fn cells(labels: &[&str]) -> Vec<Coordinate> {
    labels.iter().map(|l| decode(l, 10).unwrap()).collect()
}

/// Both sides carry a single length-2 ship: player on A1 A2, opponent on C1 C2.
fn duel(turn_limit: Option<u32>) -> GameState {
    let config = GameConfig::from_sizes(4, &[2], turn_limit).unwrap();
    let mut state = GameState::new(config).unwrap();
    let destroyer = ShipType::sized(2);
    state
        .place_ship(Side::Player, destroyer, cells(&["A1", "A2"]))
        .unwrap();
    state
        .place_ship(Side::Opponent, destroyer, cells(&["C1", "C2"]))
        .unwrap();
    state.begin().unwrap();
    state
}

#[test]
fn test_sinking_the_last_ship_ends_the_game() {
    let mut state = duel(None);
    assert_eq!(state.phase(), Phase::PlayerTurn);

    assert_eq!(state.take_shot(decode("C1", 4).unwrap()).unwrap(), Outcome::Hit);
    assert_eq!(state.phase(), Phase::OpponentTurn);
    assert_eq!(state.take_shot(decode("D4", 4).unwrap()).unwrap(), Outcome::Miss);
    assert_eq!(
        state.take_shot(decode("C2", 4).unwrap()).unwrap(),
        Outcome::Sunk("Destroyer")
    );

    assert_eq!(state.phase(), Phase::GameOver(GameResult::PlayerWon));
    assert_eq!(state.result(), Some(GameResult::PlayerWon));
    assert!(state.side(Side::Opponent).is_defeated());
    assert!(!state.side(Side::Player).is_defeated());
    assert_eq!(
        state.take_shot(Coordinate::new(0, 0)),
        Err(GameError::WrongPhase(Phase::GameOver(GameResult::PlayerWon)))
    );
    assert_eq!(state.history().len(), 3);
}

#[test]
fn test_repeat_target_does_not_consume_turn() {
    let mut state = duel(Some(5));
    let target = Coordinate::new(3, 3);
    state.take_shot(target).unwrap();
    state.take_shot(Coordinate::new(3, 3)).unwrap();
    assert_eq!(state.phase(), Phase::PlayerTurn);
    assert_eq!(state.turns_remaining(), Some(3));

    assert_eq!(state.take_shot(target), Err(GameError::AlreadyResolved(target)));
    assert_eq!(state.phase(), Phase::PlayerTurn);
    assert_eq!(state.turns_remaining(), Some(3));
    assert_eq!(state.history().len(), 2);
}

#[test]
fn test_out_of_bounds_target_is_an_error() {
    let mut state = duel(None);
    assert_eq!(
        state.take_shot(Coordinate::new(4, 0)),
        Err(GameError::Board(BoardError::OutOfBounds(Coordinate::new(4, 0))))
    );
    assert_eq!(state.phase(), Phase::PlayerTurn);
}

#[test]
fn test_turn_limit_draw() {
    let mut state = duel(Some(2));
    state.take_shot(Coordinate::new(3, 3)).unwrap();
    assert_eq!(state.turns_remaining(), Some(1));
    state.take_shot(Coordinate::new(3, 3)).unwrap();
    assert_eq!(state.result(), Some(GameResult::Draw));
}

#[test]
fn test_winning_shot_beats_turn_limit() {
    let mut state = duel(Some(3));
    state.take_shot(decode("C1", 4).unwrap()).unwrap();
    state.take_shot(decode("D4", 4).unwrap()).unwrap();
    state.take_shot(decode("C2", 4).unwrap()).unwrap();
    assert_eq!(state.result(), Some(GameResult::PlayerWon));
}

#[test]
fn test_zero_turn_limit_means_unlimited() {
    let config = GameConfig::from_sizes(10, &[2], Some(0)).unwrap();
    assert_eq!(config.turn_limit(), None);
}

#[test]
fn test_begin_requires_complete_fleets() {
    let config = GameConfig::from_sizes(6, &[3, 2], None).unwrap();
    let mut state = GameState::new(config).unwrap();
    assert_eq!(state.begin(), Err(GameError::FleetIncomplete(Side::Player)));

    state
        .place_ship(Side::Player, ShipType::sized(3), cells(&["A1", "A2", "A3"]))
        .unwrap();
    state
        .place_ship(Side::Player, ShipType::sized(2), cells(&["B1", "C1"]))
        .unwrap();
    assert_eq!(state.next_ship(Side::Player), None);
    assert_eq!(state.begin(), Err(GameError::FleetIncomplete(Side::Opponent)));
    assert_eq!(state.phase(), Phase::Setup);
}

#[test]
fn test_ships_are_placed_in_fleet_order() {
    let config = GameConfig::from_sizes(6, &[3, 2], None).unwrap();
    let mut state = GameState::new(config).unwrap();
    let err = state
        .place_ship(Side::Player, ShipType::sized(2), cells(&["A1", "A2"]))
        .unwrap_err();
    assert_eq!(
        err,
        GameError::UnexpectedShip {
            expected: Some(ShipType::sized(3)),
            found: ShipType::sized(2),
        }
    );

    // a rejected placement leaves the board untouched
    let err = state
        .place_ship(Side::Player, ShipType::sized(3), cells(&["A1", "A2", "A4"]))
        .unwrap_err();
    assert_eq!(err, GameError::Board(BoardError::Overlap(OverlapKind::Gap)));
    assert!(err.is_recoverable());
    assert_eq!(state.side(Side::Player).board().ship_cell_count(), 0);
    assert_eq!(state.next_ship(Side::Player), Some(ShipType::sized(3)));
}

#[test]
fn test_no_placement_after_setup() {
    let mut state = duel(None);
    assert_eq!(state.begin(), Err(GameError::WrongPhase(Phase::PlayerTurn)));
    let err = state
        .place_ship(Side::Player, ShipType::sized(2), cells(&["D1", "D2"]))
        .unwrap_err();
    assert_eq!(err, GameError::WrongPhase(Phase::PlayerTurn));
    assert!(!err.is_recoverable());
}

#[test]
fn test_no_shots_during_setup() {
    let config = GameConfig::standard();
    let mut state = GameState::new(config).unwrap();
    assert_eq!(
        state.take_shot(Coordinate::new(0, 0)),
        Err(GameError::WrongPhase(Phase::Setup))
    );
}

#[test]
fn test_resign() {
    let mut state = duel(None);
    state.take_shot(Coordinate::new(3, 3)).unwrap();
    assert_eq!(
        state.resign(Side::Opponent),
        Ok(GameResult::Abandoned(Side::Opponent))
    );
    assert_eq!(state.phase(), Phase::GameOver(GameResult::Abandoned(Side::Opponent)));
    assert!(state.resign(Side::Player).is_err());
}

#[test]
fn test_scripted_random_placement() {
    let config = GameConfig::from_sizes(10, &[3], None).unwrap();
    let mut state = GameState::new(config).unwrap();
    // vertical, origin row 2, column 3
    let mut rng = ScriptedRandom::new(vec![1, 2, 3]);
    let ship = state
        .place_ship_randomly(Side::Opponent, ShipType::sized(3), &mut rng)
        .unwrap();
    assert_eq!(ship.cells(), &cells(&["C4", "D4", "E4"])[..]);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn test_config_rejections() {
    assert_eq!(
        GameConfig::from_sizes(10, &[], None),
        Err(BoardError::EmptyFleet)
    );
    assert_eq!(
        GameConfig::from_sizes(4, &[5], None),
        Err(BoardError::InvalidShipLength {
            length: 5,
            board_size: 4
        })
    );
    assert_eq!(
        GameConfig::from_sizes(4, &[4, 4, 4, 4, 1], None),
        Err(BoardError::FleetTooLarge)
    );
    assert_eq!(
        GameConfig::from_sizes(3, &[2], None),
        Err(BoardError::InvalidBoardSize(3))
    );
}

#[test]
fn test_fleet_text_checks_board_size_first() {
    assert_eq!(
        GameConfig::from_fleet_text(3, "5,4,3,3,2", None),
        Err(BoardError::InvalidBoardSize(3))
    );
    assert_eq!(
        GameConfig::from_fleet_text(11, "2", None),
        Err(BoardError::InvalidBoardSize(11))
    );
    assert_eq!(
        GameConfig::from_fleet_text(6, "5,7", None),
        Err(BoardError::Parse(broadside::ParseError::OutOfRange(7)))
    );
    let config = GameConfig::from_fleet_text(6, "4, 3,2", Some(0)).unwrap();
    assert_eq!(config.board_size(), 6);
    assert_eq!(config.total_ship_cells(), 9);
    assert_eq!(config.turn_limit(), None);
}
