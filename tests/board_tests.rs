use broadside::coord::decode;
use broadside::{
    resolve_shot, Board, BoardError, Cell, Coordinate, Fleet, Outcome, OverlapKind, ShotResult,
};

fn cells(labels: &[&str]) -> Vec<Coordinate> {
    labels.iter().map(|l| decode(l, 10).unwrap()).collect()
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(10).unwrap();
    for r in 0..10 {
        for c in 0..10 {
            assert_eq!(board.cell(Coordinate::new(r, c)).unwrap(), Cell::Empty);
        }
    }
    assert_eq!(board.unresolved_cells().len(), 100);
    assert!(board.is_defeated());
}

#[test]
fn test_board_size_limits() {
    assert_eq!(Board::new(3).unwrap_err(), BoardError::InvalidBoardSize(3));
    assert_eq!(Board::new(11).unwrap_err(), BoardError::InvalidBoardSize(11));
    assert!(Board::new(4).is_ok());
}

#[test]
fn test_bounds() {
    let board = Board::new(6).unwrap();
    assert!(board.is_within_bounds(Coordinate::new(5, 5)));
    assert!(!board.is_within_bounds(Coordinate::new(6, 0)));
    assert!(!board.is_within_bounds(Coordinate::new(0, 6)));
    assert_eq!(
        board.cell(Coordinate::new(6, 0)).unwrap_err(),
        BoardError::OutOfBounds(Coordinate::new(6, 0))
    );
}

#[test]
fn test_manual_place_then_overlap_rejected() {
    let mut board = Board::new(10).unwrap();
    board.apply_ship(&cells(&["A1", "A2", "A3"])).unwrap();
    for c in cells(&["A1", "A2", "A3"]) {
        assert_eq!(board.cell(c).unwrap(), Cell::ShipPresent);
    }

    let before = board.clone();
    let err = board.apply_ship(&cells(&["A2", "A3", "A4"])).unwrap_err();
    assert_eq!(
        err,
        BoardError::Overlap(OverlapKind::Occupied(Coordinate::new(0, 1)))
    );
    // nothing written, not even the free A4
    assert_eq!(board, before);
    assert_eq!(board.cell(Coordinate::new(0, 3)).unwrap(), Cell::Empty);
}

#[test]
fn test_shape_rules() {
    let board = Board::new(10).unwrap();
    assert!(board.can_place(&cells(&["B2", "C2", "D2"])));
    assert!(board.can_place(&cells(&["D2", "B2", "C2"])));
    assert!(board.can_place(&cells(&["E5"])));
    assert_eq!(
        board.check_placement(&cells(&["A1", "A2", "A4"])),
        Err(BoardError::Overlap(OverlapKind::Gap))
    );
    assert_eq!(
        board.check_placement(&cells(&["A1", "B2", "C3"])),
        Err(BoardError::Overlap(OverlapKind::NotStraight))
    );
    assert_eq!(
        board.check_placement(&cells(&["A1", "A1"])),
        Err(BoardError::Overlap(OverlapKind::Duplicate(Coordinate::new(0, 0))))
    );
    assert_eq!(
        board.check_placement(&[]),
        Err(BoardError::Overlap(OverlapKind::NoCells))
    );
    assert_eq!(
        board.check_placement(&[Coordinate::new(0, 9), Coordinate::new(0, 10)]),
        Err(BoardError::OutOfBounds(Coordinate::new(0, 10)))
    );
}

#[test]
fn test_small_board_bounds_ignore_bitboard_stride() {
    let mut board = Board::new(5).unwrap();
    let off_board = [Coordinate::new(0, 4), Coordinate::new(0, 5)];
    assert_eq!(
        board.apply_ship(&off_board).unwrap_err(),
        BoardError::OutOfBounds(Coordinate::new(0, 5))
    );
    assert_eq!(
        board.apply_shot(Coordinate::new(5, 0)).unwrap_err(),
        BoardError::OutOfBounds(Coordinate::new(5, 0))
    );
    assert_eq!(board.unresolved_cells().len(), 25);
}

#[test]
fn test_apply_shot_transitions() {
    let mut board = Board::new(10).unwrap();
    board.apply_ship(&cells(&["C3", "C4"])).unwrap();

    assert_eq!(board.apply_shot(Coordinate::new(0, 0)).unwrap(), ShotResult::Miss);
    assert_eq!(board.cell(Coordinate::new(0, 0)).unwrap(), Cell::Miss);
    assert_eq!(
        board.apply_shot(Coordinate::new(0, 0)).unwrap(),
        ShotResult::AlreadyResolved
    );

    assert_eq!(board.apply_shot(Coordinate::new(2, 2)).unwrap(), ShotResult::Hit);
    assert_eq!(board.cell(Coordinate::new(2, 2)).unwrap(), Cell::Hit);
    assert_eq!(
        board.apply_shot(Coordinate::new(2, 2)).unwrap(),
        ShotResult::AlreadyResolved
    );
    assert_eq!(board.hit_count(), 1);
    assert_eq!(board.miss_count(), 1);
    assert!(board.has_ship_present());

    board.apply_shot(Coordinate::new(2, 3)).unwrap();
    assert!(!board.has_ship_present());
}

#[test]
fn test_resolved_cells_cannot_take_ships() {
    let mut board = Board::new(10).unwrap();
    board.apply_shot(Coordinate::new(4, 4)).unwrap();
    assert!(!board.can_place(&[Coordinate::new(4, 4), Coordinate::new(4, 5)]));
}

#[test]
fn test_opponent_view_hides_ships() {
    let mut board = Board::new(10).unwrap();
    board.apply_ship(&cells(&["J9", "J10"])).unwrap();
    let c = Coordinate::new(9, 8);
    assert_eq!(board.visible_cell(c, true).unwrap(), Cell::ShipPresent);
    assert_eq!(board.visible_cell(c, false).unwrap(), Cell::Empty);
    board.apply_shot(c).unwrap();
    assert_eq!(board.visible_cell(c, false).unwrap(), Cell::Hit);
}

#[test]
fn test_shot_sequence_scenario() {
    let mut board = Board::new(10).unwrap();
    let mut fleet = Fleet::new();
    broadside::placement::place_manual(
        &mut board,
        &mut fleet,
        broadside::ShipType::new("Cruiser", 3),
        cells(&["A1", "A2", "A3"]),
    )
    .unwrap();

    let a1 = decode("A1", 10).unwrap();
    let a2 = decode("A2", 10).unwrap();
    let a3 = decode("A3", 10).unwrap();
    assert_eq!(resolve_shot(a1, &mut board, &mut fleet).unwrap(), Outcome::Hit);
    assert_eq!(resolve_shot(a2, &mut board, &mut fleet).unwrap(), Outcome::Hit);
    assert_eq!(
        resolve_shot(a3, &mut board, &mut fleet).unwrap(),
        Outcome::Sunk("Cruiser")
    );
    assert_eq!(
        resolve_shot(a1, &mut board, &mut fleet).unwrap(),
        Outcome::AlreadyResolved
    );

    // every original cell carries the sunk marker
    for c in [a1, a2, a3] {
        assert_eq!(board.cell(c).unwrap(), Cell::SunkMarker);
    }
    assert_eq!(board.sunk_count(), 3);
    assert!(fleet.is_defeated());
    assert!(board.is_defeated());
}

#[test]
fn test_ship_cells_iterates_row_major() {
    let mut board = Board::new(10).unwrap();
    board.apply_ship(&cells(&["E2", "D2"])).unwrap();
    board.apply_ship(&cells(&["A9", "A10"])).unwrap();
    let found: Vec<_> = board.ship_cells().collect();
    assert_eq!(found, cells(&["A9", "A10", "D2", "E2"]));
    assert_eq!(board.ship_cell_count(), 4);
}

#[test]
fn test_shot_at_ship_without_owner_leaves_state_alone() {
    let mut board = Board::new(10).unwrap();
    let mut fleet = Fleet::new();
    // cells marked on the board but never registered in the fleet
    board.apply_ship(&cells(&["B2", "B3"])).unwrap();
    let before = board.clone();

    let target = decode("B3", 10).unwrap();
    assert_eq!(
        resolve_shot(target, &mut board, &mut fleet),
        Err(BoardError::UnknownShipHit(target))
    );
    assert_eq!(board, before);
    assert_eq!(board.cell(target).unwrap(), Cell::ShipPresent);
    assert!(fleet.is_empty());
}

#[test]
fn test_errors_name_cells_by_label() {
    let board = Board::new(10).unwrap();
    let err = board.cell(Coordinate::new(10, 0)).unwrap_err();
    assert_eq!(err.to_string(), "K1 is off the board");
    let err = BoardError::Overlap(OverlapKind::Occupied(Coordinate::new(0, 1)));
    assert_eq!(err.to_string(), "Invalid placement: cell A2 is already taken");
}
