use sea_battle::{
    Board, BoardSize, CellState, Coord, Orientation, PlacementError, ShotError, ShotOutcome,
    Vessel,
};

fn small_board() -> Board {
    Board::new(BoardSize::Small)
}

#[test]
fn test_single_cell_vessel_destroyed_and_defeat() {
    let mut board = small_board();
    board
        .place_vessel(Vessel::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board.finish_placement();

    assert_eq!(
        board.apply_shot(Coord::new(0, 0)).unwrap(),
        ShotOutcome::Destroyed
    );
    assert!(board.defeat());
    assert_eq!(
        board.apply_shot(Coord::new(0, 0)).unwrap_err(),
        ShotError::AlreadyTaken
    );
}

#[test]
fn test_two_cell_vessel_hit_then_destroyed() {
    let mut board = small_board();
    board
        .place_vessel(Vessel::new(Coord::new(2, 2), 2, Orientation::Horizontal))
        .unwrap();
    board.finish_placement();

    assert_eq!(board.apply_shot(Coord::new(2, 2)).unwrap(), ShotOutcome::Hit);
    assert!(!board.defeat());
    assert_eq!(
        board.apply_shot(Coord::new(2, 3)).unwrap(),
        ShotOutcome::Destroyed
    );
    assert!(board.defeat());
}

#[test]
fn test_destroyed_in_any_hit_order() {
    let mut board = small_board();
    board
        .place_vessel(Vessel::new(Coord::new(0, 0), 3, Orientation::Horizontal))
        .unwrap();
    board.finish_placement();

    assert_eq!(board.apply_shot(Coord::new(0, 1)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.apply_shot(Coord::new(0, 2)).unwrap(), ShotOutcome::Hit);
    assert_eq!(
        board.apply_shot(Coord::new(0, 0)).unwrap(),
        ShotOutcome::Destroyed
    );
    assert!(board.defeat());
}

#[test]
fn test_placement_out_of_bounds() {
    let mut board = small_board();
    // bow row equals the board dimension
    assert_eq!(
        board
            .place_vessel(Vessel::new(Coord::new(6, 0), 1, Orientation::Horizontal))
            .unwrap_err(),
        PlacementError::OutOfBoundsOrOverlap
    );
    // tail runs past the right edge
    assert_eq!(
        board
            .place_vessel(Vessel::new(Coord::new(0, 4), 3, Orientation::Horizontal))
            .unwrap_err(),
        PlacementError::OutOfBoundsOrOverlap
    );
    // negative bow
    assert_eq!(
        board
            .place_vessel(Vessel::new(Coord::new(-1, 0), 1, Orientation::Vertical))
            .unwrap_err(),
        PlacementError::OutOfBoundsOrOverlap
    );
    // nothing was recorded
    assert_eq!(board.ship_cell_count(), 0);
    assert!(board.vessels().is_empty());
}

#[test]
fn test_placement_overlap_and_halo_rejected() {
    let mut board = small_board();
    board
        .place_vessel(Vessel::new(Coord::new(2, 2), 2, Orientation::Horizontal))
        .unwrap();

    // direct overlap
    assert!(board
        .place_vessel(Vessel::new(Coord::new(2, 3), 1, Orientation::Horizontal))
        .is_err());
    // diagonal neighbor, inside the halo
    assert!(board
        .place_vessel(Vessel::new(Coord::new(1, 1), 1, Orientation::Horizontal))
        .is_err());
    // one row of separation is enough
    assert!(board
        .place_vessel(Vessel::new(Coord::new(4, 2), 1, Orientation::Horizontal))
        .is_ok());
    assert_eq!(board.vessels().len(), 2);
}

#[test]
fn test_halo_rendered_but_not_ship() {
    let mut board = small_board();
    board
        .place_vessel(Vessel::new(Coord::new(2, 2), 1, Orientation::Horizontal))
        .unwrap();

    assert_eq!(board.cell_state(2, 2), CellState::Ship);
    assert_eq!(board.cell_state(1, 1), CellState::Halo);
    assert_eq!(board.cell_state(3, 3), CellState::Halo);
    assert_eq!(board.cell_state(0, 0), CellState::Empty);

    // placement halos disappear when combat starts
    board.finish_placement();
    assert_eq!(board.cell_state(1, 1), CellState::Empty);
    assert_eq!(board.cell_state(2, 2), CellState::Ship);
}

#[test]
fn test_shot_out_of_bounds() {
    let mut board = small_board();
    board
        .place_vessel(Vessel::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board.finish_placement();

    assert_eq!(
        board.apply_shot(Coord::new(6, 0)).unwrap_err(),
        ShotError::OutOfBounds
    );
    assert_eq!(
        board.apply_shot(Coord::new(0, -1)).unwrap_err(),
        ShotError::OutOfBounds
    );
}

#[test]
fn test_miss_recorded_and_not_repeatable() {
    let mut board = small_board();
    board
        .place_vessel(Vessel::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board.finish_placement();

    assert_eq!(
        board.apply_shot(Coord::new(5, 5)).unwrap(),
        ShotOutcome::Miss
    );
    assert_eq!(board.cell_state(5, 5), CellState::Miss);
    assert_eq!(
        board.apply_shot(Coord::new(5, 5)).unwrap_err(),
        ShotError::AlreadyTaken
    );
}

#[test]
fn test_second_shot_leaves_state_unchanged() {
    let mut board = small_board();
    board
        .place_vessel(Vessel::new(Coord::new(2, 2), 2, Orientation::Horizontal))
        .unwrap();
    board.finish_placement();

    board.apply_shot(Coord::new(2, 2)).unwrap();
    let grid_after = board.grid();
    let destroyed_after = board.destroyed_count();
    assert_eq!(
        board.apply_shot(Coord::new(2, 2)).unwrap_err(),
        ShotError::AlreadyTaken
    );
    assert_eq!(board.grid(), grid_after);
    assert_eq!(board.destroyed_count(), destroyed_after);
    assert_eq!(board.vessels()[0].remaining_hits(), 1);
}

#[test]
fn test_destroyed_contour_joins_shot_history() {
    let mut board = small_board();
    board
        .place_vessel(Vessel::new(Coord::new(2, 2), 1, Orientation::Horizontal))
        .unwrap();
    board
        .place_vessel(Vessel::new(Coord::new(5, 5), 1, Orientation::Horizontal))
        .unwrap();
    board.finish_placement();

    assert_eq!(
        board.apply_shot(Coord::new(2, 2)).unwrap(),
        ShotOutcome::Destroyed
    );
    assert!(!board.defeat());

    // every neighbor of the sunk vessel is now excluded and marked
    for (r, c) in [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)] {
        assert_eq!(board.cell_state(r, c), CellState::DestroyedHalo);
        assert_eq!(
            board
                .apply_shot(Coord::new(r as i32, c as i32))
                .unwrap_err(),
            ShotError::AlreadyTaken
        );
    }
    // the sunk cell itself stays a hit
    assert_eq!(board.cell_state(2, 2), CellState::Hit);
    // cells outside the contour are still open
    assert_eq!(
        board.apply_shot(Coord::new(0, 0)).unwrap(),
        ShotOutcome::Miss
    );
}

#[test]
fn test_hidden_board_suppresses_ship_cells() {
    let mut board = small_board();
    board
        .place_vessel(Vessel::new(Coord::new(2, 2), 2, Orientation::Horizontal))
        .unwrap();
    board.finish_placement();
    board.set_hidden(true);

    assert_eq!(board.cell_state(2, 2), CellState::Empty);
    board.apply_shot(Coord::new(2, 2)).unwrap();
    assert_eq!(board.cell_state(2, 2), CellState::Hit);
    assert_eq!(board.cell_state(2, 3), CellState::Empty);
}

#[test]
fn test_is_full_after_dense_placement() {
    let mut board = small_board();
    assert!(!board.is_full());
    // four 1-cell vessels whose halos tile the whole 6x6 board
    for (r, c) in [(1, 1), (1, 4), (4, 1), (4, 4)] {
        board
            .place_vessel(Vessel::new(Coord::new(r, c), 1, Orientation::Horizontal))
            .unwrap();
    }
    assert!(board.is_full());
}

#[test]
fn test_is_out_of_bounds_predicate() {
    let board = small_board();
    assert!(!board.is_out_of_bounds(Coord::new(0, 0)));
    assert!(!board.is_out_of_bounds(Coord::new(5, 5)));
    assert!(board.is_out_of_bounds(Coord::new(6, 0)));
    assert!(board.is_out_of_bounds(Coord::new(0, 6)));
    assert!(board.is_out_of_bounds(Coord::new(-1, 3)));
}
