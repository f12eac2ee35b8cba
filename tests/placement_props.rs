use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    random_board, try_random_fleet, Board, BoardSize, Coord, ShotError, Vessel,
};

fn manifest_sum(size: BoardSize) -> usize {
    size.manifest().iter().sum()
}

/// No two vessels may overlap or touch, even diagonally.
fn assert_separated(board: &Board) {
    let vessels = board.vessels();
    for (i, a) in vessels.iter().enumerate() {
        for b in vessels.iter().skip(i + 1) {
            for ca in a.cells() {
                for cb in b.cells() {
                    let touching =
                        (ca.row - cb.row).abs() <= 1 && (ca.col - cb.col).abs() <= 1;
                    assert!(
                        !touching,
                        "vessels touch at {:?} / {:?}",
                        ca, cb
                    );
                }
            }
        }
    }
}

fn assert_in_bounds(board: &Board, vessel: &Vessel) {
    for cell in vessel.cells() {
        assert!(!board.is_out_of_bounds(cell));
    }
}

#[test]
fn test_small_board_placement_100_seeds() {
    for seed in 0..100u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng, BoardSize::Small);
        assert_eq!(board.vessels().len(), BoardSize::Small.manifest().len());
        assert_eq!(board.ship_cell_count(), manifest_sum(BoardSize::Small));
        assert_eq!(manifest_sum(BoardSize::Small), 13);
        for vessel in board.vessels() {
            assert_in_bounds(&board, vessel);
        }
        assert_separated(&board);
    }
}

#[test]
fn test_large_board_placement() {
    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng, BoardSize::Large);
        assert_eq!(board.ship_cell_count(), manifest_sum(BoardSize::Large));
        assert_eq!(manifest_sum(BoardSize::Large), 19);
        assert_separated(&board);
    }
}

#[test]
fn test_exclusions_cleared_before_combat() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = random_board(&mut rng, BoardSize::Small);
    // every cell is shootable exactly once, including former halo cells
    assert!(board.apply_shot(Coord::new(0, 0)).is_ok());
    assert_eq!(
        board.apply_shot(Coord::new(0, 0)).unwrap_err(),
        ShotError::AlreadyTaken
    );
}

#[test]
fn test_single_run_respects_attempt_budget() {
    // a single run either completes the manifest or reports exhaustion;
    // it never loops forever
    for seed in 0..100u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        if let Ok(board) = try_random_fleet(&mut rng, BoardSize::Small) {
            assert_eq!(board.vessels().len(), BoardSize::Small.manifest().len());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_boards_always_satisfy_invariants(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng, BoardSize::Small);
        prop_assert_eq!(board.ship_cell_count(), 13);
        prop_assert_eq!(board.destroyed_count(), 0);
        assert_separated(&board);
    }

    #[test]
    fn shot_idempotence_on_random_boards(
        seed in any::<u64>(),
        row in 0..6i32,
        col in 0..6i32,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng, BoardSize::Small);
        board.apply_shot(Coord::new(row, col)).unwrap();
        let grid = board.grid();
        let destroyed = board.destroyed_count();
        prop_assert_eq!(
            board.apply_shot(Coord::new(row, col)).unwrap_err(),
            ShotError::AlreadyTaken
        );
        prop_assert_eq!(board.grid(), grid);
        prop_assert_eq!(board.destroyed_count(), destroyed);
    }
}
