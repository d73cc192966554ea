//! Goal scoring on flattened boards

use blocky::{
    blocky::{Block, DAFFODIL_DELIGHT, Grid, OLD_OLIVE, PACIFIC_POINT, PALETTE, REAL_RED},
    goal::{BlobGoal, Goal, GoalKind, PerimeterGoal, generate_goals},
};

mod common;

/// Corner cells count once for each edge they touch
#[test]
fn test_perimeter_double_counts_corners() {
    let mut board = Block::board(1, 16, REAL_RED).unwrap();
    board.split_into([REAL_RED; 4]);
    assert_eq!(PerimeterGoal::new(REAL_RED).score(&board), 8);

    let uniform = common::subdivided_board(2, 16, PACIFIC_POINT);
    assert_eq!(PerimeterGoal::new(PACIFIC_POINT).score(&uniform), 16);
}

/// Perimeter only looks at the outer ring of cells
#[test]
fn test_perimeter_ignores_interior() {
    let board = common::mixed_board();
    assert_eq!(PerimeterGoal::new(OLD_OLIVE).score(&board), 4);
    assert_eq!(PerimeterGoal::new(PACIFIC_POINT).score(&board), 3);
    assert_eq!(PerimeterGoal::new(REAL_RED).score(&board), 5);
    assert_eq!(PerimeterGoal::new(DAFFODIL_DELIGHT).score(&board), 4);
}

/// Perimeter scores over every colour add up to the ring size
#[test]
fn test_perimeter_partitions_the_ring() {
    for seed in 0..10 {
        let board = common::random_board(3, 64, seed);
        let total: u32 = PALETTE
            .iter()
            .map(|&color| PerimeterGoal::new(color).score(&board))
            .sum();
        assert_eq!(total, 4 * 8);
    }
}

/// Blob scores follow four-connectivity only
#[test]
fn test_blob_checkerboard() {
    let (r, p) = (REAL_RED, PACIFIC_POINT);
    let grid = Grid::from_rows(&[
        vec![r, p, r, p],
        vec![p, r, p, r],
        vec![r, p, r, p],
        vec![p, r, p, r],
    ]);
    assert_eq!(BlobGoal::new(REAL_RED).score_grid(&grid), 1);
    assert_eq!(BlobGoal::new(PACIFIC_POINT).score_grid(&grid), 1);
}

/// Absent colour scores zero
#[test]
fn test_blob_absent_colour() {
    let board = Block::board(2, 16, OLD_OLIVE).unwrap();
    assert_eq!(BlobGoal::new(REAL_RED).score(&board), 0);
    assert_eq!(BlobGoal::new(OLD_OLIVE).score(&board), 16);
}

/// Largest blob on a mixed board
#[test]
fn test_blob_mixed_board() {
    let board = common::mixed_board();
    assert_eq!(BlobGoal::new(REAL_RED).score(&board), 6);
    assert_eq!(BlobGoal::new(OLD_OLIVE).score(&board), 4);
    assert_eq!(BlobGoal::new(PACIFIC_POINT).score(&board), 2);
}

/// Blob and perimeter never exceed the cell and ring counts
#[test]
fn test_scores_are_bounded() {
    for seed in 0..20 {
        let board = common::random_board(4, 128, seed);
        let grid = board.flatten();
        for color in PALETTE {
            assert!(BlobGoal::new(color).score_grid(&grid) as usize <= grid.count(color));
            assert!(PerimeterGoal::new(color).score_grid(&grid) <= 4 * 16);
        }
    }
}

/// Too many goals for the palette is an error
#[test]
fn test_goal_generation_is_bounded_by_palette() {
    let mut rng = common::rng(5);
    assert_eq!(generate_goals(PALETTE.len(), &mut rng).unwrap().len(), 4);
    assert!(generate_goals(PALETTE.len() + 1, &mut rng).is_err());
}

/// Goal kinds parse from their display names
#[test]
fn test_goal_kind_round_trip() {
    for kind in GoalKind::ALL {
        assert_eq!(kind.to_string().parse::<GoalKind>().unwrap(), kind);
    }
    assert!("diagonal".parse::<GoalKind>().is_err());
}
