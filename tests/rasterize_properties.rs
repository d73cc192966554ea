//! Properties of flattening a board into unit cells

use blocky::blocky::{Block, DAFFODIL_DELIGHT, Grid, OLD_OLIVE, PACIFIC_POINT, REAL_RED, flatten};

mod common;

/// The grid side is always 2^(max_depth - level), whatever the tree shape
#[test]
fn test_grid_side_matches_depth() {
    for max_depth in 0..=5 {
        for seed in 0..10 {
            let board = common::random_board(max_depth, 32 << max_depth, seed);
            let grid = flatten(&board);
            assert_eq!(grid.side(), 1 << max_depth);
            assert!(grid.columns().iter().all(|c| c.len() == grid.side()));
        }
    }
}

/// Subtrees flatten at their own scale
#[test]
fn test_subtree_grid_side() {
    let board = common::mixed_board();
    for child in board.children() {
        assert_eq!(flatten(child).side(), 2);
    }
}

/// Flattening twice yields identical grids
#[test]
fn test_flatten_is_deterministic() {
    let board = common::random_board(4, 256, 99);
    assert_eq!(flatten(&board), flatten(&board));
    assert_eq!(flatten(&board.clone()), board.flatten());
}

/// A leaf at level L covers exactly 4^(max_depth - L) cells of its colour
#[test]
fn test_leaves_fill_proportionally() {
    for seed in 0..20 {
        let board = common::random_board(4, 128, seed);
        let grid = flatten(&board);

        let mut expected = std::collections::HashMap::new();
        for leaf in board.leaves() {
            let side = leaf.units_per_side();
            *expected.entry(leaf.color().unwrap()).or_insert(0) += side * side;
        }
        for (color, cells) in expected {
            assert_eq!(grid.count(color), cells, "seed {seed}, colour {color}");
        }
    }
}

/// Cells land in quadrant order: top-left at the origin, top-right to its right
#[test]
fn test_mixed_depth_layout() {
    let (o, p, r, d) = (OLD_OLIVE, PACIFIC_POINT, REAL_RED, DAFFODIL_DELIGHT);
    let expected = Grid::from_rows(&[
        vec![o, o, p, p],
        vec![o, o, r, r],
        vec![d, d, r, r],
        vec![d, d, r, r],
    ]);
    assert_eq!(flatten(&common::mixed_board()), expected);
    assert_eq!(expected.to_string(), "OOPP\nOORR\nDDRR\nDDRR\n");
}

/// A fully subdivided uniform board flattens like a single leaf
#[test]
fn test_subdivision_is_invisible_when_uniform() {
    let leaf = Block::board(3, 64, REAL_RED).unwrap();
    let subdivided = common::subdivided_board(3, 64, REAL_RED);
    assert_eq!(subdivided.leaves().len(), 64);
    assert_eq!(flatten(&leaf), flatten(&subdivided));
}
