//! Spatial lookup agrees with the tree and the rasterized grid

use std::ptr;

use blocky::blocky::{Block, REAL_RED};

mod common;

/// Every unit cell resolves to a leaf that contains it
#[test]
fn test_every_cell_maps_to_a_containing_leaf() {
    for seed in 0..10 {
        let board = common::random_board(3, 64, seed);
        for point in common::unit_cell_origins(&board) {
            let leaf = board.locate(point, board.max_depth()).unwrap();
            assert!(leaf.is_leaf());
            assert!(leaf.contains(point));
        }
    }
}

/// Each leaf is found from exactly the cells it covers
#[test]
fn test_leaf_lookup_is_unique() {
    let board = common::random_board(4, 128, 3);
    let cells = common::unit_cell_origins(&board);
    for leaf in board.leaves() {
        let hits = cells
            .iter()
            .filter(|&&point| ptr::eq(board.locate(point, board.max_depth()).unwrap(), leaf))
            .count();
        let side = leaf.units_per_side();
        assert_eq!(hits, side * side);
    }
}

/// The located leaf's colour is the grid colour of the cell
#[test]
fn test_lookup_agrees_with_grid() {
    for (max_depth, size) in [(3, 8), (3, 24), (2, 100)] {
        let board = common::random_board(max_depth, size, u64::from(size));
        let grid = board.flatten();
        let unit = size / (1 << max_depth);
        for (x, y) in common::unit_cell_origins(&board) {
            let leaf = board.locate((x, y), max_depth).unwrap();
            let cell = grid.get((x / unit) as usize, (y / unit) as usize);
            assert_eq!(leaf.color(), cell);
        }
    }
}

/// Lookup stops at the requested level even when the block has children
#[test]
fn test_lookup_respects_level() {
    let board = common::mixed_board();
    let top = board.locate((40, 5), 0).unwrap();
    assert!(ptr::eq(top, &board));

    let quadrant = board.locate((40, 5), 1).unwrap();
    assert_eq!(quadrant.position(), (32, 0));
    assert!(!quadrant.is_leaf());

    let cell = board.locate((40, 5), 2).unwrap();
    assert_eq!(cell.position(), (32, 0));
    assert_eq!(cell.level(), 2);
}

/// Points outside the board find nothing
#[test]
fn test_lookup_outside_board() {
    let board = Block::board(2, 16, REAL_RED).unwrap();
    assert!(board.locate((16, 0), 1).is_none());
    assert!(board.locate((0, 16), 0).is_none());
    assert!(board.locate((15, 15), 2).is_some());
}

/// Mutable lookup reaches the same block as shared lookup
#[test]
fn test_mutable_lookup_matches_shared_lookup() {
    let mut board = common::random_board(3, 64, 8);
    for point in common::unit_cell_origins(&board) {
        for level in 0..=3 {
            let expected = board.locate(point, level).cloned();
            let found = board.locate_mut(point, level).cloned();
            assert_eq!(found, expected);
        }
    }
}
