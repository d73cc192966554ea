//! Common test utilities for the blocky test suite.
//!
//! This module provides board fixtures shared across integration tests.

#![allow(dead_code)]

use blocky::blocky::{Block, Color, DAFFODIL_DELIGHT, OLD_OLIVE, PACIFIC_POINT, REAL_RED};
use rand::{SeedableRng, rngs::StdRng};

/// Deterministic generator for a test case.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A random board generated from `seed`.
pub fn random_board(max_depth: u32, size: u32, seed: u64) -> Block {
    Block::random_board(max_depth, size, &mut rng(seed)).unwrap()
}

/// A board of depth 2 mixing leaves at every level.
///
/// ```text
/// OOPP
/// OORR
/// DDRR
/// DDRR
/// ```
pub fn mixed_board() -> Block {
    let mut board = Block::board(2, 64, REAL_RED).unwrap();
    board.split_into([REAL_RED, OLD_OLIVE, DAFFODIL_DELIGHT, REAL_RED]);
    board.children_mut()[0].split_into([PACIFIC_POINT, PACIFIC_POINT, REAL_RED, REAL_RED]);
    board
}

/// A uniform board fully subdivided down to unit cells.
pub fn subdivided_board(max_depth: u32, size: u32, color: Color) -> Block {
    fn subdivide(block: &mut Block, color: Color) {
        if block.level() < block.max_depth() {
            block.split_into([color; 4]);
            for child in block.children_mut() {
                subdivide(child, color);
            }
        }
    }

    let mut board = Block::board(max_depth, size, color).unwrap();
    subdivide(&mut board, color);
    board
}

/// Every unit-cell origin of `board`, row by row.
pub fn unit_cell_origins(board: &Block) -> Vec<(u32, u32)> {
    let units = board.units_per_side() as u32;
    let unit = board.size() / units;
    let (x0, y0) = board.position();
    (0..units)
        .flat_map(|row| (0..units).map(move |col| (x0 + col * unit, y0 + row * unit)))
        .collect()
}
