//! Uniform sampling of legal moves

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::blocky::{ActionKind, Block, Move, Point};

pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Pixel at the top-left corner of unit cell `(col, row)` of `board`.
fn unit_cell_origin(board: &Block, col: usize, row: usize) -> Point {
    let (x, y) = board.position();
    let unit = board.size() / board.units_per_side() as u32;
    (x + col as u32 * unit, y + row as u32 * unit)
}

/// Find a legal move on `board` and apply it there.
///
/// Picks a uniformly random unit cell and depth, then draws actions from
/// [`ActionKind::ALL`] until one succeeds on the located block. `board` must
/// be a private copy: it holds the result of the move afterwards. The
/// returned move's address resolves to the same block on any board with the
/// same structure as `board` had before the call.
///
/// Returns `None` only if the sampled cell lies outside `board`, which a
/// well-formed board never allows.
pub(crate) fn sample_legal_move(board: &mut Block, rng: &mut StdRng) -> Option<Move> {
    let units = board.units_per_side();
    let col = rng.random_range(0..units);
    let row = rng.random_range(0..units);
    let level = rng.random_range(board.level()..=board.max_depth());
    let point = unit_cell_origin(board, col, row);

    let block = board.locate_mut(point, level)?;
    // Every block admits some legal action: rotate/swap on internal blocks,
    // smash on shallow leaves, paint on unit cells.
    loop {
        let action = ActionKind::random(rng).with_random_payload(rng);
        let mv = Move::new(action, block);
        if action.apply_to(block) {
            return Some(mv);
        }
    }
}
