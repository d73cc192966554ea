//! Blocky board: quadrant tree, rasterization, spatial lookup and moves

pub mod action;
pub mod block;
pub mod color;
pub mod grid;
pub mod locator;

pub use action::{Action, ActionKind, BlockAddress, Move};
pub use block::{Block, BlockKind, MAX_SUPPORTED_DEPTH, Point, Rotation, SwapAxis};
pub use color::{Color, DAFFODIL_DELIGHT, OLD_OLIVE, PACIFIC_POINT, PALETTE, REAL_RED};
pub use grid::{Grid, flatten};
