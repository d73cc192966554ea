//! Blocky: a quadrant-tree tile game
//!
//! This crate provides:
//! - The quadrant-tree board and its moves (rotate, swap, smash, combine, paint)
//! - Rasterization of a board into a grid of unit cells
//! - Perimeter and blob goals scored on that grid
//! - Spatial lookup of the block under a pixel at a given depth
//! - Human, random and stochastic-search players
//! - A headless turn runner with observers, and a command-line front end

pub mod app;
pub mod blocky;
pub mod cli;
pub mod error;
pub mod goal;
pub mod pipeline;
pub mod players;
pub mod ports;

pub use blocky::{Block, Color, Grid, Move, flatten};
pub use error::{Error, Result};
pub use goal::{Goal, GoalKind};
