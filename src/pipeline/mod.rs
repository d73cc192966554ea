//! Game pipeline
//!
//! This module provides:
//! - A headless turn runner playing a fixed number of rounds
//! - Observers recording what happens during a game

pub mod game;
pub mod observers;

pub use game::{GameResult, GameRunner, PlayerScore};
pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver};

pub use crate::ports::Observer;
