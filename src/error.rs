//! Error types for the Blocky crate

use thiserror::Error;

/// Main error type for the Blocky crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("max depth {max_depth} exceeds the supported limit of {limit}")]
    MaxDepthTooLarge { max_depth: u32, limit: u32 },

    #[error("board size {size} cannot be split evenly into {units} unit cells per side")]
    IndivisibleBoardSize { size: u32, units: u32 },

    #[error("difficulty must be positive, got {difficulty}")]
    InvalidDifficulty { difficulty: usize },

    #[error("requested {requested} goals but the palette only has {available} colours")]
    NotEnoughColours { requested: usize, available: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid colour '{input}'. Expected one of: {expected}")]
    ParseColor { input: String, expected: String },

    #[error("invalid goal kind '{input}'. Expected one of: {expected}")]
    ParseGoalKind { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{resource} lock was poisoned by a panicking thread")]
    LockPoisoned { resource: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
