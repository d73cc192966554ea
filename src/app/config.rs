//! Configuration types for game creation.

use crate::{Error, Result, blocky::MAX_SUPPORTED_DEPTH};

/// Configuration for setting up a game.
///
/// # Examples
///
/// ```
/// use blocky::app::GameConfig;
///
/// let config = GameConfig::new(3, 256)
///     .with_random_players(2)
///     .with_smart_players(vec![2, 5])
///     .with_rounds(10)
///     .with_seed(42);
/// config.validate()?;
/// # Ok::<(), blocky::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Deepest level a block may reach
    pub max_depth: u32,
    /// Side length of the board in pixels
    pub board_size: u32,
    /// Number of interactive players
    pub num_human: usize,
    /// Number of uniform-random players
    pub num_random: usize,
    /// One stochastic-search player per entry, with that difficulty
    pub smart_difficulties: Vec<usize>,
    /// Rounds to play
    pub rounds: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration for a board of the given depth and size.
    ///
    /// Uses default values for other parameters:
    /// - Players: two random players
    /// - Rounds: 5
    /// - Seed: None (non-deterministic)
    pub fn new(max_depth: u32, board_size: u32) -> Self {
        Self {
            max_depth,
            board_size,
            num_human: 0,
            num_random: 2,
            smart_difficulties: Vec::new(),
            rounds: 5,
            seed: None,
        }
    }

    pub fn with_human_players(mut self, count: usize) -> Self {
        self.num_human = count;
        self
    }

    pub fn with_random_players(mut self, count: usize) -> Self {
        self.num_random = count;
        self
    }

    pub fn with_smart_players(mut self, difficulties: Vec<usize>) -> Self {
        self.smart_difficulties = difficulties;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of players of every kind.
    pub fn num_players(&self) -> usize {
        self.num_human + self.num_random + self.smart_difficulties.len()
    }

    /// Check the configuration before any board or player is built.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(invalid(format!(
                "max depth {} exceeds the supported limit of {MAX_SUPPORTED_DEPTH}",
                self.max_depth
            )));
        }
        let units = 1u32 << self.max_depth;
        if self.board_size == 0 || self.board_size % units != 0 {
            return Err(invalid(format!(
                "board size {} must be a positive multiple of {units}",
                self.board_size
            )));
        }
        if self.num_players() == 0 {
            return Err(invalid("at least one player is required".to_string()));
        }
        if self.smart_difficulties.contains(&0) {
            return Err(invalid("smart player difficulty must be at least 1".to_string()));
        }
        if self.rounds == 0 {
            return Err(invalid("at least one round is required".to_string()));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(4, 512)
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfiguration { message }
}
