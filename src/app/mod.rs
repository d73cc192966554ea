//! Application layer: configuration and game setup.
//!
//! # Usage
//!
//! ```
//! use blocky::app::{Game, GameConfig};
//! use blocky::pipeline::GameRunner;
//!
//! let config = GameConfig::new(3, 64).with_rounds(2).with_seed(42);
//! let mut game = Game::create(&config)?;
//! let result = GameRunner::new(config.rounds).run(&mut game.board, &mut game.players)?;
//! assert_eq!(result.total_turns, 4);
//! # Ok::<(), blocky::Error>(())
//! ```

pub mod config;
pub mod setup;

pub use config::GameConfig;
pub use setup::Game;
