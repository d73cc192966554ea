//! Observer port - abstraction for watching a game being played
//!
//! This port lets callers collect data about a game without coupling the
//! turn runner to specific output formats or metrics.

use crate::{Result, blocky::Move, pipeline::GameResult};

/// Observer trait for monitoring a game
///
/// # Event Sequence
///
/// 1. `on_game_start(total_turns)` - Once at the beginning
/// 2. `on_turn(...)` - After every player's turn, whether it moved or passed
/// 3. `on_game_end(result)` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use blocky::{blocky::Move, ports::Observer};
///
/// struct PassCounter {
///     passes: usize,
/// }
///
/// impl Observer for PassCounter {
///     fn on_turn(
///         &mut self,
///         _turn: usize,
///         _player_id: usize,
///         applied: Option<&Move>,
///         _score: u32,
///     ) -> blocky::Result<()> {
///         if applied.is_none() {
///             self.passes += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called before the first turn.
    ///
    /// # Parameters
    ///
    /// * `total_turns` - Number of turns that will be played
    fn on_game_start(&mut self, _total_turns: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each turn.
    ///
    /// # Parameters
    ///
    /// * `turn` - Index of the turn (0-based, across all players)
    /// * `player_id` - Player who had the turn
    /// * `applied` - The move applied to the board, or `None` for a pass
    /// * `score` - The player's goal score after the turn
    fn on_turn(
        &mut self,
        _turn: usize,
        _player_id: usize,
        _applied: Option<&Move>,
        _score: u32,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once the last turn has been played.
    fn on_game_end(&mut self, _result: &GameResult) -> Result<()> {
        Ok(())
    }
}
