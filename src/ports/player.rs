//! Player port - abstraction over interactive and automated players
//!
//! This port defines the interface every player implements, allowing the
//! game driver to work with:
//! - Interactive players fed by input events
//! - Uniform-random players
//! - Stochastic-search players

use serde::{Deserialize, Serialize};

use crate::{
    blocky::{ActionKind, Block, Move, Point},
    goal::Goal,
};

/// Input events a player may react to.
///
/// Decoding raw keyboard or mouse input into these events is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The pointer now rests on this pixel
    PointerMoved(Point),
    /// Select blocks one level closer to the root
    SelectShallower,
    /// Select blocks one level further from the root
    SelectDeeper,
    /// The player wants to perform this action on the selected block
    ChooseAction(ActionKind),
    /// It is this player's turn to move
    Proceed,
}

/// Player trait - Unified interface for all player kinds
///
/// # Examples
///
/// ```
/// use blocky::{
///     blocky::{Block, REAL_RED},
///     goal::BlobGoal,
///     ports::{InputEvent, Player},
///     players::RandomPlayer,
/// };
///
/// let board = Block::board(2, 64, REAL_RED)?;
/// let mut player = RandomPlayer::new(0, Box::new(BlobGoal::new(REAL_RED))).with_seed(7);
///
/// assert!(player.generate_move(&board).is_none());
/// player.process_event(&InputEvent::Proceed);
/// assert!(player.generate_move(&board).is_some());
/// # Ok::<(), blocky::Error>(())
/// ```
pub trait Player: Send {
    /// This player's number.
    fn id(&self) -> usize;

    /// The goal this player is scored against.
    fn goal(&self) -> &dyn Goal;

    /// Short label for reports, e.g. `random` or `smart(5)`.
    fn name(&self) -> String;

    /// The block the player currently has selected on `board`, if any.
    ///
    /// Only interactive players select blocks.
    fn selected_block<'a>(&self, _board: &'a Block) -> Option<&'a Block> {
        None
    }

    /// Update the player's own pending state from an input event.
    fn process_event(&mut self, event: &InputEvent);

    /// Propose a move on `board` without mutating it.
    ///
    /// Returns `None` when the player has nothing to play yet, or passes.
    /// Applying the returned move is the caller's job.
    fn generate_move(&mut self, board: &Block) -> Option<Move>;

    /// Reseed the player's internal random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, for players that draw no random numbers.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
