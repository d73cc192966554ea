//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the game core and whatever
//! drives it. Players are implemented in [`crate::players`]; observers are
//! implemented in [`crate::pipeline`] or by callers.

pub mod observer;
pub mod player;

pub use observer::Observer;
pub use player::{InputEvent, Player};
