//! Moves: an action together with the block it targets

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    block::{Block, Point, Rotation, SwapAxis, random_color},
    color::Color,
};

/// The fixed set of actions a player may choose from, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    RotateClockwise,
    RotateCounterClockwise,
    SwapHorizontal,
    SwapVertical,
    Smash,
    Combine,
    Paint,
}

impl ActionKind {
    pub const ALL: [ActionKind; 7] = [
        ActionKind::RotateClockwise,
        ActionKind::RotateCounterClockwise,
        ActionKind::SwapHorizontal,
        ActionKind::SwapVertical,
        ActionKind::Smash,
        ActionKind::Combine,
        ActionKind::Paint,
    ];

    /// Pick one kind uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Fill in the payload: `paint_color` for paint, a fresh seed for smash.
    pub fn with_payload<R: Rng + ?Sized>(self, paint_color: Color, rng: &mut R) -> Action {
        match self {
            ActionKind::RotateClockwise => Action::Rotate(Rotation::Clockwise),
            ActionKind::RotateCounterClockwise => Action::Rotate(Rotation::CounterClockwise),
            ActionKind::SwapHorizontal => Action::Swap(SwapAxis::Horizontal),
            ActionKind::SwapVertical => Action::Swap(SwapAxis::Vertical),
            ActionKind::Smash => Action::Smash { seed: rng.random() },
            ActionKind::Combine => Action::Combine,
            ActionKind::Paint => Action::Paint(paint_color),
        }
    }

    /// Fill in the payload with a random palette colour for paint.
    pub fn with_random_payload<R: Rng + ?Sized>(self, rng: &mut R) -> Action {
        let color = random_color(rng);
        self.with_payload(color, rng)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::RotateClockwise => "rotate-clockwise",
            ActionKind::RotateCounterClockwise => "rotate-counter-clockwise",
            ActionKind::SwapHorizontal => "swap-horizontal",
            ActionKind::SwapVertical => "swap-vertical",
            ActionKind::Smash => "smash",
            ActionKind::Combine => "combine",
            ActionKind::Paint => "paint",
        };
        f.write_str(name)
    }
}

/// A fully specified action.
///
/// Smash carries the seed of its subdivision so that a move evaluated on a
/// copy of the board produces the same tree when applied to the real one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Rotate(Rotation),
    Swap(SwapAxis),
    Smash { seed: u64 },
    Combine,
    Paint(Color),
}

impl Action {
    /// Short name of the action: rotate, swap, smash, combine or paint.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Rotate(_) => "rotate",
            Action::Swap(_) => "swap",
            Action::Smash { .. } => "smash",
            Action::Combine => "combine",
            Action::Paint(_) => "paint",
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Rotate(Rotation::Clockwise) => ActionKind::RotateClockwise,
            Action::Rotate(Rotation::CounterClockwise) => ActionKind::RotateCounterClockwise,
            Action::Swap(SwapAxis::Horizontal) => ActionKind::SwapHorizontal,
            Action::Swap(SwapAxis::Vertical) => ActionKind::SwapVertical,
            Action::Smash { .. } => ActionKind::Smash,
            Action::Combine => ActionKind::Combine,
            Action::Paint(_) => ActionKind::Paint,
        }
    }

    /// Attempt the action on `block`; `false` leaves the block untouched.
    pub fn apply_to(&self, block: &mut Block) -> bool {
        match *self {
            Action::Rotate(rotation) => block.rotate(rotation),
            Action::Swap(axis) => block.swap(axis),
            Action::Smash { seed } => block.smash_seeded(seed),
            Action::Combine => block.combine(),
            Action::Paint(color) => block.paint(color),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Rotate(Rotation::Clockwise) => f.write_str("rotate clockwise"),
            Action::Rotate(Rotation::CounterClockwise) => f.write_str("rotate counter-clockwise"),
            Action::Swap(SwapAxis::Horizontal) => f.write_str("swap horizontal"),
            Action::Swap(SwapAxis::Vertical) => f.write_str("swap vertical"),
            Action::Smash { .. } => f.write_str("smash"),
            Action::Combine => f.write_str("combine"),
            Action::Paint(color) => write!(f, "paint {color}"),
        }
    }
}

/// Identifies a block by its top-left corner and level.
///
/// Locating `position` at `level` returns the block itself, so an address
/// taken on a copy of the board resolves to the matching block on the
/// original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockAddress {
    pub position: Point,
    pub level: u32,
}

impl BlockAddress {
    pub fn of(block: &Block) -> Self {
        BlockAddress {
            position: block.position(),
            level: block.level(),
        }
    }
}

/// An action aimed at a specific block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub target: BlockAddress,
}

impl Move {
    pub fn new(action: Action, target: &Block) -> Self {
        Move {
            action,
            target: BlockAddress::of(target),
        }
    }

    /// The targeted block on `board`, if the address still names one.
    pub fn target_block<'a>(&self, board: &'a Block) -> Option<&'a Block> {
        board
            .locate(self.target.position, self.target.level)
            .filter(|block| BlockAddress::of(block) == self.target)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.target.position;
        write!(f, "{} at ({x}, {y}) level {}", self.action, self.target.level)
    }
}

impl Block {
    /// Apply `mv` to the block it targets within this tree.
    ///
    /// Returns `false` when the target no longer exists or the action is not
    /// legal there; the tree is unchanged in that case.
    pub fn apply(&mut self, mv: &Move) -> bool {
        let target = mv.target;
        match self.locate_mut(target.position, target.level) {
            Some(block) if BlockAddress::of(block) == target => mv.action.apply_to(block),
            _ => false,
        }
    }
}
