//! Quadrant tree representation and the mutation operations of the game

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::color::{Color, PALETTE};
use crate::{Error, Result};

/// Deepest `max_depth` a board may be created with (1024 x 1024 unit cells).
pub const MAX_SUPPORTED_DEPTH: u32 = 10;

/// Pixel coordinate `(x, y)`
pub type Point = (u32, u32);

/// Direction of a rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Axis along which the halves of a block are exchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapAxis {
    /// Exchange the left and right halves
    Horizontal,
    /// Exchange the top and bottom halves
    Vertical,
}

/// Contents of a block: a colour, or exactly four sub-blocks.
///
/// Children are ordered top-right, top-left, bottom-left, bottom-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Leaf(Color),
    Split(Box<[Block; 4]>),
}

/// A square region of the board.
///
/// Cloning a block deep-copies the whole subtree, which is how exploratory
/// code obtains a private board to mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    position: Point,
    size: u32,
    level: u32,
    max_depth: u32,
    kind: BlockKind,
}

impl Block {
    /// Create a leaf block.
    ///
    /// No geometry validation happens here; use [`Block::board`] or
    /// [`Block::random_board`] for roots.
    pub(crate) fn leaf(
        position: Point,
        size: u32,
        level: u32,
        max_depth: u32,
        color: Color,
    ) -> Self {
        debug_assert!(level <= max_depth, "level {level} exceeds max depth {max_depth}");
        Block {
            position,
            size,
            level,
            max_depth,
            kind: BlockKind::Leaf(color),
        }
    }

    /// Create a single-colour board root at the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_depth` exceeds [`MAX_SUPPORTED_DEPTH`] or if
    /// `size` cannot be halved evenly down to unit cells.
    pub fn board(max_depth: u32, size: u32, color: Color) -> Result<Self> {
        if max_depth > MAX_SUPPORTED_DEPTH {
            return Err(Error::MaxDepthTooLarge {
                max_depth,
                limit: MAX_SUPPORTED_DEPTH,
            });
        }
        let units = 1u32 << max_depth;
        if size == 0 || size % units != 0 {
            return Err(Error::IndivisibleBoardSize { size, units });
        }
        Ok(Block::leaf((0, 0), size, 0, max_depth, color))
    }

    /// Generate a random board: a random root colour, smashed once.
    pub fn random_board<R: Rng + ?Sized>(max_depth: u32, size: u32, rng: &mut R) -> Result<Self> {
        let mut board = Block::board(max_depth, size, random_color(rng))?;
        board.smash(rng);
        Ok(board)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    /// Colour of a leaf; `None` for internal blocks.
    pub fn color(&self) -> Option<Color> {
        match self.kind {
            BlockKind::Leaf(color) => Some(color),
            BlockKind::Split(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, BlockKind::Leaf(_))
    }

    /// The four children in fixed order, or an empty slice for a leaf.
    pub fn children(&self) -> &[Block] {
        match &self.kind {
            BlockKind::Leaf(_) => &[],
            BlockKind::Split(children) => &children[..],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Block] {
        match &mut self.kind {
            BlockKind::Leaf(_) => &mut [],
            BlockKind::Split(children) => &mut children[..],
        }
    }

    /// Side of this block measured in unit cells.
    pub fn units_per_side(&self) -> usize {
        1usize << (self.max_depth - self.level)
    }

    /// Every leaf in the subtree, in child order.
    pub fn leaves(&self) -> Vec<&Block> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(block) = stack.pop() {
            if block.is_leaf() {
                leaves.push(block);
            } else {
                stack.extend(block.children().iter().rev());
            }
        }
        leaves
    }

    /// Top-left corners of the four children, in child order.
    pub(crate) fn child_positions(&self) -> [Point; 4] {
        let (x, y) = self.position;
        let half = self.size / 2;
        [(x + half, y), (x, y), (x, y + half), (x + half, y + half)]
    }

    /// Move this block (and its subtree) so its top-left corner is `position`.
    fn move_to(&mut self, position: Point) {
        self.position = position;
        let positions = self.child_positions();
        for (child, position) in self.children_mut().iter_mut().zip(positions) {
            child.move_to(position);
        }
    }

    fn subdivide(&mut self, colors: [Color; 4]) {
        let half = self.size / 2;
        let level = self.level + 1;
        let max_depth = self.max_depth;
        let positions = self.child_positions();
        let children: [Block; 4] = std::array::from_fn(|idx| {
            Block::leaf(positions[idx], half, level, max_depth, colors[idx])
        });
        self.kind = BlockKind::Split(Box::new(children));
    }

    fn can_subdivide(&self) -> bool {
        self.is_leaf() && self.level < self.max_depth
    }

    /// Turn a leaf into four leaves of the given colours (in child order).
    ///
    /// Same legality as [`Block::smash`]; returns `false` otherwise.
    pub fn split_into(&mut self, colors: [Color; 4]) -> bool {
        if !self.can_subdivide() {
            return false;
        }
        self.subdivide(colors);
        true
    }

    /// Give this leaf four randomly coloured children.
    ///
    /// Each new child is smashed again with probability
    /// `exp(-0.25 * child_level)`. Only legal on a leaf above `max_depth`.
    pub fn smash<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.can_subdivide() {
            return false;
        }

        let colors = [(); 4].map(|_| random_color(rng));
        self.subdivide(colors);

        let child_level = f64::from(self.level + 1);
        for child in self.children_mut() {
            if rng.random::<f64>() < (-0.25 * child_level).exp() {
                child.smash(rng);
            }
        }
        true
    }

    /// Smash with a generator rebuilt from `seed`, so the result is replayable.
    pub fn smash_seeded(&mut self, seed: u64) -> bool {
        self.smash(&mut StdRng::seed_from_u64(seed))
    }

    /// Rotate the children (and every descendant) a quarter turn.
    pub fn rotate(&mut self, rotation: Rotation) -> bool {
        let positions = self.child_positions();
        let BlockKind::Split(children) = &mut self.kind else {
            return false;
        };

        match rotation {
            // top-left -> top-right -> bottom-right -> bottom-left -> top-left
            Rotation::Clockwise => children.rotate_left(1),
            Rotation::CounterClockwise => children.rotate_right(1),
        }

        for (child, position) in children.iter_mut().zip(positions) {
            child.rotate(rotation);
            child.move_to(position);
        }
        true
    }

    /// Exchange two halves of this block.
    pub fn swap(&mut self, axis: SwapAxis) -> bool {
        let positions = self.child_positions();
        let BlockKind::Split(children) = &mut self.kind else {
            return false;
        };

        match axis {
            SwapAxis::Horizontal => {
                children.swap(0, 1);
                children.swap(2, 3);
            }
            SwapAxis::Vertical => {
                children.swap(0, 3);
                children.swap(1, 2);
            }
        }

        for (child, position) in children.iter_mut().zip(positions) {
            child.move_to(position);
        }
        true
    }

    /// Collapse four unit-cell children into their majority colour.
    ///
    /// Legal only one level above `max_depth`, when every child is a leaf and
    /// one colour is strictly more frequent than all others.
    pub fn combine(&mut self) -> bool {
        if self.level + 1 != self.max_depth {
            return false;
        }

        let mut counts: Vec<(Color, usize)> = Vec::with_capacity(4);
        for child in self.children() {
            let Some(color) = child.color() else {
                return false;
            };
            match counts.iter_mut().find(|(c, _)| *c == color) {
                Some((_, count)) => *count += 1,
                None => counts.push((color, 1)),
            }
        }

        let Some(&(majority, best)) = counts.iter().max_by_key(|(_, count)| *count) else {
            return false;
        };
        if counts.iter().filter(|(_, count)| *count == best).count() != 1 {
            return false;
        }

        self.kind = BlockKind::Leaf(majority);
        true
    }

    /// Recolour a unit-cell leaf. Painting a cell its own colour is illegal.
    pub fn paint(&mut self, color: Color) -> bool {
        if self.level != self.max_depth {
            return false;
        }
        match &mut self.kind {
            BlockKind::Leaf(current) if *current != color => {
                *current = color;
                true
            }
            _ => false,
        }
    }
}

pub(crate) fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    PALETTE[rng.random_range(0..PALETTE.len())]
}
