//! Mapping pixel coordinates to the blocks that cover them

use super::block::{Block, Point};

impl Block {
    /// Whether `point` lies inside this block or on its top or left edge.
    ///
    /// Bottom and right edges belong to the neighbouring block, so every
    /// pixel of the board is owned by exactly one leaf.
    pub fn contains(&self, (px, py): Point) -> bool {
        let (x, y) = self.position();
        let size = self.size();
        px >= x && py >= y && px - x < size && py - y < size
    }

    /// Index of the child whose quadrant holds `point`.
    fn quadrant_of(&self, (px, py): Point) -> usize {
        let (x, y) = self.position();
        let half = self.size() / 2;
        let right = px >= x + half;
        let lower = py >= y + half;
        match (right, lower) {
            (true, false) => 0,
            (false, false) => 1,
            (false, true) => 2,
            (true, true) => 3,
        }
    }

    /// The block at `level` that covers `point`.
    ///
    /// Descends until the requested level or a leaf is reached, so a level
    /// deeper than the tree yields the deepest leaf under `point`. Returns
    /// `None` only when this block does not contain `point`.
    pub fn locate(&self, point: Point, level: u32) -> Option<&Block> {
        if !self.contains(point) {
            return None;
        }
        let mut current = self;
        while current.level() < level && !current.is_leaf() {
            current = &current.children()[current.quadrant_of(point)];
        }
        Some(current)
    }

    /// Mutable counterpart of [`Block::locate`].
    pub fn locate_mut(&mut self, point: Point, level: u32) -> Option<&mut Block> {
        let path = self.path_to(point, level)?;
        let mut current = self;
        for quadrant in path {
            current = current.children_mut().get_mut(quadrant)?;
        }
        Some(current)
    }

    /// Child indices leading from this block to `locate(point, level)`.
    fn path_to(&self, point: Point, level: u32) -> Option<Vec<usize>> {
        if !self.contains(point) {
            return None;
        }
        let mut path = Vec::new();
        let mut current = self;
        while current.level() < level && !current.is_leaf() {
            let quadrant = current.quadrant_of(point);
            path.push(quadrant);
            current = &current.children()[quadrant];
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use crate::blocky::{
        block::Block,
        color::{DAFFODIL_DELIGHT, OLD_OLIVE, PACIFIC_POINT, REAL_RED},
    };

    fn board() -> Block {
        let mut board = Block::board(2, 16, REAL_RED).unwrap();
        board.split_into([PACIFIC_POINT, REAL_RED, OLD_OLIVE, DAFFODIL_DELIGHT]);
        board.children_mut()[0].split_into([REAL_RED, OLD_OLIVE, PACIFIC_POINT, DAFFODIL_DELIGHT]);
        board
    }

    #[test]
    fn containment_is_half_open() {
        let board = board();
        assert!(board.contains((0, 0)));
        assert!(board.contains((15, 15)));
        assert!(!board.contains((16, 0)));
        assert!(!board.contains((0, 16)));
    }

    #[test]
    fn midpoint_belongs_to_bottom_right() {
        let board = board();
        let block = board.locate((8, 8), 1).unwrap();
        assert_eq!(block.position(), (8, 8));
        assert_eq!(block.color(), Some(DAFFODIL_DELIGHT));

        let block = board.locate((7, 8), 1).unwrap();
        assert_eq!(block.color(), Some(OLD_OLIVE));
    }

    #[test]
    fn level_zero_returns_root() {
        let board = board();
        let root = board.locate((5, 12), 0).unwrap();
        assert!(std::ptr::eq(root, &board));
    }

    #[test]
    fn deeper_levels_clamp_to_leaf() {
        let board = board();
        let block = board.locate((2, 2), 2).unwrap();
        assert_eq!(block.level(), 1);
        assert_eq!(block.color(), Some(REAL_RED));

        let block = board.locate((12, 3), 7).unwrap();
        assert_eq!(block.level(), 2);
        assert_eq!(block.position(), (12, 0));
        assert_eq!(block.color(), Some(REAL_RED));
    }

    #[test]
    fn outside_points_find_nothing() {
        let mut board = board();
        assert!(board.locate((16, 3), 1).is_none());
        assert!(board.locate_mut((3, 99), 1).is_none());
    }

    #[test]
    fn locate_mut_reaches_same_block() {
        let mut board = board();
        let expected = board.locate((9, 5), 2).unwrap().clone();
        let block = board.locate_mut((9, 5), 2).unwrap();
        assert_eq!(*block, expected);
        assert_eq!(block.color(), Some(PACIFIC_POINT));
        assert!(block.paint(REAL_RED));
    }
}
