//! Rasterization of a quadrant tree into unit cells

use std::fmt;

use super::{
    block::{Block, BlockKind},
    color::Color,
};

/// Square matrix of unit-cell colours, stored column by column.
///
/// `get(i, j)` is the cell at column `i`, row `j`; `(0, 0)` is the top-left
/// unit cell of the flattened block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Vec<Color>>,
}

impl Grid {
    /// Build a grid from explicit columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns do not form a square.
    pub fn from_columns(columns: Vec<Vec<Color>>) -> Self {
        let side = columns.len();
        assert!(
            columns.iter().all(|column| column.len() == side),
            "grid must be square ({side} columns)"
        );
        Grid { columns }
    }

    /// Build a grid from rows as they read on screen, top row first.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square.
    pub fn from_rows(rows: &[Vec<Color>]) -> Self {
        let side = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == side),
            "grid must be square ({side} rows)"
        );
        let columns = (0..side)
            .map(|col| rows.iter().map(|row| row[col]).collect())
            .collect();
        Grid::from_columns(columns)
    }

    /// Number of unit cells along one side.
    pub fn side(&self) -> usize {
        self.columns.len()
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Color> {
        self.columns.get(col)?.get(row).copied()
    }

    pub fn columns(&self) -> &[Vec<Color>] {
        &self.columns
    }

    /// Number of cells holding `color`.
    pub fn count(&self, color: Color) -> usize {
        self.columns
            .iter()
            .flatten()
            .filter(|&&cell| cell == color)
            .count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side() {
            let line: String = self.columns.iter().map(|column| column[row].to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Flatten `block` into a grid of side `2^(max_depth - level)`.
///
/// A leaf fills its whole square with its colour. An internal block stacks
/// each column of its top-left child over the matching column of its
/// bottom-left child, and likewise top-right over bottom-right, then places
/// the left half before the right half.
pub fn flatten(block: &Block) -> Grid {
    Grid {
        columns: flatten_columns(block),
    }
}

fn flatten_columns(block: &Block) -> Vec<Vec<Color>> {
    let children = match block.kind() {
        BlockKind::Leaf(color) => {
            let side = block.units_per_side();
            return vec![vec![*color; side]; side];
        }
        BlockKind::Split(children) => children,
    };

    let [top_right, top_left, bottom_left, bottom_right] = children.each_ref().map(flatten_columns);

    let left = top_left.into_iter().zip(bottom_left).map(stack);
    let right = top_right.into_iter().zip(bottom_right).map(stack);
    left.chain(right).collect()
}

fn stack((mut upper, lower): (Vec<Color>, Vec<Color>)) -> Vec<Color> {
    upper.extend(lower);
    upper
}

impl Block {
    /// Rasterize this block; see [`flatten`].
    pub fn flatten(&self) -> Grid {
        flatten(self)
    }
}
