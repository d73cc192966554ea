//! Largest-region scoring via flood fill

use super::{Goal, GoalKind};
use crate::blocky::{Color, Grid};

/// Rewards the largest 4-connected region of the target colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobGoal {
    color: Color,
}

/// Classification of a unit cell during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Matching,
    NotMatching,
}

impl BlobGoal {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Largest blob found when flood fills are started from the cells of
    /// `order`. Cells already classified are skipped in O(1), so the whole
    /// scan touches each cell a bounded number of times.
    fn largest_blob(&self, grid: &Grid, order: impl Iterator<Item = (usize, usize)>) -> u32 {
        let side = grid.side();
        let mut visited = vec![Visit::Unvisited; side * side];
        order
            .map(|cell| self.undiscovered_blob_size(grid, &mut visited, cell))
            .max()
            .unwrap_or(0)
    }

    /// Size of the blob containing `start` made only of cells not visited
    /// before this call. Out-of-bounds coordinates contribute nothing.
    ///
    /// Uses an explicit work-list so large blobs cannot exhaust the stack.
    fn undiscovered_blob_size(
        &self,
        grid: &Grid,
        visited: &mut [Visit],
        start: (usize, usize),
    ) -> u32 {
        let side = grid.side();
        let columns = grid.columns();
        let mut pending = vec![start];
        let mut size = 0;

        while let Some((col, row)) = pending.pop() {
            // wrapping_sub below turns "-1" into usize::MAX, caught here
            if col >= side || row >= side {
                continue;
            }
            let idx = col * side + row;
            if columns[col][row] != self.color {
                visited[idx] = Visit::NotMatching;
                continue;
            }
            if visited[idx] != Visit::Unvisited {
                continue;
            }

            visited[idx] = Visit::Matching;
            size += 1;
            pending.extend([
                (col.wrapping_sub(1), row),
                (col + 1, row),
                (col, row + 1),
                (col, row.wrapping_sub(1)),
            ]);
        }
        size
    }
}

impl Goal for BlobGoal {
    fn color(&self) -> Color {
        self.color
    }

    fn kind(&self) -> GoalKind {
        GoalKind::Blob
    }

    fn score_grid(&self, grid: &Grid) -> u32 {
        let side = grid.side();
        let cells = (0..side).flat_map(|col| (0..side).map(move |row| (col, row)));
        self.largest_blob(grid, cells)
    }

    fn description(&self) -> String {
        format!("Aim for the largest blob of {}.", self.color)
    }
}
