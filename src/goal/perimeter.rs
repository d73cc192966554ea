//! Border scoring

use super::{Goal, GoalKind};
use crate::blocky::{Color, Grid};

/// Rewards target-coloured unit cells on the outer ring of the board.
///
/// Corner cells sit on both a border row and a border column and are counted
/// once for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerimeterGoal {
    color: Color,
}

impl PerimeterGoal {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Goal for PerimeterGoal {
    fn color(&self) -> Color {
        self.color
    }

    fn kind(&self) -> GoalKind {
        GoalKind::Perimeter
    }

    fn score_grid(&self, grid: &Grid) -> u32 {
        let side = grid.side();
        let Some(edge) = side.checked_sub(1) else {
            return 0;
        };
        let columns = grid.columns();

        let mut total = 0;
        // A 1x1 grid visits its only cell as both edges, four times in all.
        for border in [0, edge] {
            for i in 0..side {
                if columns[i][border] == self.color {
                    total += 1;
                }
                if columns[border][i] == self.color {
                    total += 1;
                }
            }
        }
        total
    }

    fn description(&self) -> String {
        format!(
            "Aim to put the most possible units of {} on the edges.",
            self.color
        )
    }
}
