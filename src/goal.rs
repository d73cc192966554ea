//! Scoring goals
//!
//! A goal pairs a target colour with a scoring strategy. Two strategies exist:
//! - [`PerimeterGoal`]: target-coloured unit cells along the border
//! - [`BlobGoal`]: the largest 4-connected region of the target colour
//!
//! Both score the rasterized board (see [`crate::blocky::flatten`]).

pub mod blob;
pub mod perimeter;

use std::{fmt, str::FromStr};

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

pub use blob::BlobGoal;
pub use perimeter::PerimeterGoal;

use crate::{
    Error, Result,
    blocky::{Block, Color, Grid, PALETTE},
};

/// A player's objective: a target colour plus a way of scoring the board.
pub trait Goal: Send + fmt::Debug {
    /// The colour this goal rewards.
    fn color(&self) -> Color;

    /// Which scoring strategy this goal uses.
    fn kind(&self) -> GoalKind;

    /// Score an already-flattened board.
    fn score_grid(&self, grid: &Grid) -> u32;

    /// Current score of `board` for this goal. Never negative.
    fn score(&self, board: &Block) -> u32 {
        self.score_grid(&board.flatten())
    }

    /// One-line description shown to players.
    fn description(&self) -> String;
}

/// The available scoring strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalKind {
    Perimeter,
    Blob,
}

impl GoalKind {
    pub const ALL: [GoalKind; 2] = [GoalKind::Perimeter, GoalKind::Blob];

    /// Creates a boxed goal of this kind targeting `color`
    pub fn into_boxed_goal(self, color: Color) -> Box<dyn Goal> {
        match self {
            GoalKind::Perimeter => Box::new(PerimeterGoal::new(color)),
            GoalKind::Blob => Box::new(BlobGoal::new(color)),
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalKind::Perimeter => "perimeter",
            GoalKind::Blob => "blob",
        };
        f.write_str(label)
    }
}

impl FromStr for GoalKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perimeter" | "edges" => Ok(GoalKind::Perimeter),
            "blob" => Ok(GoalKind::Blob),
            _ => Err(Error::ParseGoalKind {
                input: s.to_string(),
                expected: "perimeter, blob".to_string(),
            }),
        }
    }
}

/// Generate `count` goals of one randomly chosen kind, each with a distinct
/// palette colour.
///
/// # Errors
///
/// Returns [`Error::NotEnoughColours`] if `count` exceeds the palette size.
pub fn generate_goals<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<Box<dyn Goal>>> {
    if count > PALETTE.len() {
        return Err(Error::NotEnoughColours {
            requested: count,
            available: PALETTE.len(),
        });
    }

    let kind = GoalKind::ALL[rng.random_range(0..GoalKind::ALL.len())];
    let mut colors = PALETTE;
    colors.shuffle(rng);

    Ok(colors
        .into_iter()
        .take(count)
        .map(|color| kind.into_boxed_goal(color))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::blocky::REAL_RED;

    #[test]
    fn generated_goals_share_kind_and_differ_in_colour() {
        let mut rng = StdRng::seed_from_u64(11);
        for count in 0..=PALETTE.len() {
            let goals = generate_goals(count, &mut rng).unwrap();
            assert_eq!(goals.len(), count);

            let colors: HashSet<Color> = goals.iter().map(|g| g.color()).collect();
            assert_eq!(colors.len(), count);

            let kinds: HashSet<GoalKind> = goals.iter().map(|g| g.kind()).collect();
            assert!(kinds.len() <= 1);
        }
    }

    #[test]
    fn too_many_goals_is_an_error() {
        let mut rng = StdRng::seed_from_u64(11);
        assert!(matches!(
            generate_goals(PALETTE.len() + 1, &mut rng),
            Err(Error::NotEnoughColours {
                requested: 5,
                available: 4
            })
        ));
    }

    #[test]
    fn kinds_round_trip_through_strings() {
        for kind in GoalKind::ALL {
            assert_eq!(kind.to_string().parse::<GoalKind>().unwrap(), kind);
        }
        assert!("corners".parse::<GoalKind>().is_err());
    }

    #[test]
    fn boxed_goals_report_their_kind() {
        let goal = GoalKind::Blob.into_boxed_goal(REAL_RED);
        assert_eq!(goal.kind(), GoalKind::Blob);
        assert_eq!(goal.color(), REAL_RED);
    }
}
