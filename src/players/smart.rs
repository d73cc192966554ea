//! Stochastic-search player

use std::collections::BTreeMap;

use rand::{SeedableRng, rngs::StdRng};

use super::sampler::{build_rng, sample_legal_move};
use crate::{
    Error, Result,
    blocky::{Block, Move},
    goal::Goal,
    ports::{InputEvent, Player},
};

/// Samples `difficulty` random legal moves and plays the best one.
///
/// Each candidate is tried on its own copy of the board and scored with the
/// player's goal. Candidates are kept per score value, the most recent trial
/// replacing any earlier one with the same score, so among moves reaching the
/// best score the last one sampled is played. If no candidate beats the
/// current score the player passes.
#[derive(Debug)]
pub struct SmartPlayer {
    id: usize,
    goal: Box<dyn Goal>,
    difficulty: usize,
    proceed: bool,
    rng: StdRng,
}

impl SmartPlayer {
    /// Create a player that evaluates `difficulty` candidates per turn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDifficulty`] if `difficulty` is zero.
    pub fn new(id: usize, goal: Box<dyn Goal>, difficulty: usize) -> Result<Self> {
        if difficulty == 0 {
            return Err(Error::InvalidDifficulty { difficulty });
        }
        Ok(Self {
            id,
            goal,
            difficulty,
            proceed: false,
            rng: build_rng(None),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Run the search on private copies of `board`.
    ///
    /// Returns the winning move (addressed on `board`) only if it strictly
    /// improves the goal score.
    fn search(&mut self, board: &Block) -> Option<Move> {
        let mut trials: BTreeMap<u32, Move> = BTreeMap::new();
        for _ in 0..self.difficulty {
            let mut copy = board.clone();
            if let Some(mv) = sample_legal_move(&mut copy, &mut self.rng) {
                trials.insert(self.goal.score(&copy), mv);
            }
        }

        let (best_score, best) = trials.pop_last()?;
        if best_score <= self.goal.score(board) {
            return None;
        }

        let target = board.locate(best.target.position, best.target.level)?;
        Some(Move::new(best.action, target))
    }
}

impl Player for SmartPlayer {
    fn id(&self) -> usize {
        self.id
    }

    fn goal(&self) -> &dyn Goal {
        self.goal.as_ref()
    }

    fn name(&self) -> String {
        format!("smart({})", self.difficulty)
    }

    fn process_event(&mut self, event: &InputEvent) {
        if *event == InputEvent::Proceed {
            self.proceed = true;
        }
    }

    fn generate_move(&mut self, board: &Block) -> Option<Move> {
        if !self.proceed {
            return None;
        }
        self.proceed = false;
        self.search(board)
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
