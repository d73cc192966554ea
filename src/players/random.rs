//! Uniform-random player

use rand::{SeedableRng, rngs::StdRng};

use super::sampler::{build_rng, sample_legal_move};
use crate::{
    blocky::{Block, Move},
    goal::Goal,
    ports::{InputEvent, Player},
};

/// Plays a uniformly random legal move whenever it is told to proceed.
#[derive(Debug)]
pub struct RandomPlayer {
    id: usize,
    goal: Box<dyn Goal>,
    proceed: bool,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(id: usize, goal: Box<dyn Goal>) -> Self {
        Self {
            id,
            goal,
            proceed: false,
            rng: build_rng(None),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Player for RandomPlayer {
    fn id(&self) -> usize {
        self.id
    }

    fn goal(&self) -> &dyn Goal {
        self.goal.as_ref()
    }

    fn name(&self) -> String {
        "random".to_string()
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

        let mut copy = board.clone();
        let trial = sample_legal_move(&mut copy, &mut self.rng)?;
        let target = trial.target_block(board)?;
        Some(Move::new(trial.action, target))
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
