//! Interactive player driven by input events

use rand::{SeedableRng, rngs::StdRng};

use super::sampler::build_rng;
use crate::{
    blocky::{ActionKind, Block, Move, Point},
    goal::Goal,
    ports::{InputEvent, Player},
};

/// A human player.
///
/// Holds the selection depth, the last pointer position and the action the
/// user most recently asked for. A move is produced once a block lies under
/// the pointer and an action is pending; the pending action is then cleared.
#[derive(Debug)]
pub struct HumanPlayer {
    id: usize,
    goal: Box<dyn Goal>,
    // invariant: level >= 0 (enforced by the unsigned type)
    level: u32,
    pointer: Option<Point>,
    desired_action: Option<ActionKind>,
    rng: StdRng,
}

impl HumanPlayer {
    pub fn new(id: usize, goal: Box<dyn Goal>) -> Self {
        Self {
            id,
            goal,
            level: 0,
            pointer: None,
            desired_action: None,
            rng: build_rng(None),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Depth of the blocks the player is selecting.
    pub fn selection_level(&self) -> u32 {
        self.level
    }

    pub fn desired_action(&self) -> Option<ActionKind> {
        self.desired_action
    }
}

impl Player for HumanPlayer {
    fn id(&self) -> usize {
        self.id
    }

    fn goal(&self) -> &dyn Goal {
        self.goal.as_ref()
    }

    fn name(&self) -> String {
        "human".to_string()
    }

    fn selected_block<'a>(&self, board: &'a Block) -> Option<&'a Block> {
        board.locate(self.pointer?, self.level)
    }

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMoved(point) => self.pointer = Some(point),
            InputEvent::ChooseAction(kind) => self.desired_action = Some(kind),
            InputEvent::SelectShallower => {
                self.level = self.level.saturating_sub(1);
                self.desired_action = None;
            }
            InputEvent::SelectDeeper => {
                self.level += 1;
                self.desired_action = None;
            }
            InputEvent::Proceed => {}
        }
    }

    fn generate_move(&mut self, board: &Block) -> Option<Move> {
        let block = self.selected_block(board)?;
        let kind = self.desired_action?;
        // Humans paint with their own goal colour.
        let action = kind.with_payload(self.goal.color(), &mut self.rng);
        self.desired_action = None;
        Some(Move::new(action, block))
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
