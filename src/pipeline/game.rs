//! Headless turn runner

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    blocky::Block,
    ports::{InputEvent, Observer, Player},
};

/// Final standing of one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub id: usize,
    pub name: String,
    pub goal: String,
    pub score: u32,
}

/// Result of a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    /// Rounds played (every player has one turn per round)
    pub rounds: usize,

    /// Turns played across all players
    pub total_turns: usize,

    /// Turns whose move was applied to the board
    pub moves_applied: usize,

    /// Turns with no move, or with a move the board rejected
    pub passes: usize,

    /// Final goal score of each player, in id order
    pub scores: Vec<PlayerScore>,
}

impl GameResult {
    /// Ids of the players sharing the highest score.
    pub fn leaders(&self) -> Vec<usize> {
        let Some(best) = self.scores.iter().map(|s| s.score).max() else {
            return Vec::new();
        };
        self.scores
            .iter()
            .filter(|s| s.score == best)
            .map(|s| s.id)
            .collect()
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a fixed number of rounds on a live board
pub struct GameRunner {
    rounds: usize,
    observers: Vec<Box<dyn Observer>>,
}

impl GameRunner {
    /// Create a runner that plays `rounds` rounds
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play the game.
    ///
    /// Each turn the player is told to proceed and asked for a move. Only
    /// this method mutates `board`, and only by applying the returned move.
    pub fn run(
        &mut self,
        board: &mut Block,
        players: &mut [Box<dyn Player>],
    ) -> Result<GameResult> {
        let total_turns = self.rounds * players.len();
        for observer in &mut self.observers {
            observer.on_game_start(total_turns)?;
        }

        let mut moves_applied = 0;
        let mut passes = 0;
        let mut turn = 0;

        for _ in 0..self.rounds {
            for player in players.iter_mut() {
                player.process_event(&InputEvent::Proceed);
                let applied = player
                    .generate_move(board)
                    .filter(|mv| board.apply(mv));

                match applied {
                    Some(_) => moves_applied += 1,
                    None => passes += 1,
                }

                let score = player.goal().score(board);
                for observer in &mut self.observers {
                    observer.on_turn(turn, player.id(), applied.as_ref(), score)?;
                }
                turn += 1;
            }
        }

        let scores = players
            .iter()
            .map(|player| PlayerScore {
                id: player.id(),
                name: player.name(),
                goal: player.goal().description(),
                score: player.goal().score(board),
            })
            .collect();

        let result = GameResult {
            rounds: self.rounds,
            total_turns,
            moves_applied,
            passes,
            scores,
        };

        for observer in &mut self.observers {
            observer.on_game_end(&result)?;
        }
        Ok(result)
    }
}
