//! Observers for the turn runner
//!
//! Observers collect data while a game is played without coupling the
//! runner to specific output formats.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    blocky::Move,
    pipeline::GameResult,
    ports::Observer,
};

/// Progress bar observer - Shows turns played and passes so far
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    passes: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            passes: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_game_start(&mut self, total_turns: usize) -> Result<()> {
        let pb = ProgressBar::new(total_turns as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} turns ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_turn(
        &mut self,
        turn: usize,
        _player_id: usize,
        applied: Option<&Move>,
        _score: u32,
    ) -> Result<()> {
        if applied.is_none() {
            self.passes += 1;
        }
        if let Some(pb) = &self.progress_bar {
            pb.set_position(turn as u64 + 1);
            pb.set_message(format!("passes: {}", self.passes));
        }
        Ok(())
    }

    fn on_game_end(&mut self, _result: &GameResult) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("passes: {}", self.passes));
        }
        Ok(())
    }
}

/// Summary of a game's turn metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub turns: usize,
    pub passes: usize,
    /// Applied moves per action kind, keyed by action name
    pub moves_by_action: BTreeMap<String, usize>,
    /// Score after each of a player's turns, keyed by player id
    pub score_history: BTreeMap<usize, Vec<u32>>,
}

impl MetricsSummary {
    /// Fraction of turns that were passes
    pub fn pass_rate(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            self.passes as f64 / self.turns as f64
        }
    }

    /// Change in a player's score between their first and last turn
    pub fn score_gain(&self, player_id: usize) -> Option<i64> {
        let history = self.score_history.get(&player_id)?;
        let first = *history.first()?;
        let last = *history.last()?;
        Some(i64::from(last) - i64::from(first))
    }
}

/// Metrics observer - Tracks moves, passes and score history
///
/// The runner owns its observers, so the summary is published through a
/// shared handle that stays readable after the observer is boxed.
pub struct MetricsObserver {
    summary: Arc<Mutex<MetricsSummary>>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            summary: Arc::new(Mutex::new(MetricsSummary::default())),
        }
    }

    /// Handle to the summary this observer fills in
    pub fn handle(&self) -> Arc<Mutex<MetricsSummary>> {
        Arc::clone(&self.summary)
    }

    /// Snapshot of the metrics collected so far
    pub fn summary(&self) -> Result<MetricsSummary> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, MetricsSummary>> {
        self.summary.lock().map_err(|_| Error::LockPoisoned {
            resource: "metrics summary".to_string(),
        })
    }

    fn record(&self, player_id: usize, applied: Option<&Move>, score: u32) -> Result<()> {
        let mut summary = self.lock()?;
        summary.turns += 1;
        match applied {
            Some(mv) => {
                *summary
                    .moves_by_action
                    .entry(mv.action.kind().to_string())
                    .or_insert(0) += 1;
            }
            None => summary.passes += 1,
        }
        summary
            .score_history
            .entry(player_id)
            .or_default()
            .push(score);
        Ok(())
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_game_start(&mut self, _total_turns: usize) -> Result<()> {
        *self.lock()? = MetricsSummary::default();
        Ok(())
    }

    fn on_turn(
        &mut self,
        _turn: usize,
        player_id: usize,
        applied: Option<&Move>,
        score: u32,
    ) -> Result<()> {
        self.record(player_id, applied, score)
    }
}
