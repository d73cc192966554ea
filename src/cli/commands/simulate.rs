//! Simulate command - Play a headless game between automated players

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::{
    app::{Game, GameConfig},
    cli::output::{print_kv, print_section, print_subsection},
    pipeline::{GameRunner, MetricsObserver, ProgressObserver},
};

#[derive(Parser, Debug)]
#[command(about = "Play a headless game and report the final scores")]
pub struct SimulateArgs {
    /// Deepest level a block may reach
    #[arg(long, short = 'd', default_value_t = 4)]
    pub max_depth: u32,

    /// Board side length in pixels
    #[arg(long, short = 's', default_value_t = 512)]
    pub size: u32,

    /// Number of random players
    #[arg(long, default_value_t = 2)]
    pub random: usize,

    /// Difficulty of each smart player (comma-separated, e.g. `2,5`)
    #[arg(long, value_delimiter = ',')]
    pub smart: Vec<usize>,

    /// Number of rounds to play
    #[arg(long, short = 'r', default_value_t = 5)]
    pub rounds: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the game result to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl SimulateArgs {
    fn to_config(&self) -> GameConfig {
        let mut config = GameConfig::new(self.max_depth, self.size)
            .with_random_players(self.random)
            .with_smart_players(self.smart.clone())
            .with_rounds(self.rounds);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let config = args.to_config();
    let mut game = Game::create(&config).context("failed to set up the game")?;

    print_section("Players");
    for player in &game.players {
        print_kv(
            &format!("#{} {}", player.id(), player.name()),
            &player.goal().description(),
        );
    }

    let mut runner = GameRunner::new(config.rounds);
    if !args.no_progress {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }
    let metrics_observer = MetricsObserver::new();
    let metrics = metrics_observer.handle();
    runner = runner.with_observer(Box::new(metrics_observer));

    let result = runner.run(&mut game.board, &mut game.players)?;

    print_section("Results");
    print_kv("Rounds", &result.rounds.to_string());
    print_kv("Moves applied", &result.moves_applied.to_string());
    print_kv("Passes", &result.passes.to_string());

    let summary = metrics
        .lock()
        .map_err(|_| anyhow!("metrics summary lock was poisoned"))?;
    print_subsection("Moves by action");
    for (action, count) in &summary.moves_by_action {
        print_kv(action, &count.to_string());
    }

    print_subsection("Final scores");
    let leaders = result.leaders();
    for score in &result.scores {
        let marker = if leaders.contains(&score.id) { " *" } else { "" };
        print_kv(
            &format!("#{} {}", score.id, score.name),
            &format!("{}{marker}", score.score),
        );
    }

    if let Some(export_path) = &args.export {
        result
            .save(export_path)
            .with_context(|| format!("failed to export to {}", export_path.display()))?;
        println!("\n✓ Results exported to: {}", export_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smart_difficulties_are_comma_separated() {
        let args = SimulateArgs::parse_from([
            "simulate", "--max-depth", "2", "--size", "64", "--random", "1", "--smart", "2,5",
            "--seed", "3",
        ]);
        let config = args.to_config();
        assert_eq!(config.smart_difficulties, vec![2, 5]);
        assert_eq!(config.num_players(), 3);
        assert_eq!(config.seed, Some(3));
        assert!(config.validate().is_ok());
    }
}
