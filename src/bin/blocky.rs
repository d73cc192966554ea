//! Blocky CLI - Boards, goals and automated players from the command line
//!
//! This CLI provides:
//! - Rendering a random board with every colour's goal scores
//! - Simulating a headless game between random and smart players

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blocky")]
#[command(version, about = "Quadrant-tree board game toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random board and print it with its goal scores
    Render(blocky::cli::commands::render::RenderArgs),

    /// Play a headless game between automated players
    Simulate(blocky::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => blocky::cli::commands::render::execute(args),
        Commands::Simulate(args) => blocky::cli::commands::simulate::execute(args),
    }
}
