//! Render command - Generate a random board and score it

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    blocky::{Block, Color, Grid},
    cli::output::{palette_scores, print_kv, print_legend, print_score_table, print_section},
    goal::GoalKind,
    players::build_rng,
};

#[derive(Parser, Debug)]
#[command(about = "Generate a random board and print it with its goal scores")]
pub struct RenderArgs {
    /// Deepest level a block may reach
    #[arg(long, short = 'd', default_value_t = 3)]
    pub max_depth: u32,

    /// Board side length in pixels
    #[arg(long, short = 's', default_value_t = 256)]
    pub size: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only score this colour (palette name such as `real-red`, or `#rrggbb`)
    #[arg(long)]
    pub colour: Option<Color>,

    /// Describe and score this goal (`perimeter` or `blob`) for each scored colour
    #[arg(long)]
    pub goal: Option<GoalKind>,

    /// Print JSON instead of a text report
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct RenderExport {
    max_depth: u32,
    size: u32,
    seed: Option<u64>,
    rows: Vec<String>,
    scores: Vec<ColourScores>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    goals: Vec<GoalReport>,
}

#[derive(Serialize)]
struct GoalReport {
    description: String,
    score: u32,
}

#[derive(Serialize)]
struct ColourScores {
    colour: String,
    perimeter: u32,
    blob: u32,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let mut rng = build_rng(args.seed);
    let board = Block::random_board(args.max_depth, args.size, &mut rng)?;
    let grid = board.flatten();
    let scores: Vec<_> = palette_scores(&board)
        .into_iter()
        .filter(|(color, _, _)| args.colour.is_none_or(|wanted| wanted == *color))
        .collect();
    let goals = match args.goal {
        Some(kind) => goal_reports(&grid, kind, scores.iter().map(|(color, _, _)| *color)),
        None => Vec::new(),
    };

    if args.json {
        let export = RenderExport {
            max_depth: args.max_depth,
            size: args.size,
            seed: args.seed,
            rows: grid.to_string().lines().map(str::to_string).collect(),
            scores: scores
                .iter()
                .map(|(color, perimeter, blob)| ColourScores {
                    colour: color.to_string(),
                    perimeter: *perimeter,
                    blob: *blob,
                })
                .collect(),
            goals,
        };
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    print_section("Board");
    print_kv("Max depth", &args.max_depth.to_string());
    print_kv("Size", &format!("{0}x{0} px", args.size));
    print_kv("Unit cells", &format!("{0}x{0}", grid.side()));
    print_kv("Leaves", &board.leaves().len().to_string());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }
    println!();
    print!("{grid}");

    print_section("Legend");
    print_legend();

    print_section("Goal scores");
    print_score_table(&scores);

    if !goals.is_empty() {
        print_section("Goals");
        for report in &goals {
            print_kv(&report.score.to_string(), &report.description);
        }
    }

    Ok(())
}

fn goal_reports(
    grid: &Grid,
    kind: GoalKind,
    colors: impl Iterator<Item = Color>,
) -> Vec<GoalReport> {
    colors
        .map(|color| {
            let goal = kind.into_boxed_goal(color);
            GoalReport {
                description: goal.description(),
                score: goal.score_grid(grid),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocky::{PACIFIC_POINT, REAL_RED};

    #[test]
    fn colour_and_goal_flags_parse() {
        let args = RenderArgs::parse_from(["render", "--colour", "real-red", "--goal", "blob"]);
        assert_eq!(args.colour, Some(REAL_RED));
        assert_eq!(args.goal, Some(GoalKind::Blob));

        let args = RenderArgs::parse_from(["render", "--colour", "#0180b5"]);
        assert_eq!(args.colour, Some(PACIFIC_POINT));
    }

    #[test]
    fn unknown_colour_or_goal_is_rejected() {
        assert!(RenderArgs::try_parse_from(["render", "--colour", "mauve"]).is_err());
        assert!(RenderArgs::try_parse_from(["render", "--goal", "diagonal"]).is_err());
    }

    #[test]
    fn goal_reports_follow_the_requested_kind() {
        let mut board = Block::board(1, 8, REAL_RED).unwrap();
        board.split_into([REAL_RED, REAL_RED, PACIFIC_POINT, REAL_RED]);
        let grid = board.flatten();

        let colors = [REAL_RED, PACIFIC_POINT].into_iter();
        let reports = goal_reports(&grid, GoalKind::Perimeter, colors);
        assert_eq!(reports[0].score, 6);
        assert_eq!(reports[1].score, 2);
        assert!(reports[0].description.contains("Real Red"));
    }
}
