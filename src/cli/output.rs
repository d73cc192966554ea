//! Output formatting for the CLI

use crate::{
    blocky::{Block, Color, PALETTE},
    goal::GoalKind,
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the glyph legend for the palette
pub fn print_legend() {
    for color in PALETTE {
        print_kv(&color.to_char().to_string(), &color.to_string());
    }
}

/// Goal scores of every palette colour for `board`, in palette order.
pub fn palette_scores(board: &Block) -> Vec<(Color, u32, u32)> {
    let grid = board.flatten();
    PALETTE
        .iter()
        .map(|&color| {
            let perimeter = GoalKind::Perimeter.into_boxed_goal(color).score_grid(&grid);
            let blob = GoalKind::Blob.into_boxed_goal(color).score_grid(&grid);
            (color, perimeter, blob)
        })
        .collect()
}

/// Print a score table with one row per palette colour
pub fn print_score_table(scores: &[(Color, u32, u32)]) {
    println!("  {:20} {:>10} {:>10}", "Colour", "Perimeter", "Blob");
    for (color, perimeter, blob) in scores {
        println!("  {:20} {:>10} {:>10}", color.to_string(), perimeter, blob);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocky::{OLD_OLIVE, PACIFIC_POINT, REAL_RED};

    #[test]
    fn scores_cover_the_palette() {
        let mut board = Block::board(1, 8, REAL_RED).unwrap();
        board.split_into([REAL_RED, REAL_RED, PACIFIC_POINT, OLD_OLIVE]);

        let scores = palette_scores(&board);
        assert_eq!(scores.len(), PALETTE.len());
        assert_eq!(scores[0], (PACIFIC_POINT, 2, 1));
        assert_eq!(scores[1], (REAL_RED, 4, 2));
        assert_eq!(scores[3].1 + scores[3].2, 0);
    }
}
