//! CLI subcommands

pub mod render;
pub mod simulate;
