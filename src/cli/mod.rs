//! CLI infrastructure for the Blocky toolkit
//!
//! This module provides the command-line interface for rendering random
//! boards and simulating headless games.

pub mod commands;
pub mod output;
