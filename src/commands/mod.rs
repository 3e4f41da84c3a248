//! Subcommand implementations

pub mod completions;
pub mod icon;
pub mod open;
pub mod rank;
pub mod tree;
