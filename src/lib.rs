//! filescope - A terminal file explorer with a file size ranking view
//!
//! This crate provides functionality for:
//! - Loading file snapshots (flat records plus an explorer tree)
//! - Ranking files by character count
//! - Collapsible tree exploration with icons, selection, exclusion and deletion
//! - Interactive TUI and plain-text renderings of both views

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod tui;
pub mod view;
pub mod workspace;

// Re-export commonly used types
pub use config::Config;
pub use error::{FilescopeError, Result};
