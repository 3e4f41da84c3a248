use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// filescope - A terminal file explorer with a file size ranking view
#[derive(Parser, Debug)]
#[command(name = "filescope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Explore a snapshot interactively
    Open(OpenArgs),

    /// Print the explorer tree of a snapshot
    Tree(TreeArgs),

    /// Print files ranked by character count
    Rank(RankArgs),

    /// Show the icon resolved for file names
    Icon(IconArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Show char/line counters on every row
    #[arg(long)]
    pub show_char_count: bool,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Mark this file as selected
    #[arg(short, long, value_name = "PATH")]
    pub selected: Option<String>,
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Show only the top N files
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct IconArgs {
    /// File names to resolve
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}
