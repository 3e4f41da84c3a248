use anyhow::Result;
use clap::Parser;

use filescope::cli::{Cli, Command};
use filescope::commands;
use filescope::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::Open(args) => {
            tracing::info!(?args, "Starting TUI");
            commands::open::run(args, &config)?;
        }
        Command::Tree(args) => {
            tracing::info!(?args, "Printing tree");
            commands::tree::run(args)?;
        }
        Command::Rank(args) => {
            tracing::info!(?args, "Printing ranking");
            commands::rank::run(args)?;
        }
        Command::Icon(args) => {
            commands::icon::run(args);
        }
        Command::Completions(args) => {
            commands::completions::run(args);
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("filescope={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
