//! Open command implementation

use std::time::Duration;

use crate::cli::OpenArgs;
use crate::config::Config;
use crate::error::{FilescopeError, Result};
use crate::model::Snapshot;
use crate::tui::{self, App};

/// Run the open command
pub fn run(args: OpenArgs, config: &Config) -> Result<()> {
    let source = args
        .snapshot
        .canonicalize()
        .map_err(|source| FilescopeError::Io {
            path: args.snapshot.clone(),
            source,
        })?;
    let snapshot = Snapshot::load(&source)?;
    if snapshot.is_empty() {
        tracing::warn!(path = %source.display(), "Snapshot contains no files");
    }

    let mut view = config.view.clone();
    if args.show_char_count {
        view.show_char_count = true;
    }

    let mut app = App::new(snapshot, &view).with_source(source);
    tui::run(
        &mut app,
        Duration::from_millis(config.tui.tick_rate_ms),
        config.tui.mouse,
    )?;

    if let Some(path) = &app.workspace.selected_path {
        tracing::info!(path = %path, "Last selected file");
    }
    Ok(())
}
