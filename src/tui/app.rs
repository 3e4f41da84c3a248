//! Application state for the TUI.

use std::path::PathBuf;

use crate::config::ViewConfig;
use crate::model::Snapshot;
use crate::view::{
    ranked_rows, visible_rows, KeyListeners, RankDialog, RankInteraction, RankRow, RowAction,
    TreeRow, TreeState, ViewEvent,
};
use crate::workspace::Workspace;

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Explorer navigation.
    Normal,
    /// Size ranking dialog is open.
    Rank,
    /// Delete confirmation.
    Confirm,
    /// Help overlay.
    Help,
}

/// Main application state for the TUI.
pub struct App {
    /// Snapshot file the data came from, for the header.
    pub source: Option<PathBuf>,

    /// Owner of the file data; receives all view callbacks.
    pub workspace: Workspace,

    /// Explorer expand/collapse state.
    pub tree_state: TreeState,

    /// Ranking dialog state.
    pub rank_dialog: RankDialog,

    /// Global key listeners.
    pub listeners: KeyListeners,

    /// Cursor index into the visible explorer rows.
    pub cursor: usize,

    /// Keep counters visible on every row.
    pub show_char_count: bool,

    /// Number of emphasized ranks.
    pub highlight_top: usize,

    /// Help overlay visible.
    pub show_help: bool,

    /// Application should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance.
    pub fn new(snapshot: Snapshot, config: &ViewConfig) -> Self {
        Self {
            source: None,
            workspace: Workspace::new(snapshot),
            tree_state: TreeState::new(),
            rank_dialog: RankDialog::new(),
            listeners: KeyListeners::new(),
            cursor: 0,
            show_char_count: config.show_char_count,
            highlight_top: config.highlight_top,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn with_source(mut self, source: PathBuf) -> Self {
        self.source = Some(source);
        self
    }

    pub fn mode(&self) -> Mode {
        if self.workspace.pending_delete.is_some() {
            Mode::Confirm
        } else if self.show_help {
            Mode::Help
        } else if self.workspace.rank_open {
            Mode::Rank
        } else {
            Mode::Normal
        }
    }

    /// Rows currently shown in the explorer.
    pub fn visible_rows(&self) -> Vec<TreeRow<'_>> {
        visible_rows(&self.workspace.snapshot.tree, &self.tree_state)
    }

    /// Rows of the ranking dialog.
    pub fn rank_rows(&self) -> Vec<RankRow<'_>> {
        ranked_rows(&self.workspace.snapshot.files, self.highlight_top)
    }

    /// Get the explorer row under the cursor, if any.
    pub fn cursor_row(&self) -> Option<TreeRow<'_>> {
        self.visible_rows().get(self.cursor).copied()
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor = self.visible_rows().len().saturating_sub(1);
    }

    /// Click the cursor row: toggle a directory or open a file.
    pub fn click_cursor(&mut self) {
        let rows = visible_rows(&self.workspace.snapshot.tree, &self.tree_state);
        let Some(row) = rows.get(self.cursor).copied() else {
            return;
        };
        let event = self.tree_state.click(&row);
        self.dispatch(event);
    }

    /// Run a leaf action on the cursor row.
    pub fn row_action(&mut self, action: RowAction) {
        let rows = self.visible_rows();
        let Some(row) = rows.get(self.cursor) else {
            return;
        };
        let event = self.tree_state.action(row, action);
        self.dispatch(event);
    }

    /// Expand the directory under the cursor.
    pub fn expand_cursor(&mut self) {
        let collapsed_dir = self
            .cursor_row()
            .filter(|r| r.node.is_directory && !r.expanded)
            .map(|r| r.node.path.clone());
        if let Some(path) = collapsed_dir {
            self.tree_state.expand(&path);
        }
    }

    /// Collapse the directory under the cursor, or jump to the parent row.
    pub fn collapse_cursor(&mut self) {
        let rows = self.visible_rows();
        let Some(row) = rows.get(self.cursor) else {
            return;
        };
        if row.node.is_directory && row.expanded {
            let path = row.node.path.clone();
            self.tree_state.collapse(&path);
            return;
        }
        let depth = row.depth;
        let parent = rows[..self.cursor].iter().rposition(|r| r.depth < depth);
        if let Some(parent) = parent {
            self.cursor = parent;
        }
    }

    pub fn open_rank(&mut self) {
        self.workspace.open_rank();
        self.sync();
    }

    pub fn move_rank_cursor(&mut self, delta: isize) {
        let len = self.workspace.snapshot.files.len();
        self.rank_dialog.move_cursor(delta, len);
    }

    pub fn rank_interact(&mut self, interaction: RankInteraction) {
        let events = self.rank_dialog.interact(&self.rank_rows(), interaction);
        self.dispatch(events);
    }

    /// Route a key through the global listeners. Returns whether anyone handled it.
    pub fn dispatch_listeners(&mut self, code: crossterm::event::KeyCode) -> bool {
        let fired = self.listeners.dispatch(code);
        if fired.is_empty() {
            return false;
        }
        let events = self.rank_dialog.handle_listener_hits(&fired);
        let handled = !events.is_empty();
        self.dispatch(events);
        handled
    }

    pub fn confirm_delete(&mut self) {
        self.workspace.confirm_delete();
        self.sync();
    }

    pub fn cancel_delete(&mut self) {
        self.workspace.cancel_delete();
    }

    /// Drop the last status message so the footer falls back to the row tooltip.
    pub fn clear_status(&mut self) {
        self.workspace.status_message = None;
    }

    pub fn toggle_char_count(&mut self) {
        self.show_char_count = !self.show_char_count;
        self.workspace.status_message = Some(if self.show_char_count {
            "Showing counters".to_string()
        } else {
            "Counters on focus only".to_string()
        });
    }

    /// Hand events to the owner, then reconcile local state with it.
    pub fn dispatch(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        for event in events {
            event.dispatch(&mut self.workspace);
        }
        self.sync();
    }

    /// Mirror owner state into view state: dialog listener, cursor bounds.
    fn sync(&mut self) {
        self.rank_dialog
            .sync(self.workspace.rank_open, &self.listeners);

        let rows = self.visible_rows().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
        let files = self.workspace.snapshot.files.len();
        self.rank_dialog.clamp_cursor(files);
    }
}
