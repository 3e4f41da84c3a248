//! Owner of the loaded snapshot.
//!
//! The views request changes through [`ViewCallbacks`]; the workspace applies
//! them to its in-memory snapshot. Deletion is staged until confirmed.

use crate::model::Snapshot;
use crate::view::ViewCallbacks;

#[derive(Debug, Default)]
pub struct Workspace {
    pub snapshot: Snapshot,

    /// Path currently opened from the explorer or the ranking.
    pub selected_path: Option<String>,

    /// Whether the ranking dialog should be shown.
    pub rank_open: bool,

    /// Delete request waiting for confirmation.
    pub pending_delete: Option<String>,

    /// Last copied path (stands in for the system clipboard).
    pub clipboard: Option<String>,

    /// Status message to display.
    pub status_message: Option<String>,
}

impl Workspace {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    pub fn open_rank(&mut self) {
        self.rank_open = true;
    }

    /// Apply the staged delete.
    pub fn confirm_delete(&mut self) {
        let Some(path) = self.pending_delete.take() else {
            return;
        };
        if self.snapshot.remove(&path) {
            tracing::info!(%path, "Removed file from snapshot");
            if self.selected_path.as_deref() == Some(path.as_str()) {
                self.selected_path = None;
            }
            self.status_message = Some(format!("Removed {}", path));
        } else {
            tracing::warn!(%path, "Delete requested for unknown path");
            self.status_message = Some(format!("Not found: {}", path));
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.pending_delete.take().is_some() {
            self.status_message = Some("Delete cancelled".to_string());
        }
    }
}

impl ViewCallbacks for Workspace {
    fn on_select_file(&mut self, path: &str) {
        tracing::debug!(path, "Select file");
        self.selected_path = Some(path.to_string());
        self.status_message = Some(format!("Opened {}", path));
    }

    fn on_copy_path(&mut self, path: &str) {
        tracing::debug!(path, "Copy path");
        self.clipboard = Some(path.to_string());
        self.status_message = Some(format!("Copied path: {}", path));
    }

    fn on_delete_file(&mut self, path: &str) {
        tracing::debug!(path, "Delete requested");
        self.pending_delete = Some(path.to_string());
    }

    fn on_toggle_exclude(&mut self, path: &str) {
        match self.snapshot.toggle_excluded(path) {
            Some(excluded) => {
                tracing::debug!(path, excluded, "Toggled exclusion");
                self.status_message = Some(if excluded {
                    format!("Excluded {}", path)
                } else {
                    format!("Included {}", path)
                });
            }
            None => tracing::warn!(path, "Exclusion toggled for unknown path"),
        }
    }

    fn on_close(&mut self) {
        tracing::debug!("Close ranking");
        self.rank_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileNode, FileRecord, NodeStatus};

    fn workspace() -> Workspace {
        Workspace::new(Snapshot::new(
            vec![FileRecord::new("src/a.rs", "rust", 10, 1)],
            vec![FileNode::new_dir(
                "src",
                vec![FileNode::new_file("src/a.rs", Some(NodeStatus::Processed)).with_counts(10, 1)],
            )],
        ))
    }

    #[test]
    fn test_select_and_copy() {
        let mut ws = workspace();
        ws.on_select_file("src/a.rs");
        ws.on_copy_path("src/a.rs");
        assert_eq!(ws.selected_path.as_deref(), Some("src/a.rs"));
        assert_eq!(ws.clipboard.as_deref(), Some("src/a.rs"));
    }

    #[test]
    fn test_delete_is_staged_until_confirmed() {
        let mut ws = workspace();
        ws.on_select_file("src/a.rs");
        ws.on_delete_file("src/a.rs");
        assert!(ws.snapshot.find_record("src/a.rs").is_some());

        ws.confirm_delete();
        assert!(ws.pending_delete.is_none());
        assert!(ws.snapshot.find_record("src/a.rs").is_none());
        assert!(ws.snapshot.find_node("src/a.rs").is_none());
        assert!(ws.selected_path.is_none());
    }

    #[test]
    fn test_cancel_delete_keeps_file() {
        let mut ws = workspace();
        ws.on_delete_file("src/a.rs");
        ws.cancel_delete();
        assert!(ws.snapshot.find_record("src/a.rs").is_some());
        assert_eq!(ws.status_message.as_deref(), Some("Delete cancelled"));
    }

    #[test]
    fn test_toggle_exclude_and_close() {
        let mut ws = workspace();
        ws.on_toggle_exclude("src/a.rs");
        assert!(ws.snapshot.find_record("src/a.rs").unwrap().excluded);

        ws.open_rank();
        ws.on_close();
        assert!(!ws.rank_open);
    }
}
