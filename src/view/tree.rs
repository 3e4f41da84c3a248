//! Explorer view-model: flattening, expand state, decoration and row
//! interactions. Rendering lives in `tui::widgets::tree`.

use std::collections::HashSet;

use super::callbacks::ViewEvent;
use super::icons::{self, FileIcon};
use crate::model::{FileNode, NodeStatus};

/// Per-node expand/collapse state. Directories start expanded.
///
/// Only collapsed paths are stored, so a fresh state (or a remount) shows
/// everything open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeState {
    collapsed: HashSet<String>,
}

/// A row in the flattened explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRow<'a> {
    pub node: &'a FileNode,
    /// Root siblings have depth 1.
    pub depth: usize,
    /// Only meaningful for directories.
    pub expanded: bool,
}

/// Per-leaf actions offered next to a file row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    CopyPath,
    ToggleExclude,
    Delete,
}

impl TreeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        !self.collapsed.contains(path)
    }

    /// Flip one directory. No other node is affected.
    pub fn toggle(&mut self, path: &str) {
        if !self.collapsed.remove(path) {
            self.collapsed.insert(path.to_string());
        }
    }

    pub fn expand(&mut self, path: &str) {
        self.collapsed.remove(path);
    }

    pub fn collapse(&mut self, path: &str) {
        self.collapsed.insert(path.to_string());
    }

    /// Row click: directories toggle, selectable leaves request selection.
    pub fn click(&mut self, row: &TreeRow<'_>) -> Option<ViewEvent> {
        let node = row.node;
        if node.is_directory {
            self.toggle(&node.path);
            None
        } else if node.is_selectable() {
            Some(ViewEvent::SelectFile(node.path.clone()))
        } else {
            None
        }
    }

    /// Leaf row action. Never selects or toggles.
    pub fn action(&self, row: &TreeRow<'_>, action: RowAction) -> Option<ViewEvent> {
        if !available_actions(row.node).contains(&action) {
            return None;
        }
        let path = row.node.path.clone();
        Some(match action {
            RowAction::CopyPath => ViewEvent::CopyPath(path),
            RowAction::ToggleExclude => ViewEvent::ToggleExclude(path),
            RowAction::Delete => ViewEvent::DeleteFile(path),
        })
    }
}

/// Actions a row offers. Directories have none; exclusion needs a processed file.
pub fn available_actions(node: &FileNode) -> Vec<RowAction> {
    if node.is_directory {
        return Vec::new();
    }
    let mut actions = vec![RowAction::CopyPath];
    if node.is_processed() {
        actions.push(RowAction::ToggleExclude);
    }
    actions.push(RowAction::Delete);
    actions
}

/// Flatten the visible part of the tree, depth first, keeping child order.
pub fn visible_rows<'a>(nodes: &'a [FileNode], state: &TreeState) -> Vec<TreeRow<'a>> {
    let mut rows = Vec::new();
    push_rows(nodes, 1, state, &mut rows);
    rows
}

fn push_rows<'a>(nodes: &'a [FileNode], depth: usize, state: &TreeState, rows: &mut Vec<TreeRow<'a>>) {
    for node in nodes {
        let expanded = node.is_directory && state.is_expanded(&node.path);
        rows.push(TreeRow {
            node,
            depth,
            expanded,
        });
        if expanded {
            push_rows(&node.children, depth + 1, state, rows);
        }
    }
}

/// Selected rows are files whose path matches the externally selected path.
pub fn is_selected(node: &FileNode, selected_path: Option<&str>) -> bool {
    !node.is_directory && selected_path == Some(node.path.as_str())
}

/// Icon for a row: folders follow expansion, files go through the resolver.
pub fn row_icon(row: &TreeRow<'_>) -> FileIcon {
    if row.node.is_directory {
        icons::folder(row.expanded)
    } else {
        icons::resolve(&row.node.name)
    }
}

/// Cells of indentation for a depth (root level is flush).
pub fn indent_width(depth: usize) -> usize {
    depth.saturating_sub(1) * 2
}

/// Status-dependent presentation of a node. Flags compose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDecoration {
    pub dimmed: bool,
    pub struck: bool,
    pub error: bool,
    pub display_name: String,
    pub tooltip: String,
}

impl RowDecoration {
    pub fn for_node(node: &FileNode) -> Self {
        let mut decoration = Self {
            dimmed: false,
            struck: false,
            error: false,
            display_name: node.name.clone(),
            tooltip: node.path.clone(),
        };

        match node.status {
            Some(NodeStatus::Skipped) => {
                decoration.dimmed = true;
                decoration.tooltip.push_str(" (skipped)");
            }
            Some(NodeStatus::Error) => {
                decoration.error = true;
                decoration.display_name = format!("error: {}", node.name);
                decoration.tooltip.push_str(" (error: unreadable)");
            }
            Some(NodeStatus::Processed) | None => {}
        }

        if node.excluded {
            decoration.dimmed = true;
            decoration.struck = true;
            decoration.tooltip.push_str(" (excluded)");
        }

        decoration
    }
}

/// Char/line counters shown for a processed file, each only when present.
pub fn counters(node: &FileNode) -> (Option<u64>, Option<u64>) {
    if node.is_directory || !node.is_processed() {
        return (None, None);
    }
    (node.chars, node.lines)
}

/// Whether counters are drawn: always with `show_char_count`, else only on the cursor row.
pub fn counters_visible(show_char_count: bool, focused: bool) -> bool {
    show_char_count || focused
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::callbacks::RecordingCallbacks;

    fn file(path: &str, status: Option<NodeStatus>) -> FileNode {
        FileNode::new_file(path, status)
    }

    fn sample() -> Vec<FileNode> {
        vec![
            FileNode::new_dir(
                "src",
                vec![
                    FileNode::new_dir(
                        "src/view",
                        vec![file("src/view/tree.rs", Some(NodeStatus::Processed))],
                    ),
                    file("src/index.ts", Some(NodeStatus::Processed)),
                ],
            ),
            FileNode::new_dir("docs", vec![file("docs/a.md", None)]),
            file("logo.png", Some(NodeStatus::Skipped)),
        ]
    }

    fn paths(rows: &[TreeRow<'_>]) -> Vec<String> {
        rows.iter().map(|r| r.node.path.clone()).collect()
    }

    #[test]
    fn test_all_expanded_by_default() {
        let tree = sample();
        let rows = visible_rows(&tree, &TreeState::new());
        assert_eq!(
            paths(&rows),
            vec!["src", "src/view", "src/view/tree.rs", "src/index.ts", "docs", "docs/a.md", "logo.png"]
        );
        let depths: Vec<_> = rows.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![1, 2, 3, 2, 1, 2, 1]);
    }

    #[test]
    fn test_toggle_only_affects_that_node() {
        let tree = sample();
        let mut state = TreeState::new();
        state.toggle("src/view");

        let rows = visible_rows(&tree, &state);
        assert_eq!(
            paths(&rows),
            vec!["src", "src/view", "src/index.ts", "docs", "docs/a.md", "logo.png"]
        );
        assert!(state.is_expanded("src"));
        assert!(state.is_expanded("docs"));
        assert!(!state.is_expanded("src/view"));

        state.toggle("src/view");
        assert_eq!(visible_rows(&tree, &state).len(), 7);
    }

    #[test]
    fn test_collapsed_child_state_survives_parent_toggle() {
        let tree = sample();
        let mut state = TreeState::new();
        state.collapse("src/view");
        state.collapse("src");
        assert_eq!(paths(&visible_rows(&tree, &state)), vec!["src", "docs", "docs/a.md", "logo.png"]);

        state.expand("src");
        let rows = visible_rows(&tree, &state);
        assert!(!paths(&rows).contains(&"src/view/tree.rs".to_string()));
        assert!(paths(&rows).contains(&"src/index.ts".to_string()));
    }

    #[test]
    fn test_click_directory_toggles_without_event() {
        let tree = sample();
        let mut state = TreeState::new();
        let row = visible_rows(&tree, &state)[0];
        assert_eq!(state.click(&row), None);
        assert!(!state.is_expanded("src"));
    }

    #[test]
    fn test_click_selects_processed_or_unset_leaves() {
        let tree = sample();
        let mut state = TreeState::new();
        let rows = visible_rows(&tree, &TreeState::new());

        assert_eq!(
            state.click(&rows[3]),
            Some(ViewEvent::SelectFile("src/index.ts".into()))
        );
        assert_eq!(
            state.click(&rows[5]),
            Some(ViewEvent::SelectFile("docs/a.md".into()))
        );
    }

    #[test]
    fn test_click_never_selects_skipped_or_error() {
        let tree = vec![
            file("a.rs", Some(NodeStatus::Skipped)),
            file("b.rs", Some(NodeStatus::Error)),
        ];
        let mut state = TreeState::new();
        let mut rec = RecordingCallbacks::default();
        for row in visible_rows(&tree, &TreeState::new()) {
            if let Some(event) = state.click(&row) {
                event.dispatch(&mut rec);
            }
        }
        assert!(rec.calls.is_empty());
        assert_eq!(state, TreeState::new());
    }

    #[test]
    fn test_actions_do_not_select() {
        let tree = vec![file("a.rs", Some(NodeStatus::Processed))];
        let state = TreeState::new();
        let row = visible_rows(&tree, &state)[0];

        assert_eq!(
            state.action(&row, RowAction::CopyPath),
            Some(ViewEvent::CopyPath("a.rs".into()))
        );
        assert_eq!(
            state.action(&row, RowAction::ToggleExclude),
            Some(ViewEvent::ToggleExclude("a.rs".into()))
        );
        assert_eq!(
            state.action(&row, RowAction::Delete),
            Some(ViewEvent::DeleteFile("a.rs".into()))
        );
    }

    #[test]
    fn test_exclude_requires_processed() {
        let tree = vec![file("a.rs", None), file("b.rs", Some(NodeStatus::Error))];
        let state = TreeState::new();
        for row in visible_rows(&tree, &state) {
            assert_eq!(state.action(&row, RowAction::ToggleExclude), None);
            assert!(state.action(&row, RowAction::CopyPath).is_some());
            assert!(state.action(&row, RowAction::Delete).is_some());
        }
    }

    #[test]
    fn test_directories_have_no_actions() {
        let tree = sample();
        let state = TreeState::new();
        let row = visible_rows(&tree, &state)[0];
        assert!(available_actions(row.node).is_empty());
        assert_eq!(state.action(&row, RowAction::Delete), None);
    }

    #[test]
    fn test_selected_matches_files_only() {
        let dir = FileNode::new_dir("src", vec![]);
        let leaf = file("src/index.ts", Some(NodeStatus::Processed));
        assert!(is_selected(&leaf, Some("src/index.ts")));
        assert!(!is_selected(&leaf, Some("src")));
        assert!(!is_selected(&leaf, None));
        assert!(!is_selected(&dir, Some("src")));
    }

    #[test]
    fn test_decorations_compose() {
        let skipped = RowDecoration::for_node(&file("a.bin", Some(NodeStatus::Skipped)));
        assert!(skipped.dimmed && !skipped.struck && !skipped.error);
        assert_eq!(skipped.tooltip, "a.bin (skipped)");

        let error = RowDecoration::for_node(&file("b.rs", Some(NodeStatus::Error)));
        assert!(error.error);
        assert_eq!(error.display_name, "error: b.rs");
        assert_eq!(error.tooltip, "b.rs (error: unreadable)");

        let excluded =
            RowDecoration::for_node(&file("c.rs", Some(NodeStatus::Processed)).with_excluded(true));
        assert!(excluded.dimmed && excluded.struck && !excluded.error);
        assert_eq!(excluded.display_name, "c.rs");
        assert_eq!(excluded.tooltip, "c.rs (excluded)");

        let both =
            RowDecoration::for_node(&file("d.rs", Some(NodeStatus::Error)).with_excluded(true));
        assert!(both.error && both.struck);
        assert_eq!(both.tooltip, "d.rs (error: unreadable) (excluded)");
    }

    #[test]
    fn test_counters_only_for_present_fields() {
        let mut node = file("a.rs", Some(NodeStatus::Processed));
        node.chars = Some(42);
        assert_eq!(counters(&node), (Some(42), None));

        let skipped = file("b.rs", Some(NodeStatus::Skipped)).with_counts(1, 1);
        assert_eq!(counters(&skipped), (None, None));

        assert!(counters_visible(true, false));
        assert!(counters_visible(false, true));
        assert!(!counters_visible(false, false));
    }

    #[test]
    fn test_indent_and_icons() {
        assert_eq!(indent_width(1), 0);
        assert_eq!(indent_width(3), 4);

        let tree = sample();
        let mut state = TreeState::new();
        state.collapse("docs");
        let rows = visible_rows(&tree, &state);
        assert_eq!(row_icon(&rows[0]), icons::folder(true));
        let docs = rows.iter().find(|r| r.node.path == "docs").unwrap();
        assert_eq!(row_icon(docs), icons::folder(false));
        assert_eq!(row_icon(&rows[2]), icons::resolve("tree.rs"));
    }
}
