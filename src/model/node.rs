use serde::{Deserialize, Serialize};

/// Outcome of ingesting a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Processed,
    Skipped,
    Error,
}

/// A file or directory in the explorer tree.
///
/// The tree is owned by the host and handed to the views read-only.
/// Directory children are kept in the order they should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    pub path: String,

    pub name: String,

    pub is_directory: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<NodeStatus>,

    #[serde(default)]
    pub excluded: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chars: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<u64>,

    /// Child nodes (always empty for files)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// Create a directory node. The name is the last path component.
    pub fn new_dir(path: impl Into<String>, children: Vec<FileNode>) -> Self {
        let path = path.into();
        Self {
            name: name_from_path(&path),
            path,
            is_directory: true,
            status: None,
            excluded: false,
            chars: None,
            lines: None,
            children,
        }
    }

    /// Create a file node with the given status.
    pub fn new_file(path: impl Into<String>, status: Option<NodeStatus>) -> Self {
        let path = path.into();
        Self {
            name: name_from_path(&path),
            path,
            is_directory: false,
            status,
            excluded: false,
            chars: None,
            lines: None,
            children: Vec::new(),
        }
    }

    pub fn with_counts(mut self, chars: u64, lines: u64) -> Self {
        self.chars = Some(chars);
        self.lines = Some(lines);
        self
    }

    pub fn with_excluded(mut self, excluded: bool) -> Self {
        self.excluded = excluded;
        self
    }

    /// Leaves that are processed, or carry no status, can be opened.
    pub fn is_selectable(&self) -> bool {
        !self.is_directory && matches!(self.status, None | Some(NodeStatus::Processed))
    }

    pub fn is_processed(&self) -> bool {
        self.status == Some(NodeStatus::Processed)
    }

    /// Find a node by path anywhere below (and including) this node.
    pub fn find(&self, path: &str) -> Option<&FileNode> {
        if self.path == path {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(path))
    }

    pub fn find_mut(&mut self, path: &str) -> Option<&mut FileNode> {
        if self.path == path {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(path))
    }

    /// Depth-first visit of this node and all descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a FileNode)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }
}

fn name_from_path(path: &str) -> String {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
        .to_string()
}
