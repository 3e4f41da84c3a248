use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::node::FileNode;
use super::record::{FileRecord, FileStats};
use crate::error::SnapshotError;

/// Everything the views display: flat records for the ranking and the
/// explorer tree. Produced by an external ingestion step as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub files: Vec<FileRecord>,

    #[serde(default)]
    pub tree: Vec<FileNode>,
}

#[derive(Deserialize)]
struct RawSnapshot {
    files: Option<Vec<FileRecord>>,
    #[serde(default)]
    tree: Vec<FileNode>,
}

impl Snapshot {
    pub fn new(files: Vec<FileRecord>, tree: Vec<FileNode>) -> Self {
        Self { files, tree }
    }

    /// Read, parse and validate a snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json(&content).map_err(|e| match e {
            ParseFailure::Json(source) => SnapshotError::Parse {
                path: path.to_path_buf(),
                source,
            },
            ParseFailure::Invalid(err) => err,
        })?;

        tracing::info!(
            path = %path.display(),
            files = snapshot.files.len(),
            roots = snapshot.tree.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    fn from_json(content: &str) -> Result<Self, ParseFailure> {
        let raw: RawSnapshot = serde_json::from_str(content).map_err(ParseFailure::Json)?;
        let files = match raw.files {
            Some(files) => files,
            None => records_from_tree(&raw.tree),
        };
        let snapshot = Self {
            files,
            tree: raw.tree,
        };
        snapshot.validate().map_err(ParseFailure::Invalid)?;
        Ok(snapshot)
    }

    /// Check the tree invariants and path uniqueness.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut seen = HashSet::new();
        for node in &self.tree {
            validate_node(node, &mut seen)?;
        }

        let mut seen = HashSet::new();
        for record in &self.files {
            if !seen.insert(record.path.as_str()) {
                return Err(SnapshotError::DuplicatePath(record.path.clone()));
            }
        }
        Ok(())
    }

    /// Sum of `stats.chars` over all records, saturating at `u64::MAX`.
    pub fn total_chars(&self) -> u64 {
        self.files
            .iter()
            .fold(0u64, |acc, f| acc.saturating_add(f.stats.chars))
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.tree.is_empty()
    }

    pub fn find_node(&self, path: &str) -> Option<&FileNode> {
        self.tree.iter().find_map(|n| n.find(path))
    }

    pub fn find_record(&self, path: &str) -> Option<&FileRecord> {
        self.files.iter().find(|r| r.path == path)
    }

    /// Flip the exclusion flag of `path` in both the records and the tree.
    ///
    /// Returns the new value, or `None` if the path is unknown.
    pub fn toggle_excluded(&mut self, path: &str) -> Option<bool> {
        let mut result = None;
        if let Some(record) = self.files.iter_mut().find(|r| r.path == path) {
            record.excluded = !record.excluded;
            result = Some(record.excluded);
        }
        if let Some(node) = self.tree.iter_mut().find_map(|n| n.find_mut(path)) {
            node.excluded = match result {
                Some(excluded) => excluded,
                None => !node.excluded,
            };
            result = Some(node.excluded);
        }
        result
    }

    /// Remove `path` from the records and the tree. Returns whether anything was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        let before = self.files.len();
        self.files.retain(|r| r.path != path);
        let removed_record = self.files.len() != before;
        let removed_node = remove_node(&mut self.tree, path);
        removed_record || removed_node
    }
}

enum ParseFailure {
    Json(serde_json::Error),
    Invalid(SnapshotError),
}

fn validate_node<'a>(node: &'a FileNode, seen: &mut HashSet<&'a str>) -> Result<(), SnapshotError> {
    if !seen.insert(node.path.as_str()) {
        return Err(SnapshotError::DuplicatePath(node.path.clone()));
    }
    if !node.is_directory && !node.children.is_empty() {
        return Err(SnapshotError::LeafWithChildren(node.path.clone()));
    }
    for child in &node.children {
        if !child.path.starts_with(node.path.as_str()) {
            return Err(SnapshotError::ForeignChild {
                parent: node.path.clone(),
                child: child.path.clone(),
            });
        }
        validate_node(child, seen)?;
    }
    Ok(())
}

fn remove_node(nodes: &mut Vec<FileNode>, path: &str) -> bool {
    let before = nodes.len();
    nodes.retain(|n| n.path != path);
    if nodes.len() != before {
        return true;
    }
    nodes
        .iter_mut()
        .any(|n| n.is_directory && path.starts_with(n.path.as_str()) && remove_node(&mut n.children, path))
}

/// Build ranking records from the processed leaves of a tree.
fn records_from_tree(tree: &[FileNode]) -> Vec<FileRecord> {
    let mut records = Vec::new();
    for root in tree {
        root.walk(&mut |node| {
            if !node.is_directory && node.is_processed() {
                records.push(FileRecord {
                    path: node.path.clone(),
                    language: language_of(&node.name),
                    stats: FileStats {
                        chars: node.chars.unwrap_or(0),
                        lines: node.lines.unwrap_or(0),
                    },
                    excluded: node.excluded,
                });
            }
        });
    }
    records
}

fn language_of(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_lowercase(),
        _ => "text".to_string(),
    }
}
