use serde::{Deserialize, Serialize};

/// Content statistics of a processed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub chars: u64,
    pub lines: u64,
}

/// A processed file as produced by ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique identifier of the file
    pub path: String,

    /// Detected language label (free-form, display only)
    pub language: String,

    pub stats: FileStats,

    /// Marked to be ignored by downstream analysis
    #[serde(default)]
    pub excluded: bool,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, language: impl Into<String>, chars: u64, lines: u64) -> Self {
        Self {
            path: path.into(),
            language: language.into(),
            stats: FileStats { chars, lines },
            excluded: false,
        }
    }

    pub fn with_excluded(mut self, excluded: bool) -> Self {
        self.excluded = excluded;
        self
    }
}
