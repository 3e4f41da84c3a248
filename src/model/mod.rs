mod node;
mod record;
mod snapshot;

pub use node::{FileNode, NodeStatus};
pub use record::{FileRecord, FileStats};
pub use snapshot::Snapshot;
