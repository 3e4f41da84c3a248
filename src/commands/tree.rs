//! Tree command implementation

use crate::cli::TreeArgs;
use crate::error::Result;
use crate::model::Snapshot;
use crate::view::text::format_tree;
use crate::view::TreeState;

/// Run the tree command
pub fn run(args: TreeArgs) -> Result<()> {
    let snapshot = Snapshot::load(&args.snapshot)?;

    // Every directory starts expanded
    let output = format_tree(&snapshot.tree, &TreeState::new(), args.selected.as_deref());
    print!("{}", output);

    Ok(())
}
