//! Rank command implementation

use crate::cli::RankArgs;
use crate::error::Result;
use crate::model::Snapshot;
use crate::view::text::{format_count, format_rank_json, format_rank_table};

/// Run the rank command
pub fn run(args: RankArgs) -> Result<()> {
    let snapshot = Snapshot::load(&args.snapshot)?;

    if args.json {
        println!("{}", format_rank_json(&snapshot.files, args.top, true)?);
        return Ok(());
    }

    print!("{}", format_rank_table(&snapshot.files, args.top));

    // Print summary
    if !snapshot.files.is_empty() {
        let total = snapshot.total_chars();
        println!();
        println!(
            "Total: {} chars in {} files",
            format_count(total),
            snapshot.files.len()
        );
    }

    Ok(())
}
