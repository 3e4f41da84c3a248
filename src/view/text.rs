//! Plain-text renderings of the explorer and the ranking, for non-interactive output.

use serde::Serialize;

use super::rank::{ranked_rows, RankRow};
use super::tree::{counters, indent_width, is_selected, row_icon, visible_rows, RowDecoration, TreeState};
use crate::model::{FileNode, FileRecord};

/// Cells used by the text ranking bar.
pub const BAR_WIDTH: usize = 10;

pub const EMPTY_TREE_MESSAGE: &str = "No files loaded";
pub const EMPTY_RANK_MESSAGE: &str = "No files to display";

/// Format a count with thousands separators: `1234567` -> `1,234,567`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Number of filled bar cells for a percentage.
pub fn bar_cells(percent: f64, width: usize) -> usize {
    ((percent / 100.0) * width as f64).clamp(0.0, width as f64) as usize
}

/// Render the tree with the given expand state. Selected files are marked with `>`.
pub fn format_tree(nodes: &[FileNode], state: &TreeState, selected_path: Option<&str>) -> String {
    if nodes.is_empty() {
        return format!("{}\n", EMPTY_TREE_MESSAGE);
    }

    let mut output = String::new();
    for row in visible_rows(nodes, state) {
        let node = row.node;
        let decoration = RowDecoration::for_node(node);
        let marker = if is_selected(node, selected_path) { "> " } else { "  " };
        let indent = " ".repeat(indent_width(row.depth));
        let slash = if node.is_directory { "/" } else { "" };

        let mut line = format!(
            "{}{}{} {}{}",
            marker,
            indent,
            row_icon(&row).category.glyph(),
            decoration.display_name,
            slash
        );

        let counts: Vec<String> = match counters(node) {
            (Some(chars), Some(lines)) => vec![
                format!("{} chars", format_count(chars)),
                format!("{} lines", format_count(lines)),
            ],
            (Some(chars), None) => vec![format!("{} chars", format_count(chars))],
            (None, Some(lines)) => vec![format!("{} lines", format_count(lines))],
            (None, None) => Vec::new(),
        };
        if !counts.is_empty() {
            line.push_str("  ");
            line.push_str(&counts.join(", "));
        }
        if decoration.tooltip.len() > node.path.len() {
            line.push_str(&decoration.tooltip[node.path.len()..]);
        }

        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Render the ranking as a table, optionally limited to the first `top` rows.
pub fn format_rank_table(files: &[FileRecord], top: Option<usize>) -> String {
    let rows = ranked_rows(files, 0);
    if rows.is_empty() {
        return format!("{}\n", EMPTY_RANK_MESSAGE);
    }

    let limit = top.unwrap_or(rows.len());
    let chars_width = rows
        .iter()
        .map(|r| format_count(r.record.stats.chars).len())
        .max()
        .unwrap_or(0);
    let lines_width = rows
        .iter()
        .map(|r| format_count(r.record.stats.lines).len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for row in rows.iter().take(limit) {
        output.push_str(&format_rank_line(row, chars_width, lines_width));
        output.push('\n');
    }
    output
}

fn format_rank_line(row: &RankRow<'_>, chars_width: usize, lines_width: usize) -> String {
    let filled = bar_cells(row.percent, BAR_WIDTH);
    let record = row.record;
    let mut line = format!(
        "{:>4}  [{}{}]  {:>cw$} chars  {:>lw$} lines  {} ({})",
        format!("#{}", row.rank),
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        format_count(record.stats.chars),
        format_count(record.stats.lines),
        record.path,
        record.language,
        cw = chars_width,
        lw = lines_width,
    );
    if record.excluded {
        line.push_str(" [excluded]");
    }
    line
}

/// Serializable ranking entry for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    pub rank: usize,
    pub path: String,
    pub language: String,
    pub chars: u64,
    pub lines: u64,
    pub percent: f64,
    pub excluded: bool,
}

/// Ranking as JSON, optionally limited to the first `top` rows.
pub fn format_rank_json(files: &[FileRecord], top: Option<usize>, pretty: bool) -> serde_json::Result<String> {
    let entries: Vec<RankEntry> = ranked_rows(files, 0)
        .into_iter()
        .take(top.unwrap_or(usize::MAX))
        .map(|row| RankEntry {
            rank: row.rank,
            path: row.record.path.clone(),
            language: row.record.language.clone(),
            chars: row.record.stats.chars,
            lines: row.record.stats.lines,
            percent: row.percent,
            excluded: row.record.excluded,
        })
        .collect();

    if pretty {
        serde_json::to_string_pretty(&entries)
    } else {
        serde_json::to_string(&entries)
    }
}
