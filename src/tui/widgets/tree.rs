//! Explorer widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{calculate_scroll_offset, truncate};
use crate::view::rank::exclude_label;
use crate::view::text::{format_count, EMPTY_TREE_MESSAGE};
use crate::view::tree::{
    available_actions, counters, counters_visible, indent_width, is_selected, row_icon, RowAction,
    RowDecoration, TreeRow,
};

const CURSOR_BG: Color = Color::DarkGray;
const SELECTED_BG: Color = Color::Rgb(23, 37, 84);
const ERROR_FG: Color = Color::Rgb(239, 68, 68);

/// Renders the flattened explorer rows inside a bordered block.
pub struct TreeView<'a> {
    rows: &'a [TreeRow<'a>],
    cursor: Option<usize>,
    selected_path: Option<&'a str>,
    show_char_count: bool,
    focused: bool,
}

impl<'a> TreeView<'a> {
    pub fn new(rows: &'a [TreeRow<'a>]) -> Self {
        Self {
            rows,
            cursor: None,
            selected_path: None,
            show_char_count: false,
            focused: true,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn selected_path(mut self, path: Option<&'a str>) -> Self {
        self.selected_path = path;
        self
    }

    pub fn show_char_count(mut self, show: bool) -> Self {
        self.show_char_count = show;
        self
    }

    /// Whether keyboard input goes to the explorer (drives the action hints).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Action hints for the row under the cursor, e.g. `[y] path  [x] exclude  [d] delete`.
pub fn action_hints(row: &TreeRow<'_>) -> String {
    available_actions(row.node)
        .into_iter()
        .map(|action| match action {
            RowAction::CopyPath => "[y] path".to_string(),
            RowAction::ToggleExclude => format!("[x] {}", exclude_label(row.node.excluded)),
            RowAction::Delete => "[d] delete".to_string(),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

impl Widget for TreeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .title(" Explorer ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));

        if self.rows.is_empty() {
            Paragraph::new(EMPTY_TREE_MESSAGE)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let cursor_row = self.cursor.and_then(|c| self.rows.get(c));
        if let Some(row) = cursor_row.filter(|_| self.focused) {
            let hints = action_hints(row);
            if !hints.is_empty() {
                block = block.title_bottom(Line::from(format!(" {} ", hints)).right_aligned());
            }
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let visible_height = inner.height as usize;
        let selected = self.cursor.unwrap_or(0);
        let scroll_offset = calculate_scroll_offset(selected, visible_height, self.rows.len());

        for (i, row) in self
            .rows
            .iter()
            .skip(scroll_offset)
            .take(visible_height)
            .enumerate()
        {
            let is_cursor = self.cursor == Some(scroll_offset + i);
            let line = render_row(row, inner.width as usize, is_cursor, self.selected_path, self.show_char_count);
            let row_area = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
            Paragraph::new(line).render(row_area, buf);
        }
    }
}

fn render_row(
    row: &TreeRow<'_>,
    width: usize,
    is_cursor: bool,
    selected_path: Option<&str>,
    show_char_count: bool,
) -> Line<'static> {
    let node = row.node;
    let decoration = RowDecoration::for_node(node);
    let icon = row_icon(row);

    let indent = " ".repeat(indent_width(row.depth));

    let counter_text = if counters_visible(show_char_count, is_cursor) {
        match counters(node) {
            (Some(chars), Some(lines)) => format!("{} │ {}", format_count(chars), format_count(lines)),
            (Some(chars), None) => format_count(chars),
            (None, Some(lines)) => format_count(lines),
            (None, None) => String::new(),
        }
    } else {
        String::new()
    };

    // indent + icon + space
    let prefix_len = indent.chars().count() + 2;
    let suffix_len = if counter_text.is_empty() {
        0
    } else {
        counter_text.chars().count() + 2
    };
    let name_width = width.saturating_sub(prefix_len + suffix_len);
    let name = truncate(&decoration.display_name, name_width);
    let padding = " ".repeat(name_width.saturating_sub(name.chars().count()));

    let mut name_style = if node.is_directory {
        Style::default().fg(Color::Blue).bold()
    } else {
        Style::default().fg(Color::White)
    };
    if decoration.error {
        name_style = name_style.fg(ERROR_FG);
    }
    if decoration.dimmed {
        name_style = name_style.add_modifier(Modifier::DIM);
    }
    if decoration.struck {
        name_style = name_style.add_modifier(Modifier::CROSSED_OUT | Modifier::ITALIC);
    }

    let mut spans = vec![
        Span::raw(indent),
        Span::styled(format!("{} ", icon.category.glyph()), Style::default().fg(icon.color)),
        Span::styled(name, name_style),
        Span::raw(padding),
    ];
    if !counter_text.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(counter_text, Style::default().fg(Color::Gray)));
    }

    // Selection keeps its background under the cursor; the cursor then adds a marker
    let selected = is_selected(node, selected_path);
    let row_style = match (selected, is_cursor) {
        (true, true) => Style::default()
            .bg(SELECTED_BG)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        (true, false) => Style::default().bg(SELECTED_BG),
        (false, true) => Style::default().bg(CURSOR_BG),
        (false, false) => Style::default(),
    };
    Line::from(spans).style(row_style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileNode, NodeStatus};
    use crate::view::{visible_rows, TreeState};

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(view: TreeView<'_>, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        view.render(buf.area, &mut buf);
        buf
    }

    #[test]
    fn test_empty_placeholder() {
        let buf = render(TreeView::new(&[]), 40, 5);
        assert!(buffer_text(&buf).contains("No files loaded"));
    }

    #[test]
    fn test_counters_follow_toggle_and_cursor() {
        let tree = vec![
            FileNode::new_file("a.rs", Some(NodeStatus::Processed)).with_counts(1500, 30),
            FileNode::new_file("b.rs", Some(NodeStatus::Processed)).with_counts(20, 2),
        ];
        let rows = visible_rows(&tree, &TreeState::new());

        let hidden = buffer_text(&render(TreeView::new(&rows).cursor(1), 40, 5));
        assert!(!hidden.contains("1,500"));
        assert!(hidden.contains("20 │ 2"));

        let shown = buffer_text(&render(TreeView::new(&rows).cursor(1).show_char_count(true), 40, 5));
        assert!(shown.contains("1,500 │ 30"));
    }

    #[test]
    fn test_selected_row_background() {
        let tree = vec![FileNode::new_dir(
            "src",
            vec![FileNode::new_file("src/index.ts", Some(NodeStatus::Processed))],
        )];
        let rows = visible_rows(&tree, &TreeState::new());
        let buf = render(
            TreeView::new(&rows).cursor(0).selected_path(Some("src/index.ts")),
            30,
            4,
        );
        // Row 1 of the inner area is index.ts
        assert_eq!(buf[(5, 2)].bg, SELECTED_BG);
        assert_ne!(buf[(5, 1)].bg, SELECTED_BG);
    }

    #[test]
    fn test_cursor_on_selected_row_keeps_selection() {
        let tree = vec![FileNode::new_file("index.ts", Some(NodeStatus::Processed))];
        let rows = visible_rows(&tree, &TreeState::new());
        let buf = render(
            TreeView::new(&rows).cursor(0).selected_path(Some("index.ts")),
            30,
            3,
        );
        let cell = &buf[(3, 1)];
        assert_eq!(cell.bg, SELECTED_BG);
        assert!(cell.modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_action_hints() {
        let processed = FileNode::new_file("a.rs", Some(NodeStatus::Processed));
        let excluded = FileNode::new_file("b.rs", Some(NodeStatus::Processed)).with_excluded(true);
        let skipped = FileNode::new_file("c.rs", Some(NodeStatus::Skipped));
        let tree = vec![processed, excluded, skipped];
        let rows = visible_rows(&tree, &TreeState::new());

        assert_eq!(action_hints(&rows[0]), "[y] path  [x] exclude  [d] delete");
        assert_eq!(action_hints(&rows[1]), "[y] path  [x] include  [d] delete");
        assert_eq!(action_hints(&rows[2]), "[y] path  [d] delete");
    }

    #[test]
    fn test_error_row_prefix() {
        let tree = vec![FileNode::new_file("bad.rs", Some(NodeStatus::Error))];
        let rows = visible_rows(&tree, &TreeState::new());
        let text = buffer_text(&render(TreeView::new(&rows), 40, 3));
        assert!(text.contains("error: bad.rs"));
    }
}
