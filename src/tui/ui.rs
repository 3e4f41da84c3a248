//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, Mode};
use super::widgets::{RankView, TreeView};
use crate::view::text::format_count;
use crate::view::RowDecoration;

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Explorer + details
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    let rows = app.visible_rows();
    let tree = TreeView::new(&rows)
        .cursor(app.cursor)
        .selected_path(app.workspace.selected_path.as_deref())
        .show_char_count(app.show_char_count)
        .focused(app.mode() == Mode::Normal);
    frame.render_widget(tree, body[0]);

    render_details(app, frame, body[1]);
    render_footer(app, frame, chunks[2]);

    // Overlays, bottom to top
    if app.workspace.rank_open {
        let rank_rows = app.rank_rows();
        let view = RankView::new(&rank_rows).cursor(app.rank_dialog.cursor());
        frame.render_widget(view, frame.area());
    }
    match app.mode() {
        Mode::Confirm => render_confirm_dialog(app, frame),
        Mode::Help => render_help_overlay(frame),
        Mode::Normal | Mode::Rank => {}
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let snapshot = &app.workspace.snapshot;
    let total_chars = snapshot.total_chars();
    let excluded = snapshot.files.iter().filter(|f| f.excluded).count();

    let source = app
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no snapshot)".to_string());

    let header_text = format!(
        " {}  │  {} files  {} chars  {} excluded",
        source,
        snapshot.files.len(),
        format_count(total_chars),
        excluded
    );

    let block = Block::default()
        .title(" filescope ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(header_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_details(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Selected ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let Some(path) = app.workspace.selected_path.as_deref() else {
        let paragraph = Paragraph::new("Nothing selected")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![Line::from(Span::styled(path.to_string(), Style::default().bold()))];
    if let Some(record) = app.workspace.snapshot.find_record(path) {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Language  {}", record.language)));
        lines.push(Line::from(format!("Chars     {}", format_count(record.stats.chars))));
        lines.push(Line::from(format!("Lines     {}", format_count(record.stats.lines))));
        if record.excluded {
            lines.push(Line::from(Span::styled(
                "Excluded from analysis",
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode() {
        Mode::Normal => {
            "[↑↓] Navigate  [Enter] Open/Toggle  [r] Ranking  [c] Counters  [?] Help  [q] Quit"
        }
        Mode::Rank => "[↑↓] Navigate  [Enter] Open  [Esc/q] Close",
        Mode::Confirm => "[y] Yes  [n] No",
        Mode::Help => "[Esc] Close",
    };

    // Status message wins, then the cursor row's tooltip, then key hints
    let tooltip = match app.mode() {
        Mode::Normal => app.cursor_row().map(|row| RowDecoration::for_node(row.node).tooltip),
        _ => None,
    };
    let text = app
        .workspace
        .status_message
        .clone()
        .or(tooltip)
        .unwrap_or_else(|| hints.to_string());

    let paragraph = Paragraph::new(vec![Line::from(text), Line::from(hints)])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_confirm_dialog(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Center the dialog
    let dialog_width = 50u16.min(area.width.saturating_sub(4));
    let dialog_height = 7u16.min(area.height);
    let dialog_area = Rect {
        x: (area.width.saturating_sub(dialog_width)) / 2,
        y: (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let path = app
        .workspace
        .pending_delete
        .as_deref()
        .map(|p| {
            let count = p.chars().count();
            if count > 35 {
                let tail: String = p.chars().skip(count - 32).collect();
                format!("...{}", tail)
            } else {
                p.to_string()
            }
        })
        .unwrap_or_default();

    let message = format!("Remove '{}' from the list?\n\n[y]es  [n]o", path);

    let block = Block::default()
        .title(" Delete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, dialog_area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let help_width = 60u16.min(area.width.saturating_sub(8));
    let help_height = 26u16.min(area.height.saturating_sub(2));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 EXPLORER
 ─────────────────────────────────
 ↑/k ↓/j    Move cursor
 Enter/Spc  Open file / toggle folder
 →/l        Expand folder
 ←/h        Collapse / go to parent
 g / G      Top / bottom
 y          Copy path
 x          Exclude / include file
 d          Remove file from list
 c          Always show counters

 RANKING
 ─────────────────────────────────
 r          Open size ranking
 Enter      Open file and close
 y / x / d  Path / exclude / remove
 Esc / q    Close

 ?          Toggle this help
 q/Esc      Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}
