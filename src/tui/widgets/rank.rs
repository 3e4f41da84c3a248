//! Size ranking dialog widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::{calculate_scroll_offset, truncate};
use crate::view::rank::{exclude_label, RankRow};
use crate::view::text::{bar_cells, format_count, EMPTY_RANK_MESSAGE};

const BAR_BG: Color = Color::Rgb(30, 41, 59);
const ACCENT: Color = Color::Cyan;

/// Lines used by one ranked file.
const ROW_HEIGHT: u16 = 2;

/// Centered dialog area inside `area`. Everything outside is the backdrop.
pub fn dialog_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(8).min(90);
    let height = area.height.saturating_sub(4).min(30);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Renders ranked rows as a modal over whatever is below.
pub struct RankView<'a> {
    rows: &'a [RankRow<'a>],
    cursor: usize,
}

impl<'a> RankView<'a> {
    pub fn new(rows: &'a [RankRow<'a>]) -> Self {
        Self { rows, cursor: 0 }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }
}

impl Widget for RankView<'_> {
    /// `area` is the whole screen; the dialog centers itself in it.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = dialog_area(area);
        Clear.render(dialog, buf);

        let mut block = Block::default()
            .title(" File Size Ranking ")
            .title(Line::from(" [q] ✕ ").right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT));

        if self.rows.is_empty() {
            Paragraph::new(EMPTY_RANK_MESSAGE)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .render(dialog, buf);
            return;
        }

        if let Some(row) = self.rows.get(self.cursor) {
            let hints = format!(
                " [Enter] open  [y] path  [x] {}  [d] delete ",
                exclude_label(row.record.excluded)
            );
            block = block.title_bottom(Line::from(hints).centered());
        }

        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let visible = (inner.height / ROW_HEIGHT) as usize;
        let offset = calculate_scroll_offset(self.cursor, visible, self.rows.len());

        for (i, row) in self.rows.iter().skip(offset).take(visible).enumerate() {
            let y = inner.y + i as u16 * ROW_HEIGHT;
            let is_cursor = offset + i == self.cursor;
            render_row(row, Rect::new(inner.x, y, inner.width, ROW_HEIGHT), is_cursor, buf);
        }
    }
}

fn render_row(row: &RankRow<'_>, area: Rect, is_cursor: bool, buf: &mut Buffer) {
    let width = area.width as usize;
    let record = row.record;

    let marker = if is_cursor { "› " } else { "  " };
    let rank_label = format!("{:<5}", format!("#{}", row.rank));
    let rank_style = if row.highlighted {
        Style::default().fg(ACCENT).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let chars_text = format!("{} chars", format_count(record.stats.chars));
    let lines_text = format!("{} lines", format_count(record.stats.lines));

    // marker + rank + gap
    let prefix_len = 2 + 5 + 1;
    let right_len = chars_text.chars().count().max(lines_text.chars().count()) + 1;
    let text_width = width.saturating_sub(prefix_len + right_len);

    let path = truncate(&record.path, text_width);
    let language = truncate(&record.language, text_width);

    let mut path_style = Style::default().fg(Color::White);
    if is_cursor {
        path_style = path_style.bold();
    }
    if record.excluded {
        path_style = path_style.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT | Modifier::ITALIC);
    }

    let first = Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(rank_label, rank_style),
        Span::raw(" "),
        Span::styled(path.clone(), path_style),
        Span::raw(" ".repeat(text_width.saturating_sub(path.chars().count()) + right_len - chars_text.chars().count())),
        Span::styled(chars_text, Style::default().fg(ACCENT).bold()),
    ]);

    let lines_len = lines_text.chars().count();
    let second = Line::from(vec![
        Span::raw(" ".repeat(prefix_len)),
        Span::styled(language.clone(), Style::default().fg(Color::Gray)),
        Span::raw(" ".repeat(text_width.saturating_sub(language.chars().count()) + right_len - lines_len)),
        Span::styled(lines_text, Style::default().fg(Color::DarkGray)),
    ]);

    Paragraph::new(first).render(Rect::new(area.x, area.y, area.width, 1), buf);
    Paragraph::new(second).render(Rect::new(area.x, area.y + 1, area.width, 1), buf);

    let filled = bar_cells(row.percent, width) as u16;
    if filled > 0 {
        buf.set_style(Rect::new(area.x, area.y, filled, 1), Style::default().bg(BAR_BG));
    }
}
