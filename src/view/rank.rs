//! Size ranking view-model and dialog component state.

use crossterm::event::KeyCode;

use super::callbacks::ViewEvent;
use super::listener::{KeyListeners, ListenerId, Subscription};
use crate::model::FileRecord;

/// Number of leading ranks emphasized by default.
pub const DEFAULT_HIGHLIGHT_TOP: usize = 3;

/// One line of the ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankRow<'a> {
    /// 1-based position.
    pub rank: usize,
    pub record: &'a FileRecord,
    /// Bar width relative to the largest file, 0..=100.
    pub percent: f64,
    pub highlighted: bool,
}

/// Records ordered by `stats.chars`, largest first. Ties keep input order.
pub fn rank_files(files: &[FileRecord]) -> Vec<&FileRecord> {
    let mut sorted: Vec<&FileRecord> = files.iter().collect();
    sorted.sort_by(|a, b| b.stats.chars.cmp(&a.stats.chars));
    sorted
}

/// `100 * chars / max_chars`, or 0 when `max_chars` is 0.
pub fn bar_percent(chars: u64, max_chars: u64) -> f64 {
    if max_chars == 0 {
        return 0.0;
    }
    chars as f64 / max_chars as f64 * 100.0
}

/// Ranked rows with bar percentages relative to the first (largest) entry.
pub fn ranked_rows(files: &[FileRecord], highlight_top: usize) -> Vec<RankRow<'_>> {
    let sorted = rank_files(files);
    let max_chars = sorted.first().map(|r| r.stats.chars).unwrap_or(0);

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankRow {
            rank: i + 1,
            record,
            percent: bar_percent(record.stats.chars, max_chars),
            highlighted: i < highlight_top,
        })
        .collect()
}

/// User interactions with the ranking dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankInteraction {
    /// Activate the cursor row: select it and close.
    SelectRow,
    CopyPath,
    ToggleExclude,
    Delete,
    /// The dialog's own close control.
    CloseControl,
    /// Click outside the dialog.
    Backdrop,
}

/// Local state of the ranking dialog.
///
/// Whether the dialog is open is decided by the owner; [`RankDialog::sync`]
/// mirrors that flag into the Escape listener registration.
#[derive(Debug, Default)]
pub struct RankDialog {
    escape: Option<Subscription>,
    cursor: usize,
}

impl RankDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the Escape listener while open, release it when closed.
    pub fn sync(&mut self, is_open: bool, listeners: &KeyListeners) {
        match (is_open, self.escape.is_some()) {
            (true, false) => {
                self.escape = Some(listeners.subscribe(KeyCode::Esc));
                self.cursor = 0;
            }
            (false, true) => {
                self.escape = None;
            }
            _ => {}
        }
    }

    pub fn is_listening(&self) -> bool {
        self.escape.is_some()
    }

    /// `Close` when this dialog's Escape listener is among the fired ones.
    pub fn handle_listener_hits(&self, fired: &[ListenerId]) -> Vec<ViewEvent> {
        match &self.escape {
            Some(sub) if fired.contains(&sub.id()) => vec![ViewEvent::Close],
            _ => Vec::new(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor by `delta`, clamped to `len` rows.
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    /// Keep the cursor inside `len` rows after the data changed.
    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Turn an interaction on the cursor row into callback requests.
    pub fn interact(&self, rows: &[RankRow<'_>], interaction: RankInteraction) -> Vec<ViewEvent> {
        let path = || rows.get(self.cursor).map(|row| row.record.path.clone());
        let events = match interaction {
            RankInteraction::CloseControl | RankInteraction::Backdrop => return vec![ViewEvent::Close],
            RankInteraction::SelectRow => path().map(|p| vec![ViewEvent::SelectFile(p), ViewEvent::Close]),
            RankInteraction::CopyPath => path().map(|p| vec![ViewEvent::CopyPath(p)]),
            RankInteraction::ToggleExclude => path().map(|p| vec![ViewEvent::ToggleExclude(p)]),
            RankInteraction::Delete => path().map(|p| vec![ViewEvent::DeleteFile(p)]),
        };
        events.unwrap_or_default()
    }
}

/// Label of the exclusion toggle for a record.
pub fn exclude_label(excluded: bool) -> &'static str {
    if excluded {
        "include"
    } else {
        "exclude"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::callbacks::RecordingCallbacks;

    fn rec(path: &str, chars: u64) -> FileRecord {
        FileRecord::new(path, "text", chars, chars / 10)
    }

    #[test]
    fn test_rank_scenario() {
        let files = vec![rec("a.ts", 50), rec("b.js", 200)];
        let rows = ranked_rows(&files, DEFAULT_HIGHLIGHT_TOP);

        assert_eq!(rows[0].record.path, "b.js");
        assert_eq!(rows[1].record.path, "a.ts");
        assert_eq!(rows[0].percent, 100.0);
        assert_eq!(rows[1].percent, 25.0);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
        // Input untouched
        assert_eq!(files[0].path, "a.ts");
    }

    #[test]
    fn test_ranking_is_stable_for_ties() {
        let files = vec![rec("x", 10), rec("a", 30), rec("y", 10), rec("b", 30), rec("z", 10)];
        let order: Vec<_> = rank_files(&files).iter().map(|r| r.path.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "x", "y", "z"]);
    }

    #[test]
    fn test_order_is_non_increasing() {
        let files: Vec<_> = (0..50u64).map(|i| rec(&format!("f{i}"), (i * 7919) % 97)).collect();
        let rows = ranked_rows(&files, 3);
        assert!(rows
            .windows(2)
            .all(|w| w[0].record.stats.chars >= w[1].record.stats.chars));
    }

    #[test]
    fn test_zero_and_empty_percentages() {
        assert!(ranked_rows(&[], 3).is_empty());

        let files = vec![rec("a", 0), rec("b", 0)];
        assert!(ranked_rows(&files, 3).iter().all(|r| r.percent == 0.0));
        assert_eq!(bar_percent(10, 0), 0.0);
    }

    #[test]
    fn test_highlight_top_three() {
        let files: Vec<_> = (1..=5u64).map(|i| rec(&format!("f{i}"), i)).collect();
        let highlighted: Vec<_> = ranked_rows(&files, 3).iter().map(|r| r.highlighted).collect();
        assert_eq!(highlighted, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_escape_listener_lifecycle() {
        let listeners = KeyListeners::new();
        let mut dialog = RankDialog::new();
        let mut callbacks = RecordingCallbacks::default();

        dialog.sync(true, &listeners);
        dialog.sync(true, &listeners);
        assert_eq!(listeners.len(), 1);

        for event in dialog.handle_listener_hits(&listeners.dispatch(KeyCode::Esc)) {
            event.dispatch(&mut callbacks);
        }
        assert_eq!(callbacks.calls, vec![ViewEvent::Close]);

        // Owner reacts to on_close by closing the dialog.
        dialog.sync(false, &listeners);
        assert!(listeners.is_empty());

        for event in dialog.handle_listener_hits(&listeners.dispatch(KeyCode::Esc)) {
            event.dispatch(&mut callbacks);
        }
        assert_eq!(callbacks.calls.len(), 1);
    }

    #[test]
    fn test_repeated_open_close_does_not_leak() {
        let listeners = KeyListeners::new();
        let mut dialog = RankDialog::new();
        for _ in 0..10 {
            dialog.sync(true, &listeners);
            dialog.sync(false, &listeners);
        }
        assert!(listeners.is_empty());

        dialog.sync(true, &listeners);
        drop(dialog);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_select_row_selects_then_closes() {
        let files = vec![rec("a.ts", 50), rec("b.js", 200)];
        let rows = ranked_rows(&files, 3);
        let mut dialog = RankDialog::new();
        dialog.move_cursor(1, rows.len());

        assert_eq!(
            dialog.interact(&rows, RankInteraction::SelectRow),
            vec![ViewEvent::SelectFile("a.ts".into()), ViewEvent::Close]
        );
    }

    #[test]
    fn test_row_actions_emit_only_their_event() {
        let files = vec![rec("a.ts", 50)];
        let rows = ranked_rows(&files, 3);
        let dialog = RankDialog::new();

        assert_eq!(
            dialog.interact(&rows, RankInteraction::CopyPath),
            vec![ViewEvent::CopyPath("a.ts".into())]
        );
        assert_eq!(
            dialog.interact(&rows, RankInteraction::ToggleExclude),
            vec![ViewEvent::ToggleExclude("a.ts".into())]
        );
        assert_eq!(
            dialog.interact(&rows, RankInteraction::Delete),
            vec![ViewEvent::DeleteFile("a.ts".into())]
        );
    }

    #[test]
    fn test_each_interaction_fires_callbacks_at_most_once() {
        let files = vec![rec("a.ts", 50), rec("b.js", 200)];
        let rows = ranked_rows(&files, 3);
        let dialog = RankDialog::new();

        for interaction in [
            RankInteraction::SelectRow,
            RankInteraction::CopyPath,
            RankInteraction::ToggleExclude,
            RankInteraction::Delete,
            RankInteraction::CloseControl,
            RankInteraction::Backdrop,
        ] {
            let mut callbacks = RecordingCallbacks::default();
            for event in dialog.interact(&rows, interaction) {
                event.dispatch(&mut callbacks);
            }

            let on_row = callbacks.count(|e| e.path() == Some("b.js"));
            let closes = callbacks.count(|e| *e == ViewEvent::Close);
            let selects = callbacks.count(|e| matches!(e, ViewEvent::SelectFile(_)));
            assert!(on_row <= 1, "{interaction:?}");
            assert!(closes <= 1, "{interaction:?}");
            assert_eq!(callbacks.count(|e| e.path() == Some("a.ts")), 0, "{interaction:?}");

            match interaction {
                RankInteraction::SelectRow => assert_eq!((on_row, closes, selects), (1, 1, 1)),
                RankInteraction::CloseControl | RankInteraction::Backdrop => {
                    assert_eq!((on_row, closes), (0, 1))
                }
                _ => assert_eq!((on_row, closes, selects), (1, 0, 0)),
            }
        }
    }

    #[test]
    fn test_close_interactions_work_when_empty() {
        let dialog = RankDialog::new();
        assert_eq!(dialog.interact(&[], RankInteraction::Backdrop), vec![ViewEvent::Close]);
        assert_eq!(dialog.interact(&[], RankInteraction::CloseControl), vec![ViewEvent::Close]);
        assert!(dialog.interact(&[], RankInteraction::SelectRow).is_empty());
    }

    #[test]
    fn test_cursor_clamps() {
        let mut dialog = RankDialog::new();
        dialog.move_cursor(5, 3);
        assert_eq!(dialog.cursor(), 2);
        dialog.move_cursor(-10, 3);
        assert_eq!(dialog.cursor(), 0);
        dialog.move_cursor(2, 3);
        dialog.clamp_cursor(1);
        assert_eq!(dialog.cursor(), 0);
    }

    #[test]
    fn test_exclude_label_flips() {
        assert_eq!(exclude_label(false), "exclude");
        assert_eq!(exclude_label(true), "include");
    }
}
