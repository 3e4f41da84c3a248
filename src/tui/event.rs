//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::app::{App, Mode};
use super::widgets::rank::dialog_area;
use crate::view::{RankInteraction, RowAction};

/// Poll for and handle events with a timeout.
///
/// `viewport` is the last drawn frame area, used to hit-test mouse clicks.
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration, viewport: Rect) -> std::io::Result<bool> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key_event(app, key);
                return Ok(true);
            }
            Event::Mouse(mouse) => {
                handle_mouse_event(app, mouse, viewport);
                return Ok(true);
            }
            _ => {}
        }
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Status messages last until the next key press
    app.clear_status();

    // The confirmation prompt sits above everything, listeners included.
    if app.mode() == Mode::Confirm {
        handle_confirm_mode(app, key);
        return;
    }

    if app.dispatch_listeners(key.code) {
        return;
    }

    match app.mode() {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Rank => handle_rank_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
        Mode::Confirm => {}
    }
}

/// Handle a mouse event. A left click outside the ranking dialog closes it.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, viewport: Rect) {
    if app.mode() != Mode::Rank {
        return;
    }
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let position = Position::new(mouse.column, mouse.row);
        if !dialog_area(viewport).contains(position) {
            app.rank_interact(RankInteraction::Backdrop);
        }
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_cursor(-1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_cursor(1);
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.cursor = 0;
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.cursor_to_end();
        }
        KeyCode::PageUp => {
            app.move_cursor(-20);
        }
        KeyCode::PageDown => {
            app.move_cursor(20);
        }

        // Row click
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.click_cursor();
        }

        // Expand/Collapse
        KeyCode::Right | KeyCode::Char('l') => {
            app.expand_cursor();
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => {
            app.collapse_cursor();
        }

        // Row actions
        KeyCode::Char('y') => {
            app.row_action(RowAction::CopyPath);
        }
        KeyCode::Char('x') => {
            app.row_action(RowAction::ToggleExclude);
        }
        KeyCode::Char('d') => {
            app.row_action(RowAction::Delete);
        }

        // Views
        KeyCode::Char('r') => {
            app.open_rank();
        }
        KeyCode::Char('c') => {
            app.toggle_char_count();
        }

        // Help
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        _ => {}
    }
}

fn handle_rank_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_rank_cursor(-1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_rank_cursor(1);
        }
        KeyCode::PageUp => {
            app.move_rank_cursor(-10);
        }
        KeyCode::PageDown => {
            app.move_rank_cursor(10);
        }
        KeyCode::Enter => {
            app.rank_interact(RankInteraction::SelectRow);
        }
        KeyCode::Char('y') => {
            app.rank_interact(RankInteraction::CopyPath);
        }
        KeyCode::Char('x') => {
            app.rank_interact(RankInteraction::ToggleExclude);
        }
        KeyCode::Char('d') => {
            app.rank_interact(RankInteraction::Delete);
        }
        KeyCode::Char('q') => {
            app.rank_interact(RankInteraction::CloseControl);
        }
        _ => {}
    }
}

fn handle_confirm_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_delete();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_delete();
        }
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.show_help = false;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::model::{FileNode, FileRecord, NodeStatus, Snapshot};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let tree = vec![FileNode::new_dir(
            "src",
            vec![FileNode::new_file("src/a.rs", Some(NodeStatus::Processed)).with_counts(10, 1)],
        )];
        let files = vec![FileRecord::new("src/a.rs", "rust", 10, 1)];
        App::new(Snapshot::new(files, tree), &ViewConfig::default())
    }

    #[test]
    fn test_status_message_lasts_one_key_press() {
        let mut app = app();
        app.workspace.status_message = Some("Copied path: src/a.rs".into());
        handle_key_event(&mut app, key(KeyCode::Down));
        assert!(app.workspace.status_message.is_none());
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_on_esc() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key_event(&mut app, key);
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_closes_rank_instead_of_quitting() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('r')));
        assert_eq!(app.mode(), Mode::Rank);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode(), Mode::Normal);
        assert!(!app.should_quit);
        assert!(app.listeners.is_empty());
    }

    #[test]
    fn test_enter_and_exit_help_mode() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.mode(), Mode::Help);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode(), Mode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_confirm_mode_yes_and_no() {
        let mut app = app();
        app.cursor = 1;
        handle_key_event(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.mode(), Mode::Confirm);
        handle_key_event(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.mode(), Mode::Normal);
        assert!(app.workspace.snapshot.find_record("src/a.rs").is_some());

        handle_key_event(&mut app, key(KeyCode::Char('d')));
        handle_key_event(&mut app, key(KeyCode::Char('y')));
        assert_eq!(app.mode(), Mode::Normal);
        assert!(app.workspace.snapshot.find_record("src/a.rs").is_none());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_confirm_takes_esc_before_rank_listener() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('r')));
        handle_key_event(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.mode(), Mode::Confirm);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode(), Mode::Rank);
        assert_eq!(app.listeners.len(), 1);
    }

    #[test]
    fn test_backdrop_click_closes_rank() {
        let mut app = app();
        app.open_rank();
        let viewport = Rect::new(0, 0, 80, 24);

        let inside = dialog_area(viewport);
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        handle_mouse_event(&mut app, click(inside.x + 1, inside.y + 1), viewport);
        assert_eq!(app.mode(), Mode::Rank);

        handle_mouse_event(&mut app, click(0, 0), viewport);
        assert_eq!(app.mode(), Mode::Normal);
    }
}
