//! TUI module for interactive exploration of a snapshot.

pub mod app;
pub mod event;
pub mod ui;
pub mod widgets;

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

pub use app::App;

use crate::error::{FilescopeError, Result};

/// Raw mode, alternate screen and (optionally) mouse capture for as long as it lives.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = if mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        } else {
            execute!(stdout, EnterAlternateScreen)
        };
        if let Err(e) = entered {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal, mouse })
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let backend = self.terminal.backend_mut();
        let _ = if self.mouse {
            execute!(backend, LeaveAlternateScreen, DisableMouseCapture)
        } else {
            execute!(backend, LeaveAlternateScreen)
        };
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive loop until the user quits.
pub fn run(app: &mut App, tick_rate: Duration, mouse: bool) -> Result<()> {
    let mut terminal = TerminalGuard::enter(mouse).map_err(FilescopeError::Terminal)?;

    while !app.should_quit {
        let mut viewport = Rect::default();
        terminal
            .draw(|frame| {
                viewport = frame.area();
                ui::render(app, frame);
            })
            .map_err(FilescopeError::Terminal)?;

        event::handle_events(app, tick_rate, viewport).map_err(FilescopeError::Terminal)?;
    }

    tracing::debug!("TUI exited");
    Ok(())
}
