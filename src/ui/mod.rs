//! Terminal inspector built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   tokens, syntax tree, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! [`inspect`] sets up the terminal, runs an [`App`] and restores the
//! terminal afterwards, even when the event loop fails.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, Inspection};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Open the inspector on `source` until the user quits.
pub fn inspect(title: &str, source: &str) -> io::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(title, source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
