//! Main TUI application state and logic

use crate::parser::lexer::Token;
use crate::parser::{parse, tokenize, TreePrinter};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

const PAGE: usize = 10;

/// Everything the panes display, computed once from the source text.
///
/// Lex and parse failures are kept as data so the inspector can still show
/// whatever stage succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub source: String,
    pub tokens: Vec<Token>,
    pub tree: Vec<String>,
    pub statement_count: usize,
    pub error: Option<String>,
    /// Line of a lexer error, highlighted in the source pane.
    pub error_line: Option<usize>,
}

impl Inspection {
    pub fn new(source: &str) -> Self {
        let mut inspection = Self {
            source: source.to_string(),
            tokens: Vec::new(),
            tree: Vec::new(),
            statement_count: 0,
            error: None,
            error_line: None,
        };

        match tokenize(source) {
            Ok(tokens) => {
                match parse(&tokens) {
                    Ok(ast) => {
                        inspection.statement_count = ast.len();
                        inspection.tree = TreePrinter::outline(&ast);
                    }
                    Err(e) => inspection.error = Some(e.to_string()),
                }
                inspection.tokens = tokens;
            }
            Err(e) => {
                inspection.error_line = Some(e.line);
                inspection.error = Some(e.to_string());
            }
        }

        inspection
    }

    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        match &self.error {
            Some(error) => error.clone(),
            None => format!(
                "{} line(s), {} token(s), {} statement(s)",
                self.source.lines().count(),
                self.tokens.len(),
                self.statement_count
            ),
        }
    }
}

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Tree,
}

impl FocusedPane {
    /// Move focus to the next pane (left to right, wrapping)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tree,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Tree => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// Shown in the status bar, usually the file path
    pub title: String,

    pub inspection: Inspection,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets, clamped when rendered
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub tree_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(title: impl Into<String>, source: &str) -> Self {
        App {
            title: title.into(),
            inspection: Inspection::new(source),
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            tokens_scroll: 0,
            tree_scroll: 0,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Percentage(25),
                Constraint::Percentage(30),
            ])
            .split(main_chunks[0]);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.inspection.source,
            self.inspection.error_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            columns[1],
            &self.inspection.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            columns[2],
            &self.inspection.tree,
            self.inspection.error.as_deref(),
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.title,
            &self.inspection.summary(),
            self.inspection.error.is_some(),
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Tree => &mut self.tree_scroll,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            KeyCode::End => {
                // Clamped to the last page on the next render
                *self.focused_scroll() = usize::MAX;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_inspection_of_valid_source() {
        let inspection = Inspection::new("1 + 2\nx\n");

        assert_eq!(inspection.error, None);
        assert_eq!(inspection.statement_count, 2);
        assert_eq!(inspection.tokens.len(), 6);
        assert_eq!(inspection.tree[0], "Statement 1");
        assert_eq!(inspection.summary(), "2 line(s), 6 token(s), 2 statement(s)");
    }

    #[test]
    fn test_inspection_keeps_tokens_on_parse_error() {
        let inspection = Inspection::new("(1 + 2");

        assert_eq!(inspection.tokens.len(), 4);
        assert!(inspection.tree.is_empty());
        assert_eq!(inspection.error_line, None);
        assert!(inspection.error.is_some());
    }

    #[test]
    fn test_inspection_reports_lexer_line() {
        let inspection = Inspection::new("1\n2 ~");

        assert!(inspection.tokens.is_empty());
        assert_eq!(inspection.error_line, Some(2));
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = App::new("demo", "1");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Tree);
    }

    #[test]
    fn test_scroll_follows_focus() {
        let mut app = App::new("demo", "1");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.tokens_scroll, PAGE - 1);
        assert_eq!(app.source_scroll, 0);

        press(&mut app, KeyCode::End);
        assert_eq!(app.tokens_scroll, usize::MAX);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.tokens_scroll, 0);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
