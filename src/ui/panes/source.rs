//! Source code pane rendering with syntax highlighting
//!
//! Highlighting is a lightweight character scan rather than a call into the
//! lexer, so lines that fail to tokenize are still coloured.

use super::{clamp_scroll, pane_block};
use crate::parser::classify::{
    is_identifier_continue, is_logical_operator_word, is_non_logical_keyword,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for one source line
fn highlight_source_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        // Comments run to the end of the line
        if c == '#' {
            spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.comment)));
            break;
        }

        // Strings end at the same quote, or the end of the line
        if c == '"' || c == '\'' {
            let end = rest[1..].find(c).map_or(rest.len(), |i| i + 2);
            spans.push(Span::styled(&rest[..end], Style::default().fg(DEFAULT_THEME.string)));
            rest = &rest[end..];
            continue;
        }

        if is_identifier_continue(c) {
            let end = rest
                .find(|ch: char| !is_identifier_continue(ch))
                .unwrap_or(rest.len());
            let word = &rest[..end];
            spans.push(Span::styled(word, word_style(word)));
            rest = &rest[end..];
            continue;
        }

        let style = match c {
            '(' | ')' | ':' | ',' => Style::default().fg(DEFAULT_THEME.primary),
            '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' => {
                Style::default().fg(DEFAULT_THEME.operator)
            }
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        let end = c.len_utf8();
        spans.push(Span::styled(&rest[..end], style));
        rest = &rest[end..];
    }

    Line::from(spans)
}

fn word_style(word: &str) -> Style {
    if is_non_logical_keyword(word) || is_logical_operator_word(word) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word.starts_with(|c: char| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Render the source code pane
///
/// `error_line` is 1-based and drawn on a red background.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    error_line: Option<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = clamp_scroll(lines.len(), area, scroll_offset);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_error = error_line == Some(line_num);
            let num_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_source_line(line);
            if is_error {
                // White text on red for visibility
                for span in &mut content_line.spans {
                    span.style = Style::default().bg(DEFAULT_THEME.error).fg(Color::White);
                }
            }

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(content_line.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_texts(line: &str) -> Vec<String> {
        highlight_source_line(line)
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect()
    }

    #[test]
    fn test_highlight_splits_words_and_symbols() {
        assert_eq!(
            span_texts("if x1 >= 10: # done"),
            vec!["if", " ", "x1", " ", ">", "=", " ", "10", ":", " ", "# done"]
        );
    }

    #[test]
    fn test_highlight_unterminated_string_runs_to_end() {
        assert_eq!(span_texts("print('abc"), vec!["print", "(", "'abc"]);
        assert_eq!(span_texts("'a\"b' c"), vec!["'a\"b'", " ", "c"]);
    }

    #[test]
    fn test_keyword_style_is_bold() {
        assert!(word_style("while").add_modifier.contains(Modifier::BOLD));
        assert!(word_style("and").add_modifier.contains(Modifier::BOLD));
        assert!(!word_style("value").add_modifier.contains(Modifier::BOLD));
    }
}
