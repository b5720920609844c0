//! Syntax tree pane rendering

use super::{clamp_scroll, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Colour the node kind of one outline row, leave the payload plain.
fn outline_line(row: &str) -> Line<'_> {
    let indent_len = row.len() - row.trim_start().len();
    let (indent, body) = row.split_at(indent_len);
    let (kind, payload) = body.split_once(' ').unwrap_or((body, ""));

    let kind_style = if kind == "Statement" {
        Style::default()
            .fg(DEFAULT_THEME.statement)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.node)
    };

    let mut spans = vec![Span::raw(indent), Span::styled(kind, kind_style)];
    if !payload.is_empty() {
        spans.push(Span::styled(
            format!(" {}", payload),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }
    Line::from(spans)
}

/// Render the syntax tree pane
///
/// When the source failed to tokenize or parse, the error replaces the tree.
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    outline: &[String],
    error: Option<&str>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Syntax Tree ", is_focused);

    if let Some(error) = error {
        let paragraph = Paragraph::new(error)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.error))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    if outline.is_empty() {
        let paragraph = Paragraph::new("(no statements)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = clamp_scroll(outline.len(), area, scroll_offset);

    let visible_items: Vec<ListItem> = outline
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| ListItem::new(outline_line(row)))
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_line_splits_kind_and_payload() {
        let line = outline_line("    Atom NumericLiteral(1)");
        let texts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["    ", "Atom", " NumericLiteral(1)"]);
    }

    #[test]
    fn test_statement_header_is_bold() {
        let line = outline_line("Statement 2");
        assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(line.spans.len(), 3);
    }
}
