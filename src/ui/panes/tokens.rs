//! Token stream pane rendering

use super::{clamp_scroll, pane_block};
use crate::parser::lexer::{Category, Token, TokenValue};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

pub(crate) fn category_color(category: Category) -> Color {
    match category {
        Category::Keyword | Category::LogicalOperator => DEFAULT_THEME.keyword,
        Category::Identifier => DEFAULT_THEME.fg,
        Category::StringLiteral => DEFAULT_THEME.string,
        Category::NumericLiteral => DEFAULT_THEME.number,
        Category::AssignmentOperator
        | Category::ArithmeticOperator
        | Category::RelationalOperator => DEFAULT_THEME.operator,
        Category::LeftParenthesis
        | Category::RightParenthesis
        | Category::Colon
        | Category::Comma => DEFAULT_THEME.primary,
        Category::Comment => DEFAULT_THEME.comment,
        Category::Indent | Category::Dedent | Category::Newline => DEFAULT_THEME.structural,
    }
}

fn token_line(index: usize, token: &Token) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{:4} ", index), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            token.category.name(),
            Style::default().fg(category_color(token.category)),
        ),
    ];

    match &token.value {
        TokenValue::Text(text) if text.is_empty() => {}
        value => spans.push(Span::styled(
            format!(" {}", value),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    }

    Line::from(spans)
}

/// Render the token stream pane
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Tokens ", is_focused);

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = clamp_scroll(tokens.len(), area, scroll_offset);

    let visible_items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, token)| ListItem::new(token_line(index, token)))
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_tokens_have_no_value_span() {
        let line = token_line(3, &Token::marker(Category::Indent));
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, "Indent");
    }

    #[test]
    fn test_valued_tokens_show_value() {
        let line = token_line(0, &Token::new(Category::StringLiteral, "hi there"));
        assert_eq!(line.spans[2].content, " hi there");
        assert_eq!(line.spans[1].style.fg, Some(DEFAULT_THEME.string));
    }
}
