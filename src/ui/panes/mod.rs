//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text with syntax highlighting and line numbers
//! - [`tokens`]: The token stream, one token per row, coloured by category
//! - [`tree`]: The syntax tree outline
//! - [`status`]: Status bar with file name, summary and keybindings
//!
//! Every pane is a stateless `render_*` function. Scroll offsets live in
//! [`App`](super::app::App) and are clamped here so that `usize::MAX` means
//! "last page".

pub mod source;
pub mod status;
pub mod tokens;
pub mod tree;

pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `scroll_offset` for `total_items` rows in `area` and return the
/// number of visible rows.
fn clamp_scroll(total_items: usize, area: Rect, scroll_offset: &mut usize) -> usize {
    // Account for borders, min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    visible_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let area = Rect::new(0, 0, 20, 12); // 10 visible rows

        let mut offset = usize::MAX;
        assert_eq!(clamp_scroll(25, area, &mut offset), 10);
        assert_eq!(offset, 15);

        let mut offset = 4;
        clamp_scroll(5, area, &mut offset);
        assert_eq!(offset, 0);
    }
}
