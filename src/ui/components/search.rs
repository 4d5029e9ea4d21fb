//! Search bar renderer.
//!
//! ```text
//!      ┌──────────────────────────────────────────┐
//!      │ Search: react hooks▏          [Enter] Submit │
//!      └──────────────────────────────────────────┘
//! ```
//!
//! The submit hint is dimmed when the term is empty, since Enter would do
//! nothing.

use crate::ui::helpers::{char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on each side of the box.
const SEARCH_BOX_MARGIN: usize = 2;

const SUBMIT_HINT: &str = "[Enter] Submit ";

/// Renders the 3-row search box at `row`. Returns the next free row.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, 1);
    print!("{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let cursor = if search.is_editing { "▏" } else { "" };
    let text = format!(" Search: {}{cursor}", search.query);
    let hint = if search.is_editing { SUBMIT_HINT } else { "" };
    let gap = inner_width.saturating_sub(char_width(&text) + char_width(hint));

    position_cursor(row + 1, 1);
    print!("{margin}{border}│{}", Theme::fg(&theme.colors.text_normal));
    if search.is_editing {
        print!("{}", Theme::bold());
    }
    print!("{text}{}{}", Theme::reset(), " ".repeat(gap));
    if search.can_submit {
        print!("{}{hint}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}{}{hint}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    }
    print!("{}{border}│{}", Theme::reset(), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
