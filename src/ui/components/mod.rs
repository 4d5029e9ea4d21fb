//! Composable UI component renderers.
//!
//! - [`header`]: Title with the story count
//! - [`search`]: Search term box with the submit hint
//! - [`notice`]: Loading / failure line
//! - [`table`]: Story list (TITLE, AUTHOR, COMMENTS, POINTS, AGE)
//! - [`empty`]: Message shown instead of an empty table
//! - [`footer`]: Keybinding hints
//!
//! Every component takes the row to draw at and returns the next free row.

mod empty;
mod footer;
mod header;
mod notice;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use notice::render_notice;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Renders the full layout:
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Notice]
/// [Table Headers + Rows | Empty State]
/// [Border]
/// [Footer]
/// ```
///
/// While loading, the table area stays blank under the notice.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut row = 2;

    row = render_header(row, &vm.header, theme, cols);
    row = render_border(row, &theme.colors.border, cols);
    row = render_search_bar(row, &vm.search_bar, theme, cols);
    row = render_notice(row, vm.notice, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(row, empty, theme, cols);
    } else if !vm.display_items.is_empty() {
        row = render_table_headers(row, theme, cols);
        render_table_rows(row, &vm.display_items, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
