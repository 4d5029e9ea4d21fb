//! Story table renderer.
//!
//! ```text
//! TITLE                         AUTHOR           COMMENTS  POINTS  AGE
//! Show HN: A tiny search engine pg                     12     143  3h ago
//! ```

use crate::ui::helpers::{self, fit, fit_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{title_width, DisplayItem, AGE_WIDTH, AUTHOR_WIDTH, COMMENTS_WIDTH, POINTS_WIDTH};

/// Renders the column headers. Returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_dim));
    print!(
        "{} {} {} {} {}",
        fit("TITLE", title_width(cols)),
        fit("AUTHOR", AUTHOR_WIDTH),
        fit_right("COMMENTS", COMMENTS_WIDTH),
        fit_right("POINTS", POINTS_WIDTH),
        fit("AGE", AGE_WIDTH),
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one row per item. Returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_table_row(current, item, theme, cols))
}

fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let title_cols = title_width(cols);
    position_cursor(row, 1);

    let base = if item.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base}");

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    if !item.is_selected && !item.highlight_ranges.is_empty() {
        print!("{base}");
    }
    print!("{} ", " ".repeat(title_cols.saturating_sub(helpers::char_width(&item.title))));

    print!("{} ", fit(&item.author, AUTHOR_WIDTH));
    print!("{} ", fit_right(&item.comments, COMMENTS_WIDTH));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.points_fg));
    }
    print!("{} ", fit_right(&item.points, POINTS_WIDTH));
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", fit(&item.age, AGE_WIDTH));

    let used = title_cols + AUTHOR_WIDTH + COMMENTS_WIDTH + POINTS_WIDTH + AGE_WIDTH + 4;
    print!("{}{}", " ".repeat(cols.saturating_sub(used)), Theme::reset());
    row + 1
}
