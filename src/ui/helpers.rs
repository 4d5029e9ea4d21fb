//! Shared rendering utilities.
//!
//! All widths here are in characters, not bytes, so titles with non-ASCII
//! text line up in the table.

use crate::ui::theme::Theme;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in characters.
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Left-aligns `text` in a column of `width`, cutting it if too long.
pub fn fit(text: &str, width: usize) -> String {
    let shown: String = text.chars().take(width).collect();
    let pad = width.saturating_sub(char_width(&shown));
    format!("{shown}{}", " ".repeat(pad))
}

/// Right-aligns `text` in a column of `width`, cutting it if too long.
pub fn fit_right(text: &str, width: usize) -> String {
    let shown: String = text.chars().take(width).collect();
    let pad = width.saturating_sub(char_width(&shown));
    format!("{}{shown}", " ".repeat(pad))
}

/// Prints `text` centered in `cols`, padded to the full width.
pub fn print_centered(text: &str, cols: usize) {
    let shown: String = text.chars().take(cols).collect();
    let len = char_width(&shown);
    let left = cols.saturating_sub(len) / 2;
    print!("{}{shown}{}", " ".repeat(left), " ".repeat(cols.saturating_sub(left + len)));
}

/// Prints `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Selected rows are printed without highlights so the
/// selection colors stay intact.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        print!("{}", chars[pos..start].iter().collect::<String>());
        print!(
            "{}{}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            chars[start..end].iter().collect::<String>(),
            Theme::reset()
        );
        print!("{}", Theme::fg(&theme.colors.text_normal));
        pos = end;
    }

    print!("{}", chars[pos..].iter().collect::<String>());
}
