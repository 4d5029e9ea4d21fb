//! Query status line: "Loading..." or "Something went wrong".

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::Notice;

/// Renders the notice, or leaves the row blank when there is none. Always
/// takes exactly one row.
pub fn render_notice(row: usize, notice: Option<Notice>, theme: &Theme) -> usize {
    if let Some(notice) = notice {
        let color = match notice {
            Notice::Loading => &theme.colors.loading_fg,
            Notice::Failed => &theme.colors.error_fg,
        };
        position_cursor(row, 1);
        print!(" {}{}{}", Theme::fg(color), notice.text(), Theme::reset());
    }
    row + 1
}
