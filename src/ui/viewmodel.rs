//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Story rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,
    pub search_bar: SearchBarInfo,

    /// Loading or failure line shown between the search bar and the table.
    pub notice: Option<Notice>,

    /// Message shown in place of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// One story row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the title column.
    pub title: String,
    pub author: String,
    pub comments: String,
    pub points: String,
    /// Relative age such as `3h ago`.
    pub age: String,
    pub is_selected: bool,

    /// Character ranges of `title` to highlight as filter matches.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term.
    pub query: String,

    /// Whether the term is being edited.
    pub is_editing: bool,

    /// Whether Enter would submit. False for an empty term.
    pub can_submit: bool,
}

/// Status line for the query lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Loading,
    Failed,
}

impl Notice {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Loading => "Loading...",
            Self::Failed => "Something went wrong",
        }
    }
}

/// Empty state message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Width of the author column.
pub const AUTHOR_WIDTH: usize = 16;
/// Width of the comment count column.
pub const COMMENTS_WIDTH: usize = 9;
/// Width of the points column.
pub const POINTS_WIDTH: usize = 7;
/// Width of the age column.
pub const AGE_WIDTH: usize = 9;
/// Narrowest title column, even on tiny panes.
pub const MIN_TITLE_WIDTH: usize = 12;

/// Width left for the title column in a pane `cols` wide.
#[must_use]
pub const fn title_width(cols: usize) -> usize {
    let fixed = AUTHOR_WIDTH + COMMENTS_WIDTH + POINTS_WIDTH + AGE_WIDTH + 4;
    let width = cols.saturating_sub(fixed);
    if width < MIN_TITLE_WIDTH {
        MIN_TITLE_WIDTH
    } else {
        width
    }
}
