//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the plugin shows: the query
//! state machine, the fetch orchestrator, the persisted search term, and the
//! transient UI state (modes, selection, theme).
//!
//! # State Components
//!
//! - **Query**: result set and lifecycle phase, mutated only through
//!   [`QueryMachine::dispatch`]
//! - **Orchestrator**: current query target and in-flight request tag
//! - **Term**: search term being edited, persisted on change
//! - **Selection**: cursor position within the displayed stories
//!
//! The displayed stories are derived on demand: the full result set in
//! `Submit` and `Live` mode, the locally filtered subset in `Local` mode.

use super::filter::{filter_stories, match_range};
use super::modes::{InputMode, SearchMode};
use super::query::{QueryAction, QueryMachine, QueryPhase, QueryState};
use super::term::PersistedTerm;
use crate::domain::{FetchFailure, Story, StoryId};
use crate::fetch::{FetchOrchestrator, FetchRequest, SearchEndpoint};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    title_width, DisplayItem, EmptyState, FooterInfo, HeaderInfo, Notice, SearchBarInfo, UIViewModel,
};
use crate::Config;

/// Rows taken by everything except the story rows: blank line, header,
/// border, search bar (3), notice line, table header, border, footer and the
/// last terminal row.
const CHROME_ROWS: usize = 11;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    machine: QueryMachine,
    orchestrator: FetchOrchestrator,

    /// Search term, persisted under the configured preference key.
    pub term: PersistedTerm,

    /// Term used when nothing is stored yet.
    pub default_term: String,

    pub input_mode: InputMode,
    pub search_mode: SearchMode,

    /// Zero-based index into the displayed stories.
    pub selected_index: usize,

    pub theme: Theme,
}

impl AppState {
    /// Creates an idle state from the plugin configuration.
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            machine: QueryMachine::new(),
            orchestrator: FetchOrchestrator::new(SearchEndpoint::new(config.endpoint.clone())),
            term: PersistedTerm::new(config.preference_key.clone(), config.persist),
            default_term: config.default_query.clone(),
            input_mode: InputMode::Normal,
            search_mode: config.search_mode,
            selected_index: 0,
            theme,
        }
    }

    #[must_use]
    pub const fn query(&self) -> &QueryState {
        self.machine.state()
    }

    #[must_use]
    pub const fn orchestrator(&self) -> &FetchOrchestrator {
        &self.orchestrator
    }

    /// Points the orchestrator at the current term.
    pub fn retarget_to_term(&mut self) -> Option<FetchRequest> {
        self.orchestrator.retarget(self.term.value(), &mut self.machine)
    }

    /// Applies a fetch outcome, returning whether it changed the state.
    pub fn resolve_fetch(&mut self, seq: u64, outcome: Result<Vec<Story>, FetchFailure>) -> bool {
        let applied = self.orchestrator.resolve(seq, outcome, &mut self.machine);
        if applied {
            self.clamp_selection();
        }
        applied
    }

    /// Removes the selected story from the result set.
    ///
    /// Returns the removed id, or `None` when nothing is selected.
    pub fn dismiss_selected(&mut self) -> Option<StoryId> {
        let id = self.selected_story()?.id.clone();
        self.machine.dispatch(QueryAction::ItemRemoved(id.clone()));
        self.clamp_selection();
        Some(id)
    }

    /// Stories currently shown, in result order.
    #[must_use]
    pub fn displayed_stories(&self) -> Vec<&Story> {
        let items = self.query().items();
        match self.search_mode {
            SearchMode::Local => filter_stories(items, self.term.value()),
            SearchMode::Submit | SearchMode::Live => items.iter().collect(),
        }
    }

    #[must_use]
    pub fn selected_story(&self) -> Option<&Story> {
        self.displayed_stories().get(self.selected_index).copied()
    }

    /// Moves selection down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.displayed_stories().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.displayed_stories().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Keeps the selection inside the displayed stories.
    pub fn clamp_selection(&mut self) {
        let len = self.displayed_stories().len();
        self.selected_index = if len == 0 { 0 } else { self.selected_index.min(len - 1) };
    }

    /// Term whose occurrences are highlighted in titles.
    fn highlight_term(&self) -> Option<&str> {
        let term = match self.search_mode {
            SearchMode::Local => self.term.value(),
            SearchMode::Submit | SearchMode::Live => self.orchestrator.target().map(|t| t.term.as_str())?,
        };
        let term = term.trim();
        (!term.is_empty()).then_some(term)
    }

    /// Computes the view model for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        self.compute_viewmodel_at(rows, cols, chrono::Utc::now().timestamp())
    }

    /// Computes the view model with story ages relative to `now`.
    ///
    /// While a fetch is loading the table is replaced by the loading notice.
    /// After a failure the notice sits above the last good stories.
    #[must_use]
    pub fn compute_viewmodel_at(&self, rows: usize, cols: usize, now: i64) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let stories = self.displayed_stories();
        let phase = self.query().phase();

        let notice = match phase {
            QueryPhase::Loading => Some(Notice::Loading),
            QueryPhase::Failed => Some(Notice::Failed),
            QueryPhase::Idle | QueryPhase::Loaded => None,
        };

        let mut display_items = Vec::new();
        let mut selected_display_index = 0;

        if phase != QueryPhase::Loading && !stories.is_empty() {
            let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

            let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
            let visible_end = (visible_start + available_rows).min(stories.len());
            if visible_end - visible_start < available_rows && stories.len() >= available_rows {
                visible_start = visible_end.saturating_sub(available_rows);
            }

            let highlight = self.highlight_term();
            let width = title_width(cols);

            display_items = stories[visible_start..visible_end]
                .iter()
                .enumerate()
                .map(|(relative_idx, story)| {
                    let is_selected = visible_start + relative_idx == self.selected_index;
                    Self::compute_display_item(story, is_selected, highlight, width, now)
                })
                .collect();
            selected_display_index = self.selected_index.saturating_sub(visible_start);
        }

        let empty_state = (phase != QueryPhase::Loading && stories.is_empty()).then(|| self.compute_empty_state());

        UIViewModel {
            display_items,
            selected_index: selected_display_index,
            header: HeaderInfo {
                title: format!(" Hacker Stories ({}) ", stories.len()),
            },
            footer: self.compute_footer(),
            search_bar: SearchBarInfo {
                query: self.term.value().to_string(),
                is_editing: self.input_mode == InputMode::Editing,
                can_submit: !self.term.value().trim().is_empty(),
            },
            notice,
            empty_state,
        }
    }

    fn compute_display_item(
        story: &Story,
        is_selected: bool,
        highlight: Option<&str>,
        width: usize,
        now: i64,
    ) -> DisplayItem {
        let title = truncate(&story.title, width);
        let visible_len = title.chars().count();

        let highlight_ranges = highlight
            .and_then(|term| match_range(&story.title, term))
            .filter(|&(start, _)| start < visible_len)
            .map(|(start, end)| vec![(start, end.min(visible_len))])
            .unwrap_or_default();

        DisplayItem {
            title,
            author: story.author.clone(),
            comments: story.comment_count.to_string(),
            points: story.points.to_string(),
            age: story.age(now),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        match self.query().phase() {
            QueryPhase::Idle => EmptyState {
                message: "No stories yet".to_string(),
                subtitle: "Press / to enter a search term".to_string(),
            },
            _ if self.search_mode == SearchMode::Local && !self.query().items().is_empty() => EmptyState {
                message: format!("No stories match \"{}\"", self.term.value().trim()),
                subtitle: "Press / to change the filter".to_string(),
            },
            _ => EmptyState {
                message: "No stories found".to_string(),
                subtitle: "Press / to try another search".to_string(),
            },
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.search_mode) {
            (InputMode::Normal, _) => "j/k: navigate  /: edit search  d: dismiss  q: quit",
            (InputMode::Editing, SearchMode::Submit) => "Type to edit  Enter: submit  Esc: done",
            (InputMode::Editing, SearchMode::Live) => "Type to search  Enter/Esc: done",
            (InputMode::Editing, SearchMode::Local) => "Type to filter  Enter/Esc: done",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Shortens `text` to `width` characters, marking the cut with `...`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(mode: SearchMode) -> AppState {
        let config = Config {
            search_mode: mode,
            ..Config::default()
        };
        AppState::new(&config, Theme::default())
    }

    fn loaded(mode: SearchMode, titles: &[&str]) -> AppState {
        let mut state = state(mode);
        state.term.load("react");
        let request = state.retarget_to_term().unwrap();
        let stories = titles
            .iter()
            .enumerate()
            .map(|(i, title)| Story::new(i.to_string(), *title))
            .collect();
        assert!(state.resolve_fetch(request.seq, Ok(stories)));
        state
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = loaded(SearchMode::Submit, &["a", "b", "c"]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn dismissing_last_row_clamps_selection() {
        let mut state = loaded(SearchMode::Submit, &["a", "b"]);
        state.selected_index = 1;

        assert_eq!(state.dismiss_selected(), Some(StoryId::new("1")));
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.query().items().len(), 1);
    }

    #[test]
    fn local_mode_displays_filtered_subset() {
        let mut state = loaded(SearchMode::Local, &["React hooks", "Rust", "Preact"]);
        let titles: Vec<&str> = state.displayed_stories().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["React hooks", "Preact"]);

        state.term.set("");
        assert_eq!(state.displayed_stories().len(), 3);
    }

    #[test]
    fn loading_hides_table() {
        let mut state = state(SearchMode::Submit);
        state.term.load("React");
        state.retarget_to_term();

        let vm = state.compute_viewmodel_at(24, 100, 0);
        assert_eq!(vm.notice, Some(Notice::Loading));
        assert!(vm.display_items.is_empty());
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn failure_notice_keeps_last_stories_visible() {
        let mut state = loaded(SearchMode::Submit, &["React", "Redux"]);
        state.term.set("Vue");
        let request = state.retarget_to_term().unwrap();
        state.resolve_fetch(request.seq, Err(FetchFailure::new("HTTP 500")));

        let vm = state.compute_viewmodel_at(24, 100, 0);
        assert_eq!(vm.notice, Some(Notice::Failed));
        assert_eq!(vm.display_items.len(), 2);
        assert_eq!(vm.header.title, " Hacker Stories (2) ");
    }

    #[test]
    fn window_follows_selection() {
        let titles: Vec<String> = (0..30).map(|i| format!("story {i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut state = loaded(SearchMode::Submit, &refs);
        state.selected_index = 25;

        let vm = state.compute_viewmodel_at(20, 100, 0);
        assert_eq!(vm.display_items.len(), 9);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].title, "story 25");
    }

    #[test]
    fn highlight_is_clipped_to_truncated_title() {
        let mut state = loaded(SearchMode::Local, &["A very long headline that ends with React"]);
        state.term.set("react");

        let vm = state.compute_viewmodel_at(24, 40, 0);
        assert!(vm.display_items[0].title.ends_with("..."));
        assert!(vm.display_items[0].highlight_ranges.is_empty());
    }

    #[test]
    fn empty_term_disables_submit() {
        let mut state = state(SearchMode::Submit);
        state.term.load("  ");
        let vm = state.compute_viewmodel_at(24, 80, 0);
        assert!(!vm.search_bar.can_submit);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No stories yet".to_string()));
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("short", 8), "short");
    }
}
