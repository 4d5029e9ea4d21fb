//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only entry point through which the plugin runtime
//! changes [`AppState`]. It returns whether a re-render is needed plus the
//! side effects to run, in order.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `DismissSelected`, `CloseFocus`
//! - **Term editing**: `EditSearch`, `StopEditing`, `Char`, `Backspace`, `Submit`
//! - **System**: `PermissionsGranted`, `FetchCompleted`
//! - **Worker**: `WorkerResponse`
//!
//! # When fetches happen
//!
//! | mode     | startup | `Char`/`Backspace` | `Submit` |
//! |----------|---------|--------------------|----------|
//! | `Submit` | fetch   | persist only       | fetch    |
//! | `Live`   | fetch   | fetch              | -        |
//! | `Local`  | fetch   | refilter           | -        |
//!
//! A fetch is only ever issued through the orchestrator, so an empty or
//! unchanged term never produces one.

use super::modes::{InputMode, SearchMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{FetchFailure, Story};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, the runtime, or the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection down by one (wraps to top).
    KeyDown,
    /// Moves selection up by one (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Starts editing the search term.
    EditSearch,
    /// Leaves editing without submitting.
    StopEditing,
    /// Appends a character to the search term.
    Char(char),
    /// Removes the last character of the search term.
    Backspace,
    /// Submits the search term.
    Submit,
    /// Dismisses the selected story.
    DismissSelected,

    /// The user granted the requested permissions; startup may proceed.
    PermissionsGranted,

    /// The runtime finished the request tagged `seq`.
    FetchCompleted {
        seq: u64,
        outcome: std::result::Result<Vec<Story>, FetchFailure>,
    },

    /// A response from the preference worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// No event handled today returns an error.
///
/// # Example
///
/// ```
/// use hnsearch::{handle_event, initialize, Action, Config, Event};
///
/// let mut state = initialize(&Config::default());
/// let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
/// assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));
/// # Ok::<(), hnsearch::HnSearchError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::EditSearch => {
            if !state.term.is_loaded() {
                tracing::debug!("search term not loaded yet, editing deferred");
                return Ok((false, vec![]));
            }
            tracing::debug!("editing search term");
            state.input_mode = InputMode::Editing;
            Ok((true, vec![]))
        }
        Event::StopEditing => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            let persist = state.term.push(*c);
            tracing::trace!(term = %state.term.value(), char = %c, "search term updated");
            Ok((true, term_changed(state, persist)))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            let persist = state.term.pop();
            Ok((true, term_changed(state, persist)))
        }
        Event::Submit => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            if state.term.value().trim().is_empty() {
                tracing::debug!("submit ignored for empty search term");
                return Ok((false, vec![]));
            }

            state.input_mode = InputMode::Normal;
            let actions = match state.search_mode {
                SearchMode::Submit => state.retarget_to_term().map(Action::Fetch).into_iter().collect(),
                SearchMode::Live | SearchMode::Local => vec![],
            };
            Ok((true, actions))
        }
        Event::DismissSelected => {
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.dismiss_selected().map_or_else(
                || {
                    tracing::debug!("no story selected to dismiss");
                    Ok((false, vec![]))
                },
                |id| {
                    tracing::debug!(story_id = %id, "story dismissed");
                    Ok((true, vec![]))
                },
            )
        }
        Event::PermissionsGranted => {
            if state.term.is_loaded() {
                return Ok((false, vec![]));
            }
            tracing::debug!(key = %state.term.key(), "loading stored search term");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::load_preference(
                    state.term.key().to_string(),
                    state.default_term.clone(),
                ))],
            ))
        }
        Event::FetchCompleted { seq, outcome } => Ok((state.resolve_fetch(*seq, outcome.clone()), vec![])),
        Event::WorkerResponse(response) => match response {
            WorkerResponse::PreferenceLoaded { key, value } => {
                if key != state.term.key() || state.term.is_loaded() {
                    tracing::debug!(key = %key, "ignoring preference load");
                    return Ok((false, vec![]));
                }

                let value = if value.trim().is_empty() {
                    tracing::debug!(default = %state.default_term, "stored search term blank, using default");
                    state.default_term.clone()
                } else {
                    value.clone()
                };

                tracing::debug!(term = %value, "search term loaded");
                let mut actions: Vec<Action> = state.term.load(value).map(Action::PostToWorker).into_iter().collect();
                actions.extend(state.retarget_to_term().map(Action::Fetch));
                Ok((true, actions))
            }
            WorkerResponse::PreferenceSaved { key } => {
                tracing::trace!(key = %key, "preference saved");
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::warn!(error = %message, "worker error");
                Ok((false, vec![]))
            }
        },
    }
}

/// Follows a term edit with the persist write and, per search mode, a refetch
/// or a refilter.
fn term_changed(state: &mut AppState, persist: Option<WorkerMessage>) -> Vec<Action> {
    let mut actions: Vec<Action> = persist.map(Action::PostToWorker).into_iter().collect();

    match state.search_mode {
        SearchMode::Live => actions.extend(state.retarget_to_term().map(Action::Fetch)),
        SearchMode::Local => state.clamp_selection(),
        SearchMode::Submit => {}
    }

    actions
}
