//! Query state machine for the remote search result set.
//!
//! [`QueryState`] holds the stories returned by the last successful fetch plus
//! the lifecycle phase of the current fetch. It changes only through
//! [`QueryState::reduce`], a pure total transition over the closed
//! [`QueryAction`] enum, and through [`QueryMachine::dispatch`], which applies
//! actions in the order they are dispatched.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──FetchStarted──▶ Loading ──FetchSucceeded──▶ Loaded
//!                          ▲   └──────FetchFailed───▶ Failed
//!                          └───────FetchStarted──────────┘ (from Loaded/Failed)
//! ```
//!
//! `ItemRemoved` is accepted in every phase and never changes it.
//!
//! # Example
//!
//! ```
//! use hnsearch::app::query::{QueryAction, QueryState};
//! use hnsearch::domain::Story;
//!
//! let state = QueryState::default()
//!     .reduce(QueryAction::FetchStarted)
//!     .reduce(QueryAction::FetchSucceeded(vec![Story::new("0", "React")]));
//!
//! assert!(!state.is_loading());
//! assert_eq!(state.items().len(), 1);
//! ```

use crate::domain::{Story, StoryId};
use std::collections::HashSet;

/// Lifecycle phase of the single outstanding query.
///
/// Loading and error are mutually exclusive by construction: both flags are
/// derived from this one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    /// No fetch has started yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The most recent applied fetch succeeded.
    Loaded,
    /// The most recent applied fetch failed; `items` still holds the last good set.
    Failed,
}

/// Transitions accepted by the query state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    /// A fetch has been issued.
    FetchStarted,
    /// A fetch completed with this payload, in server order.
    FetchSucceeded(Vec<Story>),
    /// A fetch completed with a failure.
    FetchFailed,
    /// The user dismissed the story with this id.
    ItemRemoved(StoryId),
}

/// Result set plus lifecycle phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    items: Vec<Story>,
    phase: QueryPhase,
}

impl QueryState {
    /// Stories in server response order, minus dismissed ones.
    #[must_use]
    pub fn items(&self) -> &[Story] {
        &self.items
    }

    #[must_use]
    pub const fn phase(&self) -> QueryPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, QueryPhase::Loading)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.phase, QueryPhase::Failed)
    }

    /// Applies one action and returns the next state.
    ///
    /// A successful payload replaces `items` wholesale. If the payload repeats
    /// an id, only the first occurrence is kept so ids stay unique.
    #[must_use]
    pub fn reduce(self, action: QueryAction) -> Self {
        match action {
            QueryAction::FetchStarted => Self {
                phase: QueryPhase::Loading,
                ..self
            },
            QueryAction::FetchSucceeded(payload) => Self {
                items: dedup_by_id(payload),
                phase: QueryPhase::Loaded,
            },
            QueryAction::FetchFailed => Self {
                phase: QueryPhase::Failed,
                ..self
            },
            QueryAction::ItemRemoved(id) => {
                let mut items = self.items;
                items.retain(|story| story.id != id);
                Self {
                    items,
                    phase: self.phase,
                }
            }
        }
    }
}

fn dedup_by_id(payload: Vec<Story>) -> Vec<Story> {
    let mut seen = HashSet::with_capacity(payload.len());
    let before = payload.len();
    let items: Vec<Story> = payload
        .into_iter()
        .filter(|story| seen.insert(story.id.clone()))
        .collect();

    if items.len() != before {
        tracing::debug!(
            dropped = before - items.len(),
            "payload contained duplicate story ids"
        );
    }
    items
}

/// Sole owner of the [`QueryState`].
///
/// Every mutation of the result set goes through [`dispatch`](Self::dispatch).
#[derive(Debug, Clone, Default)]
pub struct QueryMachine {
    state: QueryState,
}

impl QueryMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState {
        &self.state
    }

    /// Applies `action` to the owned state.
    pub fn dispatch(&mut self, action: QueryAction) {
        let _span = tracing::trace_span!("query_dispatch", action = action_name(&action)).entered();

        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);

        tracing::trace!(
            phase = ?self.state.phase,
            item_count = self.state.items.len(),
            "query state updated"
        );
    }
}

const fn action_name(action: &QueryAction) -> &'static str {
    match action {
        QueryAction::FetchStarted => "fetch_started",
        QueryAction::FetchSucceeded(_) => "fetch_succeeded",
        QueryAction::FetchFailed => "fetch_failed",
        QueryAction::ItemRemoved(_) => "item_removed",
    }
}
