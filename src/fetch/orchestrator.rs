//! Fetch orchestration: when to fetch and how outcomes reach the state machine.
//!
//! The orchestrator owns the current [`QueryTarget`]. Each change of the
//! target to a non-empty term issues exactly one [`FetchRequest`] and
//! dispatches `FetchStarted`; the runtime performs the request and hands the
//! outcome back through [`FetchOrchestrator::resolve`].
//!
//! # Stale outcomes
//!
//! Every request is tagged with a sequence number. Only the outcome of the
//! most recently issued request is applied, and only once. An outcome for an
//! older request is discarded, so a slow response to an abandoned query can
//! never overwrite the results of a newer one. Nothing is aborted: the
//! superseded request simply finishes and is ignored.
//!
//! ```text
//! retarget("rust")  → seq 1, FetchStarted
//! retarget("go")    → seq 2, FetchStarted
//! resolve(2, Ok)    → FetchSucceeded        (applied)
//! resolve(1, Ok)    → (none)                (stale, discarded)
//! ```

use super::endpoint::SearchEndpoint;
use super::request::{FetchRequest, QueryTarget};
use crate::app::query::{QueryAction, QueryMachine};
use crate::domain::{FetchFailure, Story};

/// Decides when to fetch and translates outcomes into query actions.
#[derive(Debug, Clone)]
pub struct FetchOrchestrator {
    endpoint: SearchEndpoint,
    target: Option<QueryTarget>,
    /// Sequence number of the most recently issued request, 0 before the first.
    latest_seq: u64,
    /// Sequence number of the latest request while it is still unresolved.
    in_flight: Option<u64>,
}

impl FetchOrchestrator {
    #[must_use]
    pub const fn new(endpoint: SearchEndpoint) -> Self {
        Self {
            endpoint,
            target: None,
            latest_seq: 0,
            in_flight: None,
        }
    }

    #[must_use]
    pub const fn endpoint(&self) -> &SearchEndpoint {
        &self.endpoint
    }

    #[must_use]
    pub const fn target(&self) -> Option<&QueryTarget> {
        self.target.as_ref()
    }

    /// Sequence number of the unresolved latest request, if any.
    #[must_use]
    pub const fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Points the orchestrator at `term`, issuing a fetch if the target changed.
    ///
    /// Returns `None` without touching any state when the trimmed term is
    /// empty or equals the current target. Otherwise dispatches
    /// `FetchStarted` and returns the request for the runtime to perform.
    pub fn retarget(&mut self, term: &str, machine: &mut QueryMachine) -> Option<FetchRequest> {
        let term = term.trim();

        if term.is_empty() {
            tracing::debug!("empty search target, skipping fetch");
            return None;
        }

        if self.target.as_ref().is_some_and(|current| current.term == term) {
            tracing::debug!(term = %term, "search target unchanged, skipping fetch");
            return None;
        }

        let url = self.endpoint.url_for(term);
        self.latest_seq += 1;
        self.in_flight = Some(self.latest_seq);
        self.target = Some(QueryTarget {
            term: term.to_string(),
            url: url.clone(),
        });

        tracing::debug!(seq = self.latest_seq, term = %term, url = %url, "issuing fetch");
        machine.dispatch(QueryAction::FetchStarted);

        Some(FetchRequest {
            seq: self.latest_seq,
            url,
        })
    }

    /// Applies the outcome of request `seq` if it is the latest unresolved one.
    ///
    /// Returns `true` when the outcome was applied. Outcomes of superseded
    /// requests, and repeated outcomes for an already resolved request, are
    /// dropped and leave the state untouched.
    pub fn resolve(
        &mut self,
        seq: u64,
        outcome: Result<Vec<Story>, FetchFailure>,
        machine: &mut QueryMachine,
    ) -> bool {
        if self.in_flight != Some(seq) {
            if seq < self.latest_seq {
                tracing::debug!(seq, latest_seq = self.latest_seq, "discarding stale fetch outcome");
            } else {
                tracing::debug!(seq, "ignoring outcome for a request that is not in flight");
            }
            return false;
        }

        self.in_flight = None;

        match outcome {
            Ok(stories) => {
                tracing::debug!(seq, story_count = stories.len(), "fetch succeeded");
                machine.dispatch(QueryAction::FetchSucceeded(stories));
            }
            Err(failure) => {
                tracing::warn!(seq, error = %failure, "fetch failed");
                machine.dispatch(QueryAction::FetchFailed);
            }
        }
        true
    }
}
