//! Query targets and outgoing fetch requests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Context key carrying the request sequence number through the runtime.
const SEQ_CONTEXT_KEY: &str = "hnsearch_seq";

/// The resolved query the orchestrator fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTarget {
    /// Trimmed, non-empty search term.
    pub term: String,
    /// Fully-resolved request URL for `term`.
    pub url: String,
}

/// A fetch the runtime must perform and report back on.
///
/// `seq` increases with every request the orchestrator issues. The runtime
/// echoes it back with the outcome so superseded results can be recognised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    pub seq: u64,
    pub url: String,
}

impl FetchRequest {
    /// Request context map attached to the outgoing web request.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(SEQ_CONTEXT_KEY.to_string(), self.seq.to_string())])
    }

    /// Recovers the sequence number from a web request result's context.
    ///
    /// Returns `None` for results that did not originate from a [`FetchRequest`].
    ///
    /// # Example
    ///
    /// ```
    /// use hnsearch::fetch::FetchRequest;
    ///
    /// let request = FetchRequest { seq: 7, url: "https://example.test".into() };
    /// assert_eq!(FetchRequest::seq_from_context(&request.context()), Some(7));
    /// ```
    #[must_use]
    pub fn seq_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
        context.get(SEQ_CONTEXT_KEY)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_context_has_no_seq() {
        assert_eq!(FetchRequest::seq_from_context(&BTreeMap::new()), None);

        let garbage = BTreeMap::from([(SEQ_CONTEXT_KEY.to_string(), "x".to_string())]);
        assert_eq!(FetchRequest::seq_from_context(&garbage), None);
    }
}
