//! Search endpoint configuration and URL construction.

use serde::{Deserialize, Serialize};

/// Hacker News search API used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

/// Immutable description of the remote search endpoint.
///
/// Built once from [`Config`](crate::Config) and handed to the
/// [`FetchOrchestrator`](super::FetchOrchestrator) at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEndpoint {
    base_url: String,
}

impl SearchEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the request URL for `term`, percent-encoding the term.
    ///
    /// # Example
    ///
    /// ```
    /// use hnsearch::fetch::SearchEndpoint;
    ///
    /// let endpoint = SearchEndpoint::default();
    /// assert_eq!(
    ///     endpoint.url_for("rust async"),
    ///     "https://hn.algolia.com/api/v1/search?query=rust%20async"
    /// );
    /// ```
    #[must_use]
    pub fn url_for(&self, term: &str) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        let encoded = urlencoding::encode(term);
        format!("{}{separator}query={encoded}", self.base_url)
    }
}

impl Default for SearchEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
