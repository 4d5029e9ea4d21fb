//! Error types for the hnsearch plugin.
//!
//! This module defines the centralized error type [`HnSearchError`], the single
//! remote-read failure kind [`FetchFailure`], and a [`Result`] alias used
//! throughout the crate. All errors are implemented with `thiserror`.

use thiserror::Error;

/// The one and only way a remote search can fail.
///
/// Transport errors, non-success HTTP statuses and malformed payloads are all
/// coalesced into this type. The core never branches on the cause; `message`
/// exists purely for diagnostics and is only ever written to the trace log.
///
/// # Examples
///
/// ```
/// use hnsearch::domain::FetchFailure;
///
/// let failure = FetchFailure::new("HTTP 503");
/// assert_eq!(failure.to_string(), "fetch failed: HTTP 503");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fetch failed: {message}")]
pub struct FetchFailure {
    /// Human-readable diagnostic detail.
    pub message: String,
}

impl FetchFailure {
    /// Creates a failure carrying a diagnostic message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The main error type for hnsearch operations.
///
/// Most variants carry a description of what went wrong. I/O errors convert
/// automatically through `#[from]`.
///
/// # Examples
///
/// ```
/// use hnsearch::domain::HnSearchError;
///
/// fn open_preferences() -> Result<(), HnSearchError> {
///     Err(HnSearchError::Storage("preference file is not valid JSON".to_string()))
/// }
/// assert!(open_preferences().is_err());
/// ```
#[derive(Debug, Error)]
pub enum HnSearchError {
    /// Preference storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for hnsearch operations.
pub type Result<T> = std::result::Result<T, HnSearchError>;
