//! Preference storage abstraction.
//!
//! This module defines the [`PreferenceStore`] trait, a minimal durable
//! string key-value capability. The plugin stores one value through it (the
//! last search term) but the trait does not care which keys are used.

use crate::domain::error::Result;

/// Durable string preferences keyed by name.
///
/// # Implementations
///
/// - [`JsonPreferences`](super::JsonPreferences): JSON file with atomic writes
/// - [`MemoryPreferences`](super::MemoryPreferences): in-process map
///
/// # Examples
///
/// ```
/// use hnsearch::storage::{MemoryPreferences, PreferenceStore};
///
/// let mut store = MemoryPreferences::default();
/// assert_eq!(store.get_or("search", "React"), "React");
///
/// store.set("search", "Redux")?;
/// assert_eq!(store.get_or("search", "React"), "Redux");
/// # Ok::<(), hnsearch::HnSearchError>(())
/// ```
pub trait PreferenceStore: Send {
    /// Returns the stored value, or `None` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, persisting it before returning.
    ///
    /// Writing the same value twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Returns the stored value or `default`.
    ///
    /// Never fails: a missing key, a blank value and a backend error all
    /// yield `default`. Errors are logged.
    fn get_or(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Ok(Some(value)) if !value.trim().is_empty() => value,
            Ok(_) => {
                tracing::debug!(key = %key, "preference not set, using default");
                default.to_string()
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read preference, using default");
                default.to_string()
            }
        }
    }
}
