//! The search term and its write-back to the preference store.
//!
//! [`PersistedTerm`] never touches storage itself. Each mutation that changes
//! the value yields the [`WorkerMessage`] that persists it, and the caller
//! turns that into an [`Action`](crate::app::Action).

use super::modes::PersistPolicy;
use crate::worker::WorkerMessage;

/// Search term backed by a preference key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTerm {
    key: String,
    value: String,
    policy: PersistPolicy,
    loaded: bool,
}

impl PersistedTerm {
    /// Creates an empty term persisted under `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, policy: PersistPolicy) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
            policy,
            loaded: false,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the startup value has been loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Installs the value read at startup.
    ///
    /// Only the first call has any effect. The startup value is written back
    /// only under [`PersistPolicy::EveryChange`].
    pub fn load(&mut self, value: impl Into<String>) -> Option<WorkerMessage> {
        if self.loaded {
            tracing::debug!(key = %self.key, "search term already loaded, ignoring");
            return None;
        }

        self.loaded = true;
        self.value = value.into();

        match self.policy {
            PersistPolicy::SkipInitial => None,
            PersistPolicy::EveryChange => Some(self.save_message()),
        }
    }

    /// Replaces the value, returning the write for a real change.
    pub fn set(&mut self, value: impl Into<String>) -> Option<WorkerMessage> {
        let value = value.into();
        if value == self.value {
            return None;
        }

        self.value = value;
        Some(self.save_message())
    }

    pub fn push(&mut self, c: char) -> Option<WorkerMessage> {
        let mut value = self.value.clone();
        value.push(c);
        self.set(value)
    }

    pub fn pop(&mut self) -> Option<WorkerMessage> {
        let mut value = self.value.clone();
        value.pop()?;
        self.set(value)
    }

    fn save_message(&self) -> WorkerMessage {
        tracing::trace!(key = %self.key, value = %self.value, "persisting search term");
        WorkerMessage::save_preference(self.key.clone(), self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved_value(message: Option<WorkerMessage>) -> Option<String> {
        message.map(|m| match m {
            WorkerMessage::SavePreference { value, .. } => value,
            other => panic!("unexpected message {other:?}"),
        })
    }

    #[test]
    fn startup_value_is_not_written_by_default() {
        let mut term = PersistedTerm::new("search", PersistPolicy::SkipInitial);
        assert_eq!(term.load("React"), None);
        assert_eq!(term.value(), "React");
        assert!(term.is_loaded());
    }

    #[test]
    fn every_change_writes_startup_value() {
        let mut term = PersistedTerm::new("search", PersistPolicy::EveryChange);
        assert_eq!(saved_value(term.load("React")), Some("React".to_string()));
    }

    #[test]
    fn second_load_is_ignored() {
        let mut term = PersistedTerm::new("search", PersistPolicy::SkipInitial);
        term.load("React");
        assert_eq!(term.load("Vue"), None);
        assert_eq!(term.value(), "React");
    }

    #[test]
    fn edits_are_written() {
        let mut term = PersistedTerm::new("search", PersistPolicy::SkipInitial);
        term.load("Reac");
        assert_eq!(saved_value(term.push('t')), Some("React".to_string()));
        assert_eq!(saved_value(term.pop()), Some("Reac".to_string()));
    }

    #[test]
    fn unchanged_value_is_not_written() {
        let mut term = PersistedTerm::new("search", PersistPolicy::SkipInitial);
        term.load("React");
        assert_eq!(term.set("React"), None);
    }

    #[test]
    fn pop_on_empty_term_is_a_no_op() {
        let mut term = PersistedTerm::new("search", PersistPolicy::SkipInitial);
        term.load("");
        assert_eq!(term.pop(), None);
    }
}
