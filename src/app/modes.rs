//! Mode types for input handling, searching, and term persistence.
//!
//! - [`InputMode`] decides which keybindings are active.
//! - [`SearchMode`] decides when the search term reaches the server.
//! - [`PersistPolicy`] decides whether the startup term is written back.

/// Current input handling mode.
///
/// Controls which keybindings are active and the footer hint text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and command mode.
    ///
    /// Keybindings: j/k (navigate), / (edit term), d (dismiss), q (close).
    #[default]
    Normal,

    /// The search term is being edited.
    ///
    /// Characters extend the term, Enter submits, Esc returns to Normal.
    Editing,
}

/// When a changed search term becomes the query target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// The term is sent to the server only on an explicit submit.
    #[default]
    Submit,

    /// Every edit of the term retargets the query immediately.
    Live,

    /// The startup result set is fetched once and filtered locally by the term.
    Local,
}

impl SearchMode {
    /// Parses a configuration value (`submit`, `live`, `local`).
    ///
    /// # Examples
    ///
    /// ```
    /// use hnsearch::app::SearchMode;
    ///
    /// assert_eq!(SearchMode::parse("Live"), Some(SearchMode::Live));
    /// assert_eq!(SearchMode::parse("instant"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "submit" => Some(Self::Submit),
            "live" => Some(Self::Live),
            "local" => Some(Self::Local),
            _ => None,
        }
    }
}

/// Whether the term read at startup is written back to storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersistPolicy {
    /// Only changes made after startup are written.
    #[default]
    SkipInitial,

    /// The startup value is written too.
    EveryChange,
}

impl PersistPolicy {
    /// Parses a configuration value (`skip_initial`, `every_change`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "skip_initial" => Some(Self::SkipInitial),
            "every_change" => Some(Self::EveryChange),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persist_policy_accepts_both_spellings() {
        assert_eq!(PersistPolicy::parse("every-change"), Some(PersistPolicy::EveryChange));
        assert_eq!(PersistPolicy::parse(" skip_initial "), Some(PersistPolicy::SkipInitial));
        assert_eq!(PersistPolicy::parse("always"), None);
    }

    #[test]
    fn defaults() {
        assert_eq!(InputMode::default(), InputMode::Normal);
        assert_eq!(SearchMode::default(), SearchMode::Submit);
        assert_eq!(PersistPolicy::default(), PersistPolicy::SkipInitial);
    }
}
