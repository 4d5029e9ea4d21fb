//! hnsearch: a Zellij plugin for searching Hacker News stories.
//!
//! - Searches the Hacker News (Algolia) API and lists the matching stories
//! - Keeps the last search term across sessions in a JSON preference file
//! - Lets stories be dismissed from the current result list
//! - Never lets a slow, superseded response overwrite newer results

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← web requests, keys
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Query state machine                              │
//! │  - Event handling, actions                          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Fetch Layer   │   │ Storage Layer │   │ Worker Layer  │
//! │ (fetch/)      │   │ (storage/)    │   │ (worker/)     │
//! │ - Orchestrator│   │ - JSON prefs  │   │ - Pref writes │
//! │ - URL, decode │   │ - Memory prefs│   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, UI, Observability          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Query state machine, event/action model, view models
//! - [`fetch`]: Fetch orchestration, request URLs, response decoding
//! - [`domain`]: Core domain types (Story, errors)
//! - [`infrastructure`]: Sandbox paths
//! - [`storage`]: Preference persistence
//! - [`worker`]: Background worker owning the preference file
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/hnsearch.wasm" {
//!         endpoint "https://hn.algolia.com/api/v1/search"
//!         default_query "React"
//!         search_mode "submit"
//!         persist "skip_initial"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Load**: parse [`Config`], initialize tracing, build [`AppState`],
//!    request permissions
//! 2. **Permissions granted**: ask the worker for the stored search term
//! 3. **Term loaded**: issue the first fetch
//! 4. **Fetch completed**: apply the outcome if it is still the latest request
//!
//! # Example
//!
//! ```
//! use hnsearch::{handle_event, initialize, Action, Config, Event, WorkerResponse};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(
//!     &mut state,
//!     &Event::WorkerResponse(WorkerResponse::PreferenceLoaded {
//!         key: "search".to_string(),
//!         value: "Rust".to_string(),
//!     }),
//! )?;
//!
//! let [Action::Fetch(request)] = actions.as_slice() else { panic!("expected a fetch") };
//! assert_eq!(request.url, "https://hn.algolia.com/api/v1/search?query=Rust");
//! assert!(state.query().is_loading());
//! # Ok::<(), hnsearch::HnSearchError>(())
//! ```

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, PersistPolicy, SearchMode};
pub use domain::{FetchFailure, HnSearchError, Result, Story, StoryId};
pub use fetch::DEFAULT_ENDPOINT;
pub use ui::Theme;
pub use worker::{WorkerMessage, WorkerResponse};

use std::collections::BTreeMap;

/// Term searched for when no preference is stored.
pub const DEFAULT_QUERY: &str = "React";

/// Preference key holding the last search term.
pub const DEFAULT_PREFERENCE_KEY: &str = "search";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search API endpoint. Default: [`DEFAULT_ENDPOINT`].
    pub endpoint: String,

    /// Term used when no preference is stored. Default: `"React"`.
    pub default_query: String,

    /// When edits to the term reach the server.
    pub search_mode: SearchMode,

    /// Whether the startup term is written back.
    pub persist: PersistPolicy,

    /// Preference key for the search term. Default: `"search"`.
    pub preference_key: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; a leading `~` is expanded.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_query: DEFAULT_QUERY.to_string(),
            search_mode: SearchMode::default(),
            persist: PersistPolicy::default(),
            preference_key: DEFAULT_PREFERENCE_KEY.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing, blank or unparsable values fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use hnsearch::{Config, SearchMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("search_mode".to_string(), "live".to_string());
    /// map.insert("default_query".to_string(), "Rust".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.search_mode, SearchMode::Live);
    /// assert_eq!(config.default_query, "Rust");
    /// assert_eq!(config.preference_key, "search");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| config.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let search_mode = value("search_mode").map_or(defaults.search_mode, |v| {
            SearchMode::parse(v).unwrap_or_else(|| {
                tracing::warn!(search_mode = %v, "unknown search_mode, using default");
                defaults.search_mode
            })
        });

        let persist = value("persist").map_or(defaults.persist, |v| {
            PersistPolicy::parse(v).unwrap_or_else(|| {
                tracing::warn!(persist = %v, "unknown persist policy, using default");
                defaults.persist
            })
        });

        Self {
            endpoint: value("endpoint").map_or(defaults.endpoint, String::from),
            default_query: value("default_query").map_or(defaults.default_query, String::from),
            search_mode,
            persist,
            preference_key: value("preference_key").map_or(defaults.preference_key, String::from),
            theme_name: value("theme").map(String::from),
            theme_file: value("theme_file").map(String::from),
            trace_level: value("trace_level").map(String::from),
        }
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial, idle [`AppState`] for `config`.
///
/// Nothing is fetched yet: the first fetch follows the stored search term,
/// which is read once permissions are granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        endpoint = %config.endpoint,
        search_mode = ?config.search_mode,
        persist = ?config.persist,
        "initializing hnsearch plugin"
    );

    AppState::new(config, config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("search_mode", "instant"),
            ("persist", "sometimes"),
            ("endpoint", "   "),
        ]));

        assert_eq!(config.search_mode, SearchMode::Submit);
        assert_eq!(config.persist, PersistPolicy::SkipInitial);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn all_keys_are_read() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "http://localhost:8080/search"),
            ("default_query", "Rust"),
            ("search_mode", "local"),
            ("persist", "every_change"),
            ("preference_key", "hn.search"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.endpoint, "http://localhost:8080/search");
        assert_eq!(config.default_query, "Rust");
        assert_eq!(config.search_mode, SearchMode::Local);
        assert_eq!(config.persist, PersistPolicy::EveryChange);
        assert_eq!(config.preference_key, "hn.search");
        assert_eq!(config.load_theme().name, "catppuccin-latte");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn missing_theme_file_uses_default_theme() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "catppuccin-mocha");
    }
}
