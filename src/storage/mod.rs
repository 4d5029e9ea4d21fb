//! Storage layer for durable user preferences.
//!
//! The plugin remembers the last search term across sessions through the
//! [`PreferenceStore`] capability.
//!
//! # Modules
//!
//! - `backend`: Preference store trait
//! - `json`: JSON file implementation
//! - `memory`: In-process implementation

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::PreferenceStore;
pub use json::JsonPreferences;
pub use memory::MemoryPreferences;

use crate::infrastructure::paths;

/// File name of the preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Opens the plugin's preference store.
///
/// Falls back to an empty in-memory store when the file cannot be opened, so
/// a broken or unavailable data directory never stops the plugin.
#[must_use]
pub fn open_default_store() -> Box<dyn PreferenceStore> {
    let path = paths::get_data_dir().join(PREFERENCES_FILE);
    match JsonPreferences::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "preference file unavailable, using in-memory preferences");
            Box::new(MemoryPreferences::default())
        }
    }
}
