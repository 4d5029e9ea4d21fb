//! JSON file-based preference storage.
//!
//! Preferences live in one small human-readable JSON file. Writes go to a
//! temporary file that is then renamed over the target, so a crash never
//! leaves a half-written file behind.

use crate::domain::error::{HnSearchError, Result};
use crate::storage::backend::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Format version for future migrations.
    version: u32,

    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            values: BTreeMap::new(),
        }
    }
}

/// JSON file preference backend.
///
/// The whole file is loaded into memory on open; every [`set`](PreferenceStore::set)
/// that changes a value rewrites it.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "values": {
///     "search": "Redux"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonPreferences {
    file_path: PathBuf,
    data: PreferenceData,
}

impl JsonPreferences {
    /// Opens the preference file, or starts empty if it does not exist yet.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, or the file
    /// exists but cannot be read or parsed.
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preference file");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preference file yet, starting empty");
            PreferenceData::default()
        };

        tracing::debug!(value_count = data.values.len(), "preferences loaded");

        Ok(Self { file_path, data })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceData = serde_json::from_str(&contents)
            .map_err(|e| HnSearchError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version != FORMAT_VERSION {
            tracing::warn!(
                version = data.version,
                expected = FORMAT_VERSION,
                "unexpected preference file version"
            );
        }
        Ok(data)
    }

    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| HnSearchError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key = %key).entered();

        if self.data.values.get(key).is_some_and(|current| current == value) {
            tracing::trace!("value unchanged, skipping write");
            return Ok(());
        }

        self.data.values.insert(key.to_string(), value.to_string());
        self.save_to_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferences::open(dir.path().join("prefs.json")).unwrap();

        assert_eq!(store.get("search").unwrap(), None);
        assert_eq!(store.get_or("search", "React"), "React");
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonPreferences::open(dir.path().join("prefs.json")).unwrap();

        store.set("search", "").unwrap();
        assert_eq!(store.get("search").unwrap(), Some(String::new()));
        assert_eq!(store.get_or("search", "React"), "React");
    }

    #[test]
    fn set_then_get_returns_written_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonPreferences::open(dir.path().join("prefs.json")).unwrap();

        store.set("search", "Redux").unwrap();
        assert_eq!(store.get_or("search", "React"), "Redux");

        store.set("search", "Redux").unwrap();
        assert_eq!(store.get_or("search", "React"), "Redux");
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        JsonPreferences::open(path.clone())
            .unwrap()
            .set("search", "Rust")
            .unwrap();

        let reopened = JsonPreferences::open(path.clone()).unwrap();
        assert_eq!(reopened.get("search").unwrap().as_deref(), Some("Rust"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonPreferences::open(path).unwrap_err();
        assert!(matches!(err, HnSearchError::Storage(_)));
    }
}
