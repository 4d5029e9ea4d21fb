//! In-memory preference storage.
//!
//! Used by tests and as the fallback when the preference file cannot be
//! opened; values live only as long as the process.

use crate::domain::error::Result;
use crate::storage::backend::PreferenceStore;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
