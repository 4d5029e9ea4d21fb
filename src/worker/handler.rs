//! Worker thread implementation for asynchronous preference writes.
//!
//! The worker owns the preference file. It answers the single startup read
//! and persists every later write. Writes are fire-and-forget from the
//! plugin's point of view: the plugin posts a [`WorkerMessage`] and carries
//! on. The storage backend is opened lazily on the first message.

use crate::domain::error::{HnSearchError, Result};
use crate::storage::{self, PreferenceStore};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};

/// Worker thread state owning the preference store used for writes.
#[derive(Serialize, Deserialize, Default)]
pub struct PreferenceWorker {
    /// Preference backend, opened on first use.
    #[serde(skip)]
    store: Option<Box<dyn PreferenceStore>>,
}

impl std::fmt::Debug for PreferenceWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceWorker")
            .field("store_open", &self.store.is_some())
            .finish()
    }
}

impl PreferenceWorker {
    /// Creates a worker writing through the given store.
    #[must_use]
    pub fn with_store(store: Box<dyn PreferenceStore>) -> Self {
        Self { store: Some(store) }
    }

    fn get_store(&mut self) -> Result<&mut Box<dyn PreferenceStore>> {
        self.store
            .as_mut()
            .ok_or_else(|| HnSearchError::Worker("preference store not initialized".to_string()))
    }

    fn ensure_store(&mut self) {
        if self.store.is_none() {
            self.store = Some(storage::open_default_store());
        }
    }

    fn handle_load_preference(&mut self, key: String, default: &str) -> WorkerResponse {
        match self.get_store() {
            Ok(store) => {
                let value = store.get_or(&key, default);
                tracing::debug!(key = %key, value = %value, "preference loaded");
                WorkerResponse::PreferenceLoaded { key, value }
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "preference store unavailable, using default");
                WorkerResponse::PreferenceLoaded {
                    key,
                    value: default.to_string(),
                }
            }
        }
    }

    fn handle_save_preference(&mut self, key: String, value: &str) -> WorkerResponse {
        match self.get_store().and_then(|store| store.set(&key, value)) {
            Ok(()) => {
                tracing::debug!(key = %key, "preference saved");
                WorkerResponse::PreferenceSaved { key }
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to save preference");
                WorkerResponse::Error {
                    message: format!("save preference {key}: {e}"),
                }
            }
        }
    }

    /// Links spans created here to the plugin span that sent `message`.
    ///
    /// The returned guard must be held for the duration of the handling.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the response for the plugin.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message").entered();

        self.ensure_store();

        match message {
            WorkerMessage::LoadPreference { key, default, .. } => self.handle_load_preference(key, &default),
            WorkerMessage::SavePreference { key, value, .. } => self.handle_save_preference(key, &value),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod zellij {
    use super::PreferenceWorker;
    use crate::worker::{WorkerMessage, WorkerResponse};
    use std::sync::atomic::{AtomicBool, Ordering};
    use zellij_tile::prelude::{PluginMessage, ZellijWorker};
    use zellij_tile::shim::post_message_to_plugin;

    /// Tracks whether worker tracing has been initialized.
    static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

    fn reply(name: String, response: &WorkerResponse) {
        match serde_json::to_string(response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }

    impl ZellijWorker<'_> for PreferenceWorker {
        fn on_message(&mut self, message: String, payload: String) {
            if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
                crate::observability::init_tracing(&crate::Config::default());
            }

            let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker message");
                    return;
                }
            };

            let response = self.handle_message(worker_message);
            reply(message, &response);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonPreferences;

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(HnSearchError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn save_preference_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut worker = PreferenceWorker::with_store(Box::new(JsonPreferences::open(path.clone()).unwrap()));

        let response = worker.handle_message(WorkerMessage::save_preference(
            "search".to_string(),
            "Redux".to_string(),
        ));

        assert_eq!(response, WorkerResponse::PreferenceSaved { key: "search".to_string() });
        let reopened = JsonPreferences::open(path).unwrap();
        assert_eq!(reopened.get_or("search", "React"), "Redux");
    }

    #[test]
    fn load_preference_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut worker =
            PreferenceWorker::with_store(Box::new(JsonPreferences::open(dir.path().join("prefs.json")).unwrap()));

        let response = worker.handle_message(WorkerMessage::load_preference(
            "search".to_string(),
            "React".to_string(),
        ));

        assert_eq!(
            response,
            WorkerResponse::PreferenceLoaded {
                key: "search".to_string(),
                value: "React".to_string(),
            }
        );
    }

    #[test]
    fn load_after_save_returns_saved_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut worker =
            PreferenceWorker::with_store(Box::new(JsonPreferences::open(dir.path().join("prefs.json")).unwrap()));

        worker.handle_message(WorkerMessage::save_preference("search".to_string(), "Redux".to_string()));
        let response = worker.handle_message(WorkerMessage::load_preference(
            "search".to_string(),
            "React".to_string(),
        ));

        assert_eq!(
            response,
            WorkerResponse::PreferenceLoaded {
                key: "search".to_string(),
                value: "Redux".to_string(),
            }
        );
    }

    #[test]
    fn storage_failure_becomes_error_response() {
        let mut worker = PreferenceWorker::with_store(Box::new(ReadOnlyStore));

        let response = worker.handle_message(WorkerMessage::save_preference(
            "search".to_string(),
            "Redux".to_string(),
        ));

        assert!(matches!(response, WorkerResponse::Error { message } if message.contains("read-only")));
    }
}
