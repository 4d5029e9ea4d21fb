//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the `hnsearch` library and the Zellij plugin
//! system. Everything Zellij-specific lives here: key mapping, web requests,
//! worker IPC and permissions.
//!
//! ```text
//! ┌───────────────────────────┐
//! │    Zellij Main Thread     │
//! │  ┌─────────────────────┐  │
//! │  │   State (plugin)    │  │  ← UI state, event handling, web requests
//! │  └─────────────────────┘  │
//! │            │ IPC          │
//! │            ▼              │
//! │  ┌─────────────────────┐  │
//! │  │  PreferenceWorker   │  │  ← Preference file reads and writes
//! │  └─────────────────────┘  │
//! └───────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request web and filesystem access
//! 3. **Startup**: Once granted, read the saved term through the worker
//! 4. **Fetch**: The loaded term triggers the first search
//! 5. **Update**: Map Zellij events to library events, execute actions
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `/`: Edit the search term
//! - `d`: Dismiss the selected story
//! - `q`: Close plugin
//!
//! Editing mode:
//! - Characters and `Backspace`: Edit the term
//! - `Enter`: Submit
//! - `Esc`: Stop editing

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(plugin::State);
#[cfg(target_arch = "wasm32")]
register_worker!(hnsearch::worker::PreferenceWorker, hnsearch_worker, HNSEARCH_WORKER);

#[cfg(target_arch = "wasm32")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;
    use zellij_tile::shim::post_message_to;

    use hnsearch::fetch::{decode_search_response, FetchRequest};
    use hnsearch::worker::{WorkerMessage, WorkerResponse};
    use hnsearch::{handle_event, Action, Config, Event, InputMode};

    /// Plugin state wrapper.
    pub struct State {
        app: hnsearch::AppState,

        /// Worker thread identifier for IPC messaging.
        worker_name: String,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: hnsearch::initialize(&Config::default()),
                worker_name: "hnsearch".to_string(),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, builds the app state, requests permissions
        /// and subscribes to events. Nothing is fetched until permissions are
        /// granted.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            hnsearch::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            self.app = hnsearch::initialize(&config);
            tracing::debug!(
                search_mode = ?config.search_mode,
                persist = ?config.persist,
                endpoint = %config.endpoint,
                "app state initialized"
            );

            request_permission(&[PermissionType::WebAccess, PermissionType::FullHdAccess]);
            subscribe(&[
                EventType::Key,
                EventType::CustomMessage,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
            let _guard = span.entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                    match self.map_custom_message_event(&message, &payload) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    match Self::map_web_request_result(status, &body, &context) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                    Event::PermissionsGranted
                }
                zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                    tracing::warn!("permissions denied - searches cannot run");
                    return false;
                }
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    for action in actions {
                        self.execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            hnsearch::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                    format!("WebRequestResult({status})")
                }
                zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                    "PermissionRequestResult".to_string()
                }
                _ => "Other".to_string(),
            }
        }

        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
                return Some(Event::KeyDown);
            }
            if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
                return Some(Event::KeyUp);
            }

            match self.app.input_mode {
                InputMode::Editing => match key.bare_key {
                    BareKey::Enter => Some(Event::Submit),
                    BareKey::Esc => Some(Event::StopEditing),
                    BareKey::Backspace => Some(Event::Backspace),
                    BareKey::Down => Some(Event::KeyDown),
                    BareKey::Up => Some(Event::KeyUp),
                    BareKey::Char(c) => Some(Event::Char(c)),
                    _ => None,
                },
                InputMode::Normal => match key.bare_key {
                    BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
                    BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
                    BareKey::Char('/') => Some(Event::EditSearch),
                    BareKey::Char('d') => Some(Event::DismissSelected),
                    BareKey::Char('q') => Some(Event::CloseFocus),
                    _ => None,
                },
            }
        }

        fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
            if message != self.worker_name {
                tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
                return None;
            }

            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => Some(Event::WorkerResponse(response)),
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        }

        /// Results without our sequence tag came from someone else's request.
        fn map_web_request_result(
            status: u16,
            body: &[u8],
            context: &BTreeMap<String, String>,
        ) -> Option<Event> {
            let Some(seq) = FetchRequest::seq_from_context(context) else {
                tracing::debug!(status, "ignoring web request result without sequence");
                return None;
            };
            Some(Event::FetchCompleted {
                seq,
                outcome: decode_search_response(status, body),
            })
        }

        fn post_worker_message(&self, message: &WorkerMessage) {
            match serde_json::to_string(message) {
                Ok(payload) => {
                    tracing::debug!(payload_len = payload.len(), "posting message to worker");
                    post_message_to(PluginMessage {
                        worker_name: Some(self.worker_name.clone()),
                        name: self.worker_name.clone(),
                        payload,
                    });
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to serialize worker message");
                }
            }
        }

        #[tracing::instrument(level = "debug", skip(self))]
        fn execute_action(&self, action: Action) {
            match action {
                Action::CloseFocus => hide_self(),
                Action::Fetch(request) => {
                    tracing::debug!(seq = request.seq, url = %request.url, "issuing web request");
                    let context = request.context();
                    web_request(request.url, HttpVerb::Get, BTreeMap::new(), vec![], context);
                }
                Action::PostToWorker(message) => self.post_worker_message(&message),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!("hnsearch is a Zellij plugin; build it for wasm32-wasip1 and load it from Zellij.");
}
