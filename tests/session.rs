//! Plugin sessions driven through the public API.
//!
//! A small harness stands in for the Zellij runtime: worker messages go to a
//! real `PreferenceWorker` backed by a JSON file, and fetches are collected so
//! each test decides when and how they complete.

use std::path::Path;

use hnsearch::fetch::{decode_search_response, FetchRequest};
use hnsearch::storage::JsonPreferences;
use hnsearch::ui::Notice;
use hnsearch::worker::PreferenceWorker;
use hnsearch::{handle_event, initialize, Action, AppState, Config, Event, SearchMode};

struct Session {
    app: AppState,
    worker: PreferenceWorker,
    pending: Vec<FetchRequest>,
}

impl Session {
    fn start(config: &Config, prefs: &Path) -> Self {
        let worker = PreferenceWorker::with_store(Box::new(JsonPreferences::open(prefs.to_path_buf()).unwrap()));
        let mut session = Self {
            app: initialize(config),
            worker,
            pending: Vec::new(),
        };
        session.send(&Event::PermissionsGranted);
        session
    }

    fn send(&mut self, event: &Event) -> bool {
        let (render, actions) = handle_event(&mut self.app, event).unwrap();
        for action in actions {
            match action {
                Action::Fetch(request) => self.pending.push(request),
                Action::PostToWorker(message) => {
                    let response = self.worker.handle_message(message);
                    self.send(&Event::WorkerResponse(response));
                }
                Action::CloseFocus => {}
            }
        }
        render
    }

    fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.send(&Event::Char(c));
        }
    }

    fn clear_term(&mut self) {
        while !self.app.term.value().is_empty() {
            self.send(&Event::Backspace);
        }
    }

    fn complete(&mut self, request: &FetchRequest, status: u16, body: &str) -> bool {
        self.send(&Event::FetchCompleted {
            seq: request.seq,
            outcome: decode_search_response(status, body.as_bytes()),
        })
    }

    fn titles(&self) -> Vec<String> {
        self.app.displayed_stories().iter().map(|s| s.title.clone()).collect()
    }
}

fn hits(titles: &[&str]) -> String {
    let hits: Vec<String> = titles
        .iter()
        .enumerate()
        .map(|(i, t)| format!(r#"{{"objectID":"{i}","title":"{t}","author":"pg","num_comments":1,"points":2}}"#))
        .collect();
    format!(r#"{{"hits":[{}]}}"#, hits.join(","))
}

fn config(mode: SearchMode) -> Config {
    Config {
        search_mode: mode,
        ..Config::default()
    }
}

#[test]
fn first_start_searches_the_default_term() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::start(&config(SearchMode::Submit), &dir.path().join("prefs.json"));

    assert_eq!(session.app.term.value(), "React");
    assert_eq!(session.pending.len(), 1);
    assert_eq!(session.pending[0].url, "https://hn.algolia.com/api/v1/search?query=React");
    assert!(session.app.query().is_loading());

    let request = session.pending.remove(0);
    assert!(session.complete(&request, 200, &hits(&["React"])));
    assert_eq!(session.titles(), ["React"]);
    assert!(!session.app.query().is_loading());
}

#[test]
fn edited_term_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.json");

    let mut first = Session::start(&config(SearchMode::Submit), &prefs);
    first.send(&Event::EditSearch);
    first.clear_term();
    first.type_str("Redux");
    first.send(&Event::Submit);
    assert_eq!(first.pending.last().map(|r| r.url.as_str()), Some("https://hn.algolia.com/api/v1/search?query=Redux"));
    drop(first);

    let second = Session::start(&config(SearchMode::Submit), &prefs);
    assert_eq!(second.app.term.value(), "Redux");
    assert_eq!(second.pending[0].url, "https://hn.algolia.com/api/v1/search?query=Redux");
}

#[test]
fn startup_alone_does_not_write_preferences() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.json");

    let _session = Session::start(&config(SearchMode::Submit), &prefs);
    let store = JsonPreferences::open(prefs).unwrap();
    assert_eq!(hnsearch::storage::PreferenceStore::get(&store, "search").unwrap(), None);
}

#[test]
fn failed_fetch_keeps_previous_stories() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::start(&config(SearchMode::Submit), &dir.path().join("prefs.json"));
    let request = session.pending.remove(0);
    session.complete(&request, 200, &hits(&["React", "Preact"]));

    session.send(&Event::EditSearch);
    session.type_str("!");
    session.send(&Event::Submit);
    let request = session.pending.remove(0);
    assert!(session.complete(&request, 503, "Service Unavailable"));

    assert!(session.app.query().is_error());
    assert_eq!(session.titles(), ["React", "Preact"]);
    assert_eq!(session.app.compute_viewmodel_at(24, 100, 0).notice, Some(Notice::Failed));
}

#[test]
fn live_typing_shows_only_the_latest_results() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::start(&config(SearchMode::Live), &dir.path().join("prefs.json"));
    let startup = session.pending.remove(0);

    session.send(&Event::EditSearch);
    session.clear_term();
    session.type_str("Vue");
    let latest = session.pending.pop().unwrap();
    assert_eq!(latest.url, "https://hn.algolia.com/api/v1/search?query=Vue");

    assert!(session.complete(&latest, 200, &hits(&["Vue 3"])));
    assert!(!session.complete(&startup, 200, &hits(&["React"])));
    for stale in std::mem::take(&mut session.pending) {
        assert!(!session.complete(&stale, 200, &hits(&["stale"])));
    }

    assert_eq!(session.titles(), ["Vue 3"]);
    assert!(!session.app.query().is_loading());
}

#[test]
fn dismissed_story_stays_gone_in_local_filter() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::start(&config(SearchMode::Local), &dir.path().join("prefs.json"));
    let request = session.pending.remove(0);
    session.complete(&request, 200, &hits(&["React hooks", "Rust", "React Native"]));

    session.send(&Event::EditSearch);
    session.clear_term();
    assert_eq!(session.titles().len(), 3);
    session.send(&Event::StopEditing);

    session.send(&Event::DismissSelected);
    session.send(&Event::EditSearch);
    session.type_str("react");
    assert_eq!(session.titles(), ["React Native"]);
    assert!(session.pending.is_empty());
}

#[test]
fn cleared_term_restarts_on_the_default() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.json");

    let mut first = Session::start(&config(SearchMode::Local), &prefs);
    first.send(&Event::EditSearch);
    first.clear_term();
    drop(first);

    let second = Session::start(&config(SearchMode::Local), &prefs);
    assert_eq!(second.app.term.value(), "React");
    assert_eq!(second.pending[0].url, "https://hn.algolia.com/api/v1/search?query=React");
}
