//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the fetch/storage/worker
//! layers. Data flows one way:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Fetch outcomes, Worker Responses ────┘
//! ```
//!
//! # Modules
//!
//! - [`query`]: Query state machine owning the result set and lifecycle phase
//! - [`filter`]: Local title filtering
//! - [`term`]: Search term with write-back to the preference store
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input, search and persistence mode types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod query;
pub mod state;
pub mod term;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, PersistPolicy, SearchMode};
pub use query::{QueryAction, QueryMachine, QueryPhase, QueryState};
pub use state::AppState;
pub use term::PersistedTerm;
