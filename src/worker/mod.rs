//! Background worker thread for preference persistence.
//!
//! Preference writes run on a Zellij worker thread so they never block the
//! plugin's event loop.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::PreferenceWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
