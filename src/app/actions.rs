//! Side effects requested by the event handler.
//!
//! The handler returns a `Vec<Action>` for every event; the plugin runtime
//! executes them in order. Nothing in the application layer performs I/O
//! itself.

use crate::fetch::FetchRequest;
use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Performs an HTTP GET and reports the outcome as
    /// [`Event::FetchCompleted`](crate::app::Event::FetchCompleted) carrying
    /// the request's `seq`.
    Fetch(FetchRequest),

    /// Posts a message to the preference worker thread.
    PostToWorker(WorkerMessage),
}
