//! Remote search: endpoint, requests, response decoding and orchestration.
//!
//! The plugin runtime performs the actual HTTP request (Zellij's
//! `web_request`); this module decides *when* to fetch and turns outcomes into
//! query state transitions.
//!
//! - `endpoint`: Immutable endpoint configuration and URL building
//! - `request`: Query targets and sequence-tagged fetch requests
//! - `response`: Wire payload decoding into [`Story`](crate::domain::Story)
//! - `orchestrator`: Fetch triggering and stale-outcome suppression

pub mod endpoint;
pub mod orchestrator;
pub mod request;
pub mod response;

pub use endpoint::{SearchEndpoint, DEFAULT_ENDPOINT};
pub use orchestrator::FetchOrchestrator;
pub use request::{FetchRequest, QueryTarget};
pub use response::decode_search_response;
