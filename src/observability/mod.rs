//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → FileSpanExporter → rotating JSON file
//! ```
//!
//! Spans land in `~/.local/share/zellij/hnsearch/hnsearch-otlp.json` as
//! OTLP/JSON, one batch per line. The file rotates at 10 MB and keeps three
//! backups. The level comes from the `trace_level` plugin option (default
//! `info`) and accepts any [`EnvFilter`](tracing_subscriber::EnvFilter)
//! directive, e.g. `hnsearch::fetch=debug,info`.
//!
//! Worker-thread spans join the plugin's traces through the
//! [`TraceContext`](crate::worker::TraceContext) carried on each message.

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, TRACE_FILE};
