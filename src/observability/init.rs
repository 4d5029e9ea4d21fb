//! Tracing subscriber setup.

use super::exporter::{file_tracer_provider, SCOPE_NAME};
use crate::domain::error::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE: &str = "hnsearch-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: an [`EnvFilter`] built from
/// `config.trace_level` (default `info`) feeding an OpenTelemetry layer that
/// exports to `~/.local/share/zellij/hnsearch/hnsearch-otlp.json`.
///
/// Tracing is optional. When the data directory cannot be created or a
/// subscriber is already installed, this does nothing.
pub fn init_tracing(config: &Config) {
    // Without a data directory there is nowhere to report to; run untraced.
    let _ = try_init_tracing(config);
}

fn try_init_tracing(config: &Config) -> Result<()> {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::get_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(data_dir.join(TRACE_FILE), resource);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)));

    // A second initialization (plugin and worker share the process) is expected.
    let _ = subscriber.try_init();
    Ok(())
}
