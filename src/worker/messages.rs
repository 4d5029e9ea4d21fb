//! Worker thread message types for cross-thread communication.
//!
//! Request/response protocol between the plugin thread and the background
//! worker that owns preference writes, plus trace context propagation so
//! worker spans join the plugin's trace.

use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when there is no valid OpenTelemetry span context, e.g.
    /// when tracing was never initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_preference(LoadPreference { key: String, default: String }),
    save_preference(SavePreference { key: String, value: String }),
}

/// Messages sent from the plugin thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read a preference once at startup, falling back to `default`.
    LoadPreference {
        key: String,
        default: String,

        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,
    },

    /// Persist a preference value.
    SavePreference {
        key: String,
        value: String,

        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context captured when the message was built.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadPreference { trace_context, .. } | Self::SavePreference { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Responses sent from the worker thread back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The stored value, or the requested default when none is stored.
    PreferenceLoaded { key: String, value: String },

    /// The preference was persisted.
    PreferenceSaved { key: String },

    /// The worker operation failed.
    Error { message: String },
}
