//! Tracing subscriber and OpenTelemetry wiring.
//!
//! Logs go to stderr so stdout stays reserved for the run's status lines. The
//! filter comes from `RUST_LOG` (default `info`). Spans are additionally
//! exported over OTLP when `OTEL_EXPORTER_OTLP_ENDPOINT` is set.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::error::CliError;

const OTLP_ENDPOINT_VAR: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

/// Keeps the exporter alive for the lifetime of the process.
pub struct Telemetry {
    tracer_provider: Option<TracerProvider>,
}

impl Telemetry {
    /// Flushes buffered spans. Call once, just before exiting.
    pub fn shutdown(self) {
        if let Some(provider) = self.tracer_provider {
            if let Err(e) = provider.shutdown() {
                eprintln!("Failed to flush telemetry: {e}");
            }
        }
    }
}

/// Installs the global subscriber. `json` selects structured JSON log lines.
pub fn init(json: bool) -> Result<Telemetry, CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = if json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    let tracer_provider = if std::env::var_os(OTLP_ENDPOINT_VAR).is_some() {
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .build()
            .map_err(|e| CliError::Telemetry {
                message: format!("failed to build OTLP exporter: {e}"),
            })?;
        Some(
            TracerProvider::builder()
                .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
                .build(),
        )
    } else {
        None
    };

    let otel_layer = tracer_provider
        .as_ref()
        .map(|provider| tracing_opentelemetry::layer().with_tracer(provider.tracer("greypot")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .map_err(|e| CliError::Telemetry {
            message: e.to_string(),
        })?;

    Ok(Telemetry { tracer_provider })
}
