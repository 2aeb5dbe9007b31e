//! Log output for the geeta binary
//!
//! Console logging is always on. `--otel` adds an OTLP span exporter when
//! built with the `telemetry` feature; `OTEL_EXPORTER_OTLP_ENDPOINT` and
//! `OTEL_SERVICE_NAME` override its endpoint and service name.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Logging switches taken from global CLI flags
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Fall back to `debug` instead of `info` when RUST_LOG is unset
    pub debug: bool,
    pub otel: bool,
}

fn env_filter(config: &TracingConfig) -> EnvFilter {
    let fallback = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn init_console(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(feature = "telemetry")]
fn init_with_otlp(config: &TracingConfig) -> Result<()> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());
    let service = std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "geeta-api".to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint)
        .build()
        .map_err(|e| anyhow!("OTLP exporter for {}: {}", endpoint, e))?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(opentelemetry_sdk::Resource::new(vec![KeyValue::new(
            "service.name",
            service.clone(),
        )]))
        .build();

    let otel_layer = tracing_opentelemetry::layer().with_tracer(provider.tracer("geeta"));
    // the global handle keeps the exporter alive until shutdown_otel
    let _ = opentelemetry::global::set_tracer_provider(provider);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_target(config.debug).compact())
        .with(otel_layer)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    tracing::info!(%endpoint, %service, "exporting spans over OTLP");
    Ok(())
}

/// Flush pending spans before exit
#[cfg(feature = "telemetry")]
pub fn shutdown_otel() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(not(feature = "telemetry"))]
pub fn shutdown_otel() {}

/// Install the global subscriber.
pub fn init(config: &TracingConfig) -> Result<()> {
    #[cfg(feature = "telemetry")]
    if config.otel {
        return init_with_otlp(config);
    }

    init_console(config)?;

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        tracing::warn!("--otel ignored: built without the `telemetry` feature");
    }

    Ok(())
}
