//! Tracing initialization and subscriber setup.

use super::file_writer::{FileWriter, SharedFileWriter};
use super::tracer;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::Path;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "zjobs.log";
/// Span export file name inside the data directory.
pub const TRACE_FILE: &str = "zjobs-otlp.json";

/// Initializes the global tracing subscriber.
///
/// Events go to `~/.local/share/zellij/zjobs/zjobs.log` through a `fmt`
/// layer; spans are exported as OTLP JSON to `zjobs-otlp.json` beside it.
/// Both files rotate at 10 MB.
///
/// The filter comes from `config.trace_level` (an [`EnvFilter`] directive such
/// as `debug` or `zjobs=trace`) and defaults to `info`.
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without a subscriber. Only the first call takes effect.
///
/// # Example
///
/// ```rust
/// use zjobs::observability::init_tracing;
/// use zjobs::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let _ = init_tracing_in(&data_dir, config.trace_level.as_deref());
}

/// Installs the subscriber writing under `dir`. Returns `false` when a global
/// subscriber was already set.
pub(crate) fn init_tracing_in(dir: &Path, trace_level: Option<&str>) -> bool {
    let level = trace_level.unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", "zjobs"),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(tracer::SCOPE));

    let log_writer = SharedFileWriter::new(FileWriter::new(dir.join(LOG_FILE)));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_and_spans_reach_their_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(init_tracing_in(dir.path(), Some("debug")));

        tracing::debug_span!("handle_event", event_type = "start").in_scope(|| {
            tracing::info!(mount = 1, "mounted view");
        });

        let log = std::fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
        assert!(log.contains("mounted view"));
        assert!(log.contains("mount=1"));

        let spans = std::fs::read_to_string(dir.path().join(TRACE_FILE)).unwrap();
        assert!(spans.contains("\"handle_event\""));

        assert!(!init_tracing_in(dir.path(), None));
    }
}
