//! Logging and OpenTelemetry tracing with file-based export.
//!
//! The plugin runs in a WASM sandbox without stdout logging or a collector,
//! so both logs and spans go to files in the data directory:
//!
//! ```text
//! tracing macros ─┬→ fmt layer ──────────────────────────→ zjobs.log
//!                 └→ tracing-opentelemetry → SDK → FileSpanExporter → zjobs-otlp.json
//! ```
//!
//! # Features
//!
//! - **Plain-text log**: One line per event with span context, `zjobs.log`
//! - **OTLP Export**: One JSON document per span, `zjobs-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! The `trace_level` plugin option sets the filter directive (default `"info"`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: OpenTelemetry tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer shared by both outputs

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, LOG_FILE, TRACE_FILE};
