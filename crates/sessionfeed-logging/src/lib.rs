//! # sessionfeed-logging
//!
//! Tracing setup for sessionfeed.
//!
//! Logs always go to stderr; stdout is reserved for report output.
//!
//! ## Log Formats
//!
//! - `Pretty` - Human-readable multi-field lines
//! - `Json` - Structured JSON lines
//! - `Compact` - Minimal text output

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when none is given or the given one does not parse.
pub const DEFAULT_LEVEL: &str = "warn";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

/// Build the filter from an explicit directive string. The environment is
/// not consulted.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initialize tracing for the application
pub fn init_tracing(level: &str, format: LogFormat) {
    let filter = build_filter(level);

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(false).with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .without_time()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
}
