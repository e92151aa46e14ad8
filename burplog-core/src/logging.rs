use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with JSON formatting and environment-based filtering
///
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - Writes JSON events to stderr; stdout carries converted records only
/// - Flattens event fields for cleaner log output
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

/// Pretty output for people watching a terminal, one record per line otherwise.
pub fn default_output_style() -> OutputStyle {
    if io::stdout().is_terminal() {
        OutputStyle::Pretty
    } else {
        OutputStyle::Lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    Lines,
    Pretty,
}
