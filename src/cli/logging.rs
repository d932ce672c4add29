//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global subscriber, logging to stderr.
///
/// Stdout carries the history view, so logs never go there. A second call
/// is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
