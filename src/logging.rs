//! Diagnostic logging.
//!
//! Standard output carries image escape sequences, so log lines always go to
//! standard error.

use tracing_subscriber::EnvFilter;

/// Filter used when no directive is configured or the configured one is invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global subscriber. Later calls are no-ops.
pub fn init(filter: Option<&str>) {
    let filter = filter
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
