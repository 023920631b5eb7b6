//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Output is JSON by default (set `STOCKPILOT_LOG_FORMAT=pretty` for
/// human-readable logs during development); the filter comes from `RUST_LOG`
/// and defaults to `info`. Safe to call multiple times (subsequent calls are
/// no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let pretty = std::env::var("STOCKPILOT_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("pretty"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = if pretty {
        builder.try_init()
    } else {
        builder.json().try_init()
    };
}
