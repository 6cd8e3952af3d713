// ABOUTME: Tracing subscriber setup for the coursemgr binary
// ABOUTME: Compact stderr output filtered by RUST_LOG, warn by default

use coursemgr_config::{DEFAULT_LOG_FILTER, RUST_LOG};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the default `warn` filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

/// Filter from `RUST_LOG`, or the default when it is unset or invalid
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
