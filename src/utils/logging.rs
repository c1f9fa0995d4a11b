//! Logging setup for binaries and examples.

use tracing_subscriber::EnvFilter;

/// Initializes a global tracing subscriber honoring `RUST_LOG`, defaulting
/// to `info` when unset. Call once at process start.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
