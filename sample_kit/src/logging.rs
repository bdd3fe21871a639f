//! Development-time tracing for `sample-kit`.
//!
//! Diagnostics go to stderr so they never mix with command reports on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; falls back to `default_filter` (from config) if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=sample_kit=debug sample-kit divide 7 3
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
