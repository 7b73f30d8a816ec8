//! Tracing/logging initialization
//!
//! Log lines go to stderr so command output on stdout stays clean. The filter
//! comes from `RUST_LOG` when set, otherwise from the `log_filter` setting.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the setting parses
const FALLBACK_FILTER: &str = "warn";

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
