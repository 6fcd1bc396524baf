//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process: JSON logs with timestamps,
/// `RUST_LOG`-style filtering, `info` when no filter is set.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default_filter("info");
}

/// Initialize with an explicit fallback filter, used when `RUST_LOG` is
/// unset. Test harnesses pass something quieter here.
pub fn init_with_default_filter(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
