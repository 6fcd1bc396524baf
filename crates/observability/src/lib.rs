//! Tracing/logging setup shared by every process embedding the engine.

pub mod tracing;

/// Initialize process-wide observability.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
