//! Tracing/logging setup shared by native binaries.

/// Initialize process-wide logging with the `info` default.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Tracing configuration (filters, formatting).
pub mod tracing;
