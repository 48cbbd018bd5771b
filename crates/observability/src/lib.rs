//! Tracing and logging setup shared by the depot binaries.

/// Initialize process-wide tracing/logging.
///
/// `default_directive` applies when `RUST_LOG` is unset or invalid.
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init(default_directive: &str) {
    tracing::init(default_directive);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
