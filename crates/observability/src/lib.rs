//! Tracing/logging setup shared by storefront binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging with human-readable output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(LogFormat::Text);
}

/// Initialize process-wide logging with the given output format.
pub fn init_with(format: LogFormat) {
    tracing::init_with(format);
}
