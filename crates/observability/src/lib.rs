//! Tracing/logging setup shared by the interactive programs.

/// Initialize process-wide tracing with the given configuration.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &ObservabilityConfig) {
    tracing::init(config);
}

/// Logging configuration.
pub mod config;

/// Subscriber installation (filters, format, writer).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
