//! Tracing and logging (shared setup).
//!
//! Diagnostics always go to stderr: stdout belongs to the interactive session.

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let (config, warnings) = ObservabilityConfig::from_env();
    tracing::init(&config);
    for warning in warnings {
        ::tracing::warn!(%warning, "ignoring invalid observability setting");
    }
}

/// Observability configuration (filter, output format).
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
