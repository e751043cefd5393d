//! Structured logging configuration.
//!
//! The pipeline itself only emits `tracing` events; installing a subscriber
//! is the host's call. This helper wires up a sensible default from the
//! logging section of the configuration.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from a logging configuration.
///
/// The `RUST_LOG` environment variable takes precedence over the configured
/// level when set. Safe to call more than once; later calls are ignored.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
