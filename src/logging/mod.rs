//! Tracing subscriber setup.
//!
//! The engine library only emits `tracing` events; installing a subscriber is
//! the binary's job, done once at startup from [`LoggingConfig`].

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The configured level acts as the base filter; `RUST_LOG` still wins when
/// set, matching the usual env-filter behavior.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
