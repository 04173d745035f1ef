//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env};

/// Setup logging for the resizer.
///
/// `default_level` applies when `RUST_LOG` is unset. Calling this more than
/// once is harmless.
pub fn setup_logging(default_level: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init();
}
