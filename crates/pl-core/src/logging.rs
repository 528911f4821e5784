//! Logging setup
//!
//! Installs a `tracing-subscriber` formatter. `RUST_LOG` takes precedence
//! over the configured level so a frontend can turn on per-module tracing
//! (`RUST_LOG=pl_input::combo=trace`) without touching its settings.

use crate::config::LogLevel;
use crate::error::{PadError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for a configured level
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()))
}

/// Install the global subscriber
///
/// Returns an error instead of panicking if one is already installed, so a
/// frontend that sets up its own subscriber can call this unconditionally.
pub fn init(level: LogLevel) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .try_init()
        .map_err(|e| PadError::Logging(e.to_string()))?;

    tracing::debug!("Logging initialized at level {:?}", level);
    Ok(())
}
