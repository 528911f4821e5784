//! Error types for the padlink input layer
//!
//! Polling and button queries never fail; only configuration-side operations
//! (binding rewrites, config parsing, logging setup) report errors.

use thiserror::Error;

/// Main error type for padlink
#[derive(Error, Debug)]
pub enum PadError {
    #[error("Invalid port: {port} (max {max})")]
    InvalidPort { port: usize, max: usize },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Too many ports configured: {count} (max {max})")]
    TooManyPorts { count: usize, max: usize },
}

/// Result type alias for padlink operations
pub type Result<T> = std::result::Result<T, PadError>;
