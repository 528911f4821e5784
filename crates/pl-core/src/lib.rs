//! Core types for the padlink input layer
//!
//! This crate provides the error types, configuration schema and logging
//! setup shared by the input translation crates.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{
    Config, DeviceClass, DpadEmulation, InputConfig, LogLevel, LoggingConfig, PortConfig,
};
pub use error::{ConfigError, PadError, Result};

/// Number of controller ports
pub const MAX_PADS: usize = 4;
