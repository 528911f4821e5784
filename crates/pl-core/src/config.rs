//! Configuration schema for padlink
//!
//! Only the schema and its TOML text form live here. Where the text comes
//! from (a settings file, a frontend menu) is up to the host.

use crate::error::ConfigError;
use crate::MAX_PADS;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

/// Physical controller family occupying a port
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    #[default]
    GameCube,
    Wiimote,
    WiimoteNunchuk,
    WiimoteClassic,
}

impl DeviceClass {
    /// All device classes
    pub const ALL: [DeviceClass; 4] = [
        DeviceClass::GameCube,
        DeviceClass::Wiimote,
        DeviceClass::WiimoteNunchuk,
        DeviceClass::WiimoteClassic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeviceClass::GameCube => "GameCube Controller",
            DeviceClass::Wiimote => "Wiimote",
            DeviceClass::WiimoteNunchuk => "Wiimote + Nunchuk",
            DeviceClass::WiimoteClassic => "Classic Controller",
        }
    }

    /// Whether this class needs the motion controller family
    pub fn is_motion(&self) -> bool {
        !matches!(self, DeviceClass::GameCube)
    }
}

/// Which analog stick, if any, also drives the d-pad directions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DpadEmulation {
    None,
    #[default]
    LeftStick,
    RightStick,
}

impl DpadEmulation {
    pub const ALL: [DpadEmulation; 3] = [
        DpadEmulation::None,
        DpadEmulation::LeftStick,
        DpadEmulation::RightStick,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DpadEmulation::None => "None",
            DpadEmulation::LeftStick => "Left Stick",
            DpadEmulation::RightStick => "Right Stick",
        }
    }
}

/// Per-port controller settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PortConfig {
    pub device: DeviceClass,
    pub dpad_emulation: DpadEmulation,
    /// Frames after startup during which quit/menu gestures are ignored
    pub startup_delay_frames: u64,
}

/// Input settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Enable the Wiimote family (Wiimote, Nunchuk, Classic)
    pub motion_controllers: bool,
    pub ports: Vec<PortConfig>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Logging level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive string understood by `EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// Default implementations

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            device: DeviceClass::default(),
            dpad_emulation: DpadEmulation::default(),
            startup_delay_frames: 0,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            motion_controllers: true,
            ports: vec![PortConfig::default(); MAX_PADS],
        }
    }
}

impl InputConfig {
    /// Settings for a port; ports missing from the list use defaults
    pub fn port(&self, port: usize) -> PortConfig {
        self.ports.get(port).copied().unwrap_or_default()
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.input.ports.len();
        if count > MAX_PADS {
            return Err(ConfigError::TooManyPorts {
                count,
                max: MAX_PADS,
            });
        }
        Ok(())
    }
}
