//! Settings store shared between the frontend and the driver
//!
//! The frontend edits bindings and per-port device settings between frames;
//! the driver reads them during each poll.

use crate::binds::BindTable;
use parking_lot::RwLock;
use pl_core::{
    ConfigError, DeviceClass, DpadEmulation, InputConfig, PadError, PortConfig, Result, MAX_PADS,
};
use std::sync::Arc;

/// Device settings for one port
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortSettings {
    pub device: DeviceClass,
    pub dpad_emulation: DpadEmulation,
    /// Frames to ignore quit and menu gestures after startup
    pub startup_delay_frames: u64,
}

impl From<PortConfig> for PortSettings {
    fn from(config: PortConfig) -> Self {
        Self {
            device: config.device,
            dpad_emulation: config.dpad_emulation,
            startup_delay_frames: config.startup_delay_frames,
        }
    }
}

/// Bindings and per-port settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSettings {
    pub binds: BindTable,
    pub ports: [PortSettings; MAX_PADS],
}

impl InputSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build settings from configuration, with each port bound to its
    /// class defaults and d-pad emulation
    pub fn from_config(config: &InputConfig) -> Result<Self> {
        if config.ports.len() > MAX_PADS {
            return Err(ConfigError::TooManyPorts {
                count: config.ports.len(),
                max: MAX_PADS,
            }
            .into());
        }

        let mut settings = Self::new();
        for port in 0..MAX_PADS {
            let port_settings = PortSettings::from(config.port(port));
            settings.ports[port] = port_settings;
            settings
                .binds
                .apply_default_bindings(port_settings.device, port)?;
            settings.binds.apply_dpad_emulation(
                port_settings.device,
                port_settings.dpad_emulation,
                port,
            )?;
        }
        Ok(settings)
    }

    pub fn port(&self, port: usize) -> Option<&PortSettings> {
        self.ports.get(port)
    }

    /// Replace a port's settings without touching its bindings
    pub fn set_port(&mut self, port: usize, settings: PortSettings) -> Result<()> {
        let slot = self.ports.get_mut(port).ok_or(PadError::InvalidPort {
            port,
            max: MAX_PADS,
        })?;
        *slot = settings;
        Ok(())
    }

    /// Startup delay of a port; zero for ports that do not exist
    pub fn startup_delay(&self, port: usize) -> u64 {
        self.port(port).map_or(0, |p| p.startup_delay_frames)
    }

    /// Re-apply every port's configured d-pad emulation
    pub fn apply_all_dpad_emulation(&mut self) -> Result<()> {
        for (port, settings) in self.ports.iter().enumerate() {
            self.binds
                .apply_dpad_emulation(settings.device, settings.dpad_emulation, port)?;
        }
        Ok(())
    }
}

/// Settings handle shared by the frontend and the driver
pub type SharedSettings = Arc<RwLock<InputSettings>>;

/// Wrap settings for sharing
pub fn shared(settings: InputSettings) -> SharedSettings {
    Arc::new(RwLock::new(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binds::JoypadButton;
    use crate::mask::PadMask;

    #[test]
    fn test_from_default_config() {
        let settings = InputSettings::from_config(&InputConfig::default()).unwrap();
        for port in 0..MAX_PADS {
            assert_eq!(settings.ports[port], PortSettings::default());
            assert_eq!(
                settings.binds.get(port, JoypadButton::Up),
                PadMask::GC_LSTICK_UP | PadMask::GC_UP
            );
            assert_eq!(settings.binds.get(port, JoypadButton::A), PadMask::GC_A);
        }
    }

    #[test]
    fn test_from_config_per_port() {
        let config = InputConfig {
            motion_controllers: true,
            ports: vec![
                PortConfig {
                    device: DeviceClass::WiimoteClassic,
                    dpad_emulation: DpadEmulation::RightStick,
                    startup_delay_frames: 90,
                },
                PortConfig {
                    device: DeviceClass::Wiimote,
                    dpad_emulation: DpadEmulation::None,
                    startup_delay_frames: 0,
                },
            ],
        };
        let settings = InputSettings::from_config(&config).unwrap();

        assert_eq!(settings.startup_delay(0), 90);
        assert_eq!(
            settings.binds.get(0, JoypadButton::Left),
            PadMask::CLASSIC_RSTICK_LEFT | PadMask::CLASSIC_LEFT
        );
        assert_eq!(settings.binds.get(1, JoypadButton::B), PadMask::WIIMOTE_1);
        assert_eq!(settings.binds.get(1, JoypadButton::Up), PadMask::WIIMOTE_UP);
        // Ports missing from the config use defaults
        assert_eq!(settings.ports[3].device, DeviceClass::GameCube);
    }

    #[test]
    fn test_from_config_too_many_ports() {
        let config = InputConfig {
            motion_controllers: true,
            ports: vec![PortConfig::default(); MAX_PADS + 1],
        };
        let err = InputSettings::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            PadError::Config(ConfigError::TooManyPorts { count: 5, max: 4 })
        ));
    }

    #[test]
    fn test_set_port() {
        let mut settings = InputSettings::new();
        let port = PortSettings {
            device: DeviceClass::WiimoteNunchuk,
            dpad_emulation: DpadEmulation::LeftStick,
            startup_delay_frames: 5,
        };
        settings.set_port(3, port).unwrap();
        assert_eq!(settings.port(3), Some(&port));
        assert!(settings.set_port(MAX_PADS, port).is_err());
        assert_eq!(settings.startup_delay(MAX_PADS), 0);

        settings.apply_all_dpad_emulation().unwrap();
        assert_eq!(
            settings.binds.get(3, JoypadButton::Down),
            PadMask::NUNCHUK_DOWN | PadMask::WIIMOTE_DOWN
        );
    }
}
