//! Input driver facade
//!
//! `InputHub` runs one poll cycle per frame: clear every port mask, scan the
//! sources, canonicalize each port and run combo detection on port 0. The
//! frontend then queries logical buttons and lifecycle actions until the
//! next poll.

use crate::binds::JoypadButton;
use crate::canonicalize::canonicalize;
use crate::combo::{ComboDetector, PlatformSignals};
use crate::lifecycle::{LifecycleAction, LifecycleState};
use crate::mask::PadMask;
use crate::sample::RawSample;
use crate::settings::{self, InputSettings, SharedSettings};
use crate::source::{NoRemotes, PadSource, RemoteSource};
use pl_core::{DeviceClass, DpadEmulation, InputConfig, Result, MAX_PADS};
use tracing::{info, trace};

/// Abstract device type a frontend queries a port as
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    None = 0,
    Joypad = 1,
    Mouse = 2,
    Keyboard = 3,
    Lightgun = 4,
    Analog = 5,
}

impl DeviceKind {
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(DeviceKind::None),
            1 => Some(DeviceKind::Joypad),
            2 => Some(DeviceKind::Mouse),
            3 => Some(DeviceKind::Keyboard),
            4 => Some(DeviceKind::Lightgun),
            5 => Some(DeviceKind::Analog),
            _ => None,
        }
    }
}

/// Interface the frontend drives input through
pub trait InputDriver {
    /// Short driver name
    fn ident(&self) -> &'static str;

    /// Number of ports
    fn max_pads(&self) -> usize;

    /// Apply per-port settings once the frontend has loaded them
    fn post_init(&mut self) -> Result<()>;

    /// Run one poll cycle
    fn poll(&mut self);

    /// Whether a logical button is held; false for anything not a joypad query
    fn is_button_pressed(&self, port: usize, device: DeviceKind, button_id: u32) -> bool;

    /// Whether a lifecycle bit is set
    fn is_action_pending(&self, action_id: u32) -> bool;

    /// Bind every logical button of a port to the class defaults
    fn apply_default_bindings(&mut self, class: DeviceClass, port: usize) -> Result<()>;

    /// Rebind the direction buttons of a port
    fn apply_dpad_emulation(
        &mut self,
        class: DeviceClass,
        mode: DpadEmulation,
        port: usize,
    ) -> Result<()>;
}

/// Per-session input state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    /// Canonicalized mask of each port for the current frame
    pub pad_masks: [PadMask; MAX_PADS],
    pub lifecycle: LifecycleState,
    /// Number of completed polls
    pub frame_count: u64,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pad_masks: [PadMask::empty(); MAX_PADS],
            lifecycle: LifecycleState::new(),
            frame_count: 0,
        }
    }

    /// Mask of a port; empty for ports that do not exist
    pub fn mask(&self, port: usize) -> PadMask {
        self.pad_masks.get(port).copied().unwrap_or(PadMask::empty())
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Concrete input driver over pluggable sample sources
pub struct InputHub {
    pads: Box<dyn PadSource>,
    remotes: Box<dyn RemoteSource>,
    remotes_available: bool,
    settings: SharedSettings,
    combo: ComboDetector,
    state: InputState,
}

impl InputHub {
    /// Create a driver and initialize its sources
    ///
    /// Without a remote source, or with one that reports itself unavailable,
    /// only GameCube controllers are read.
    pub fn new(
        mut pads: Box<dyn PadSource>,
        remotes: Option<Box<dyn RemoteSource>>,
        settings: SharedSettings,
    ) -> Self {
        let mut remotes: Box<dyn RemoteSource> = match remotes {
            Some(remotes) => remotes,
            None => Box::new(NoRemotes),
        };
        let remotes_available = remotes.is_available();

        pads.init();
        remotes.init();

        info!(
            "Input driver initialized ({} ports, motion controllers {})",
            MAX_PADS,
            if remotes_available { "enabled" } else { "disabled" }
        );

        Self {
            pads,
            remotes,
            remotes_available,
            settings,
            combo: ComboDetector::new(),
            state: InputState::new(),
        }
    }

    /// Create a driver with settings built from configuration
    ///
    /// The remote source is dropped when motion controllers are disabled.
    pub fn from_config(
        config: &InputConfig,
        pads: Box<dyn PadSource>,
        remotes: Option<Box<dyn RemoteSource>>,
    ) -> Result<Self> {
        let settings = settings::shared(InputSettings::from_config(config)?);
        let remotes = remotes.filter(|_| config.motion_controllers);
        Ok(Self::new(pads, remotes, settings))
    }

    /// Reset and power latches for the platform layer
    pub fn signals(&self) -> PlatformSignals {
        self.combo.signals().clone()
    }

    /// Shared settings handle
    pub fn settings(&self) -> SharedSettings {
        self.settings.clone()
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Lifecycle word, for frontend-owned bits
    pub fn lifecycle_mut(&mut self) -> &mut LifecycleState {
        &mut self.state.lifecycle
    }

    pub fn frame_count(&self) -> u64 {
        self.state.frame_count
    }

    pub fn motion_controllers_enabled(&self) -> bool {
        self.remotes_available
    }

    fn read_port(&self, port: usize) -> RawSample {
        RawSample {
            gamecube: self.pads.read(port),
            wiimote: if self.remotes_available {
                self.remotes.read(port)
            } else {
                None
            },
        }
    }
}

impl InputDriver for InputHub {
    fn ident(&self) -> &'static str {
        "padlink"
    }

    fn max_pads(&self) -> usize {
        MAX_PADS
    }

    fn post_init(&mut self) -> Result<()> {
        self.settings.write().apply_all_dpad_emulation()?;
        info!("D-pad emulation applied to {} ports", MAX_PADS);
        Ok(())
    }

    fn poll(&mut self) {
        self.state.pad_masks = [PadMask::empty(); MAX_PADS];

        self.pads.scan();
        if self.remotes_available {
            self.remotes.scan();
        }

        for port in 0..MAX_PADS {
            let sample = self.read_port(port);
            self.state.pad_masks[port] = canonicalize(&sample);
        }

        let startup_delay = self.settings.read().startup_delay(0);
        let frame = self.state.frame_count;
        self.combo.detect(
            &mut self.state.pad_masks[0],
            frame,
            startup_delay,
            &mut self.state.lifecycle,
        );

        trace!(
            "Poll {}: port0={:#x} lifecycle={:#x}",
            frame,
            self.state.pad_masks[0].bits(),
            self.state.lifecycle.bits()
        );

        self.state.frame_count = frame.wrapping_add(1);
    }

    fn is_button_pressed(&self, port: usize, device: DeviceKind, button_id: u32) -> bool {
        if device != DeviceKind::Joypad || port >= MAX_PADS {
            return false;
        }
        let Some(button) = JoypadButton::from_id(button_id) else {
            return false;
        };
        self.settings
            .read()
            .binds
            .resolve(port, button, self.state.mask(port))
    }

    fn is_action_pending(&self, action_id: u32) -> bool {
        self.state.lifecycle.is_bit_set(action_id)
    }

    fn apply_default_bindings(&mut self, class: DeviceClass, port: usize) -> Result<()> {
        self.settings.write().binds.apply_default_bindings(class, port)
    }

    fn apply_dpad_emulation(
        &mut self,
        class: DeviceClass,
        mode: DpadEmulation,
        port: usize,
    ) -> Result<()> {
        self.settings
            .write()
            .binds
            .apply_dpad_emulation(class, mode, port)
    }
}

impl Drop for InputHub {
    fn drop(&mut self) {
        self.pads.shutdown();
        self.remotes.shutdown();
        info!(
            "Input driver shut down after {} frames",
            self.state.frame_count
        );
    }
}

impl LifecycleAction {
    /// Whether this action is pending on a driver
    pub fn is_pending_on(self, driver: &dyn InputDriver) -> bool {
        driver.is_action_pending(self.bit())
    }
}
