//! Logical button bindings
//!
//! A binding is a `PadMask` pattern; a logical button is pressed when any
//! bit of its pattern is set in the port's semantic mask. Per-class default
//! tables and d-pad emulation tables are static and keyed by `DeviceClass`.

use crate::mask::{DirectionBits, PadMask};
use pl_core::{DeviceClass, DpadEmulation, PadError, Result, MAX_PADS};

/// Abstract controller button presented to emulated programs
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoypadButton {
    B = 0,
    Y = 1,
    Select = 2,
    Start = 3,
    Up = 4,
    Down = 5,
    Left = 6,
    Right = 7,
    A = 8,
    X = 9,
    L = 10,
    R = 11,
    L2 = 12,
    R2 = 13,
    L3 = 14,
    R3 = 15,
}

/// Number of logical joypad buttons
pub const JOYPAD_BUTTON_COUNT: usize = 16;

impl JoypadButton {
    pub const ALL: [JoypadButton; JOYPAD_BUTTON_COUNT] = [
        JoypadButton::B,
        JoypadButton::Y,
        JoypadButton::Select,
        JoypadButton::Start,
        JoypadButton::Up,
        JoypadButton::Down,
        JoypadButton::Left,
        JoypadButton::Right,
        JoypadButton::A,
        JoypadButton::X,
        JoypadButton::L,
        JoypadButton::R,
        JoypadButton::L2,
        JoypadButton::R2,
        JoypadButton::L3,
        JoypadButton::R3,
    ];

    /// Look up a button by its numeric id
    pub fn from_id(id: u32) -> Option<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            JoypadButton::B => "B",
            JoypadButton::Y => "Y",
            JoypadButton::Select => "Select",
            JoypadButton::Start => "Start",
            JoypadButton::Up => "D-Pad Up",
            JoypadButton::Down => "D-Pad Down",
            JoypadButton::Left => "D-Pad Left",
            JoypadButton::Right => "D-Pad Right",
            JoypadButton::A => "A",
            JoypadButton::X => "X",
            JoypadButton::L => "L",
            JoypadButton::R => "R",
            JoypadButton::L2 => "L2",
            JoypadButton::R2 => "R2",
            JoypadButton::L3 => "L3",
            JoypadButton::R3 => "R3",
        }
    }
}

/// Binding that never matches
pub const UNBOUND: PadMask = PadMask::empty();

/// Per-port binding table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindTable {
    binds: [[PadMask; JOYPAD_BUTTON_COUNT]; MAX_PADS],
}

impl BindTable {
    /// Create a table with every button unbound
    pub fn new() -> Self {
        Self {
            binds: [[UNBOUND; JOYPAD_BUTTON_COUNT]; MAX_PADS],
        }
    }

    /// Binding for a button; `UNBOUND` for ports that do not exist
    pub fn get(&self, port: usize, button: JoypadButton) -> PadMask {
        self.binds
            .get(port)
            .map_or(UNBOUND, |row| row[button.index()])
    }

    /// Bind a button to a pattern
    pub fn set(&mut self, port: usize, button: JoypadButton, pattern: PadMask) -> Result<()> {
        let row = self.row_mut(port)?;
        row[button.index()] = pattern;
        Ok(())
    }

    /// Whether a logical button is pressed given the port's mask
    pub fn resolve(&self, port: usize, button: JoypadButton, mask: PadMask) -> bool {
        mask.is_pressed(self.get(port, button))
    }

    /// Overwrite every binding of a port with the class defaults
    pub fn apply_default_bindings(&mut self, class: DeviceClass, port: usize) -> Result<()> {
        let row = self.row_mut(port)?;
        for &(button, pattern) in default_binds(class) {
            row[button.index()] = pattern;
        }
        tracing::debug!("Port {} bound to {} defaults", port, class.label());
        Ok(())
    }

    /// Overwrite the four direction bindings of a port
    ///
    /// Depends only on `(class, mode)`, so calling it again is harmless.
    pub fn apply_dpad_emulation(
        &mut self,
        class: DeviceClass,
        mode: DpadEmulation,
        port: usize,
    ) -> Result<()> {
        let row = self.row_mut(port)?;
        let dirs = dpad_binds(class, mode);
        row[JoypadButton::Up.index()] = dirs.up;
        row[JoypadButton::Down.index()] = dirs.down;
        row[JoypadButton::Left.index()] = dirs.left;
        row[JoypadButton::Right.index()] = dirs.right;
        tracing::debug!(
            "Port {} d-pad emulation set to {} ({})",
            port,
            mode.label(),
            class.label()
        );
        Ok(())
    }

    fn row_mut(&mut self, port: usize) -> Result<&mut [PadMask; JOYPAD_BUTTON_COUNT]> {
        self.binds.get_mut(port).ok_or(PadError::InvalidPort {
            port,
            max: MAX_PADS,
        })
    }
}

impl Default for BindTable {
    fn default() -> Self {
        Self::new()
    }
}

static GAMECUBE_DEFAULTS: [(JoypadButton, PadMask); JOYPAD_BUTTON_COUNT] = [
    (JoypadButton::B, PadMask::GC_B),
    (JoypadButton::Y, PadMask::GC_Y),
    (JoypadButton::Select, PadMask::GC_Z_TRIGGER),
    (JoypadButton::Start, PadMask::GC_START),
    (JoypadButton::Up, PadMask::GC_UP),
    (JoypadButton::Down, PadMask::GC_DOWN),
    (JoypadButton::Left, PadMask::GC_LEFT),
    (JoypadButton::Right, PadMask::GC_RIGHT),
    (JoypadButton::A, PadMask::GC_A),
    (JoypadButton::X, PadMask::GC_X),
    (JoypadButton::L, PadMask::GC_L_TRIGGER),
    (JoypadButton::R, PadMask::GC_R_TRIGGER),
    (JoypadButton::L2, UNBOUND),
    (JoypadButton::R2, UNBOUND),
    (JoypadButton::L3, UNBOUND),
    (JoypadButton::R3, UNBOUND),
];

// Held sideways: 1 and 2 are the face buttons
static WIIMOTE_DEFAULTS: [(JoypadButton, PadMask); JOYPAD_BUTTON_COUNT] = [
    (JoypadButton::B, PadMask::WIIMOTE_1),
    (JoypadButton::Y, PadMask::WIIMOTE_A),
    (JoypadButton::Select, PadMask::WIIMOTE_MINUS),
    (JoypadButton::Start, PadMask::WIIMOTE_PLUS),
    (JoypadButton::Up, PadMask::WIIMOTE_UP),
    (JoypadButton::Down, PadMask::WIIMOTE_DOWN),
    (JoypadButton::Left, PadMask::WIIMOTE_LEFT),
    (JoypadButton::Right, PadMask::WIIMOTE_RIGHT),
    (JoypadButton::A, PadMask::WIIMOTE_2),
    (JoypadButton::X, PadMask::WIIMOTE_B),
    (JoypadButton::L, UNBOUND),
    (JoypadButton::R, UNBOUND),
    (JoypadButton::L2, UNBOUND),
    (JoypadButton::R2, UNBOUND),
    (JoypadButton::L3, UNBOUND),
    (JoypadButton::R3, UNBOUND),
];

static NUNCHUK_DEFAULTS: [(JoypadButton, PadMask); JOYPAD_BUTTON_COUNT] = [
    (JoypadButton::B, PadMask::WIIMOTE_B),
    (JoypadButton::Y, PadMask::WIIMOTE_2),
    (JoypadButton::Select, PadMask::WIIMOTE_MINUS),
    (JoypadButton::Start, PadMask::WIIMOTE_PLUS),
    (JoypadButton::Up, PadMask::WIIMOTE_UP),
    (JoypadButton::Down, PadMask::WIIMOTE_DOWN),
    (JoypadButton::Left, PadMask::WIIMOTE_LEFT),
    (JoypadButton::Right, PadMask::WIIMOTE_RIGHT),
    (JoypadButton::A, PadMask::WIIMOTE_A),
    (JoypadButton::X, PadMask::WIIMOTE_1),
    (JoypadButton::L, PadMask::NUNCHUK_Z),
    (JoypadButton::R, PadMask::NUNCHUK_C),
    (JoypadButton::L2, UNBOUND),
    (JoypadButton::R2, UNBOUND),
    (JoypadButton::L3, UNBOUND),
    (JoypadButton::R3, UNBOUND),
];

static CLASSIC_DEFAULTS: [(JoypadButton, PadMask); JOYPAD_BUTTON_COUNT] = [
    (JoypadButton::B, PadMask::CLASSIC_B),
    (JoypadButton::Y, PadMask::CLASSIC_Y),
    (JoypadButton::Select, PadMask::CLASSIC_MINUS),
    (JoypadButton::Start, PadMask::CLASSIC_PLUS),
    (JoypadButton::Up, PadMask::CLASSIC_UP),
    (JoypadButton::Down, PadMask::CLASSIC_DOWN),
    (JoypadButton::Left, PadMask::CLASSIC_LEFT),
    (JoypadButton::Right, PadMask::CLASSIC_RIGHT),
    (JoypadButton::A, PadMask::CLASSIC_A),
    (JoypadButton::X, PadMask::CLASSIC_X),
    (JoypadButton::L, PadMask::CLASSIC_L_TRIGGER),
    (JoypadButton::R, PadMask::CLASSIC_R_TRIGGER),
    (JoypadButton::L2, PadMask::CLASSIC_ZL_TRIGGER),
    (JoypadButton::R2, PadMask::CLASSIC_ZR_TRIGGER),
    (JoypadButton::L3, UNBOUND),
    (JoypadButton::R3, UNBOUND),
];

/// Default binding of every logical button for a class
pub fn default_binds(class: DeviceClass) -> &'static [(JoypadButton, PadMask); JOYPAD_BUTTON_COUNT] {
    match class {
        DeviceClass::GameCube => &GAMECUBE_DEFAULTS,
        DeviceClass::Wiimote => &WIIMOTE_DEFAULTS,
        DeviceClass::WiimoteNunchuk => &NUNCHUK_DEFAULTS,
        DeviceClass::WiimoteClassic => &CLASSIC_DEFAULTS,
    }
}

/// Default binding of one logical button for a class
pub fn default_bind(class: DeviceClass, button: JoypadButton) -> PadMask {
    default_binds(class)
        .iter()
        .find(|(b, _)| *b == button)
        .map_or(UNBOUND, |(_, pattern)| *pattern)
}

/// Direction bindings for a class under a d-pad emulation mode
///
/// Stick modes bind "stick OR d-pad", so the physical d-pad keeps working.
/// A bare Wiimote has no stick and ignores the mode; the Nunchuk has a
/// single stick that serves both stick modes.
pub fn dpad_binds(class: DeviceClass, mode: DpadEmulation) -> DirectionBits {
    match (class, mode) {
        (DeviceClass::Wiimote, _) => PadMask::WIIMOTE_DPAD,
        (DeviceClass::WiimoteNunchuk, DpadEmulation::None) => PadMask::WIIMOTE_DPAD,
        (DeviceClass::WiimoteNunchuk, _) => PadMask::NUNCHUK_STICK.union(PadMask::WIIMOTE_DPAD),
        (DeviceClass::WiimoteClassic, DpadEmulation::None) => PadMask::CLASSIC_DPAD,
        (DeviceClass::WiimoteClassic, DpadEmulation::LeftStick) => {
            PadMask::CLASSIC_LSTICK.union(PadMask::CLASSIC_DPAD)
        }
        (DeviceClass::WiimoteClassic, DpadEmulation::RightStick) => {
            PadMask::CLASSIC_RSTICK.union(PadMask::CLASSIC_DPAD)
        }
        (DeviceClass::GameCube, DpadEmulation::None) => PadMask::GC_DPAD,
        (DeviceClass::GameCube, DpadEmulation::LeftStick) => {
            PadMask::GC_LSTICK.union(PadMask::GC_DPAD)
        }
        (DeviceClass::GameCube, DpadEmulation::RightStick) => {
            PadMask::GC_RSTICK.union(PadMask::GC_DPAD)
        }
    }
}
