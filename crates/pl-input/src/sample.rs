//! Raw per-port hardware samples
//!
//! These are what the polling layer hands over once per tick: held-button
//! words as the hardware reports them, sticks in polar form, trigger
//! pressure bytes. Nothing here is validated; an absent device is `None`.

use bitflags::bitflags;

bitflags! {
    /// GameCube held-button word
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GcButtons: u16 {
        const LEFT    = 0x0001;
        const RIGHT   = 0x0002;
        const DOWN    = 0x0004;
        const UP      = 0x0008;
        const Z       = 0x0010;
        /// Right trigger fully pressed (click)
        const R       = 0x0020;
        /// Left trigger fully pressed (click)
        const L       = 0x0040;
        const A       = 0x0100;
        const B       = 0x0200;
        const X       = 0x0400;
        const Y       = 0x0800;
        const START   = 0x1000;
    }
}

bitflags! {
    /// Wiimote held-button word (d-pad in the controller's own frame)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WiimoteButtons: u16 {
        const TWO   = 0x0001;
        const ONE   = 0x0002;
        const B     = 0x0004;
        const A     = 0x0008;
        const MINUS = 0x0010;
        const HOME  = 0x0080;
        const LEFT  = 0x0100;
        const RIGHT = 0x0200;
        const DOWN  = 0x0400;
        const UP    = 0x0800;
        const PLUS  = 0x1000;
    }
}

bitflags! {
    /// Nunchuk buttons
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NunchukButtons: u8 {
        const Z = 0x01;
        const C = 0x02;
    }
}

bitflags! {
    /// Classic controller held-button word
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClassicButtons: u16 {
        const UP     = 0x0001;
        const LEFT   = 0x0002;
        const ZR     = 0x0004;
        const X      = 0x0008;
        const A      = 0x0010;
        const Y      = 0x0020;
        const B      = 0x0040;
        const ZL     = 0x0080;
        const FULL_R = 0x0200;
        const PLUS   = 0x0400;
        const HOME   = 0x0800;
        const MINUS  = 0x1000;
        const FULL_L = 0x2000;
        const DOWN   = 0x4000;
        const RIGHT  = 0x8000;
    }
}

/// Analog stick in polar form
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalogStick {
    /// Deflection, nominally 0.0-1.0 (clamped to -1.0..=1.0 when digitized)
    pub magnitude: f32,
    /// Direction in degrees, clockwise from up (0 = up, 90 = right)
    pub angle: f32,
}

impl AnalogStick {
    pub fn new(magnitude: f32, angle: f32) -> Self {
        Self { magnitude, angle }
    }

    /// Stick at rest
    pub fn centered() -> Self {
        Self::default()
    }
}

/// GameCube controller sample
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GcPadSample {
    pub buttons: GcButtons,
    pub main_stick: AnalogStick,
    pub c_stick: AnalogStick,
    /// Left trigger pressure (0-255)
    pub trigger_l: u8,
    /// Right trigger pressure (0-255)
    pub trigger_r: u8,
}

/// Nunchuk sample
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NunchukSample {
    pub buttons: NunchukButtons,
    pub stick: AnalogStick,
}

/// Classic controller sample
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassicSample {
    pub buttons: ClassicButtons,
    pub left_stick: AnalogStick,
    pub right_stick: AnalogStick,
}

/// Expansion attached to a Wiimote
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Extension {
    #[default]
    None,
    Nunchuk(NunchukSample),
    Classic(ClassicSample),
}

/// Wiimote sample, including whatever extension is plugged in
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WiimoteSample {
    pub buttons: WiimoteButtons,
    pub extension: Extension,
}

/// Everything read from one port in one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawSample {
    pub gamecube: Option<GcPadSample>,
    pub wiimote: Option<WiimoteSample>,
}

impl RawSample {
    /// Nothing connected
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn with_gamecube(pad: GcPadSample) -> Self {
        Self {
            gamecube: Some(pad),
            wiimote: None,
        }
    }

    pub fn with_wiimote(remote: WiimoteSample) -> Self {
        Self {
            gamecube: None,
            wiimote: Some(remote),
        }
    }
}
