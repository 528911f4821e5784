//! Bindable input catalog
//!
//! Static list of every pattern a configuration UI can offer for a binding,
//! with a display label. Includes each physical bit, the "stick or d-pad"
//! composites used by d-pad emulation, and the two gesture bits.

use crate::mask::PadMask;

/// A bindable pattern and its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformBind {
    pub mask: PadMask,
    pub label: &'static str,
}

const fn bind(mask: PadMask, label: &'static str) -> PlatformBind {
    PlatformBind { mask, label }
}

/// Number of catalog entries
pub const PLATFORM_BIND_COUNT: usize = 82;

/// All bindable patterns, grouped by controller family
pub static PLATFORM_BINDS: [PlatformBind; PLATFORM_BIND_COUNT] = [
    bind(PadMask::GC_A, "GC A button"),
    bind(PadMask::GC_B, "GC B button"),
    bind(PadMask::GC_X, "GC X button"),
    bind(PadMask::GC_Y, "GC Y button"),
    bind(PadMask::GC_UP, "GC D-Pad Up"),
    bind(PadMask::GC_DOWN, "GC D-Pad Down"),
    bind(PadMask::GC_LEFT, "GC D-Pad Left"),
    bind(PadMask::GC_RIGHT, "GC D-Pad Right"),
    bind(PadMask::GC_Z_TRIGGER, "GC Z Trigger"),
    bind(PadMask::GC_START, "GC Start button"),
    bind(PadMask::GC_L_TRIGGER, "GC Left Trigger"),
    bind(PadMask::GC_R_TRIGGER, "GC Right Trigger"),
    bind(PadMask::GC_LSTICK_LEFT, "GC Main Stick Left"),
    bind(PadMask::GC_LSTICK_RIGHT, "GC Main Stick Right"),
    bind(PadMask::GC_LSTICK_UP, "GC Main Stick Up"),
    bind(PadMask::GC_LSTICK_DOWN, "GC Main Stick Down"),
    bind(PadMask::GC_LSTICK_LEFT.union(PadMask::GC_LEFT), "GC Main Stick D-Pad Left"),
    bind(PadMask::GC_LSTICK_RIGHT.union(PadMask::GC_RIGHT), "GC Main Stick D-Pad Right"),
    bind(PadMask::GC_LSTICK_UP.union(PadMask::GC_UP), "GC Main Stick D-Pad Up"),
    bind(PadMask::GC_LSTICK_DOWN.union(PadMask::GC_DOWN), "GC Main Stick D-Pad Down"),
    bind(PadMask::GC_RSTICK_LEFT, "GC C-Stick Left"),
    bind(PadMask::GC_RSTICK_RIGHT, "GC C-Stick Right"),
    bind(PadMask::GC_RSTICK_UP, "GC C-Stick Up"),
    bind(PadMask::GC_RSTICK_DOWN, "GC C-Stick Down"),
    bind(PadMask::GC_RSTICK_LEFT.union(PadMask::GC_LEFT), "GC C-Stick D-Pad Left"),
    bind(PadMask::GC_RSTICK_RIGHT.union(PadMask::GC_RIGHT), "GC C-Stick D-Pad Right"),
    bind(PadMask::GC_RSTICK_UP.union(PadMask::GC_UP), "GC C-Stick D-Pad Up"),
    bind(PadMask::GC_RSTICK_DOWN.union(PadMask::GC_DOWN), "GC C-Stick D-Pad Down"),
    // Classic controller
    bind(PadMask::CLASSIC_A, "Classic A button"),
    bind(PadMask::CLASSIC_B, "Classic B button"),
    bind(PadMask::CLASSIC_X, "Classic X button"),
    bind(PadMask::CLASSIC_Y, "Classic Y button"),
    bind(PadMask::CLASSIC_UP, "Classic D-Pad Up"),
    bind(PadMask::CLASSIC_DOWN, "Classic D-Pad Down"),
    bind(PadMask::CLASSIC_LEFT, "Classic D-Pad Left"),
    bind(PadMask::CLASSIC_RIGHT, "Classic D-Pad Right"),
    bind(PadMask::CLASSIC_PLUS, "Classic Plus button"),
    bind(PadMask::CLASSIC_MINUS, "Classic Minus button"),
    bind(PadMask::CLASSIC_HOME, "Classic Home button"),
    bind(PadMask::CLASSIC_L_TRIGGER, "Classic L Trigger"),
    bind(PadMask::CLASSIC_R_TRIGGER, "Classic R Trigger"),
    bind(PadMask::CLASSIC_ZL_TRIGGER, "Classic ZL Trigger"),
    bind(PadMask::CLASSIC_ZR_TRIGGER, "Classic ZR Trigger"),
    bind(PadMask::CLASSIC_LSTICK_LEFT, "Classic LStick Left"),
    bind(PadMask::CLASSIC_LSTICK_RIGHT, "Classic LStick Right"),
    bind(PadMask::CLASSIC_LSTICK_UP, "Classic LStick Up"),
    bind(PadMask::CLASSIC_LSTICK_DOWN, "Classic LStick Down"),
    bind(PadMask::CLASSIC_LSTICK_LEFT.union(PadMask::CLASSIC_LEFT), "Classic LStick D-Pad Left"),
    bind(PadMask::CLASSIC_LSTICK_RIGHT.union(PadMask::CLASSIC_RIGHT), "Classic LStick D-Pad Right"),
    bind(PadMask::CLASSIC_LSTICK_UP.union(PadMask::CLASSIC_UP), "Classic LStick D-Pad Up"),
    bind(PadMask::CLASSIC_LSTICK_DOWN.union(PadMask::CLASSIC_DOWN), "Classic LStick D-Pad Down"),
    bind(PadMask::CLASSIC_RSTICK_LEFT, "Classic RStick Left"),
    bind(PadMask::CLASSIC_RSTICK_RIGHT, "Classic RStick Right"),
    bind(PadMask::CLASSIC_RSTICK_UP, "Classic RStick Up"),
    bind(PadMask::CLASSIC_RSTICK_DOWN, "Classic RStick Down"),
    bind(PadMask::CLASSIC_RSTICK_LEFT.union(PadMask::CLASSIC_LEFT), "Classic RStick D-Pad Left"),
    bind(PadMask::CLASSIC_RSTICK_RIGHT.union(PadMask::CLASSIC_RIGHT), "Classic RStick D-Pad Right"),
    bind(PadMask::CLASSIC_RSTICK_UP.union(PadMask::CLASSIC_UP), "Classic RStick D-Pad Up"),
    bind(PadMask::CLASSIC_RSTICK_DOWN.union(PadMask::CLASSIC_DOWN), "Classic RStick D-Pad Down"),
    // Wiimote and Nunchuk
    bind(PadMask::WIIMOTE_A, "Wiimote A button"),
    bind(PadMask::WIIMOTE_B, "Wiimote B button"),
    bind(PadMask::WIIMOTE_1, "Wiimote 1 button"),
    bind(PadMask::WIIMOTE_2, "Wiimote 2 button"),
    bind(PadMask::WIIMOTE_UP, "Wiimote D-Pad Up"),
    bind(PadMask::WIIMOTE_DOWN, "Wiimote D-Pad Down"),
    bind(PadMask::WIIMOTE_LEFT, "Wiimote D-Pad Left"),
    bind(PadMask::WIIMOTE_RIGHT, "Wiimote D-Pad Right"),
    bind(PadMask::WIIMOTE_PLUS, "Wiimote Plus button"),
    bind(PadMask::WIIMOTE_MINUS, "Wiimote Minus button"),
    bind(PadMask::WIIMOTE_HOME, "Wiimote Home button"),
    bind(PadMask::NUNCHUK_Z, "Nunchuk Z button"),
    bind(PadMask::NUNCHUK_C, "Nunchuk C button"),
    bind(PadMask::NUNCHUK_LEFT, "Nunchuk Stick Left"),
    bind(PadMask::NUNCHUK_RIGHT, "Nunchuk Stick Right"),
    bind(PadMask::NUNCHUK_UP, "Nunchuk Stick Up"),
    bind(PadMask::NUNCHUK_DOWN, "Nunchuk Stick Down"),
    bind(PadMask::NUNCHUK_LEFT.union(PadMask::WIIMOTE_LEFT), "Nunchuk Stick D-Pad Left"),
    bind(PadMask::NUNCHUK_RIGHT.union(PadMask::WIIMOTE_RIGHT), "Nunchuk Stick D-Pad Right"),
    bind(PadMask::NUNCHUK_UP.union(PadMask::WIIMOTE_UP), "Nunchuk Stick D-Pad Up"),
    bind(PadMask::NUNCHUK_DOWN.union(PadMask::WIIMOTE_DOWN), "Nunchuk Stick D-Pad Down"),
    // Gestures
    bind(PadMask::QUIT, "Quit gesture"),
    bind(PadMask::MENU, "Menu gesture"),
];

/// Label of an exact catalog pattern
pub fn label_for(mask: PadMask) -> Option<&'static str> {
    PLATFORM_BINDS
        .iter()
        .find(|entry| entry.mask == mask)
        .map(|entry| entry.label)
}

/// Pattern for a catalog label
pub fn find_by_label(label: &str) -> Option<PadMask> {
    PLATFORM_BINDS
        .iter()
        .find(|entry| entry.label == label)
        .map(|entry| entry.mask)
}
