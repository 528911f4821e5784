//! Analog stick and trigger digitization
//!
//! Sticks arrive in polar form and are projected onto an 8-bit signed grid
//! before thresholding, so both controller families share one code path and
//! differ only in their threshold.

use crate::mask::{DirectionBits, PadMask};
use crate::sample::AnalogStick;
use bitflags::bitflags;
use std::f64::consts::PI;

/// Threshold for GameCube sticks (native 8-bit range)
pub const GC_STICK_THRESHOLD: i8 = 48;

/// Threshold for Wiimote-family sticks (derived from magnitude/angle)
pub const WII_STICK_THRESHOLD: i8 = 40;

/// Analog trigger pressure above which the trigger counts as pressed
pub const TRIGGER_THRESHOLD: u8 = 127;

/// Full-scale value of a scaled axis
const AXIS_SCALE: f64 = 127.0;

bitflags! {
    /// Digitized directions of one stick
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Directions: u8 {
        const UP    = 0x01;
        const DOWN  = 0x02;
        const LEFT  = 0x04;
        const RIGHT = 0x08;
    }
}

impl Directions {
    /// Translate into the semantic bits of a particular stick
    pub fn to_mask(self, bits: DirectionBits) -> PadMask {
        let mut mask = PadMask::empty();
        mask.set(bits.up, self.contains(Directions::UP));
        mask.set(bits.down, self.contains(Directions::DOWN));
        mask.set(bits.left, self.contains(Directions::LEFT));
        mask.set(bits.right, self.contains(Directions::RIGHT));
        mask
    }
}

/// Project a polar stick onto the signed 8-bit grid
///
/// Negative x is right and negative y is up, matching the Wiimote
/// expansion convention of `x = -m·sin θ`, `y = -m·cos θ`.
pub fn scale_stick(stick: AnalogStick) -> (i8, i8) {
    let magnitude = f64::from(stick.magnitude.clamp(-1.0, 1.0));
    let radians = PI * f64::from(stick.angle) / 180.0;

    let x = -magnitude * radians.sin();
    let y = -magnitude * radians.cos();

    // `as` truncates toward zero and saturates; NaN becomes 0
    ((x * AXIS_SCALE) as i8, (y * AXIS_SCALE) as i8)
}

/// Threshold one scaled axis
///
/// Returns `(negative, positive)`. Both comparisons are strict, so a value
/// sitting exactly on the threshold is not a press.
pub fn digitize_axis(value: i8, threshold: i8) -> (bool, bool) {
    let threshold = threshold.saturating_abs();
    (value < -threshold, value > threshold)
}

/// Digitize a stick into at most one direction per axis
pub fn digitize_stick(stick: AnalogStick, threshold: i8) -> Directions {
    let (x, y) = scale_stick(stick);
    let (right, left) = digitize_axis(x, threshold);
    let (up, down) = digitize_axis(y, threshold);

    let mut dirs = Directions::empty();
    dirs.set(Directions::RIGHT, right);
    dirs.set(Directions::LEFT, left);
    dirs.set(Directions::UP, up);
    dirs.set(Directions::DOWN, down);
    dirs
}

/// Analog trigger state
///
/// Some controllers report only the click switch reliably and others only
/// the pressure, so either one is enough.
pub fn trigger_pressed(full_press: bool, pressure: u8) -> bool {
    full_press || pressure > TRIGGER_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stick(magnitude: f32, angle: f32) -> AnalogStick {
        AnalogStick::new(magnitude, angle)
    }

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(digitize_stick(stick(1.0, 0.0), WII_STICK_THRESHOLD), Directions::UP);
        assert_eq!(digitize_stick(stick(1.0, 90.0), WII_STICK_THRESHOLD), Directions::RIGHT);
        assert_eq!(digitize_stick(stick(1.0, 180.0), WII_STICK_THRESHOLD), Directions::DOWN);
        assert_eq!(digitize_stick(stick(1.0, 270.0), WII_STICK_THRESHOLD), Directions::LEFT);
    }

    #[test]
    fn test_diagonal() {
        let dirs = digitize_stick(stick(1.0, 45.0), GC_STICK_THRESHOLD);
        assert_eq!(dirs, Directions::UP | Directions::RIGHT);
    }

    #[test]
    fn test_centered_stick() {
        assert_eq!(scale_stick(AnalogStick::centered()), (0, 0));
        assert!(digitize_stick(AnalogStick::centered(), WII_STICK_THRESHOLD).is_empty());
    }

    #[test]
    fn test_magnitude_clamped() {
        assert_eq!(scale_stick(stick(3.5, 90.0)).0, -127);
        assert_eq!(scale_stick(stick(-3.5, 90.0)).0, 127);
        assert_eq!(scale_stick(stick(f32::NAN, 90.0)), (0, 0));
    }

    #[test]
    fn test_axis_boundary_is_strict() {
        assert_eq!(digitize_axis(-48, GC_STICK_THRESHOLD), (false, false));
        assert_eq!(digitize_axis(-49, GC_STICK_THRESHOLD), (true, false));
        assert_eq!(digitize_axis(48, GC_STICK_THRESHOLD), (false, false));
        assert_eq!(digitize_axis(49, GC_STICK_THRESHOLD), (false, true));
        assert_eq!(digitize_axis(i8::MIN, GC_STICK_THRESHOLD), (true, false));
    }

    #[test]
    fn test_stick_boundary_is_strict() {
        // 48.5 and 49.5 truncate to 48 and 49 on the scaled grid
        let at = stick(48.5 / 127.0, 90.0);
        let past = stick(49.5 / 127.0, 90.0);
        assert_eq!(scale_stick(at).0, -48);
        assert_eq!(scale_stick(past).0, -49);
        assert!(digitize_stick(at, GC_STICK_THRESHOLD).is_empty());
        assert_eq!(digitize_stick(past, GC_STICK_THRESHOLD), Directions::RIGHT);

        let at = stick(40.5 / 127.0, 180.0);
        let past = stick(41.5 / 127.0, 180.0);
        assert!(digitize_stick(at, WII_STICK_THRESHOLD).is_empty());
        assert_eq!(digitize_stick(past, WII_STICK_THRESHOLD), Directions::DOWN);
    }

    #[test]
    fn test_thresholds_differ_by_family() {
        // 44/127 deflection clears the Wii threshold but not the GameCube one
        let s = stick(44.5 / 127.0, 0.0);
        assert_eq!(digitize_stick(s, WII_STICK_THRESHOLD), Directions::UP);
        assert!(digitize_stick(s, GC_STICK_THRESHOLD).is_empty());
    }

    #[test]
    fn test_to_mask() {
        let mask = (Directions::UP | Directions::LEFT).to_mask(PadMask::NUNCHUK_STICK);
        assert_eq!(mask, PadMask::NUNCHUK_UP | PadMask::NUNCHUK_LEFT);
    }

    #[test]
    fn test_trigger() {
        assert!(!trigger_pressed(false, 0));
        assert!(!trigger_pressed(false, 127));
        assert!(trigger_pressed(false, 128));
        assert!(trigger_pressed(true, 0));
        assert!(trigger_pressed(true, 255));
    }

    proptest! {
        #[test]
        fn prop_one_direction_per_axis(
            magnitude in -2.0f32..2.0,
            angle in -720.0f32..720.0,
            threshold in 0i8..=127,
        ) {
            let dirs = digitize_stick(stick(magnitude, angle), threshold);
            prop_assert!(!dirs.contains(Directions::UP | Directions::DOWN));
            prop_assert!(!dirs.contains(Directions::LEFT | Directions::RIGHT));
        }

        #[test]
        fn prop_axis_boundary(threshold in 0i8..=126) {
            prop_assert_eq!(digitize_axis(threshold, threshold), (false, false));
            prop_assert_eq!(digitize_axis(-threshold, threshold), (false, false));
            prop_assert_eq!(digitize_axis(threshold + 1, threshold), (false, true));
            prop_assert_eq!(digitize_axis(-threshold - 1, threshold), (true, false));
        }
    }
}
