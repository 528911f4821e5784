//! Semantic pad mask
//!
//! One bit per physical control of every supported controller family, plus
//! two synthetic gesture bits. A port's mask is rebuilt from scratch every
//! poll; bindings and combos are plain bitwise tests against it.

use bitflags::bitflags;

bitflags! {
    /// Canonicalized input state of one port
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PadMask: u64 {
        // GameCube controller
        const GC_A            = 1 << 0;
        const GC_B            = 1 << 1;
        const GC_X            = 1 << 2;
        const GC_Y            = 1 << 3;
        const GC_UP           = 1 << 4;
        const GC_DOWN         = 1 << 5;
        const GC_LEFT         = 1 << 6;
        const GC_RIGHT        = 1 << 7;
        const GC_Z_TRIGGER    = 1 << 8;
        const GC_START        = 1 << 9;
        const GC_L_TRIGGER    = 1 << 10;
        const GC_R_TRIGGER    = 1 << 11;
        const GC_LSTICK_LEFT  = 1 << 12;
        const GC_LSTICK_RIGHT = 1 << 13;
        const GC_LSTICK_UP    = 1 << 14;
        const GC_LSTICK_DOWN  = 1 << 15;
        const GC_RSTICK_LEFT  = 1 << 16;
        const GC_RSTICK_RIGHT = 1 << 17;
        const GC_RSTICK_UP    = 1 << 18;
        const GC_RSTICK_DOWN  = 1 << 19;

        // Classic controller
        const CLASSIC_A            = 1 << 20;
        const CLASSIC_B            = 1 << 21;
        const CLASSIC_X            = 1 << 22;
        const CLASSIC_Y            = 1 << 23;
        const CLASSIC_UP           = 1 << 24;
        const CLASSIC_DOWN         = 1 << 25;
        const CLASSIC_LEFT         = 1 << 26;
        const CLASSIC_RIGHT        = 1 << 27;
        const CLASSIC_PLUS         = 1 << 28;
        const CLASSIC_MINUS        = 1 << 29;
        const CLASSIC_HOME         = 1 << 30;
        const CLASSIC_L_TRIGGER    = 1 << 31;
        const CLASSIC_R_TRIGGER    = 1 << 32;
        const CLASSIC_ZL_TRIGGER   = 1 << 33;
        const CLASSIC_ZR_TRIGGER   = 1 << 34;
        const CLASSIC_LSTICK_LEFT  = 1 << 35;
        const CLASSIC_LSTICK_RIGHT = 1 << 36;
        const CLASSIC_LSTICK_UP    = 1 << 37;
        const CLASSIC_LSTICK_DOWN  = 1 << 38;
        const CLASSIC_RSTICK_LEFT  = 1 << 39;
        const CLASSIC_RSTICK_RIGHT = 1 << 40;
        const CLASSIC_RSTICK_UP    = 1 << 41;
        const CLASSIC_RSTICK_DOWN  = 1 << 42;

        // Wiimote
        const WIIMOTE_A     = 1 << 43;
        const WIIMOTE_B     = 1 << 44;
        const WIIMOTE_1     = 1 << 45;
        const WIIMOTE_2     = 1 << 46;
        const WIIMOTE_UP    = 1 << 47;
        const WIIMOTE_DOWN  = 1 << 48;
        const WIIMOTE_LEFT  = 1 << 49;
        const WIIMOTE_RIGHT = 1 << 50;
        const WIIMOTE_PLUS  = 1 << 51;
        const WIIMOTE_MINUS = 1 << 52;
        const WIIMOTE_HOME  = 1 << 53;

        // Nunchuk
        const NUNCHUK_Z     = 1 << 54;
        const NUNCHUK_C     = 1 << 55;
        const NUNCHUK_LEFT  = 1 << 56;
        const NUNCHUK_RIGHT = 1 << 57;
        const NUNCHUK_UP    = 1 << 58;
        const NUNCHUK_DOWN  = 1 << 59;

        // Synthetic gestures
        const QUIT = 1 << 60;
        const MENU = 1 << 61;
    }
}

/// The four bits a stick (or d-pad) reports into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionBits {
    pub up: PadMask,
    pub down: PadMask,
    pub left: PadMask,
    pub right: PadMask,
}

impl DirectionBits {
    /// OR two direction sets together, direction by direction
    pub const fn union(self, other: DirectionBits) -> DirectionBits {
        DirectionBits {
            up: self.up.union(other.up),
            down: self.down.union(other.down),
            left: self.left.union(other.left),
            right: self.right.union(other.right),
        }
    }
}

impl PadMask {
    pub const GC_DPAD: DirectionBits = DirectionBits {
        up: PadMask::GC_UP,
        down: PadMask::GC_DOWN,
        left: PadMask::GC_LEFT,
        right: PadMask::GC_RIGHT,
    };

    pub const GC_LSTICK: DirectionBits = DirectionBits {
        up: PadMask::GC_LSTICK_UP,
        down: PadMask::GC_LSTICK_DOWN,
        left: PadMask::GC_LSTICK_LEFT,
        right: PadMask::GC_LSTICK_RIGHT,
    };

    pub const GC_RSTICK: DirectionBits = DirectionBits {
        up: PadMask::GC_RSTICK_UP,
        down: PadMask::GC_RSTICK_DOWN,
        left: PadMask::GC_RSTICK_LEFT,
        right: PadMask::GC_RSTICK_RIGHT,
    };

    pub const CLASSIC_DPAD: DirectionBits = DirectionBits {
        up: PadMask::CLASSIC_UP,
        down: PadMask::CLASSIC_DOWN,
        left: PadMask::CLASSIC_LEFT,
        right: PadMask::CLASSIC_RIGHT,
    };

    pub const CLASSIC_LSTICK: DirectionBits = DirectionBits {
        up: PadMask::CLASSIC_LSTICK_UP,
        down: PadMask::CLASSIC_LSTICK_DOWN,
        left: PadMask::CLASSIC_LSTICK_LEFT,
        right: PadMask::CLASSIC_LSTICK_RIGHT,
    };

    pub const CLASSIC_RSTICK: DirectionBits = DirectionBits {
        up: PadMask::CLASSIC_RSTICK_UP,
        down: PadMask::CLASSIC_RSTICK_DOWN,
        left: PadMask::CLASSIC_RSTICK_LEFT,
        right: PadMask::CLASSIC_RSTICK_RIGHT,
    };

    pub const WIIMOTE_DPAD: DirectionBits = DirectionBits {
        up: PadMask::WIIMOTE_UP,
        down: PadMask::WIIMOTE_DOWN,
        left: PadMask::WIIMOTE_LEFT,
        right: PadMask::WIIMOTE_RIGHT,
    };

    pub const NUNCHUK_STICK: DirectionBits = DirectionBits {
        up: PadMask::NUNCHUK_UP,
        down: PadMask::NUNCHUK_DOWN,
        left: PadMask::NUNCHUK_LEFT,
        right: PadMask::NUNCHUK_RIGHT,
    };

    /// Any bit of `pattern` is set
    pub fn is_pressed(&self, pattern: PadMask) -> bool {
        self.intersects(pattern)
    }

    /// Set or clear the bits of `pattern`
    pub fn set_pressed(&mut self, pattern: PadMask, pressed: bool) {
        self.set(pattern, pressed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_bit_per_flag() {
        let mut seen = PadMask::empty();
        for (name, flag) in PadMask::all().iter_names() {
            assert_eq!(flag.bits().count_ones(), 1, "{} is not a single bit", name);
            assert!(!seen.intersects(flag), "{} aliases another flag", name);
            seen |= flag;
        }
        assert_eq!(PadMask::all().bits().count_ones(), 62);
    }

    #[test]
    fn test_is_pressed() {
        let mut mask = PadMask::empty();
        assert!(!mask.is_pressed(PadMask::GC_A));

        mask.set_pressed(PadMask::GC_A, true);
        assert!(mask.is_pressed(PadMask::GC_A));
        assert!(mask.is_pressed(PadMask::GC_A | PadMask::GC_B));
        assert!(!mask.is_pressed(PadMask::empty()));

        mask.set_pressed(PadMask::GC_A, false);
        assert!(!mask.is_pressed(PadMask::GC_A));
    }

    #[test]
    fn test_direction_union() {
        let both = PadMask::GC_LSTICK.union(PadMask::GC_DPAD);
        assert_eq!(both.up, PadMask::GC_LSTICK_UP | PadMask::GC_UP);
        assert_eq!(both.right, PadMask::GC_LSTICK_RIGHT | PadMask::GC_RIGHT);
    }
}
