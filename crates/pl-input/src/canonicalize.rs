//! Raw sample to semantic mask translation
//!
//! Every hardware flag lands on exactly one fixed bit. Sticks are digitized
//! with the threshold of their controller family, and the device-specific
//! quit/menu gestures are folded in here, since they depend on which
//! hardware produced the bits rather than on which port it sits in.

use crate::analog::{digitize_stick, trigger_pressed, GC_STICK_THRESHOLD, WII_STICK_THRESHOLD};
use crate::mask::{DirectionBits, PadMask};
use crate::sample::{
    AnalogStick, ClassicButtons, ClassicSample, Extension, GcButtons, GcPadSample,
    NunchukButtons, NunchukSample, RawSample, WiimoteButtons, WiimoteSample,
};

const GC_BUTTONS: [(GcButtons, PadMask); 10] = [
    (GcButtons::A, PadMask::GC_A),
    (GcButtons::B, PadMask::GC_B),
    (GcButtons::X, PadMask::GC_X),
    (GcButtons::Y, PadMask::GC_Y),
    (GcButtons::UP, PadMask::GC_UP),
    (GcButtons::DOWN, PadMask::GC_DOWN),
    (GcButtons::LEFT, PadMask::GC_LEFT),
    (GcButtons::RIGHT, PadMask::GC_RIGHT),
    (GcButtons::START, PadMask::GC_START),
    (GcButtons::Z, PadMask::GC_Z_TRIGGER),
];

const WIIMOTE_BUTTONS: [(WiimoteButtons, PadMask); 7] = [
    (WiimoteButtons::A, PadMask::WIIMOTE_A),
    (WiimoteButtons::B, PadMask::WIIMOTE_B),
    (WiimoteButtons::ONE, PadMask::WIIMOTE_1),
    (WiimoteButtons::TWO, PadMask::WIIMOTE_2),
    (WiimoteButtons::PLUS, PadMask::WIIMOTE_PLUS),
    (WiimoteButtons::MINUS, PadMask::WIIMOTE_MINUS),
    (WiimoteButtons::HOME, PadMask::WIIMOTE_HOME),
];

/// Wiimote d-pad held sideways: the pad's up is the player's left
const WIIMOTE_DPAD_SIDEWAYS: [(WiimoteButtons, PadMask); 4] = [
    (WiimoteButtons::UP, PadMask::WIIMOTE_LEFT),
    (WiimoteButtons::DOWN, PadMask::WIIMOTE_RIGHT),
    (WiimoteButtons::LEFT, PadMask::WIIMOTE_DOWN),
    (WiimoteButtons::RIGHT, PadMask::WIIMOTE_UP),
];

/// Wiimote d-pad held upright (Nunchuk attached)
const WIIMOTE_DPAD_UPRIGHT: [(WiimoteButtons, PadMask); 4] = [
    (WiimoteButtons::UP, PadMask::WIIMOTE_UP),
    (WiimoteButtons::DOWN, PadMask::WIIMOTE_DOWN),
    (WiimoteButtons::LEFT, PadMask::WIIMOTE_LEFT),
    (WiimoteButtons::RIGHT, PadMask::WIIMOTE_RIGHT),
];

const NUNCHUK_BUTTONS: [(NunchukButtons, PadMask); 2] = [
    (NunchukButtons::Z, PadMask::NUNCHUK_Z),
    (NunchukButtons::C, PadMask::NUNCHUK_C),
];

const CLASSIC_BUTTONS: [(ClassicButtons, PadMask); 15] = [
    (ClassicButtons::A, PadMask::CLASSIC_A),
    (ClassicButtons::B, PadMask::CLASSIC_B),
    (ClassicButtons::X, PadMask::CLASSIC_X),
    (ClassicButtons::Y, PadMask::CLASSIC_Y),
    (ClassicButtons::UP, PadMask::CLASSIC_UP),
    (ClassicButtons::DOWN, PadMask::CLASSIC_DOWN),
    (ClassicButtons::LEFT, PadMask::CLASSIC_LEFT),
    (ClassicButtons::RIGHT, PadMask::CLASSIC_RIGHT),
    (ClassicButtons::PLUS, PadMask::CLASSIC_PLUS),
    (ClassicButtons::MINUS, PadMask::CLASSIC_MINUS),
    (ClassicButtons::HOME, PadMask::CLASSIC_HOME),
    (ClassicButtons::FULL_L, PadMask::CLASSIC_L_TRIGGER),
    (ClassicButtons::FULL_R, PadMask::CLASSIC_R_TRIGGER),
    (ClassicButtons::ZL, PadMask::CLASSIC_ZL_TRIGGER),
    (ClassicButtons::ZR, PadMask::CLASSIC_ZR_TRIGGER),
];

/// Wiimote Home + B
const WIIMOTE_QUIT_GESTURE: PadMask = PadMask::WIIMOTE_HOME.union(PadMask::WIIMOTE_B);

/// Classic Home + ZL + ZR
const CLASSIC_QUIT_GESTURE: PadMask = PadMask::CLASSIC_HOME
    .union(PadMask::CLASSIC_ZL_TRIGGER)
    .union(PadMask::CLASSIC_ZR_TRIGGER);

/// Both GameCube sticks down with L and R held
const GC_QUIT_GESTURE: PadMask = PadMask::GC_LSTICK_DOWN
    .union(PadMask::GC_RSTICK_DOWN)
    .union(PadMask::GC_L_TRIGGER)
    .union(PadMask::GC_R_TRIGGER);

/// Both GameCube sticks up with L and R held
const GC_MENU_GESTURE: PadMask = PadMask::GC_LSTICK_UP
    .union(PadMask::GC_RSTICK_UP)
    .union(PadMask::GC_L_TRIGGER)
    .union(PadMask::GC_R_TRIGGER);

fn map_buttons<B>(held: B, table: &[(B, PadMask)]) -> PadMask
where
    B: bitflags::Flags + Copy,
{
    table
        .iter()
        .filter(|(flag, _)| held.contains(*flag))
        .fold(PadMask::empty(), |mask, (_, bit)| mask | *bit)
}

fn stick_mask(stick: AnalogStick, threshold: i8, bits: DirectionBits) -> PadMask {
    digitize_stick(stick, threshold).to_mask(bits)
}

/// Translate one port's raw sample into a fresh semantic mask
pub fn canonicalize(sample: &RawSample) -> PadMask {
    let mut mask = PadMask::empty();

    if let Some(remote) = &sample.wiimote {
        mask |= canonicalize_wiimote(remote);
    }
    if let Some(pad) = &sample.gamecube {
        mask |= canonicalize_gamecube(pad);
    }

    mask
}

/// GameCube controller bits
pub fn canonicalize_gamecube(pad: &GcPadSample) -> PadMask {
    let mut mask = map_buttons(pad.buttons, &GC_BUTTONS);

    mask.set(
        PadMask::GC_L_TRIGGER,
        trigger_pressed(pad.buttons.contains(GcButtons::L), pad.trigger_l),
    );
    mask.set(
        PadMask::GC_R_TRIGGER,
        trigger_pressed(pad.buttons.contains(GcButtons::R), pad.trigger_r),
    );

    mask |= stick_mask(pad.main_stick, GC_STICK_THRESHOLD, PadMask::GC_LSTICK);
    mask |= stick_mask(pad.c_stick, GC_STICK_THRESHOLD, PadMask::GC_RSTICK);

    if mask.contains(GC_QUIT_GESTURE) {
        mask |= PadMask::QUIT;
    }
    if mask.contains(GC_MENU_GESTURE) {
        mask |= PadMask::MENU;
    }

    mask
}

/// Wiimote bits plus those of its extension
pub fn canonicalize_wiimote(remote: &WiimoteSample) -> PadMask {
    let mut mask = map_buttons(remote.buttons, &WIIMOTE_BUTTONS);

    let dpad = match remote.extension {
        Extension::Nunchuk(_) => &WIIMOTE_DPAD_UPRIGHT,
        Extension::None | Extension::Classic(_) => &WIIMOTE_DPAD_SIDEWAYS,
    };
    mask |= map_buttons(remote.buttons, dpad);

    if mask.contains(WIIMOTE_QUIT_GESTURE) {
        mask |= PadMask::QUIT;
    }

    match &remote.extension {
        Extension::None => {}
        Extension::Nunchuk(nunchuk) => mask |= canonicalize_nunchuk(nunchuk),
        Extension::Classic(classic) => mask |= canonicalize_classic(classic),
    }

    mask
}

fn canonicalize_nunchuk(nunchuk: &NunchukSample) -> PadMask {
    map_buttons(nunchuk.buttons, &NUNCHUK_BUTTONS)
        | stick_mask(nunchuk.stick, WII_STICK_THRESHOLD, PadMask::NUNCHUK_STICK)
}

fn canonicalize_classic(classic: &ClassicSample) -> PadMask {
    let mut mask = map_buttons(classic.buttons, &CLASSIC_BUTTONS);

    if mask.contains(CLASSIC_QUIT_GESTURE) {
        mask |= PadMask::QUIT;
    }

    mask |= stick_mask(classic.left_stick, WII_STICK_THRESHOLD, PadMask::CLASSIC_LSTICK);
    mask |= stick_mask(classic.right_stick, WII_STICK_THRESHOLD, PadMask::CLASSIC_RSTICK);
    mask
}
