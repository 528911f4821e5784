//! Combo detection on port 0
//!
//! Turns the port-0 mask into lifecycle actions once per tick. Combo
//! expressions are level-sensitive: holding a gesture keeps its action
//! pending for every tick it is held.

use crate::lifecycle::{LifecycleAction, LifecycleState};
use crate::mask::PadMask;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-shot flag raised from outside the poll loop
///
/// Clones share the same flag, so the platform layer can hold one end and
/// the driver the other.
#[derive(Debug, Clone, Default)]
pub struct SignalLatch {
    raised: Arc<AtomicBool>,
}

impl SignalLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the signal; repeated raises before the next poll collapse into one
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Consume the signal, returning whether it was raised
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::AcqRel)
    }
}

/// Reset and power requests from the host platform
#[derive(Debug, Clone, Default)]
pub struct PlatformSignals {
    /// Reset button; opens the menu
    pub reset: SignalLatch,
    /// Power button; quits
    pub power: SignalLatch,
}

impl PlatformSignals {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Stick direction and trigger that make up one combo source
struct ComboSource {
    up: PadMask,
    down: PadMask,
    left: PadMask,
    right: PadMask,
    trigger: PadMask,
}

/// GameCube C-stick with Z, and the Classic right stick with ZR
const COMBO_SOURCES: [ComboSource; 2] = [
    ComboSource {
        up: PadMask::GC_RSTICK_UP,
        down: PadMask::GC_RSTICK_DOWN,
        left: PadMask::GC_RSTICK_LEFT,
        right: PadMask::GC_RSTICK_RIGHT,
        trigger: PadMask::GC_Z_TRIGGER,
    },
    ComboSource {
        up: PadMask::CLASSIC_RSTICK_UP,
        down: PadMask::CLASSIC_RSTICK_DOWN,
        left: PadMask::CLASSIC_RSTICK_LEFT,
        right: PadMask::CLASSIC_RSTICK_RIGHT,
        trigger: PadMask::CLASSIC_ZR_TRIGGER,
    },
];

impl ComboSource {
    fn actions(&self, mask: PadMask) -> [(LifecycleAction, bool); 6] {
        let held = |bit: PadMask| mask.contains(bit);
        let trigger = held(self.trigger);
        [
            (LifecycleAction::FastForwardHold, held(self.down) && !trigger),
            (LifecycleAction::LoadState, held(self.up) && trigger),
            (LifecycleAction::SaveState, held(self.down) && trigger),
            (LifecycleAction::StateSlotPlus, held(self.right) && trigger),
            (LifecycleAction::StateSlotMinus, held(self.left) && trigger),
            (LifecycleAction::Rewind, held(self.up) && !trigger),
        ]
    }
}

/// Bits that open the menu
const MENU_BITS: PadMask = PadMask::MENU
    .union(PadMask::WIIMOTE_HOME)
    .union(PadMask::CLASSIC_HOME);

/// Port-0 combo detector
#[derive(Debug, Clone, Default)]
pub struct ComboDetector {
    signals: PlatformSignals,
}

impl ComboDetector {
    /// Create a detector with its own platform signals
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector listening to existing platform signals
    pub fn with_signals(signals: PlatformSignals) -> Self {
        Self { signals }
    }

    /// Handle the platform layer raises requests on
    pub fn signals(&self) -> &PlatformSignals {
        &self.signals
    }

    /// Rewrite the lifecycle action bits from the port-0 mask
    ///
    /// Raised platform latches are consumed here and folded into `port0` as
    /// the `MENU` and `QUIT` bits, so running the detector twice on the same
    /// mask gives the same result. Quit and menu only reach `lifecycle` once
    /// `frame` has reached `startup_delay`; a latch consumed earlier is lost.
    pub fn detect(
        &self,
        port0: &mut PadMask,
        frame: u64,
        startup_delay: u64,
        lifecycle: &mut LifecycleState,
    ) {
        lifecycle.clear_combo_bits();

        for source in &COMBO_SOURCES {
            for (action, active) in source.actions(*port0) {
                lifecycle.set_if(action, active);
            }
        }

        if self.signals.reset.take() {
            tracing::debug!("Reset request consumed at frame {}", frame);
            port0.insert(PadMask::MENU);
        }
        if self.signals.power.take() {
            tracing::debug!("Power request consumed at frame {}", frame);
            port0.insert(PadMask::QUIT);
        }

        if frame < startup_delay {
            return;
        }

        if port0.contains(PadMask::QUIT) {
            lifecycle.set(LifecycleAction::Quit);
        }
        if port0.intersects(MENU_BITS) {
            lifecycle.set(LifecycleAction::MenuToggle);
            lifecycle.set(LifecycleAction::Quit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(mask: PadMask) -> LifecycleState {
        let mut mask = mask;
        let mut state = LifecycleState::new();
        ComboDetector::new().detect(&mut mask, 0, 0, &mut state);
        state
    }

    fn only(action: LifecycleAction) -> LifecycleState {
        let mut state = LifecycleState::new();
        state.set(action);
        state
    }

    #[test]
    fn test_gamecube_combos() {
        let z = PadMask::GC_Z_TRIGGER;
        assert_eq!(detect(PadMask::GC_RSTICK_DOWN), only(LifecycleAction::FastForwardHold));
        assert_eq!(detect(PadMask::GC_RSTICK_UP | z), only(LifecycleAction::LoadState));
        assert_eq!(detect(PadMask::GC_RSTICK_DOWN | z), only(LifecycleAction::SaveState));
        assert_eq!(detect(PadMask::GC_RSTICK_RIGHT | z), only(LifecycleAction::StateSlotPlus));
        assert_eq!(detect(PadMask::GC_RSTICK_LEFT | z), only(LifecycleAction::StateSlotMinus));
        assert_eq!(detect(PadMask::GC_RSTICK_UP), only(LifecycleAction::Rewind));
    }

    #[test]
    fn test_classic_combos() {
        let zr = PadMask::CLASSIC_ZR_TRIGGER;
        assert_eq!(detect(PadMask::CLASSIC_RSTICK_DOWN), only(LifecycleAction::FastForwardHold));
        assert_eq!(detect(PadMask::CLASSIC_RSTICK_UP | zr), only(LifecycleAction::LoadState));
        assert_eq!(detect(PadMask::CLASSIC_RSTICK_LEFT | zr), only(LifecycleAction::StateSlotMinus));
    }

    #[test]
    fn test_trigger_from_other_family_does_not_count() {
        let state = detect(PadMask::GC_RSTICK_UP | PadMask::CLASSIC_ZR_TRIGGER);
        assert_eq!(state, only(LifecycleAction::Rewind));
    }

    #[test]
    fn test_families_are_ored() {
        let state = detect(PadMask::GC_RSTICK_UP | PadMask::CLASSIC_RSTICK_DOWN);
        assert!(state.is_pending(LifecycleAction::Rewind));
        assert!(state.is_pending(LifecycleAction::FastForwardHold));
    }

    #[test]
    fn test_trigger_alone_does_nothing() {
        assert_eq!(detect(PadMask::GC_Z_TRIGGER), LifecycleState::new());
        assert_eq!(detect(PadMask::empty()), LifecycleState::new());
    }

    #[test]
    fn test_actions_cleared_each_tick() {
        let detector = ComboDetector::new();
        let mut state = LifecycleState::from_bits(1 << 20);

        let mut mask = PadMask::GC_RSTICK_UP | PadMask::GC_Z_TRIGGER;
        detector.detect(&mut mask, 0, 0, &mut state);
        assert!(state.is_pending(LifecycleAction::LoadState));

        let mut mask = PadMask::empty();
        detector.detect(&mut mask, 1, 0, &mut state);
        assert!(!state.is_pending(LifecycleAction::LoadState));
        assert!(state.is_bit_set(20));
    }

    #[test]
    fn test_level_sensitive() {
        let detector = ComboDetector::new();
        let mut state = LifecycleState::new();
        for frame in 0..3 {
            let mut mask = PadMask::GC_RSTICK_DOWN | PadMask::GC_Z_TRIGGER;
            detector.detect(&mut mask, frame, 0, &mut state);
            assert!(state.is_pending(LifecycleAction::SaveState));
        }
    }

    #[test]
    fn test_quit_gated_by_startup_delay() {
        let detector = ComboDetector::new();
        let mut state = LifecycleState::new();

        let mut mask = PadMask::QUIT;
        detector.detect(&mut mask, 59, 60, &mut state);
        assert!(!state.is_pending(LifecycleAction::Quit));

        detector.detect(&mut mask, 60, 60, &mut state);
        assert!(state.is_pending(LifecycleAction::Quit));
        assert!(!state.is_pending(LifecycleAction::MenuToggle));
    }

    #[test]
    fn test_combos_not_gated() {
        let detector = ComboDetector::new();
        let mut state = LifecycleState::new();
        let mut mask = PadMask::GC_RSTICK_UP;
        detector.detect(&mut mask, 0, 100, &mut state);
        assert!(state.is_pending(LifecycleAction::Rewind));
    }

    #[test]
    fn test_home_sets_menu_and_quit() {
        for bit in [PadMask::MENU, PadMask::WIIMOTE_HOME, PadMask::CLASSIC_HOME] {
            let state = detect(bit);
            assert!(state.is_pending(LifecycleAction::MenuToggle), "{:?}", bit);
            assert!(state.is_pending(LifecycleAction::Quit), "{:?}", bit);
            assert!(!state.is_pending(LifecycleAction::QuickMenuToggle));
        }
    }

    #[test]
    fn test_reset_latch_fires_once() {
        let detector = ComboDetector::new();
        let signals = detector.signals().clone();
        let mut state = LifecycleState::new();

        signals.reset.raise();
        signals.reset.raise();

        let mut mask = PadMask::empty();
        detector.detect(&mut mask, 10, 0, &mut state);
        assert!(mask.contains(PadMask::MENU));
        assert!(state.is_pending(LifecycleAction::MenuToggle));
        assert!(!signals.reset.is_raised());

        let mut mask = PadMask::empty();
        detector.detect(&mut mask, 11, 0, &mut state);
        assert_eq!(mask, PadMask::empty());
        assert!(!state.is_pending(LifecycleAction::MenuToggle));
    }

    #[test]
    fn test_power_latch_quits() {
        let detector = ComboDetector::new();
        detector.signals().power.raise();

        let mut mask = PadMask::empty();
        let mut state = LifecycleState::new();
        detector.detect(&mut mask, 0, 0, &mut state);
        assert!(mask.contains(PadMask::QUIT));
        assert_eq!(state, only(LifecycleAction::Quit));
    }

    #[test]
    fn test_latch_consumed_during_grace_period() {
        let detector = ComboDetector::new();
        detector.signals().power.raise();

        let mut state = LifecycleState::new();
        let mut mask = PadMask::empty();
        detector.detect(&mut mask, 0, 30, &mut state);
        assert!(!state.is_pending(LifecycleAction::Quit));
        assert!(!detector.signals().power.is_raised());
    }

    #[test]
    fn test_detect_idempotent() {
        let detector = ComboDetector::new();
        detector.signals().reset.raise();

        let mut mask = PadMask::GC_RSTICK_RIGHT | PadMask::GC_Z_TRIGGER;
        let mut first = LifecycleState::new();
        detector.detect(&mut mask, 5, 0, &mut first);

        let mut second = first;
        detector.detect(&mut mask, 5, 0, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_signals() {
        let signals = PlatformSignals::new();
        let detector = ComboDetector::with_signals(signals.clone());
        signals.power.raise();
        assert!(detector.signals().power.is_raised());
    }
}
