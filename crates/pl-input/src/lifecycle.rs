//! Session lifecycle bits
//!
//! A 64-bit word shared with the frontend. Polling owns the nine action bits
//! below and rewrites them every tick; all other bits belong to the frontend
//! and are left as found.

/// Session-level action raised by a controller gesture
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleAction {
    FastForwardHold = 0,
    LoadState = 1,
    SaveState = 2,
    StateSlotPlus = 3,
    StateSlotMinus = 4,
    Rewind = 5,
    Quit = 6,
    MenuToggle = 7,
    QuickMenuToggle = 8,
}

impl LifecycleAction {
    pub const ALL: [LifecycleAction; 9] = [
        LifecycleAction::FastForwardHold,
        LifecycleAction::LoadState,
        LifecycleAction::SaveState,
        LifecycleAction::StateSlotPlus,
        LifecycleAction::StateSlotMinus,
        LifecycleAction::Rewind,
        LifecycleAction::Quit,
        LifecycleAction::MenuToggle,
        LifecycleAction::QuickMenuToggle,
    ];

    /// Bit position in the lifecycle word
    pub fn bit(self) -> u32 {
        self as u32
    }

    fn mask(self) -> u64 {
        1 << self.bit()
    }

    pub fn from_bit(bit: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.bit() == bit)
    }
}

/// Bits rewritten by every poll
const COMBO_BITS: u64 = 0x1FF;

/// Pending lifecycle actions for the current tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LifecycleState(u64);

impl LifecycleState {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn is_pending(&self, action: LifecycleAction) -> bool {
        self.0 & action.mask() != 0
    }

    /// Raw bit query; ids past the word are never set
    pub fn is_bit_set(&self, id: u32) -> bool {
        id < u64::BITS && self.0 & (1 << id) != 0
    }

    pub fn set(&mut self, action: LifecycleAction) {
        self.0 |= action.mask();
    }

    pub fn set_if(&mut self, action: LifecycleAction, condition: bool) {
        if condition {
            self.set(action);
        }
    }

    /// Drop every action bit, keeping frontend-owned bits
    pub fn clear_combo_bits(&mut self) {
        self.0 &= !COMBO_BITS;
    }

    /// Set frontend-owned bits
    pub fn insert_bits(&mut self, bits: u64) {
        self.0 |= bits;
    }

    /// Clear frontend-owned bits
    pub fn remove_bits(&mut self, bits: u64) {
        self.0 &= !bits;
    }

    /// Iterate pending actions in bit order
    pub fn pending(&self) -> impl Iterator<Item = LifecycleAction> + '_ {
        LifecycleAction::ALL
            .iter()
            .copied()
            .filter(move |a| self.is_pending(*a))
    }
}
