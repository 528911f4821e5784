//! Controller input translation for padlink
//!
//! This crate turns raw GameCube and Wiimote-family samples into per-port
//! semantic masks, resolves logical joypad buttons through a binding table,
//! and detects the port-0 gestures that drive session lifecycle actions.

pub mod analog;
pub mod binds;
pub mod canonicalize;
pub mod catalog;
pub mod combo;
pub mod driver;
pub mod lifecycle;
pub mod mask;
pub mod sample;
pub mod settings;
pub mod source;

pub use binds::{BindTable, JoypadButton, JOYPAD_BUTTON_COUNT, UNBOUND};
pub use canonicalize::canonicalize;
pub use catalog::{PlatformBind, PLATFORM_BINDS, PLATFORM_BIND_COUNT};
pub use combo::{ComboDetector, PlatformSignals, SignalLatch};
pub use driver::{DeviceKind, InputDriver, InputHub, InputState};
pub use lifecycle::{LifecycleAction, LifecycleState};
pub use mask::{DirectionBits, PadMask};
pub use sample::{
    AnalogStick, ClassicButtons, ClassicSample, Extension, GcButtons, GcPadSample,
    NunchukButtons, NunchukSample, RawSample, WiimoteButtons, WiimoteSample,
};
pub use settings::{InputSettings, PortSettings, SharedSettings};
pub use source::{NoRemotes, PadSource, RemoteSource, SampleFeed};
