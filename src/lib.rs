//! padlink - controller input translation layer
//!
//! Re-exports the configuration and logging support from `pl-core` and the
//! input pipeline from `pl-input`. Most hosts only need the prelude:
//!
//! ```
//! use padlink::prelude::*;
//!
//! let feed = SampleFeed::new();
//! let mut hub = InputHub::from_config(
//!     &InputConfig::default(),
//!     Box::new(feed.clone()),
//!     Some(Box::new(feed.clone())),
//! )
//! .unwrap();
//! hub.post_init().unwrap();
//!
//! feed.set(0, RawSample::with_gamecube(GcPadSample {
//!     buttons: GcButtons::START,
//!     ..Default::default()
//! }));
//! hub.poll();
//!
//! assert!(hub.is_button_pressed(0, DeviceKind::Joypad, JoypadButton::Start.id()));
//! assert!(!hub.is_action_pending(LifecycleAction::Quit.bit()));
//! ```

pub use pl_core as core;
pub use pl_input as input;

pub mod prelude {
    pub use pl_core::{
        Config, DeviceClass, DpadEmulation, InputConfig, LogLevel, PadError, Result, MAX_PADS,
    };
    pub use pl_input::{
        AnalogStick, DeviceKind, Extension, GcButtons, GcPadSample, InputDriver, InputHub,
        JoypadButton, LifecycleAction, PadMask, PadSource, PlatformSignals, RawSample,
        RemoteSource, SampleFeed, WiimoteButtons, WiimoteSample,
    };
}
