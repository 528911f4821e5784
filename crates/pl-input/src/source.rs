//! Raw sample sources
//!
//! The hardware polling layer lives outside this crate. It plugs in through
//! these traits: `scan` is called once per tick, then `read` once per port.

use crate::sample::{GcPadSample, RawSample, WiimoteSample};
use parking_lot::Mutex;
use pl_core::MAX_PADS;
use std::sync::Arc;

/// GameCube controller source
pub trait PadSource: Send {
    /// Bring up the controller hardware
    fn init(&mut self) {}

    /// Latch fresh samples for every port
    fn scan(&mut self);

    /// Sample for a port; `None` if nothing is connected
    fn read(&self, port: usize) -> Option<GcPadSample>;

    /// Release the controller hardware
    fn shutdown(&mut self) {}
}

/// Wiimote-family source
pub trait RemoteSource: Send {
    /// Whether motion controllers can be read at all
    fn is_available(&self) -> bool {
        true
    }

    fn init(&mut self) {}

    fn scan(&mut self);

    fn read(&self, port: usize) -> Option<WiimoteSample>;

    fn shutdown(&mut self) {}
}

/// Remote source used when motion controller support is off
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemotes;

impl RemoteSource for NoRemotes {
    fn is_available(&self) -> bool {
        false
    }

    fn scan(&mut self) {}

    fn read(&self, _port: usize) -> Option<WiimoteSample> {
        None
    }
}

/// In-memory source fed by the host
///
/// Clones share the same slots: keep one handle to push samples and give
/// another to the driver as both its pad and remote source.
#[derive(Debug, Clone, Default)]
pub struct SampleFeed {
    slots: Arc<Mutex<[RawSample; MAX_PADS]>>,
}

impl SampleFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a port's sample; out-of-range ports are ignored
    pub fn set(&self, port: usize, sample: RawSample) {
        if let Some(slot) = self.slots.lock().get_mut(port) {
            *slot = sample;
        }
    }

    /// Mark every port as disconnected
    pub fn clear(&self) {
        *self.slots.lock() = [RawSample::disconnected(); MAX_PADS];
    }

    pub fn get(&self, port: usize) -> RawSample {
        self.slots.lock().get(port).copied().unwrap_or_default()
    }
}

impl PadSource for SampleFeed {
    fn scan(&mut self) {}

    fn read(&self, port: usize) -> Option<GcPadSample> {
        self.get(port).gamecube
    }
}

impl RemoteSource for SampleFeed {
    fn scan(&mut self) {}

    fn read(&self, port: usize) -> Option<WiimoteSample> {
        self.get(port).wiimote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{GcButtons, WiimoteButtons};

    #[test]
    fn test_no_remotes() {
        let mut remotes = NoRemotes;
        remotes.init();
        remotes.scan();
        assert!(!remotes.is_available());
        assert_eq!(remotes.read(0), None);
    }

    #[test]
    fn test_feed_shared_between_clones() {
        let host = SampleFeed::new();
        let driver_side = host.clone();

        let pad = GcPadSample {
            buttons: GcButtons::A,
            ..Default::default()
        };
        host.set(2, RawSample::with_gamecube(pad));

        assert_eq!(PadSource::read(&driver_side, 2), Some(pad));
        assert_eq!(RemoteSource::read(&driver_side, 2), None);
        assert_eq!(PadSource::read(&driver_side, 0), None);
    }

    #[test]
    fn test_feed_out_of_range() {
        let feed = SampleFeed::new();
        feed.set(MAX_PADS, RawSample::with_gamecube(GcPadSample::default()));
        assert_eq!(feed.get(MAX_PADS), RawSample::disconnected());
    }

    #[test]
    fn test_feed_clear() {
        let feed = SampleFeed::new();
        let remote = WiimoteSample {
            buttons: WiimoteButtons::HOME,
            ..Default::default()
        };
        feed.set(1, RawSample::with_wiimote(remote));
        assert!(RemoteSource::is_available(&feed));
        assert_eq!(RemoteSource::read(&feed, 1), Some(remote));

        feed.clear();
        assert_eq!(RemoteSource::read(&feed, 1), None);
    }
}
