//! Inter-frame latch gap enforcement.
//!
//! WS281x parts treat a sustained low of 50 us or more as end-of-frame and
//! latch the received values. Starting the next frame earlier corrupts the
//! display, so the driver holds off until the gap has elapsed. The hold-off
//! runs *before* interrupts are disabled, and is a busy-wait: the required
//! resolution is below anything a scheduler sleep can provide.

use embassy_time::{Duration, Instant};

use crate::platform::HostClock;

/// Minimum idle time after a frame before the strip latches.
pub const LATCH_DURATION: Duration = Duration::from_micros(50);

/// Tracks the earliest moment the next transmission may begin.
///
/// A fresh gate never blocks, so the first transmission starts immediately.
/// Because the caller can prepare the next frame while the gap runs down,
/// [`wait`](Self::wait) is frequently a no-op in practice.
#[derive(Debug, Clone, Copy)]
pub struct LatchGate {
    deadline: Instant,
}

impl LatchGate {
    /// Create a gate whose first wait returns immediately.
    pub const fn new() -> Self {
        Self {
            deadline: Instant::from_micros(0),
        }
    }

    /// Busy-wait until the latch gap since the previous frame has elapsed.
    pub fn wait<K: HostClock>(&self, clock: &K) {
        while clock.now() < self.deadline {}
    }

    /// Record a frame end; the next wait releases `LATCH_DURATION` later.
    pub fn arm(&mut self, frame_end: Instant) {
        self.deadline = frame_end + LATCH_DURATION;
    }

    /// The instant the gate currently releases at.
    pub const fn deadline(&self) -> Instant {
        self.deadline
    }
}

impl Default for LatchGate {
    fn default() -> Self {
        Self::new()
    }
}
