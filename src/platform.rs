//! Hardware seams the driver is generic over.
//!
//! Implement these traits to support different hardware platforms. The bit
//! emission algorithm in [`encoder`](crate::encoder) is written once against
//! them; adding an MCU never touches it. Tests substitute host-side fakes.

use embassy_time::{Duration, Instant};

/// The single GPIO line driving the strip.
///
/// `set_high` and `set_low` sit inside the cycle-accurate emission loop and
/// must compile down to single register writes: no read-back, no debouncing,
/// no error bookkeeping.
pub trait DataPin {
    /// Configure the line as an output, driven low.
    fn configure_output(&mut self);

    /// Return the line to a high-impedance input state.
    ///
    /// Called before a replacement pin is configured so two lines are never
    /// driven at once.
    fn release(&mut self);

    /// Assert the line high.
    fn set_high(&mut self);

    /// Assert the line low.
    fn set_low(&mut self);
}

/// Monotonic per-CPU-cycle counter for sub-microsecond waits.
///
/// The counter may wrap during a frame; all consumers compare elapsed cycles
/// with wrapping arithmetic.
pub trait CycleCounter {
    /// Arm the counter and reset it to zero at transmission start.
    fn restart(&mut self);

    /// Current counter value.
    fn count(&self) -> u32;
}

/// The host's elapsed-time clock.
///
/// Reads feed the latch gate; [`credit`](Self::credit) is the direct
/// tick-counter write used by clock correction, bypassing the normal
/// interrupt-driven increment (which cannot fire during a transmission).
pub trait HostClock {
    /// Current host time, at microsecond resolution.
    fn now(&self) -> Instant;

    /// Advance the host tick counter by `elapsed`, as a direct write.
    fn credit(&mut self, elapsed: Duration);
}
