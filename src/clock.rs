//! Host clock correction.
//!
//! The host's millisecond counter normally advances from a periodic timer
//! interrupt. That interrupt cannot fire while a frame is transmitted with
//! interrupts disabled, so without correction the clock would fall behind by
//! the full transmission time on every frame (over a millisecond for long
//! strips). The driver measures the frame in CPU cycles and credits the
//! whole-millisecond equivalent straight to the tick counter.

use embassy_time::Duration;

/// Convert a cycle count consumed under disabled interrupts into the
/// duration to credit to the host tick counter.
///
/// `cycles_per_micro` is the CPU clock in MHz (`clock_hz / 1_000_000`). The
/// credit is floored to whole milliseconds; the sub-millisecond remainder of
/// each frame is dropped rather than carried, so heavy frame traffic loses up
/// to one millisecond of wall time per frame in the long run. This matches
/// the reference behavior exactly and keeps the correction a single counter
/// write.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn millis_credit(cycles: u32, cycles_per_micro: u32) -> Duration {
    let micros_taken = (cycles / cycles_per_micro) as u64;
    Duration::from_millis(micros_taken / 1000)
}
