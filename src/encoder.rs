//! Cycle-accurate bit emission.
//!
//! Walks the wire byte stream most-significant bit first and times every
//! line transition against the cycle counter. Each bit occupies one fixed
//! slot: the line goes high at the slot boundary and drops after the 0-bit
//! or 1-bit high time; the low tail is whatever remains of the slot, enforced
//! by the next slot's boundary wait. Aligning on slot boundaries rather than
//! waiting out the low phase directly is what keeps bit-to-bit jitter low:
//! byte fetch and scaling overhead is absorbed by the boundary wait instead
//! of stretching the frame.
//!
//! Timing is best-effort: a wait entered after its deadline has passed exits
//! immediately and silently shortens that phase. Late slot starts are counted
//! and reported, never raised as errors; an error path inside the loop would
//! itself break the timing.
//!
//! The caller runs this inside a critical section with the counter freshly
//! restarted; interrupts firing mid-frame corrupt the waveform.

use crate::platform::{CycleCounter, DataPin};
use crate::timing::SlotTiming;

/// Emit one frame of wire bytes. Returns the number of late slot starts.
///
/// After the last bit the line is held low for one full slot, so it is
/// guaranteed low before the latch gap begins.
pub fn encode_frame<C, P>(
    bytes: impl Iterator<Item = u8>,
    timing: SlotTiming,
    counter: &mut C,
    pin: &mut P,
) -> u32
where
    C: CycleCounter,
    P: DataPin,
{
    let total_slot = timing.total_slot;
    let mut overruns: u32 = 0;
    // Seed so the first slot starts without waiting.
    let mut slot_start = counter.count().wrapping_sub(total_slot);
    let mut first_slot = true;

    for byte in bytes {
        let mut mask: u8 = 0x80;
        while mask != 0 {
            if first_slot {
                first_slot = false;
            } else if counter.count().wrapping_sub(slot_start) >= total_slot {
                // Deadline already passed; the boundary wait below is a
                // no-op and the previous low tail ran long.
                overruns = overruns.saturating_add(1);
            }
            while counter.count().wrapping_sub(slot_start) < total_slot {}
            slot_start = counter.count();
            pin.set_high();
            let high = if byte & mask != 0 {
                timing.one_high
            } else {
                timing.zero_high
            };
            while counter.count().wrapping_sub(slot_start) < high {}
            pin.set_low();
            mask >>= 1;
        }
    }

    // Hold the line low through the final slot.
    while counter.count().wrapping_sub(slot_start) < total_slot {}

    overruns
}
