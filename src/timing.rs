//! Per-profile timing constants.
//!
//! Every supported bit rate maps the host CPU clock to three cycle counts:
//! the length of one bit slot and the high time encoding a 0 or 1 bit. They
//! are derived once at construction and never change afterwards.

use crate::color::ColorOrder;

/// Bit rate class of the strip's datastream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitRate {
    /// 400 kHz datastream (first-generation WS2811 parts).
    Khz400,
    /// 800 kHz datastream (WS2812 and later).
    Khz800,
}

/// Protocol profile: bit rate class plus wire color order.
///
/// Selected at construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub bit_rate: BitRate,
    pub order: ColorOrder,
}

impl Profile {
    /// The common WS2812 profile: 800 kHz, green-first wire order.
    pub const WS2812: Self = Self {
        bit_rate: BitRate::Khz800,
        order: ColorOrder::Grb,
    };
}

/// Error returned when no usable timing row exists for a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// CPU clock below 1 MHz; cycles cannot be converted to microseconds.
    ClockTooSlow,
    /// Derived cycle counts violate `0 < zero_high < one_high < total_slot`.
    ///
    /// The clock is too slow for the requested bit rate to leave any margin
    /// for the wait loops.
    InvalidTiming,
}

/// Cycle-count constants for one bit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTiming {
    /// Total duration of one bit slot.
    pub total_slot: u32,
    /// High time encoding a 0 bit.
    pub zero_high: u32,
    /// High time encoding a 1 bit.
    pub one_high: u32,
}

impl SlotTiming {
    /// Derive the cycle constants for a bit rate on a given CPU clock.
    ///
    /// The divisors are the WS281x datasheet pulse widths: at 800 kHz a slot
    /// is 1.25 us with 0.40 us / 0.80 us high times, at 400 kHz a slot is
    /// 2.5 us with 0.50 us / 1.20 us high times.
    pub const fn for_clock(clock_hz: u32, bit_rate: BitRate) -> Result<Self, ConfigError> {
        if clock_hz < 1_000_000 {
            return Err(ConfigError::ClockTooSlow);
        }
        let timing = match bit_rate {
            BitRate::Khz800 => Self {
                total_slot: clock_hz / 800_000,
                zero_high: clock_hz / 2_500_000,
                one_high: clock_hz / 1_250_000,
            },
            BitRate::Khz400 => Self {
                total_slot: clock_hz / 400_000,
                zero_high: clock_hz / 2_000_000,
                one_high: clock_hz / 833_333,
            },
        };
        if timing.is_valid() {
            Ok(timing)
        } else {
            Err(ConfigError::InvalidTiming)
        }
    }

    /// Check the slot ordering invariant.
    ///
    /// A 0 bit must be strictly shorter than a 1 bit, and both must leave
    /// room for the low tail of the slot.
    pub const fn is_valid(self) -> bool {
        0 < self.zero_high && self.zero_high < self.one_high && self.one_high < self.total_slot
    }
}
