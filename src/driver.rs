//! Strip driver - the composition root.
//!
//! Owns the pixel buffer and the platform parts, and sequences one frame:
//! latch wait, critical section, bit emission, clock credit, latch re-arm.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use embassy_time::{Duration, Instant};

use crate::buffer::{OutOfRange, PixelBuffer};
use crate::color::{Rgb, scale8, unpack_color};
use crate::encoder::encode_frame;
use crate::latch::LatchGate;
use crate::platform::{CycleCounter, DataPin, HostClock};
use crate::timing::{ConfigError, Profile, SlotTiming};

/// Diagnostics from one transmission.
///
/// Timing violations are inherent to the best-effort busy-wait model and are
/// reported here rather than as errors; a corrupted frame is simply redrawn
/// by the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowReport {
    /// CPU cycles consumed while interrupts were disabled.
    pub cycles: u32,
    /// Bit slots whose boundary deadline had already passed on entry.
    pub overruns: u32,
}

/// Driver for one strip of `N` LEDs on a single data line.
///
/// `P`, `C` and `K` are the platform seams from [`platform`](crate::platform).
/// The buffer starts all black; stored colors are unscaled and brightness is
/// applied on the wire only.
pub struct StripDriver<P, C, K, const N: usize> {
    pixels: PixelBuffer<N>,
    profile: Profile,
    timing: SlotTiming,
    cycles_per_micro: u32,
    brightness: u8,
    latch: LatchGate,
    pin: P,
    counter: C,
    clock: K,
}

impl<P, C, K, const N: usize> StripDriver<P, C, K, N>
where
    P: DataPin,
    C: CycleCounter,
    K: HostClock,
{
    /// Number of LEDs.
    pub const LEN: usize = N;

    /// Create a driver with an all-black buffer.
    ///
    /// Fails fast when the timing table has no usable row for
    /// `(clock_hz, profile.bit_rate)`, rather than at first transmission.
    pub fn new(
        profile: Profile,
        clock_hz: u32,
        pin: P,
        counter: C,
        clock: K,
    ) -> Result<Self, ConfigError> {
        let timing = SlotTiming::for_clock(clock_hz, profile.bit_rate)?;
        Ok(Self {
            pixels: PixelBuffer::new(),
            profile,
            timing,
            cycles_per_micro: clock_hz / 1_000_000,
            brightness: 255,
            latch: LatchGate::new(),
            pin,
            counter,
            clock,
        })
    }

    /// Configure the data line as an output, driven low.
    ///
    /// Call once before the first [`show`](Self::show).
    pub fn begin(&mut self) {
        self.pin.configure_output();
    }

    /// Swap the data line for another pin, returning the old one.
    ///
    /// The old line is released to high impedance before the new one is
    /// configured, so two lines are never driven at once.
    pub fn set_pin(&mut self, mut new_pin: P) -> P {
        self.pin.release();
        new_pin.configure_output();
        core::mem::replace(&mut self.pin, new_pin)
    }

    /// Transmit the current buffer to the strip.
    ///
    /// Blocks until the latch gap since the previous frame has elapsed, then
    /// runs the whole transmission with interrupts disabled; for long strips
    /// that section can exceed a millisecond. There is no cancellation: once
    /// emission starts it runs to completion. The host clock is credited for
    /// the blacked-out time before interrupts come back, so no interrupt can
    /// observe a stale tick counter.
    pub fn show(&mut self) -> ShowReport {
        self.latch.wait(&self.clock);

        let report = critical_section::with(|_cs| {
            let brightness = self.brightness;
            let order = self.profile.order;
            let timing = self.timing;
            let cycles_per_micro = self.cycles_per_micro;
            let Self {
                pixels,
                counter,
                pin,
                clock,
                ..
            } = self;

            let bytes = pixels.as_slice().iter().flat_map(|&color| {
                order.wire_bytes(Rgb {
                    r: scale8(color.r, brightness),
                    g: scale8(color.g, brightness),
                    b: scale8(color.b, brightness),
                })
            });

            counter.restart();
            let overruns = encode_frame(bytes, timing, counter, pin);
            let cycles = counter.count();
            clock.credit(crate::clock::millis_credit(cycles, cycles_per_micro));
            ShowReport { cycles, overruns }
        });

        self.latch.arm(self.clock.now());

        #[cfg(feature = "esp32-log")]
        if report.overruns > 0 {
            println!("ws281x: {} late bit slots in last frame", report.overruns);
        }

        report
    }

    /// Overwrite one LED with a color. Panics past the last LED; see
    /// [`try_set_color`](Self::try_set_color).
    #[inline]
    pub fn set_color(&mut self, index: usize, color: Rgb) {
        self.pixels.set(index, color);
    }

    /// Overwrite one LED with separate channel values.
    #[inline]
    pub fn set_color_rgb(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.pixels.set(index, Rgb { r, g, b });
    }

    /// Overwrite one LED with a packed `0xRRGGBB` value.
    #[inline]
    pub fn set_color_packed(&mut self, index: usize, packed: u32) {
        self.pixels.set(index, unpack_color(packed));
    }

    /// Overwrite one LED, failing on an out-of-range index.
    pub fn try_set_color(&mut self, index: usize, color: Rgb) -> Result<(), OutOfRange> {
        self.pixels.try_set(index, color)
    }

    /// Read one LED's stored (unscaled) color. Panics past the last LED; see
    /// [`try_color`](Self::try_color).
    #[inline]
    pub fn color(&self, index: usize) -> Rgb {
        self.pixels.get(index)
    }

    /// Read one LED's stored color, failing on an out-of-range index.
    pub fn try_color(&self, index: usize) -> Result<Rgb, OutOfRange> {
        self.pixels.try_get(index)
    }

    /// Set the global brightness scale (255 = unscaled).
    ///
    /// Non-destructive: stored colors keep full precision and the scale is
    /// reapplied on every frame.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Current global brightness scale.
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Number of LEDs.
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the strip has no LEDs.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Size of the buffer in wire bytes.
    pub const fn byte_len(&self) -> usize {
        self.pixels.byte_len()
    }

    /// The data pin currently in use.
    pub const fn pin(&self) -> &P {
        &self.pin
    }

    /// The active protocol profile.
    pub const fn profile(&self) -> Profile {
        self.profile
    }

    /// The derived cycle constants in use.
    pub const fn timing(&self) -> SlotTiming {
        self.timing
    }

    /// Stored colors in storage order.
    pub const fn pixels(&self) -> &PixelBuffer<N> {
        &self.pixels
    }

    /// Mutable access to the stored colors, for bulk updates.
    pub const fn pixels_mut(&mut self) -> &mut PixelBuffer<N> {
        &mut self.pixels
    }

    /// Copy colors in from a slice, starting at LED 0.
    pub fn set_pixels(&mut self, source: &[Rgb]) {
        self.pixels.fill_from(source);
    }

    /// The instant the latch gate currently releases at.
    pub const fn latch_deadline(&self) -> Instant {
        self.latch.deadline()
    }

    /// The latch gap enforced between frames.
    pub const fn latch_gap(&self) -> Duration {
        crate::latch::LATCH_DURATION
    }
}
