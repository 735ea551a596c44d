#![no_std]

pub mod buffer;
pub mod clock;
pub mod color;
pub mod driver;
pub mod encoder;
pub mod latch;
pub mod platform;
pub mod timing;

pub use buffer::{OutOfRange, PixelBuffer};
pub use clock::millis_credit;
pub use color::{ColorOrder, Rgb, pack_color, scale8, unpack_color};
pub use driver::{ShowReport, StripDriver};
pub use encoder::encode_frame;
pub use latch::{LATCH_DURATION, LatchGate};
pub use platform::{CycleCounter, DataPin, HostClock};
pub use timing::{BitRate, ConfigError, Profile, SlotTiming};

pub use embassy_time::{Duration, Instant};
