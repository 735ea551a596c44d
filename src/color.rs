//! Color storage, packing and wire-order handling.
//!
//! Colors are always stored in logical R,G,B order; the order the bytes leave
//! the wire in is a transmission-time concern selected by [`ColorOrder`].

use smart_leds::RGB8;

/// 8-bit-per-channel RGB color, stored in logical R,G,B order.
pub type Rgb = RGB8;

/// Byte order a strip expects on the wire.
///
/// WS2812-family parts typically expect green first; older WS2811 wiring is
/// plain RGB. Storage order never changes, only the emitted byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOrder {
    /// Green, red, blue (WS2812 default).
    Grb,
    /// Red, green, blue.
    Rgb,
}

impl ColorOrder {
    /// Reorder a stored color into the byte sequence sent on the wire.
    #[inline]
    pub const fn wire_bytes(self, color: Rgb) -> [u8; 3] {
        match self {
            Self::Grb => [color.g, color.r, color.b],
            Self::Rgb => [color.r, color.g, color.b],
        }
    }
}

/// Pack three channel values into one `0xRRGGBB` word.
///
/// The packed layout is always R,G,B regardless of wire order.
#[inline]
pub const fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Unpack a `0xRRGGBB` word into a color. Inverse of [`pack_color`].
#[inline]
pub const fn unpack_color(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems. `scale8(v, 255)`
/// returns `v` unchanged, so full brightness is lossless.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}
