//! Fixed-size pixel storage.
//!
//! The buffer owns one [`Rgb`] per LED and never changes length. Stored
//! values are unscaled; brightness is applied at transmission time.

use crate::color::Rgb;

/// Error returned by the checked accessors for an index past the last LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The offending index.
    pub index: usize,
    /// Number of LEDs in the buffer.
    pub len: usize,
}

/// Zero-initialized pixel buffer for `N` LEDs.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgb; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Number of LEDs.
    pub const LEN: usize = N;

    /// Create a buffer with every LED set to black.
    pub const fn new() -> Self {
        Self {
            pixels: [Rgb::new(0, 0, 0); N],
        }
    }

    /// Number of LEDs.
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the buffer holds no LEDs at all.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Size of the buffer in wire bytes (three per LED).
    pub const fn byte_len(&self) -> usize {
        N * 3
    }

    /// Overwrite one LED. Panics if `index` is past the last LED; use
    /// [`try_set`](Self::try_set) to get an error instead.
    #[inline]
    pub fn set(&mut self, index: usize, color: Rgb) {
        self.pixels[index] = color;
    }

    /// Overwrite one LED, failing on an out-of-range index.
    pub fn try_set(&mut self, index: usize, color: Rgb) -> Result<(), OutOfRange> {
        match self.pixels.get_mut(index) {
            Some(slot) => {
                *slot = color;
                Ok(())
            }
            None => Err(OutOfRange { index, len: N }),
        }
    }

    /// Read one LED's stored (unscaled) color. Panics if `index` is past the
    /// last LED; use [`try_get`](Self::try_get) to get an error instead.
    #[inline]
    pub fn get(&self, index: usize) -> Rgb {
        self.pixels[index]
    }

    /// Read one LED's stored color, failing on an out-of-range index.
    pub fn try_get(&self, index: usize) -> Result<Rgb, OutOfRange> {
        self.pixels
            .get(index)
            .copied()
            .ok_or(OutOfRange { index, len: N })
    }

    /// All stored colors in storage order.
    pub const fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable view of all stored colors, for bulk updates.
    pub const fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Copy colors in from a slice, starting at LED 0.
    ///
    /// Extra source entries past the last LED are ignored.
    pub fn fill_from(&mut self, source: &[Rgb]) {
        for (slot, color) in self.pixels.iter_mut().zip(source) {
            *slot = *color;
        }
    }

    /// The buffer as a flat byte sequence in storage order (R,G,B per LED).
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.pixels
            .iter()
            .flat_map(|color| [color.r, color.g, color.b])
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
