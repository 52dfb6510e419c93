// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Pixel formats and the color conversion contract.
//!
//! Two storable formats are provided:
//! - `Rgba8`: 32-bit truecolor, stored as `[r, g, b, a]`
//! - `Rgb565Be`: 16-bit RGB565 as used by most SPI panels
//!
//! Any value implementing `PixelColor` can be written into a buffer. It is
//! stored as-is when it already is the buffer's native type, otherwise it goes
//! through a `ColorModel`. Channel math uses 16-bit scaled values (8-bit value
//! times 257) held in `u32`, so intermediate results never truncate.
//!
//! # RGB565BE
//!
//! Fields are packed red-high, green-mid, blue-low and the two bytes of the
//! result are swapped, so on a little-endian host the in-memory bytes are
//! the big-endian word a display controller expects:
//!
//! ```text
//!   u16 value      gggbbbbb rrrrrggg
//!   memory (LE)    rrrrrggg gggbbbbb
//! ```
//!
//! Decoding replicates the top bits of each field into the low bits
//! (`(v << 3) | (v >> 2)` for 5 bits) so that 0xff round-trips to 0xff.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::Debug;

/// Anything that can report its color as four 16-bit scaled channels.
pub trait PixelColor: Any + Debug {
    /// Red, green, blue and alpha, each in `0..=0xffff`.
    fn rgba(&self) -> (u32, u32, u32, u32);

    fn as_any(&self) -> &dyn Any;
}

/// Converts an arbitrary color into `P`, or gives up with `None`.
pub type ColorModel<P> = fn(&dyn PixelColor) -> Option<P>;

/// A color with a fixed in-memory layout, usable as buffer storage.
pub trait Pixel: PixelColor + Copy + Default + PartialEq + Send + Sync {
    /// Bytes per pixel in a flat buffer.
    const BYTES: usize;

    /// The codec used to convert foreign colors into this format.
    fn model() -> ColorModel<Self>;

    /// Writes the native bytes into `dst[..Self::BYTES]`.
    fn write_to(self, dst: &mut [u8]);

    /// Reads a pixel back from `src[..Self::BYTES]`.
    fn read_from(src: &[u8]) -> Self;
}

/// Resolves `c` to the native pixel type.
///
/// An exact type match is used directly. Otherwise the model converts it.
/// Without a model, or when the model yields nothing, the result is `None`
/// and callers drop the write.
pub fn to_native<P: Pixel>(c: &dyn PixelColor, model: Option<ColorModel<P>>) -> Option<P> {
    if let Some(native) = c.as_any().downcast_ref::<P>() {
        return Some(*native);
    }
    model.and_then(|convert| convert(c))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Rgba8 = Rgba8::with_alpha(0, 0, 0, 0);
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255);
    pub const RED: Rgba8 = Rgba8::new(255, 0, 0);
    pub const GREEN: Rgba8 = Rgba8::new(0, 255, 0);
    pub const BLUE: Rgba8 = Rgba8::new(0, 0, 255);
    pub const YELLOW: Rgba8 = Rgba8::new(255, 255, 0);
    pub const CYAN: Rgba8 = Rgba8::new(0, 255, 255);
    pub const MAGENTA: Rgba8 = Rgba8::new(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl PixelColor for Rgba8 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        (
            self.r as u32 * 0x101,
            self.g as u32 * 0x101,
            self.b as u32 * 0x101,
            self.a as u32 * 0x101,
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Pixel for Rgba8 {
    const BYTES: usize = 4;

    fn model() -> ColorModel<Self> {
        rgba8_model
    }

    #[inline]
    fn write_to(self, dst: &mut [u8]) {
        dst[..4].copy_from_slice(&self.to_bytes());
    }

    #[inline]
    fn read_from(src: &[u8]) -> Self {
        Rgba8::with_alpha(src[0], src[1], src[2], src[3])
    }
}

/// Converts any color to `Rgba8` by keeping the high byte of each channel.
pub fn rgba8_model(c: &dyn PixelColor) -> Option<Rgba8> {
    let (r, g, b, a) = c.rgba();
    Some(Rgba8::with_alpha(
        (r >> 8) as u8,
        (g >> 8) as u8,
        (b >> 8) as u8,
        (a >> 8) as u8,
    ))
}

/// RGB565 with its two bytes swapped. The inner value is what sits in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb565Be(pub u16);

impl Rgb565Be {
    /// Truncates to 5/6/5 bits, packs and swaps bytes.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        let val = ((r & 0xF8) as u16) << 8 | ((g & 0xFC) as u16) << 3 | (b >> 3) as u16;
        Rgb565Be(val.swap_bytes())
    }

    /// The plain (unswapped) RGB565 word.
    pub const fn rgb565(self) -> u16 {
        self.0.swap_bytes()
    }

    pub const fn to_rgba8(self) -> Rgba8 {
        let c = self.0.swap_bytes();
        let r = ((c >> 11) & 0x1F) as u8;
        let g = ((c >> 5) & 0x3F) as u8;
        let b = (c & 0x1F) as u8;
        Rgba8::new((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
    }
}

impl PixelColor for Rgb565Be {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let c = self.to_rgba8();
        (
            c.r as u32 * 0x101,
            c.g as u32 * 0x101,
            c.b as u32 * 0x101,
            0xFFFF,
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Pixel for Rgb565Be {
    const BYTES: usize = 2;

    fn model() -> ColorModel<Self> {
        rgb565be_model
    }

    #[inline]
    fn write_to(self, dst: &mut [u8]) {
        dst[..2].copy_from_slice(&self.0.to_ne_bytes());
    }

    #[inline]
    fn read_from(src: &[u8]) -> Self {
        Rgb565Be(u16::from_ne_bytes([src[0], src[1]]))
    }
}

/// Converts any color to `Rgb565Be`. Alpha is discarded.
pub fn rgb565be_model(c: &dyn PixelColor) -> Option<Rgb565Be> {
    let (r, g, b, _) = c.rgba();
    Some(Rgb565Be::new(
        (r / 0x101) as u8,
        (g / 0x101) as u8,
        (b / 0x101) as u8,
    ))
}

/// Packs an 8-bit-per-channel color into RGB565BE.
pub const fn encode(r: u8, g: u8, b: u8) -> Rgb565Be {
    Rgb565Be::new(r, g, b)
}

/// Unpacks RGB565BE into `(r, g, b, a)`; alpha is always 255.
pub fn decode(p: Rgb565Be) -> (u8, u8, u8, u8) {
    let c = p.to_rgba8();
    (c.r, c.g, c.b, c.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Rand;

    #[test]
    fn white_and_black_round_trip_exactly() {
        assert_eq!(decode(encode(255, 255, 255)), (255, 255, 255, 255));
        assert_eq!(decode(encode(0, 0, 0)), (0, 0, 0, 255));
    }

    #[test]
    fn packing_is_byte_swapped() {
        // pure red is 0xF800 in plain RGB565
        assert_eq!(encode(255, 0, 0).rgb565(), 0xF800);
        assert_eq!(encode(255, 0, 0).0, 0x00F8);
        assert_eq!(encode(0, 255, 0).rgb565(), 0x07E0);
        assert_eq!(encode(0, 0, 255).rgb565(), 0x001F);
        let mut bytes = [0u8; 2];
        encode(255, 0, 0).write_to(&mut bytes);
        assert_eq!(bytes, 0x00F8u16.to_ne_bytes());
        assert_eq!(Rgb565Be::read_from(&bytes), encode(255, 0, 0));
    }

    #[test]
    fn every_packed_value_survives_decode_encode() {
        for v in 0..=u16::MAX {
            let p = Rgb565Be(v);
            let (r, g, b, a) = decode(p);
            assert_eq!(a, 255);
            assert_eq!(encode(r, g, b), p, "packed value {:#06x}", v);
        }
    }

    #[test]
    fn quantization_error_is_bounded() {
        let mut rng = Rand::new();
        rng.srand(0);
        for _ in 0..4096 {
            let c = Rgba8::new(rng.rand_u8(), rng.rand_u8(), rng.rand_u8());
            let p = rgb565be_model(&c).unwrap();
            let (r, g, b, _) = decode(p);
            assert!((c.r as i32 - r as i32).abs() <= 8, "{:?} -> {:?}", c, p);
            assert!((c.g as i32 - g as i32).abs() <= 4, "{:?} -> {:?}", c, p);
            assert!((c.b as i32 - b as i32).abs() <= 8, "{:?} -> {:?}", c, p);
            // second pass is stable
            assert_eq!(rgb565be_model(&p.to_rgba8()).unwrap(), p);
        }
    }

    #[test]
    fn models_use_sixteen_bit_channels() {
        let c = Rgba8::with_alpha(1, 128, 254, 7);
        assert_eq!(c.rgba(), (0x101, 128 * 0x101, 254 * 0x101, 7 * 0x101));
        assert_eq!(rgba8_model(&c), Some(c));
        assert_eq!(Rgb565Be::new(255, 255, 255).rgba(), (0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF));
    }

    #[test]
    fn to_native_prefers_exact_type() {
        let p = Rgb565Be(0x1234);
        assert_eq!(to_native::<Rgb565Be>(&p, None), Some(p));
        assert_eq!(to_native::<Rgb565Be>(&Rgba8::RED, None), None);
        assert_eq!(
            to_native::<Rgb565Be>(&Rgba8::RED, Some(rgb565be_model)),
            Some(encode(255, 0, 0))
        );
        assert_eq!(to_native::<Rgba8>(&encode(0, 0, 255), Some(Rgba8::model())), Some(Rgba8::BLUE));
    }
}
