// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! FlatBuffer is the basic storage unit of pixel_fb, it represents a rectangle area.
//! A buffer comprises a byte vector with `stride * height` elements, row-major,
//! where `stride` is the byte width of one row.
//!
//! The pixel at `(x, y)` lives at
//! `(y - area.min.y) * stride + (x - area.min.x) * P::BYTES`.
//! Coordinates are absolute, so a buffer whose area starts at (16, 8) is
//! addressed with x in 16.. and y in 8..
//!
//! Writes take any `PixelColor`. Native pixels are stored directly, other
//! colors go through `P::model()`.
//!
//! # Example
//! ```
//! use pixel_fb::render::{buffer::FlatBuffer, color::Rgb565Be, color::Rgba8};
//! use pixel_fb::util::Rect;
//!
//! let mut buf: FlatBuffer<Rgb565Be> = FlatBuffer::empty(Rect::new(0, 0, 4, 4));
//! buf.set(1, 2, &Rgba8::WHITE);
//! assert_eq!(buf.at(1, 2), Rgb565Be::new(255, 255, 255));
//! ```

use crate::render::color::{to_native, Pixel, PixelColor};
use crate::util::{Point, Rect};
use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatBuffer<P: Pixel> {
    pub pix: Vec<u8>,
    pub stride: usize,
    pub area: Rect,
    _pixel: PhantomData<P>,
}

impl<P: Pixel> FlatBuffer<P> {
    /// Returns a zeroed buffer covering `area`. An empty area yields an empty buffer.
    pub fn empty(area: Rect) -> FlatBuffer<P> {
        let stride = area.dx().max(0) as usize * P::BYTES;
        FlatBuffer {
            pix: vec![0u8; stride * area.dy().max(0) as usize],
            stride,
            area,
            _pixel: PhantomData,
        }
    }

    /// Returns a buffer filled with `p`.
    pub fn filled(area: Rect, p: P) -> FlatBuffer<P> {
        let mut buf = Self::empty(area);
        buf.fill_rect(area, p);
        buf
    }

    /// Wraps existing bytes. Returns None when the length does not fit the area.
    pub fn from_bytes(area: Rect, pix: Vec<u8>) -> Option<FlatBuffer<P>> {
        let stride = area.dx().max(0) as usize * P::BYTES;
        if pix.len() != stride * area.dy().max(0) as usize {
            return None;
        }
        Some(FlatBuffer {
            pix,
            stride,
            area,
            _pixel: PhantomData,
        })
    }

    #[inline]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Byte offset of `(x, y)`. The point must lie inside the area.
    #[inline]
    pub fn pix_offset(&self, x: i32, y: i32) -> usize {
        (y - self.area.min.y) as usize * self.stride + (x - self.area.min.x) as usize * P::BYTES
    }

    /// Byte range of the row segment `[x0, x1)` on row `y`.
    #[inline]
    pub fn row_span(&self, y: i32, x0: i32, x1: i32) -> std::ops::Range<usize> {
        let start = self.pix_offset(x0, y);
        start..start + (x1 - x0) as usize * P::BYTES
    }

    /// Reads a native pixel. Out-of-bounds reads return `P::default()`.
    pub fn at(&self, x: i32, y: i32) -> P {
        if !Point::new(x, y).in_rect(self.area) {
            return P::default();
        }
        let i = self.pix_offset(x, y);
        P::read_from(&self.pix[i..i + P::BYTES])
    }

    /// Writes a native pixel, ignoring out-of-bounds positions.
    pub fn set_pixel(&mut self, x: i32, y: i32, p: P) -> bool {
        if !Point::new(x, y).in_rect(self.area) {
            return false;
        }
        let i = self.pix_offset(x, y);
        p.write_to(&mut self.pix[i..i + P::BYTES]);
        true
    }

    /// Writes any color converted through the pixel's own model.
    pub fn set(&mut self, x: i32, y: i32, c: &dyn PixelColor) -> bool {
        match to_native::<P>(c, Some(P::model())) {
            Some(p) => self.set_pixel(x, y, p),
            None => false,
        }
    }

    /// Fills `r` clipped to the area with `p` and returns the rect actually written.
    pub fn fill_rect(&mut self, r: Rect, p: P) -> Rect {
        let r = r.intersection(self.area);
        if r.is_empty() {
            return r;
        }
        // first row pixel by pixel, the others copied from it
        let first = self.row_span(r.min.y, r.min.x, r.max.x);
        for px in self.pix[first.clone()].chunks_exact_mut(P::BYTES) {
            p.write_to(px);
        }
        for y in r.min.y + 1..r.max.y {
            let dst = self.pix_offset(r.min.x, y);
            self.pix.copy_within(first.clone(), dst);
        }
        r
    }

    /// Returns the native bytes of row `y`, or an empty slice outside the area.
    pub fn row(&self, y: i32) -> &[u8] {
        if y < self.area.min.y || y >= self.area.max.y {
            return &[];
        }
        let start = (y - self.area.min.y) as usize * self.stride;
        &self.pix[start..start + self.stride]
    }

    /// Copies `r` from `other`, which must share this buffer's area.
    pub(crate) fn copy_rect_from(&mut self, other: &FlatBuffer<P>, r: Rect) {
        let r = r.intersection(self.area).intersection(other.area);
        if r.is_empty() {
            return;
        }
        for y in r.min.y..r.max.y {
            let span = self.row_span(y, r.min.x, r.max.x);
            self.pix[span.clone()].copy_from_slice(&other.pix[span]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::{Rgb565Be, Rgba8};

    #[test]
    fn offsets_follow_stride() {
        let buf: FlatBuffer<Rgba8> = FlatBuffer::empty(Rect::new(2, 3, 7, 6));
        assert_eq!(buf.stride, 20);
        assert_eq!(buf.pix.len(), 60);
        assert_eq!(buf.pix_offset(2, 3), 0);
        assert_eq!(buf.pix_offset(3, 3), 4);
        assert_eq!(buf.pix_offset(2, 4), 20);
        assert_eq!(buf.pix_offset(6, 5), 56);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut buf: FlatBuffer<Rgb565Be> = FlatBuffer::empty(Rect::new(0, 0, 2, 2));
        assert!(!buf.set(2, 0, &Rgba8::RED));
        assert!(!buf.set(0, -1, &Rgba8::RED));
        assert_eq!(buf.at(5, 5), Rgb565Be::default());
        assert!(buf.pix.iter().all(|b| *b == 0));
    }

    #[test]
    fn fill_writes_full_pixel_width() {
        let mut buf: FlatBuffer<Rgb565Be> = FlatBuffer::empty(Rect::new(0, 0, 4, 4));
        let blue = Rgb565Be::new(0, 0, 255);
        let written = buf.fill_rect(Rect::new(1, 1, 9, 3), blue);
        assert_eq!(written, Rect::new(1, 1, 4, 3));
        for y in 0..4 {
            for x in 0..4 {
                let want = if (1..4).contains(&x) && (1..3).contains(&y) {
                    blue
                } else {
                    Rgb565Be::default()
                };
                assert_eq!(buf.at(x, y), want, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn from_bytes_checks_length() {
        let area = Rect::new(0, 0, 3, 2);
        assert!(FlatBuffer::<Rgb565Be>::from_bytes(area, vec![0; 12]).is_some());
        assert!(FlatBuffer::<Rgb565Be>::from_bytes(area, vec![0; 11]).is_none());
        let filled = FlatBuffer::filled(area, Rgba8::GREEN);
        assert_eq!(filled.at(2, 1), Rgba8::GREEN);
        assert_eq!(filled.row(1).len(), 12);
        assert!(filled.row(2).is_empty());
    }
}
