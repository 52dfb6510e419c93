// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Framebuffer wraps a working FlatBuffer with dirty tracking and an optional
//! backing buffer, the same way a panel keeps a current and a presented frame.
//!
//! Every write, fill, blit and scroll extends the dirty rect. `flush` copies
//! the dirty part of the working buffer to the backing buffer and clears it:
//! a fully dirty buffer is copied in one operation, otherwise row by row.
//!
//! Blits from a buffer of the same pixel type are copied as raw row bytes.
//! Any other source goes through per-pixel conversion, with the same result.
//!
//! # Example
//! ```
//! use pixel_fb::render::{buffer::FlatBuffer, color::Rgb565Be, color::Rgba8};
//! use pixel_fb::render::framebuffer::Framebuffer;
//! use pixel_fb::render::image::{DoubleBufferer, Drawer};
//! use pixel_fb::util::Rect;
//!
//! let panel: FlatBuffer<Rgb565Be> = FlatBuffer::empty(Rect::new(0, 0, 8, 8));
//! let mut fb = Framebuffer::with_double_buffer(panel).unwrap();
//! fb.set(3, 4, &Rgba8::WHITE);
//! assert!(fb.is_dirty());
//! fb.flush();
//! assert_eq!(fb.backing().unwrap().at(3, 4), Rgb565Be::new(255, 255, 255));
//! ```

use crate::error::{non_empty, PixelError, Result};
use crate::render::adapter::Display;
use crate::render::buffer::FlatBuffer;
use crate::render::color::{to_native, ColorModel, Pixel, PixelColor};
use crate::render::image::{
    for_all_pix, Blitter, DoubleBufferer, Drawer, Filler, Image, RegionScroller, Scroller,
    VectorScroller,
};
use crate::render::scroll::{region_scroll, scroll_linear, vector_scroll};
use crate::util::{Point, Rect};
use log::{debug, info};
use std::any::TypeId;

pub struct Framebuffer<P: Pixel> {
    buf: FlatBuffer<P>,
    dirty: Rect,
    backing: Option<FlatBuffer<P>>,
    model: Option<ColorModel<P>>,
}

impl<P: Pixel> Framebuffer<P> {
    /// A zeroed single-buffered framebuffer.
    pub fn new(bounds: Rect) -> Result<Self> {
        Self::wrap(FlatBuffer::empty(non_empty("framebuffer", bounds)?))
    }

    /// Uses `buf` as the working buffer, without backing.
    pub fn wrap(buf: FlatBuffer<P>) -> Result<Self> {
        non_empty("framebuffer", buf.area)?;
        info!("framebuffer {:?}, {} bytes/pixel", buf.area, P::BYTES);
        Ok(Self {
            buf,
            dirty: Rect::default(),
            backing: None,
            model: Some(P::model()),
        })
    }

    /// Makes `base` the backing buffer and starts from a copy of its contents.
    pub fn with_double_buffer(base: FlatBuffer<P>) -> Result<Self> {
        let mut fb = Self::wrap(base.clone())?;
        fb.backing = Some(base);
        Ok(fb)
    }

    /// Pairs an existing working buffer with a backing buffer of the same area.
    pub fn from_parts(buf: FlatBuffer<P>, backing: FlatBuffer<P>) -> Result<Self> {
        if buf.area != backing.area {
            return Err(PixelError::SizeMismatch(buf.area, backing.area));
        }
        let mut fb = Self::wrap(buf)?;
        fb.backing = Some(backing);
        Ok(fb)
    }

    pub fn into_parts(self) -> (FlatBuffer<P>, Option<FlatBuffer<P>>) {
        (self.buf, self.backing)
    }

    pub fn buffer(&self) -> &FlatBuffer<P> {
        &self.buf
    }

    pub fn backing(&self) -> Option<&FlatBuffer<P>> {
        self.backing.as_ref()
    }

    pub fn dirty(&self) -> Rect {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn color_model(&self) -> Option<ColorModel<P>> {
        self.model
    }

    /// Replaces the conversion model. With `None` only native pixels are written.
    pub fn set_color_model(&mut self, model: Option<ColorModel<P>>) {
        self.model = model;
    }

    #[inline]
    fn mark_dirty(&mut self, r: Rect) {
        self.dirty = self.dirty.union(r.intersection(self.buf.area));
    }

    fn mark_all_dirty(&mut self) {
        self.dirty = self.buf.area;
    }

    /// Pushes the dirty rect to `display` and clears it.
    pub fn flush_to<D: Display + ?Sized>(&mut self, display: &mut D) {
        let r = self.dirty.intersection(display.bounds());
        if !r.is_empty() {
            let start = self.buf.pix_offset(r.min.x, r.min.y);
            display.blit_rect(r, &self.buf.pix[start..], self.buf.stride);
            debug!("flush_to {:?}", r);
        }
        self.dirty = Rect::default();
    }
}

/// Copies rows of native bytes covering `sb`, `stride` bytes apart, so that
/// `sb.min` lands on `at`. The destination is the source-sized rect at `at`,
/// clipped to `dst`.
fn copy_rows<P: Pixel>(
    dst: &mut FlatBuffer<P>,
    pix: &[u8],
    stride: usize,
    sb: Rect,
    at: Point,
) -> Rect {
    let dr = Rect::from_size(at.x, at.y, sb.dx(), sb.dy()).intersection(dst.area);
    if dr.is_empty() {
        return dr;
    }
    let so = dr.min.sub(at);
    let bytes = dr.dx() as usize * P::BYTES;
    for (i, yd) in (dr.min.y..dr.max.y).enumerate() {
        let d = dst.pix_offset(dr.min.x, yd);
        let s = (so.y as usize + i) * stride + so.x as usize * P::BYTES;
        dst.pix[d..d + bytes].copy_from_slice(&pix[s..s + bytes]);
    }
    dr
}

/// Per-pixel blit with conversion through `model`.
fn blit_convert<P, I>(
    dst: &mut FlatBuffer<P>,
    src: &I,
    at: Point,
    model: Option<ColorModel<P>>,
) -> Rect
where
    P: Pixel,
    I: Image + ?Sized,
{
    let sb = src.bounds();
    let offset = at.sub(sb.min);
    let dr = sb.add(offset).intersection(dst.area);
    for_all_pix(dr, |x, y| {
        let c = src.at(x - offset.x, y - offset.y);
        if let Some(p) = to_native(&c, model) {
            dst.set_pixel(x, y, p);
        }
    });
    dr
}

/// Picks the byte-copy path when `src` stores native bytes of the same
/// pixel type.
fn blit_dispatch<P, I>(
    dst: &mut FlatBuffer<P>,
    src: &I,
    at: Point,
    model: Option<ColorModel<P>>,
) -> Rect
where
    P: Pixel,
    I: Image + ?Sized,
{
    if TypeId::of::<I::Pixel>() == TypeId::of::<P>() {
        if let Some((pix, stride)) = src.raw_rows() {
            return copy_rows(dst, pix, stride, src.bounds(), at);
        }
    }
    blit_convert(dst, src, at, model)
}

impl<P: Pixel> Image for Framebuffer<P> {
    type Pixel = P;

    fn bounds(&self) -> Rect {
        self.buf.area
    }

    fn at(&self, x: i32, y: i32) -> P {
        self.buf.at(x, y)
    }

    fn raw_rows(&self) -> Option<(&[u8], usize)> {
        Some((&self.buf.pix, self.buf.stride))
    }
}

impl<P: Pixel> Drawer for Framebuffer<P> {
    fn set(&mut self, x: i32, y: i32, c: &dyn PixelColor) {
        if let Some(p) = to_native(c, self.model) {
            if self.buf.set_pixel(x, y, p) {
                self.mark_dirty(Rect::new(x, y, x + 1, y + 1));
            }
        }
    }
}

impl<P: Pixel> DoubleBufferer for Framebuffer<P> {
    /// No-op without a backing buffer. Clears the dirty rect.
    fn flush(&mut self) {
        let Some(backing) = self.backing.as_mut() else {
            return;
        };
        if self.dirty.is_empty() {
            return;
        }
        if self.dirty.eq_rect(self.buf.area) {
            backing.pix.copy_from_slice(&self.buf.pix);
        } else {
            backing.copy_rect_from(&self.buf, self.dirty);
        }
        debug!("flush {:?}", self.dirty);
        self.dirty = Rect::default();
    }
}

impl<P: Pixel> Filler for Framebuffer<P> {
    fn fill(&mut self, rect: Rect, c: &dyn PixelColor) {
        let Some(p) = to_native(c, self.model) else {
            return;
        };
        let written = self.buf.fill_rect(rect, p);
        self.mark_dirty(written);
    }
}

impl<P: Pixel> Blitter for Framebuffer<P> {
    fn blit<I: Image + ?Sized>(&mut self, src: &I, at: Point) {
        let dr = blit_dispatch(&mut self.buf, src, at, self.model);
        self.mark_dirty(dr);
    }
}

impl<P: Pixel> Blitter for FlatBuffer<P> {
    fn blit<I: Image + ?Sized>(&mut self, src: &I, at: Point) {
        blit_dispatch(self, src, at, Some(P::model()));
    }
}

impl<P: Pixel> Scroller for Framebuffer<P> {
    fn scroll(&mut self, amount: i32) {
        if amount == 0 {
            return;
        }
        scroll_linear(&mut self.buf, amount);
        self.mark_all_dirty();
        debug!("scroll {}", amount);
    }
}

impl<P: Pixel> RegionScroller for Framebuffer<P> {
    fn region_scroll(&mut self, rect: Rect, amount: i32) {
        let touched = region_scroll(&mut self.buf, rect, amount);
        self.mark_dirty(touched);
    }
}

impl<P: Pixel> VectorScroller for Framebuffer<P> {
    fn vector_scroll(&mut self, rect: Rect, v: Point) {
        let touched = vector_scroll(&mut self.buf, rect, v);
        self.mark_dirty(touched);
    }
}
