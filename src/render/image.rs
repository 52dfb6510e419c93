// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Image capabilities and their software fallbacks.
//!
//! Drivers and buffers advertise what they can do by implementing the
//! capability traits below. Anything that only implements `Drawer` can still
//! be blitted into and filled through the generic `blit` and `fill`
//! functions, one pixel at a time.

use crate::render::buffer::FlatBuffer;
use crate::render::color::{Pixel, PixelColor};
use crate::render::scroll::{region_scroll, scroll_linear, vector_scroll};
use crate::util::{Point, Rect};

/// A readable rectangle of pixels.
pub trait Image {
    type Pixel: PixelColor;

    fn bounds(&self) -> Rect;

    fn at(&self, x: i32, y: i32) -> Self::Pixel;

    /// The stored rows, for images kept as native bytes of `Self::Pixel`:
    /// the bytes starting at `bounds().min`, and the stride between rows.
    /// Blits use it to copy whole rows instead of pixels.
    fn raw_rows(&self) -> Option<(&[u8], usize)> {
        None
    }
}

/// A writable image. Writes outside `bounds()` and colors the drawer cannot
/// represent are ignored. A SoftScreen is the exception: its writes wrap
/// around the canvas, beyond the viewport it reports as bounds.
pub trait Drawer: Image {
    fn set(&mut self, x: i32, y: i32, c: &dyn PixelColor);
}

/// Scrolls the whole image. Positive `amount` moves the content up.
pub trait Scroller {
    fn scroll(&mut self, amount: i32);
}

pub trait RegionScroller {
    fn region_scroll(&mut self, rect: Rect, amount: i32);
}

/// Scrolls `rect` by `v`. Positive `v.x` moves the content left, positive
/// `v.y` moves it up, and pixels leaving one edge re-enter on the other.
pub trait VectorScroller {
    fn vector_scroll(&mut self, rect: Rect, v: Point);
}

/// Writes a whole source image at an offset.
pub trait Blitter {
    fn blit<I: Image + ?Sized>(&mut self, src: &I, at: Point);
}

/// Sets every pixel of a rect to one color.
pub trait Filler {
    fn fill(&mut self, rect: Rect, c: &dyn PixelColor);
}

/// Writes are buffered until `flush` presents them.
pub trait DoubleBufferer: Drawer {
    fn flush(&mut self);
}

/// Calls `f` for every pixel of `rect`, row by row.
#[inline]
pub fn for_all_pix<F: FnMut(i32, i32)>(rect: Rect, mut f: F) {
    for y in rect.min.y..rect.max.y {
        for x in rect.min.x..rect.max.x {
            f(x, y);
        }
    }
}

/// Software blit: copies `src` so that its top-left corner lands on `at`.
///
/// Pixels falling outside `dst` are dropped by `dst.set`. Returns the
/// destination rect that was covered.
pub fn blit<D, I>(dst: &mut D, src: &I, at: Point) -> Rect
where
    D: Drawer + ?Sized,
    I: Image + ?Sized,
{
    let sb = src.bounds();
    let offset = at.sub(sb.min);
    let dr = sb.add(offset).intersection(dst.bounds());
    for_all_pix(dr, |x, y| {
        let p = src.at(x - offset.x, y - offset.y);
        dst.set(x, y, &p);
    });
    dr
}

/// Software fill: sets every pixel of `rect ∩ dst.bounds()` to `c`.
/// Returns the rect that was written.
pub fn fill<D: Drawer + ?Sized>(dst: &mut D, rect: Rect, c: &dyn PixelColor) -> Rect {
    let area = dst.bounds().intersection(rect);
    for_all_pix(area, |x, y| dst.set(x, y, c));
    area
}

impl<I: Image + ?Sized> Image for &I {
    type Pixel = I::Pixel;

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn at(&self, x: i32, y: i32) -> I::Pixel {
        (**self).at(x, y)
    }

    fn raw_rows(&self) -> Option<(&[u8], usize)> {
        (**self).raw_rows()
    }
}

impl<I: Image + ?Sized> Image for &mut I {
    type Pixel = I::Pixel;

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn at(&self, x: i32, y: i32) -> I::Pixel {
        (**self).at(x, y)
    }

    fn raw_rows(&self) -> Option<(&[u8], usize)> {
        (**self).raw_rows()
    }
}

impl<D: Drawer + ?Sized> Drawer for &mut D {
    fn set(&mut self, x: i32, y: i32, c: &dyn PixelColor) {
        (**self).set(x, y, c);
    }
}

impl<P: Pixel> Image for FlatBuffer<P> {
    type Pixel = P;

    fn bounds(&self) -> Rect {
        self.area
    }

    fn at(&self, x: i32, y: i32) -> P {
        FlatBuffer::at(self, x, y)
    }

    fn raw_rows(&self) -> Option<(&[u8], usize)> {
        Some((&self.pix, self.stride))
    }
}

impl<P: Pixel> Drawer for FlatBuffer<P> {
    fn set(&mut self, x: i32, y: i32, c: &dyn PixelColor) {
        FlatBuffer::set(self, x, y, c);
    }
}

impl<P: Pixel> Filler for FlatBuffer<P> {
    fn fill(&mut self, rect: Rect, c: &dyn PixelColor) {
        if let Some(p) = crate::render::color::to_native::<P>(c, Some(P::model())) {
            self.fill_rect(rect, p);
        }
    }
}

impl<P: Pixel> Scroller for FlatBuffer<P> {
    fn scroll(&mut self, amount: i32) {
        scroll_linear(self, amount);
    }
}

impl<P: Pixel> RegionScroller for FlatBuffer<P> {
    fn region_scroll(&mut self, rect: Rect, amount: i32) {
        region_scroll(self, rect, amount);
    }
}

impl<P: Pixel> VectorScroller for FlatBuffer<P> {
    fn vector_scroll(&mut self, rect: Rect, v: Point) {
        vector_scroll(self, rect, v);
    }
}
