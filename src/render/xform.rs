// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Non-destructive image transforms.
//!
//! Each wrapper holds an image and rewrites what `at` returns (and sometimes
//! `bounds`). The wrapped image is never modified, so transforms can be
//! stacked freely and blitted like any other source:
//!
//! ```
//! use pixel_fb::render::{buffer::FlatBuffer, color::Rgba8, image::Image};
//! use pixel_fb::render::xform::{Flip, FlipMode, InvertColors};
//! use pixel_fb::util::Rect;
//!
//! let mut buf: FlatBuffer<Rgba8> = FlatBuffer::empty(Rect::new(0, 0, 4, 4));
//! buf.set_pixel(0, 0, Rgba8::WHITE);
//! let view = InvertColors::new(Flip::new(&buf, FlipMode::HORIZONTAL));
//! assert_eq!(view.at(3, 0), Rgba8::BLACK);
//! ```

use crate::render::color::{PixelColor, Rgba8};
use crate::render::image::{Drawer, Image};
use crate::util::{wrap, Point, Rect};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Rebounds a drawable to `bounds`. Writes outside the new bounds are ignored.
pub struct SubImage<D> {
    img: D,
    bounds: Rect,
}

impl<D: Drawer> SubImage<D> {
    pub fn new(img: D, bounds: Rect) -> Self {
        Self { img, bounds }
    }

    pub fn into_inner(self) -> D {
        self.img
    }
}

impl<D: Drawer> Image for SubImage<D> {
    type Pixel = D::Pixel;

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn at(&self, x: i32, y: i32) -> D::Pixel {
        self.img.at(x, y)
    }
}

impl<D: Drawer> Drawer for SubImage<D> {
    fn set(&mut self, x: i32, y: i32, c: &dyn PixelColor) {
        if Point::new(x, y).in_rect(self.bounds) {
            self.img.set(x, y, c);
        }
    }
}

/// Shifts the image by `-by`: pixel `(x, y)` shows the source at `(x, y) + by`.
pub struct Translate<I> {
    img: I,
    by: Point,
}

impl<I: Image> Translate<I> {
    pub fn new(img: I, by: Point) -> Self {
        Self { img, by }
    }
}

impl<I: Image> Image for Translate<I> {
    type Pixel = I::Pixel;

    fn bounds(&self) -> Rect {
        self.img.bounds().sub(self.by)
    }

    fn at(&self, x: i32, y: i32) -> I::Pixel {
        self.img.at(x + self.by.x, y + self.by.y)
    }
}

/// Inverts red, green and blue. Alpha is kept.
pub struct InvertColors<I> {
    img: I,
}

impl<I: Image> InvertColors<I> {
    pub fn new(img: I) -> Self {
        Self { img }
    }
}

impl<I: Image> Image for InvertColors<I> {
    type Pixel = Rgba8;

    fn bounds(&self) -> Rect {
        self.img.bounds()
    }

    fn at(&self, x: i32, y: i32) -> Rgba8 {
        let (r, g, b, a) = self.img.at(x, y).rgba();
        Rgba8::with_alpha(
            255 - (r / 0x101) as u8,
            255 - (g / 0x101) as u8,
            255 - (b / 0x101) as u8,
            (a / 0x101) as u8,
        )
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FlipMode: u8 {
        const HORIZONTAL = 0b01;
        const VERTICAL   = 0b10;
        const ROTATE180  = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

/// Mirrors the image inside its own bounds.
pub struct Flip<I> {
    img: I,
    mode: FlipMode,
}

impl<I: Image> Flip<I> {
    pub fn new(img: I, mode: FlipMode) -> Self {
        Self { img, mode }
    }
}

impl<I: Image> Image for Flip<I> {
    type Pixel = I::Pixel;

    fn bounds(&self) -> Rect {
        self.img.bounds()
    }

    fn at(&self, x: i32, y: i32) -> I::Pixel {
        let b = self.img.bounds();
        let x = if self.mode.contains(FlipMode::HORIZONTAL) {
            b.min.x + b.max.x - 1 - x
        } else {
            x
        };
        let y = if self.mode.contains(FlipMode::VERTICAL) {
            b.min.y + b.max.y - 1 - y
        } else {
            y
        };
        self.img.at(x, y)
    }
}

/// Rotates 90 degrees counter-clockwise. The result keeps the source's
/// top-left corner and swaps width and height.
pub struct Rotate90<I> {
    img: I,
}

impl<I: Image> Rotate90<I> {
    pub fn new(img: I) -> Self {
        Self { img }
    }
}

impl<I: Image> Image for Rotate90<I> {
    type Pixel = I::Pixel;

    fn bounds(&self) -> Rect {
        let b = self.img.bounds();
        Rect::from_size(b.min.x, b.min.y, b.dy(), b.dx())
    }

    fn at(&self, x: i32, y: i32) -> I::Pixel {
        let b = self.img.bounds();
        let (u, v) = (x - b.min.x, y - b.min.y);
        self.img.at(b.min.x + b.dx() - 1 - v, b.min.y + u)
    }
}

/// Repeats the image endlessly. Bounds are unchanged.
pub struct WrapEdges<I> {
    img: I,
}

impl<I: Image> WrapEdges<I> {
    pub fn new(img: I) -> Self {
        Self { img }
    }
}

impl<I: Image> Image for WrapEdges<I> {
    type Pixel = I::Pixel;

    fn bounds(&self) -> Rect {
        self.img.bounds()
    }

    fn at(&self, x: i32, y: i32) -> I::Pixel {
        let b = self.img.bounds();
        if b.is_empty() {
            return self.img.at(x, y);
        }
        let p = Point::new(wrap(x - b.min.x, 0, b.dx()), wrap(y - b.min.y, 0, b.dy()));
        self.img.at(p.x + b.min.x, p.y + b.min.y)
    }
}

/// Averages each pixel with its eight neighbours. Fully transparent samples
/// are skipped; if all nine are transparent the result is transparent.
pub struct Blur<I> {
    img: I,
}

impl<I: Image> Blur<I> {
    pub fn new(img: I) -> Self {
        Self { img }
    }
}

impl<I: Image> Image for Blur<I> {
    type Pixel = Rgba8;

    fn bounds(&self) -> Rect {
        self.img.bounds()
    }

    fn at(&self, x: i32, y: i32) -> Rgba8 {
        let (mut sr, mut sg, mut sb, mut n) = (0u32, 0u32, 0u32, 0u32);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let (r, g, b, a) = self.img.at(x + dx, y + dy).rgba();
                if a == 0 {
                    continue;
                }
                sr += r;
                sg += g;
                sb += b;
                n += 1;
            }
        }
        if n == 0 {
            return Rgba8::TRANSPARENT;
        }
        Rgba8::new(
            (sr / n / 0x101) as u8,
            (sg / n / 0x101) as u8,
            (sb / n / 0x101) as u8,
        )
    }
}
