// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! SoftScreen is a ring-buffer display: a canvas of pixels that is addressed
//! modulo its size in both directions, and a viewport that slides over it.
//!
//! Reads and writes at any coordinate land on the canvas, so the viewport can
//! be panned forever. Once it drifts completely off the canvas it is moved
//! back to the congruent position, which shows the same pixels.
//!
//! The canvas is cut into cells of a fixed size (a character grid for a text
//! console, for instance). `cell_at(col, row)` returns a view bounded to one
//! of them.
//!
//! ```text
//!  canvas (wraps)                 viewport after pan(6, 2)
//!  ┌───────────────┐               ┌──────┬────────┐
//!  │               │               │      │        │
//!  │  ┌────────┐   │      ──►      │      │        │
//!  │  │viewport│   │               ├──────┘        │
//!  │  └────────┘   │               │ (rest wraps)  │
//!  └───────────────┘               └───────────────┘
//! ```

use crate::error::{non_empty, Result};
use crate::render::buffer::FlatBuffer;
use crate::render::color::{to_native, ColorModel, Pixel, PixelColor};
use crate::render::image::{blit, fill, Blitter, Drawer, Filler, Image, Scroller};
use crate::util::{Point, Rect};
use log::{debug, info, warn};

pub struct SoftScreen<P: Pixel> {
    pix: FlatBuffer<P>,
    canvas: Rect,
    viewport: Rect,
    cell: Rect,
    model: Option<ColorModel<P>>,
}

impl<P: Pixel> SoftScreen<P> {
    /// Allocates a zeroed canvas. Canvas, viewport and cell must all have area.
    pub fn new(cell: Rect, viewport: Rect, canvas: Rect) -> Result<Self> {
        let canvas = non_empty("canvas", canvas)?;
        let viewport = non_empty("viewport", viewport)?;
        let cell = non_empty("cell", cell)?;
        if canvas.dx() % cell.dx() != 0 || canvas.dy() % cell.dy() != 0 {
            warn!(
                "canvas {}x{} is not a whole number of {}x{} cells",
                canvas.dx(),
                canvas.dy(),
                cell.dx(),
                cell.dy()
            );
        }
        info!("softscreen canvas {:?} viewport {:?}", canvas, viewport);
        Ok(Self {
            pix: FlatBuffer::empty(canvas),
            canvas,
            viewport,
            cell,
            model: Some(P::model()),
        })
    }

    /// Replaces the conversion model. With `None` only native pixels are written.
    pub fn with_model(mut self, model: Option<ColorModel<P>>) -> Self {
        self.model = model;
        self
    }

    pub fn canvas(&self) -> Rect {
        self.canvas
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn cell(&self) -> Rect {
        self.cell
    }

    /// The canvas storage, addressed in canvas coordinates.
    pub fn pixels(&self) -> &FlatBuffer<P> {
        &self.pix
    }

    /// Number of whole cells across and down the canvas.
    pub fn grid(&self) -> (i32, i32) {
        (
            self.canvas.dx() / self.cell.dx(),
            self.canvas.dy() / self.cell.dy(),
        )
    }

    /// Moves the viewport by `(dx, dy)` pixels.
    ///
    /// The move is computed in 64 bits, so any delta is accepted; a viewport
    /// that ends up off the canvas is moved back to the congruent position.
    pub fn pan(&mut self, dx: i32, dy: i32) {
        let (c, vp) = (self.canvas, self.viewport);
        let x = vp.min.x as i64 + dx as i64;
        let y = vp.min.y as i64 + dy as i64;
        let on_canvas = x < c.max.x as i64
            && x + (vp.dx() as i64) > c.min.x as i64
            && y < c.max.y as i64
            && y + (vp.dy() as i64) > c.min.y as i64;
        if on_canvas {
            self.set_viewport(Point::new(x as i32, y as i32));
            return;
        }
        // keep coordinates small, the wrapped position shows the same pixels
        let origin = Point::new(
            c.min.x + (x - c.min.x as i64).rem_euclid(c.dx() as i64) as i32,
            c.min.y + (y - c.min.y as i64).rem_euclid(c.dy() as i64) as i32,
        );
        debug!("viewport at ({}, {}) left canvas, reset to {:?}", x, y, origin);
        self.set_viewport(origin);
    }

    /// Moves the viewport origin to `pt`, keeping its size.
    pub fn set_viewport(&mut self, pt: Point) {
        self.viewport = self.viewport.sub(self.viewport.min).add(pt);
    }

    /// A view of cell `(col, row)`, counted from the cell rect's position.
    pub fn cell_at(&mut self, col: i32, row: i32) -> CellView<'_, P> {
        let bounds = self
            .cell
            .add(Point::new(self.cell.dx() * col, self.cell.dy() * row));
        CellView {
            screen: self,
            bounds,
        }
    }

    /// Bounds of cell `(col, row)` without borrowing the screen.
    pub fn cell_bounds(&self, col: i32, row: i32) -> Rect {
        self.cell
            .add(Point::new(self.cell.dx() * col, self.cell.dy() * row))
    }

    /// Copies the visible pixels into a buffer positioned at the viewport.
    pub fn snapshot(&self) -> FlatBuffer<P> {
        let mut out = FlatBuffer::empty(self.viewport);
        for y in self.viewport.min.y..self.viewport.max.y {
            for x in self.viewport.min.x..self.viewport.max.x {
                out.set_pixel(x, y, self.at(x, y));
            }
        }
        out
    }

    #[inline]
    fn at_wrapped(&self, x: i32, y: i32) -> P {
        let pt = Point::new(x, y).mod_rect(self.canvas);
        self.pix.at(pt.x, pt.y)
    }

    #[inline]
    fn set_wrapped(&mut self, x: i32, y: i32, c: &dyn PixelColor) {
        if let Some(p) = to_native(c, self.model) {
            let pt = Point::new(x, y).mod_rect(self.canvas);
            self.pix.set_pixel(pt.x, pt.y, p);
        }
    }
}

impl<P: Pixel> Image for SoftScreen<P> {
    type Pixel = P;

    /// The viewport, not the canvas.
    fn bounds(&self) -> Rect {
        self.viewport
    }

    fn at(&self, x: i32, y: i32) -> P {
        self.at_wrapped(x, y)
    }
}

impl<P: Pixel> Drawer for SoftScreen<P> {
    fn set(&mut self, x: i32, y: i32, c: &dyn PixelColor) {
        self.set_wrapped(x, y, c);
    }
}

impl<P: Pixel> Scroller for SoftScreen<P> {
    fn scroll(&mut self, amount: i32) {
        self.pan(0, amount);
    }
}

impl<P: Pixel> Filler for SoftScreen<P> {
    fn fill(&mut self, rect: Rect, c: &dyn PixelColor) {
        fill(self, rect, c);
    }
}

impl<P: Pixel> Blitter for SoftScreen<P> {
    fn blit<I: Image + ?Sized>(&mut self, src: &I, at: Point) {
        blit(self, src, at);
    }
}

/// One cell of a SoftScreen. Shares the screen's pixels and wrapping.
pub struct CellView<'a, P: Pixel> {
    screen: &'a mut SoftScreen<P>,
    bounds: Rect,
}

impl<P: Pixel> Image for CellView<'_, P> {
    type Pixel = P;

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn at(&self, x: i32, y: i32) -> P {
        self.screen.at_wrapped(x, y)
    }
}

impl<P: Pixel> Drawer for CellView<'_, P> {
    /// Writes outside the cell are dropped.
    fn set(&mut self, x: i32, y: i32, c: &dyn PixelColor) {
        if Point::new(x, y).in_rect(self.bounds) {
            self.screen.set_wrapped(x, y, c);
        }
    }
}

impl<P: Pixel> Filler for CellView<'_, P> {
    fn fill(&mut self, rect: Rect, c: &dyn PixelColor) {
        fill(self, rect, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PixelError;
    use crate::render::color::{Rgb565Be, Rgba8};

    fn screen() -> SoftScreen<Rgb565Be> {
        SoftScreen::new(
            Rect::new(0, 0, 8, 16),
            Rect::new(0, 0, 32, 32),
            Rect::new(0, 0, 64, 48),
        )
        .unwrap()
    }

    #[test]
    fn rejects_degenerate_rects() {
        let ok = Rect::new(0, 0, 8, 8);
        let bad = Rect::new(0, 0, 0, 8);
        assert!(matches!(
            SoftScreen::<Rgba8>::new(ok, ok, bad),
            Err(PixelError::EmptyRect("canvas", _))
        ));
        assert!(matches!(
            SoftScreen::<Rgba8>::new(ok, bad, ok),
            Err(PixelError::EmptyRect("viewport", _))
        ));
        assert!(matches!(
            SoftScreen::<Rgba8>::new(bad, ok, ok),
            Err(PixelError::EmptyRect("cell", _))
        ));
        // not a multiple of the cell only warns
        assert!(SoftScreen::<Rgba8>::new(Rect::new(0, 0, 3, 3), ok, ok).is_ok());
    }

    #[test]
    fn addressing_wraps_both_ways() {
        let mut s = screen();
        s.set(-1, -1, &Rgba8::RED);
        assert_eq!(s.pixels().at(63, 47), Rgb565Be::new(255, 0, 0));
        s.set(64 * 3 + 5, 48 * 2 + 7, &Rgba8::BLUE);
        assert_eq!(s.at(5, 7), Rgb565Be::new(0, 0, 255));
        assert_eq!(s.at(5 - 64, 7 + 48), Rgb565Be::new(0, 0, 255));
    }

    #[test]
    fn pan_renormalizes_only_off_canvas() {
        let mut s = screen();
        s.pan(40, 0);
        // still overlapping, kept as is
        assert_eq!(s.viewport(), Rect::new(40, 0, 72, 32));
        s.pan(30, 50);
        assert_eq!(s.viewport(), Rect::new(6, 2, 38, 34));
        s.pan(-20, -20);
        assert_eq!(s.viewport(), Rect::new(-14, -18, 18, 14));
        s.scroll(-40);
        assert_eq!(s.viewport(), Rect::new(50, 38, 82, 70));
    }

    #[test]
    fn viewport_reads_through_wrap() {
        let mut s = screen();
        s.set(0, 0, &Rgba8::WHITE);
        s.set_viewport(Point::new(60, 44));
        let snap = s.snapshot();
        assert_eq!(snap.area, Rect::new(60, 44, 92, 76));
        assert_eq!(snap.at(64, 48), Rgb565Be::new(255, 255, 255));
    }

    #[test]
    fn cells_share_the_canvas() {
        let mut s = screen();
        assert_eq!(s.grid(), (8, 3));
        {
            let mut cell = s.cell_at(2, 1);
            assert_eq!(cell.bounds(), Rect::new(16, 16, 24, 32));
            let b = cell.bounds();
            cell.fill(b, &Rgba8::GREEN);
        }
        assert_eq!(s.cell_bounds(2, 1), Rect::new(16, 16, 24, 32));
        assert_eq!(s.at(16, 16), Rgb565Be::new(0, 255, 0));
        assert_eq!(s.at(23, 31), Rgb565Be::new(0, 255, 0));
        assert_eq!(s.at(24, 31), Rgb565Be::default());
        // a cell past the edge wraps back onto the canvas
        let mut cell = s.cell_at(8, 0);
        cell.set(64, 0, &Rgba8::RED);
        assert_eq!(s.at(0, 0), Rgb565Be::new(255, 0, 0));
    }

    #[test]
    fn cell_drops_writes_outside_its_bounds() {
        let mut s = screen();
        let mut cell = s.cell_at(1, 0);
        cell.set(7, 0, &Rgba8::RED);
        cell.set(16, 0, &Rgba8::RED);
        cell.set(8, 0, &Rgba8::RED);
        assert_eq!(s.at(7, 0), Rgb565Be::default());
        assert_eq!(s.at(16, 0), Rgb565Be::default());
        assert_eq!(s.at(8, 0), Rgb565Be::new(255, 0, 0));
    }

    #[test]
    fn pan_accepts_extreme_deltas() {
        let mut s: SoftScreen<Rgb565Be> = SoftScreen::new(
            Rect::new(0, 0, 8, 8),
            Rect::new(0, 0, 16, 16),
            Rect::new(0, 0, 32, 32),
        )
        .unwrap();
        s.pan(i32::MAX, 0);
        assert_eq!(s.viewport(), Rect::new(31, 0, 47, 16));
        s.pan(i32::MIN, i32::MIN);
        assert_eq!(s.viewport(), Rect::new(31, 0, 47, 16));
        s.pan(i32::MAX, i32::MAX);
        assert_eq!(s.viewport().min, Point::new(30, 31));
        s.scroll(i32::MIN);
        assert_eq!(s.viewport().min, Point::new(30, 31));
    }

    #[test]
    fn fill_is_clipped_to_viewport() {
        let mut s = screen();
        s.fill(Rect::new(0, 0, 64, 48), &Rgba8::WHITE);
        assert_eq!(s.at(31, 31), Rgb565Be::new(255, 255, 255));
        assert_eq!(s.at(32, 0), Rgb565Be::default());
    }

    #[test]
    fn missing_model_drops_foreign_colors() {
        let mut s = screen().with_model(None);
        s.set(1, 1, &Rgba8::WHITE);
        assert_eq!(s.at(1, 1), Rgb565Be::default());
        s.set(1, 1, &Rgb565Be(0x1234));
        assert_eq!(s.at(1, 1), Rgb565Be(0x1234));
    }

    #[test]
    fn blit_lands_on_viewport() {
        let mut s = screen();
        let src = FlatBuffer::filled(Rect::new(0, 0, 4, 4), Rgba8::RED);
        s.blit(&src, Point::new(30, 30));
        assert_eq!(s.at(31, 31), Rgb565Be::new(255, 0, 0));
        assert_eq!(s.at(32, 32), Rgb565Be::default());
    }
}
