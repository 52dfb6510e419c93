// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Display Adapter
//!
//! The seam between a framebuffer and whatever presents its pixels. A panel
//! driver implements `Display` by streaming a rectangle of native bytes over
//! its bus; a `FlatBuffer` implements it by copying rows.
//!
//! ```text
//! ┌──────────────────────┐  flush_to   ┌──────────────────────┐
//! │ Framebuffer<P>       │ ──────────► │ impl Display         │
//! │  working FlatBuffer  │ dirty rect  │  (panel, flat buffer)│
//! └──────────────────────┘             └──────────────────────┘
//! ```

use crate::render::buffer::FlatBuffer;
use crate::render::color::Pixel;
use crate::util::Rect;

pub trait Display {
    /// Area the display accepts, in the framebuffer's coordinates
    fn bounds(&self) -> Rect;

    /// Presents one rectangle of pixels
    ///
    /// # Parameters
    /// - `rect`: Destination rect, already clipped to `bounds()`
    /// - `pix`: Native bytes, `pix[0]` is the pixel at `rect.min`
    /// - `stride`: Byte distance between the starts of two rows in `pix`
    fn blit_rect(&mut self, rect: Rect, pix: &[u8], stride: usize);
}

impl<P: Pixel> Display for FlatBuffer<P> {
    fn bounds(&self) -> Rect {
        self.area
    }

    fn blit_rect(&mut self, rect: Rect, pix: &[u8], stride: usize) {
        let r = rect.intersection(self.area);
        if r.is_empty() {
            return;
        }
        let skip = (r.min.y - rect.min.y) as usize * stride
            + (r.min.x - rect.min.x) as usize * P::BYTES;
        let bytes = r.dx() as usize * P::BYTES;
        for (i, y) in (r.min.y..r.max.y).enumerate() {
            let s = skip + i * stride;
            let d = self.pix_offset(r.min.x, y);
            self.pix[d..d + bytes].copy_from_slice(&pix[s..s + bytes]);
        }
    }
}
