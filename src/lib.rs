// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! pixel_fb is a software framebuffer for pixel displays that have no
//! acceleration of their own, such as small SPI panels on embedded boards.
//!
//! It offers a bit-exact RGB565 codec in the byte order those panels expect
//! (RGB565BE), a flat pixel buffer generic over its pixel format, a
//! framebuffer with dirty-rectangle tracking and double buffering, and a
//! SoftScreen: a ring-buffer canvas with a panning viewport and a cell grid.
//!
//! In pixel_fb, pixels are stored as raw bytes in a FlatBuffer and managed by
//! a Framebuffer or a SoftScreen. Scrolls and same-format blits move whole
//! rows of bytes; anything else goes through per-pixel color conversion.
//!
//! ```
//! use pixel_fb::prelude::*;
//!
//! let panel: FlatBuffer<Rgb565Be> = FlatBuffer::empty(Rect::new(0, 0, 240, 135));
//! let mut fb = Framebuffer::with_double_buffer(panel).unwrap();
//! fb.fill(Rect::new(0, 0, 240, 16), &Rgba8::BLUE);
//! fb.vector_scroll(Rect::new(0, 0, 240, 135), Point::new(0, 8));
//! fb.flush();
//! ```
//!
//! The log4rs feature (default) provides a file logger, the image feature
//! (default) provides PNG export. Without them only the core compiles.

/// crate version, shown by the demo tool
pub const PIXEL_FB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// error type shared by constructors, config loading and image export
pub mod error;

/// screen geometry, pixel format and log settings loaded from toml
pub mod config;

/// log
pub mod log;

/// common tools and data structures:
/// point, rect, signed wrap, RNG
pub mod util;

/// Render module, it provides the pixel codec and every kind of buffer.
/// color: pixel formats and the conversion contract.
/// buffer: a flat, row-major byte buffer of one pixel format.
/// scroll: linear, region and toroidal vector scrolling on flat buffers.
/// image: capability traits and the software blit / fill fallbacks.
/// framebuffer: dirty-tracked, double-buffered framebuffer.
/// softscreen: wrapping canvas with a panning viewport and cells.
/// xform: non-destructive views such as flip, translate and blur.
pub mod render;

pub use error::{PixelError, Result};

/// Everything needed to draw into a framebuffer or soft screen.
pub mod prelude {
    pub use crate::error::{PixelError, Result};
    pub use crate::render::adapter::Display;
    pub use crate::render::buffer::FlatBuffer;
    pub use crate::render::color::{
        decode, encode, ColorModel, Pixel, PixelColor, Rgb565Be, Rgba8,
    };
    pub use crate::render::framebuffer::Framebuffer;
    pub use crate::render::image::{
        Blitter, DoubleBufferer, Drawer, Filler, Image, RegionScroller, Scroller, VectorScroller,
    };
    pub use crate::render::softscreen::{CellView, SoftScreen};
    pub use crate::util::{Point, Rect};
}
