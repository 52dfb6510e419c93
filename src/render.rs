// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Render module
//!
//! Pixels live in flat byte buffers of a single pixel format. Everything else
//! is layered on top of them.
//!
//! ## Submodules
//! - `color`: RGB565BE and RGBA8 pixels, color models
//! - `buffer`: FlatBuffer, row-major bytes with a stride
//! - `scroll`: linear, region and vector scroll on a FlatBuffer
//! - `image`: Image / Drawer and the other capability traits, software blit and fill
//! - `framebuffer`: dirty-tracked double buffer
//! - `adapter`: Display trait, where a framebuffer is flushed to
//! - `softscreen`: wrapping canvas with viewport and cells
//! - `xform`: non-destructive image views
//! - `png`: PNG import / export (feature `image`)

pub mod adapter;
pub mod buffer;
pub mod color;
pub mod framebuffer;
pub mod image;
#[cfg(feature = "image")]
pub mod png;
pub mod scroll;
pub mod softscreen;
pub mod xform;

// re-export common types
pub use adapter::Display;
pub use buffer::FlatBuffer;
pub use color::{Pixel, PixelColor, Rgb565Be, Rgba8};
pub use framebuffer::Framebuffer;
pub use softscreen::SoftScreen;
