// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! PNG import and export, used to check frames by eye and to load sprites.

use crate::error::{PixelError, Result};
use crate::render::buffer::FlatBuffer;
use crate::render::color::{PixelColor, Rgba8};
use crate::render::image::{for_all_pix, Image};
use crate::util::Rect;
use log::info;
use std::path::Path;

/// Renders `img` over its bounds into RGBA8 bytes, row-major.
pub fn rgba_bytes<I: Image + ?Sized>(img: &I) -> Vec<u8> {
    let b = img.bounds();
    let mut out = Vec::with_capacity(b.area() * 4);
    for_all_pix(b, |x, y| {
        let (r, g, bl, a) = img.at(x, y).rgba();
        out.extend_from_slice(&[(r >> 8) as u8, (g >> 8) as u8, (bl >> 8) as u8, (a >> 8) as u8]);
    });
    out
}

/// Saves the pixels inside `img.bounds()` as an RGBA8 PNG.
pub fn save_png<I: Image + ?Sized, Q: AsRef<Path>>(path: Q, img: &I) -> Result<()> {
    let b = img.bounds();
    if b.is_empty() {
        return Err(PixelError::EmptyRect("image", b));
    }
    let data = rgba_bytes(img);
    ::image::save_buffer(
        path.as_ref(),
        &data,
        b.dx() as u32,
        b.dy() as u32,
        ::image::ColorType::Rgba8,
    )
    .map_err(|e| PixelError::Image(format!("{}: {}", path.as_ref().display(), e)))?;
    info!("saved {}x{} png to {}", b.dx(), b.dy(), path.as_ref().display());
    Ok(())
}

/// Loads a PNG (or any format the image crate knows) into a buffer at (0, 0).
pub fn load_png<Q: AsRef<Path>>(path: Q) -> Result<FlatBuffer<Rgba8>> {
    let img = ::image::open(path.as_ref())
        .map_err(|e| PixelError::Image(format!("{}: {}", path.as_ref().display(), e)))?
        .to_rgba8();
    let area = Rect::new(0, 0, img.width() as i32, img.height() as i32);
    FlatBuffer::from_bytes(area, img.into_raw()).ok_or(PixelError::SizeMismatch(area, area))
}
