// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Scroll engine for flat buffers.
//!
//! All three scrolls move whole byte ranges with `copy_within` or slice
//! rotation. Pixels are never decoded.
//!
//! - `scroll_linear`: the whole buffer, rows scrolled in keep stale data
//! - `region_scroll`: a clipped rect, rows scrolled in keep stale data
//! - `vector_scroll`: a toroidal shift inside a rect, nothing is lost
//!
//! Positive amounts move content up (row y receives row y + amount).

use crate::render::buffer::FlatBuffer;
use crate::render::color::Pixel;
use crate::util::{wrap, Point, Rect};
use log::debug;

/// Scrolls the whole buffer by `amount` rows. `|amount|` is clamped to the height.
pub fn scroll_linear<P: Pixel>(buf: &mut FlatBuffer<P>, amount: i32) {
    if amount == 0 || buf.area.is_empty() {
        return;
    }
    let rows = amount.unsigned_abs().min(buf.area.dy() as u32) as usize;
    let shift = rows * buf.stride;
    let len = buf.pix.len();
    if amount > 0 {
        buf.pix.copy_within(shift..len, 0);
    } else {
        // copy_within is a memmove, so the overlapping backward copy is safe
        buf.pix.copy_within(0..len - shift, shift);
    }
}

/// Scrolls the rows of `rect` by `amount`, only within the rect's columns.
///
/// Returns the touched rect, empty when nothing was done.
pub fn region_scroll<P: Pixel>(buf: &mut FlatBuffer<P>, rect: Rect, amount: i32) -> Rect {
    let r = rect.intersection(buf.area);
    if r.is_empty() || amount == 0 {
        return Rect::default();
    }
    let k = amount.unsigned_abs().min(r.dy() as u32) as i32;
    if amount > 0 {
        for y in r.min.y..r.max.y - k {
            move_row(buf, y + k, y, r.min.x, r.max.x);
        }
    } else {
        for y in (r.min.y + k..r.max.y).rev() {
            move_row(buf, y - k, y, r.min.x, r.max.x);
        }
    }
    debug!("region_scroll {:?} by {}", r, amount);
    r
}

/// Shifts `rect` toroidally: local `(x, y)` receives local
/// `((x + v.x) mod w, (y + v.y) mod h)`.
///
/// The result is an exact permutation of the rect's pixels, so scrolling by
/// `v` and then by `-v` restores the original. Returns the touched rect.
pub fn vector_scroll<P: Pixel>(buf: &mut FlatBuffer<P>, rect: Rect, v: Point) -> Rect {
    let r = rect.intersection(buf.area);
    if r.is_empty() || v == Point::zero() {
        return Rect::default();
    }
    let (w, h) = (r.dx(), r.dy());

    let sx = wrap(v.x, 0, w) as usize;
    if sx != 0 {
        for y in r.min.y..r.max.y {
            let span = buf.row_span(y, r.min.x, r.max.x);
            buf.pix[span].rotate_left(sx * P::BYTES);
        }
    }

    // rows rotate in place: reverse [0, sy), reverse [sy, h), reverse all
    let sy = wrap(v.y, 0, h);
    if sy != 0 {
        reverse_rows(buf, r.min.y, r.min.y + sy, r.min.x, r.max.x);
        reverse_rows(buf, r.min.y + sy, r.max.y, r.min.x, r.max.x);
        reverse_rows(buf, r.min.y, r.max.y, r.min.x, r.max.x);
    }
    debug!("vector_scroll {:?} by ({}, {})", r, v.x, v.y);
    r
}

#[inline]
fn move_row<P: Pixel>(buf: &mut FlatBuffer<P>, from_y: i32, to_y: i32, x0: i32, x1: i32) {
    let src = buf.row_span(from_y, x0, x1);
    let dst = buf.pix_offset(x0, to_y);
    buf.pix.copy_within(src, dst);
}

/// Reverses the order of rows `[y0, y1)` within columns `[x0, x1)`.
fn reverse_rows<P: Pixel>(buf: &mut FlatBuffer<P>, y0: i32, y1: i32, x0: i32, x1: i32) {
    let (mut lo, mut hi) = (y0, y1 - 1);
    while lo < hi {
        let a = buf.row_span(lo, x0, x1);
        let b = buf.row_span(hi, x0, x1);
        let (head, tail) = buf.pix.split_at_mut(b.start);
        head[a].swap_with_slice(&mut tail[..b.len()]);
        lo += 1;
        hi -= 1;
    }
}
