// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Utilities for points, rects and the signed modulo used by every
//! wraparound address in the crate.
//! A seeded RNG lives in rand.rs.

use serde::{Deserialize, Serialize};
use std::cmp::{max, min};

mod rand;
pub use rand::*;

/// Reduces `v + delta` into `[0, extent)`.
///
/// This is `(v + delta + extent) % extent` for `|delta| <= extent`, and keeps
/// working for larger or more negative deltas.
///
/// `extent` must be positive.
#[inline]
pub fn wrap(v: i32, delta: i32, extent: i32) -> i32 {
    debug_assert!(extent > 0, "wrap: extent must be positive, got {}", extent);
    (v + delta).rem_euclid(extent)
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub fn zero() -> Point {
        Point::default()
    }

    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// The point inside `r` that is congruent to self modulo r's width and height.
    /// Negative coordinates wrap too.
    pub fn mod_rect(self, r: Rect) -> Point {
        let p = self.sub(r.min);
        Point::new(wrap(p.x, 0, r.dx()), wrap(p.y, 0, r.dy())).add(r.min)
    }

    pub fn in_rect(self, r: Rect) -> bool {
        r.min.x <= self.x && self.x < r.max.x && r.min.y <= self.y && self.y < r.max.y
    }
}

/// Half-open rectangle, `max` is exclusive.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Builds a rect from two corners, swapping them if needed.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
        Rect {
            min: Point::new(min(x0, x1), min(y0, y1)),
            max: Point::new(max(x0, x1), max(y0, y1)),
        }
    }

    pub fn from_size(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect::new(x, y, x + width, y + height)
    }

    pub fn dx(self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn dy(self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn area(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.dx() as usize * self.dy() as usize
        }
    }

    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Equal when both cover the same pixels; all empty rects are equal.
    pub fn eq_rect(self, other: Rect) -> bool {
        self == other || (self.is_empty() && other.is_empty())
    }

    pub fn add(self, p: Point) -> Rect {
        Rect {
            min: self.min.add(p),
            max: self.max.add(p),
        }
    }

    pub fn sub(self, p: Point) -> Rect {
        Rect {
            min: self.min.sub(p),
            max: self.max.sub(p),
        }
    }

    /// Largest rect contained by both. An empty intersection is `Rect::default()`.
    pub fn intersection(self, other: Rect) -> Rect {
        let r = Rect {
            min: Point::new(max(self.min.x, other.min.x), max(self.min.y, other.min.y)),
            max: Point::new(min(self.max.x, other.max.x), min(self.max.y, other.max.y)),
        };
        if r.is_empty() {
            return Rect::default();
        }
        r
    }

    /// Smallest rect containing both. Empty operands are ignored.
    pub fn union(self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Rect {
            min: Point::new(min(self.min.x, other.min.x), min(self.min.y, other.min.y)),
            max: Point::new(max(self.max.x, other.max.x), max(self.max.y, other.max.y)),
        }
    }

    /// True if the two rects share at least one pixel.
    pub fn overlaps(self, other: Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn contains(self, p: Point) -> bool {
        p.in_rect(self)
    }
}
