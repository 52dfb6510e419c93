// RustPixel
// copyright zipxing@hotmail.com 2022～2025

use crate::util::{Point, Rect};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro256StarStar,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seeded Xoshiro256** generator, used for reproducible test patterns
pub struct Rand {
    rng: Xoshiro256StarStar,
}

impl Default for Rand {
    fn default() -> Self {
        Rand::new()
    }
}

impl Rand {
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(0),
        }
    }

    pub fn srand(&mut self, seed: u64) {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
    }

    pub fn srand_now(&mut self) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.srand(seed);
    }

    pub fn rand64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn rand(&mut self) -> u32 {
        self.rng.next_u64() as u32
    }

    pub fn rand_u8(&mut self) -> u8 {
        (self.rng.next_u64() >> 56) as u8
    }

    /// Uniform-ish value in `[min, max)`; returns `min` for an empty range.
    pub fn rand_range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64) as u64;
        (min as i64 + (self.rng.next_u64() % span) as i64) as i32
    }

    /// A point inside `r`, or `r.min` when `r` is empty.
    pub fn rand_point(&mut self, r: Rect) -> Point {
        Point::new(
            self.rand_range(r.min.x, r.max.x),
            self.rand_range(r.min.y, r.max.y),
        )
    }
}
