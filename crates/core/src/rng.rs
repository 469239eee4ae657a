//! Seeded pseudo-random streams used by every generation concern.
//!
//! Each concern owns its own [`RngStream`]; streams are never shared between concerns so
//! that adding a draw in one place cannot shift the sequence seen by another.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RngError {
    #[error("cannot pick from an empty list")]
    EmptyPick,
}

/// Mulberry32: one 32-bit word of state, fast, good enough for gameplay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RngStream {
    source: Mulberry32,
}

impl RngStream {
    pub fn new(seed: u32) -> Self {
        Self { source: Mulberry32::new(seed) }
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.source.next_f64()
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    pub fn int(&mut self, min: i32, max: i32) -> i32 {
        let roll = self.next_f64();
        let span = i64::from(max) - i64::from(min) + 1;
        let value = (roll * span as f64).floor() as i64 + i64::from(min);
        // Rounding can land one past `max`. An inverted range collapses to `max`.
        value.max(i64::from(min)).min(i64::from(max)) as i32
    }

    pub fn float(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// `p <= 0` never succeeds and `p >= 1` always does.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RngError> {
        if items.is_empty() {
            return Err(RngError::EmptyPick);
        }
        let last = i32::try_from(items.len() - 1).unwrap_or(i32::MAX);
        let index = self.int(0, last) as usize;
        Ok(&items[index])
    }
}
