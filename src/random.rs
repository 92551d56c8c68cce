//! Random source capability.
//!
//! Passes never reach for a global RNG; they draw through a [`RandomSource`] handed to
//! the orchestrator. Production uses an OS-seeded [`SeededRandom`]; tests pin a seed or
//! use [`FixedRandom`] to force every gate open (`0.0`) or shut (`1.0`).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0,1)`.
pub trait RandomSource: Send {
    fn next_f64(&mut self) -> f64;
}

/// `StdRng`-backed source; OS-seeded by default, reproducible via [`SeededRandom::seeded`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_os()
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Returns the same value forever.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    value: f64,
}

impl FixedRandom {
    pub fn new(value: f64) -> Self {
        Self {
            value: if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) },
        }
    }

    /// Every `chance(p > 0)` succeeds and every pick takes the first entry.
    pub fn always() -> Self {
        Self::new(0.0)
    }

    /// No `chance(p <= 1)` ever succeeds.
    pub fn never() -> Self {
        Self::new(1.0)
    }
}

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.value
    }
}

/// Thin helper over a borrowed source with the draws passes actually need.
pub struct Dice<'a> {
    src: &'a mut dyn RandomSource,
}

impl<'a> Dice<'a> {
    pub fn new(src: &'a mut dyn RandomSource) -> Self {
        Self { src }
    }

    /// Raw draw, clamped into `[0,1)`.
    pub fn draw(&mut self) -> f64 {
        let v = self.src.next_f64();
        if v.is_nan() {
            0.0
        } else {
            v.clamp(0.0, 1.0)
        }
    }

    /// `true` with probability `p` (clamped to `[0,1]`).
    pub fn chance(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.draw() < p
    }

    /// Uniform index in `0..len`; `None` for an empty range.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let i = (self.draw() * len as f64).floor() as usize;
        Some(i.min(len - 1))
    }

    /// Uniform pick from `pool`.
    pub fn pick<'p>(&mut self, pool: &[&'p str]) -> Option<&'p str> {
        self.index(pool.len()).map(|i| pool[i])
    }
}
