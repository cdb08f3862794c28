//! Fast PRNG for trial simulation. Uses SplitMix64 for throughput and good statistical quality.
//! Deterministic: same seed produces the same sequence. Not cryptographically secure.
//!
//! The generator is passed explicitly into every probabilistic call so batches
//! are replayable from a seed; use [Rng::from_entropy] when replay is not needed.

use std::f64::consts::PI;

use tracing::warn;

const SPLITMIX64_GOLDEN: u64 = 0x9e3779b97f4a7c15;
const SPLITMIX64_M1: u64 = 0xbf58476d1ce4e5b9;
const SPLITMIX64_M2: u64 = 0x94d049bb133111eb;

#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from OS entropy. Falls back to a fixed seed (with a warning) if
    /// the entropy source fails, which keeps the simulator usable in
    /// sandboxed hosts at the cost of determinism across processes.
    pub fn from_entropy() -> Self {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_err() {
            warn!("entropy source unavailable, seeding from a fixed constant");
            return Self::new(SPLITMIX64_GOLDEN);
        }
        Self::new(u64::from_le_bytes(buf))
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(SPLITMIX64_GOLDEN);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX64_M1);
        z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX64_M2);
        z ^ (z >> 31)
    }

    /// Uniform u32, full range.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform float in [0, 1) with 53 bits of precision.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform float in [min, max).
    #[inline]
    pub fn uniform_range(&mut self, min: f64, max: f64) -> f64 {
        self.uniform() * (max - min) + min
    }

    /// Normal-ish draw matching the game engine's `randfn`: a Box-Muller variant
    /// where the deviation sits under the square root instead of scaling the
    /// unit variate. Kept for distribution parity with the reference engine.
    #[inline]
    pub fn normal(&mut self, mean: f64, deviation: f64) -> f64 {
        let u = self.uniform();
        let v = self.uniform();
        (-2.0 * deviation * u.ln()).sqrt() * (2.0 * PI * v).cos() + mean
    }
}

/// Snap `s` to the nearest multiple of `step`, rounding half up.
/// Matches the engine's `stepify`; `stepify(x, 0.01)` rounds to 2 decimals.
#[inline]
pub fn stepify(s: f64, step: f64) -> f64 {
    if step != 0.0 {
        (s / step + 0.5).floor() * step
    } else {
        s
    }
}
