//! Seeded "minimal standard" (Park–Miller) sequence used for synthetic datasets.
//!
//! Recurrence: `s[n+1] = s[n] * 16807 mod 2147483647`, output
//! `(s[n+1] - 1) / 2147483646`, which always lies in `[0, 1)`.
//!
//! Every dataset build owns a private instance. Two instances created from the
//! same seed produce the same stream forever, which is what makes the reference
//! datasets reproducible across builds and platforms.

use rand::{Error, RngCore, SeedableRng};

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 16_807;
const U32_SPAN: f64 = 4_294_967_296.0;

/// Deterministic pseudo-random stream keyed by an integer seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededSequence {
    state: u64,
}

impl SeededSequence {
    /// A seed congruent to 0 would lock the recurrence at zero, so it is remapped
    /// to the largest valid state.
    pub fn new(seed: u64) -> Self {
        let mut state = seed % MODULUS;
        if state == 0 {
            state = MODULUS - 1;
        }
        Self { state }
    }

    /// Current internal state (the last emitted `s[n]`).
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the stream and returns the next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.step();
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// `floor(next_unit() * range) + offset`; the response-count draw.
    pub fn draw_count(&mut self, range: u32, offset: u32) -> u32 {
        (self.next_unit() * f64::from(range)).floor() as u32 + offset
    }

    /// Uniform value in `[low, high)`.
    pub fn draw_between(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }

    fn step(&mut self) {
        self.state = self.state * MULTIPLIER % MODULUS;
    }
}

impl Iterator for SeededSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_unit())
    }
}

impl RngCore for SeededSequence {
    /// Scales the unit value onto the full `u32` range; the raw state only
    /// covers 31 bits.
    fn next_u32(&mut self) -> u32 {
        (self.next_unit() * U32_SPAN) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededSequence {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
