//! 16-bit Galois LFSR used for ship placement and AI targeting.
//!
//! The generator implements [`RngCore`] and [`SeedableRng`] so it plugs into
//! the `rand` API; any other generator can be injected in its place.

use rand::{RngCore, SeedableRng};

/// Seed substituted for zero, which would lock the register.
pub const DEFAULT_SEED: u16 = 0xACE1;

/// Feedback taps for the maximal-length polynomial x^16 + x^14 + x^13 + x^11 + 1.
const TAPS: u16 = 0xB400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lfsr16 {
    state: u16,
}

impl Lfsr16 {
    pub fn new(seed: u16) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Fold noisy analog samples (e.g. a floating ADC pin) into a seed.
    pub fn from_noise<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        let seed = samples
            .into_iter()
            .fold(0u16, |acc, s| acc.rotate_left(3) ^ s);
        Self::new(seed)
    }

    /// Re-seed in place; zero maps to [`DEFAULT_SEED`].
    pub fn reseed(&mut self, seed: u16) {
        *self = Self::new(seed);
    }

    pub fn next_u16(&mut self) -> u16 {
        let lsb = self.state & 1;
        self.state = (self.state >> 1) ^ (0u16.wrapping_sub(lsb) & TAPS);
        self.state
    }
}

impl Default for Lfsr16 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for Lfsr16 {
    fn next_u32(&mut self) -> u32 {
        (u32::from(self.next_u16()) << 16) | u32::from(self.next_u16())
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(2) {
            let bytes = self.next_u16().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Lfsr16 {
    type Seed = [u8; 2];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u16::from_le_bytes(seed))
    }
}
