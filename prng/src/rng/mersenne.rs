//! MT19937-64, the 64-bit Mersenne Twister
//!
//! Bit-exact with the reference generator by Takuji Nishimura and Makoto
//! Matsumoto, including both seeding procedures (`init_genrand64` and
//! `init_by_array64`).
//!
//! # Algorithm
//!
//! The state is 312 words. Every 312 draws the whole array is regenerated
//! in place ("twist"), and each output word is passed through a fixed
//! tempering transform before it is returned.

use super::{float64_closed_from, float64_from, int63_from, Algorithm, Generator, StateError};
use std::fmt;
use thiserror::Error;

/// Number of state words
pub const NN: usize = 312;

/// Offset of the word mixed in during the twist
pub const MM: usize = 156;

/// Twist matrix, selected when the low bit of the combined word is set
pub const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;

/// Most significant 33 bits
const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;

/// Least significant 31 bits
const LOWER_MASK: u64 = 0x7FFF_FFFF;

/// LCG multiplier of scalar seeding
const SCALAR_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Multiplier of the first key-mixing pass
const KEY_MULTIPLIER: u64 = 3_935_559_000_370_003_845;

/// Multiplier of the second key-mixing pass
const MIX_MULTIPLIER: u64 = 2_862_933_555_777_941_757;

/// Scalar seed applied before mixing in a key array
pub const BOOTSTRAP_SEED: u64 = 19_650_218;

/// Errors that can occur while seeding a Mersenne Twister
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed key array must contain at least one word")]
    EmptyKey,
}

/// MT19937-64 generator
///
/// # Example
/// ```
/// use prng_core_rs::Mt64;
///
/// let mut rng = Mt64::new(5489);
/// assert_eq!(rng.next_u64(), 14514284786278117030);
///
/// let mut keyed = Mt64::from_keys(&[0x12345, 0x23456, 0x34567, 0x45678]).unwrap();
/// assert_eq!(keyed.next_u64(), 7266447313870364031);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Mt64 {
    mt: [u64; NN],
    /// Words of the current batch already consumed; `NN` means exhausted
    mti: usize,
    mag01: [u64; 2],
}

impl Mt64 {
    /// Create a generator from a single seed
    ///
    /// Any seed is valid, including zero.
    pub fn new(seed: u64) -> Self {
        let mut mt = [0u64; NN];
        mt[0] = seed;
        for i in 1..NN {
            let prev = mt[i - 1];
            mt[i] = SCALAR_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }

        Self {
            mt,
            mti: NN,
            mag01: [0, MATRIX_A],
        }
    }

    /// Create a generator from a key array of any non-zero length
    ///
    /// # Errors
    /// Returns [`SeedError::EmptyKey`] if `keys` is empty.
    pub fn from_keys(keys: &[u64]) -> Result<Self, SeedError> {
        if keys.is_empty() {
            return Err(SeedError::EmptyKey);
        }

        let mut rng = Self::new(BOOTSTRAP_SEED);
        rng.mix_keys(keys);
        Ok(rng)
    }

    /// Rebuild a generator from captured state
    ///
    /// # Errors
    /// Rejects a batch index past `NN` and an all-zero state array.
    pub fn from_state(mt: [u64; NN], mti: usize) -> Result<Self, StateError> {
        let limit = Algorithm::Mt64.state_words();
        if mti > limit {
            return Err(StateError::PositionOutOfRange {
                algorithm: Algorithm::Mt64,
                position: mti,
                limit,
            });
        }
        if mt.iter().all(|&w| w == 0) {
            return Err(StateError::AllZero {
                algorithm: Algorithm::Mt64,
            });
        }

        Ok(Self {
            mt,
            mti,
            mag01: [0, MATRIX_A],
        })
    }

    fn mix_keys(&mut self, keys: &[u64]) {
        let mt = &mut self.mt;
        let mut i = 1;
        let mut j = 0;

        for _ in 0..NN.max(keys.len()) {
            let prev = mt[i - 1];
            mt[i] = (mt[i] ^ (prev ^ (prev >> 62)).wrapping_mul(KEY_MULTIPLIER))
                .wrapping_add(keys[j])
                .wrapping_add(j as u64);
            i += 1;
            j += 1;
            if i >= NN {
                mt[0] = mt[NN - 1];
                i = 1;
            }
            if j >= keys.len() {
                j = 0;
            }
        }

        for _ in 0..NN - 1 {
            let prev = mt[i - 1];
            mt[i] = (mt[i] ^ (prev ^ (prev >> 62)).wrapping_mul(MIX_MULTIPLIER))
                .wrapping_sub(i as u64);
            i += 1;
            if i >= NN {
                mt[0] = mt[NN - 1];
                i = 1;
            }
        }

        // MSB set: the array can never be all zero
        mt[0] = 1 << 63;
    }

    /// Regenerate all NN words in place
    fn twist(&mut self) {
        let mag01 = self.mag01;
        let mt = &mut self.mt;

        for i in 0..NN - MM {
            let x = (mt[i] & UPPER_MASK) | (mt[i + 1] & LOWER_MASK);
            mt[i] = mt[i + MM] ^ (x >> 1) ^ mag01[(x & 1) as usize];
        }
        for i in NN - MM..NN - 1 {
            let x = (mt[i] & UPPER_MASK) | (mt[i + 1] & LOWER_MASK);
            mt[i] = mt[i - (NN - MM)] ^ (x >> 1) ^ mag01[(x & 1) as usize];
        }
        let x = (mt[NN - 1] & UPPER_MASK) | (mt[0] & LOWER_MASK);
        mt[NN - 1] = mt[MM - 1] ^ (x >> 1) ^ mag01[(x & 1) as usize];

        self.mti = 0;
    }

    /// Generate next random u64 value
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        if self.mti >= NN {
            self.twist();
        }

        let mut x = self.mt[self.mti];
        self.mti += 1;

        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71D6_7FFF_EDA6_0000;
        x ^= (x << 37) & 0xFFF7_EEE0_0000_0000;
        x ^= x >> 43;
        x
    }

    /// Generate a signed integer in [0, 2^63 - 1]
    #[inline]
    pub fn next_i63(&mut self) -> i64 {
        int63_from(self.next_u64())
    }

    /// Generate a double in [0, 1)
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        float64_from(self.next_u64())
    }

    /// Generate a double in [0, 1]
    #[inline]
    pub fn next_f64_closed(&mut self) -> f64 {
        float64_closed_from(self.next_u64())
    }

    /// State words and batch index (for checkpointing/replay)
    pub fn state(&self) -> (&[u64; NN], usize) {
        (&self.mt, self.mti)
    }
}

impl Generator for Mt64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        Mt64::next_u64(self)
    }
}

impl fmt::Debug for Mt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt64")
            .field("mti", &self.mti)
            .finish_non_exhaustive()
    }
}
