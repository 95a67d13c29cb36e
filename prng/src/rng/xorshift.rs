//! xorshift64* and xorshift1024* random number generators
//!
//! Both follow Vigna, "An experimental exploration of Marsaglia's xorshift
//! generators, scrambled": an xorshift linear recurrence whose output is
//! scrambled by multiplying with a fixed odd 64-bit constant.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. Shift amounts, multipliers
//! and the seeding procedure are bit-exact with the reference generators;
//! changing any of them yields a different stream that still looks random.

use super::{float64_closed_from, float64_from, int63_from, Algorithm, Generator, StateError};
use serde::{Deserialize, Serialize};

/// Output multiplier of xorshift64*
const MUL64: u64 = 2_685_821_657_736_338_717;

/// Output multiplier of xorshift1024*
const MUL1024: u64 = 1_181_783_497_276_652_981;

/// Seed substituted for zero, the fixed point of the xorshift recurrence
pub const XORSHIFT64_FALLBACK_SEED: u64 = 1;

/// xorshift64*: a single 64-bit word of state
///
/// # Example
/// ```
/// use prng_core_rs::Xorshift64Star;
///
/// let mut rng = Xorshift64Star::new(1);
/// assert_eq!(rng.next_u64(), 5180492295206395165);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Xorshift64StarState", into = "Xorshift64StarState")]
pub struct Xorshift64Star {
    /// Internal state, never zero
    state: u64,
}

impl Xorshift64Star {
    /// Create a new generator from a seed
    ///
    /// A zero seed would lock the recurrence at zero forever, so it is
    /// replaced by [`XORSHIFT64_FALLBACK_SEED`]. Every other seed is used
    /// unchanged, which also means `new(state())` resumes the stream.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 {
            XORSHIFT64_FALLBACK_SEED
        } else {
            seed
        };
        Self { state }
    }

    /// Generate next random u64 value
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(MUL64)
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

    /// Current state word (for checkpointing/replay)
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Rebuild a generator from a captured state word
    ///
    /// Unlike [`Xorshift64Star::new`], zero is an error here: a captured
    /// state can never be zero, so a zero word means corrupted input.
    pub fn from_state(state: u64) -> Result<Self, StateError> {
        if state == 0 {
            return Err(StateError::AllZero {
                algorithm: Algorithm::Xorshift64Star,
            });
        }
        Ok(Self { state })
    }
}

/// Serialized form of [`Xorshift64Star`], validated on the way in
#[derive(Serialize, Deserialize)]
struct Xorshift64StarState {
    state: u64,
}

impl TryFrom<Xorshift64StarState> for Xorshift64Star {
    type Error = StateError;

    fn try_from(raw: Xorshift64StarState) -> Result<Self, Self::Error> {
        Xorshift64Star::from_state(raw.state)
    }
}

impl From<Xorshift64Star> for Xorshift64StarState {
    fn from(rng: Xorshift64Star) -> Self {
        Self { state: rng.state }
    }
}

impl Generator for Xorshift64Star {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        Xorshift64Star::next_u64(self)
    }
}

/// xorshift1024*: sixteen 64-bit words of state plus a cursor
///
/// The recommended xorshift variant whenever 128 bytes of state are
/// acceptable; its period is 2^1024 - 1.
///
/// # Example
/// ```
/// use prng_core_rs::Xorshift1024Star;
///
/// let mut rng = Xorshift1024Star::new(1234);
/// assert_eq!(rng.next_u64(), 9043906794109835823);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Xorshift1024StarState", into = "Xorshift1024StarState")]
pub struct Xorshift1024Star {
    state: [u64; 16],
    /// Slot read first by the next draw, always in [0, 16)
    cursor: usize,
}

impl Xorshift1024Star {
    /// Create a new generator from a seed
    ///
    /// The sixteen state words are the first sixteen outputs of a
    /// [`Xorshift64Star`] seeded with the same value.
    pub fn new(seed: u64) -> Self {
        let mut seeder = Xorshift64Star::new(seed);
        let mut state = [0u64; 16];
        for word in state.iter_mut() {
            *word = seeder.next_u64();
        }
        Self { state, cursor: 0 }
    }

    /// Rebuild a generator from captured state
    ///
    /// # Errors
    /// Rejects a cursor outside [0, 16) and an all-zero state.
    pub fn from_state(state: [u64; 16], cursor: usize) -> Result<Self, StateError> {
        let limit = Algorithm::Xorshift1024Star.state_words();
        if cursor >= limit {
            return Err(StateError::PositionOutOfRange {
                algorithm: Algorithm::Xorshift1024Star,
                position: cursor,
                limit,
            });
        }
        if state.iter().all(|&w| w == 0) {
            return Err(StateError::AllZero {
                algorithm: Algorithm::Xorshift1024Star,
            });
        }
        Ok(Self { state, cursor })
    }

    /// Generate next random u64 value
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut s0 = self.state[self.cursor];
        self.cursor = (self.cursor + 1) & 15;
        let mut s1 = self.state[self.cursor];
        s1 ^= s1 << 31;
        s1 ^= s1 >> 11;
        s0 ^= s0 >> 30;
        self.state[self.cursor] = s0 ^ s1;
        self.state[self.cursor].wrapping_mul(MUL1024)
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

    /// State words and cursor (for checkpointing/replay)
    pub fn state(&self) -> (&[u64; 16], usize) {
        (&self.state, self.cursor)
    }
}

/// Serialized form of [`Xorshift1024Star`], validated on the way in
#[derive(Serialize, Deserialize)]
struct Xorshift1024StarState {
    state: [u64; 16],
    cursor: usize,
}

impl TryFrom<Xorshift1024StarState> for Xorshift1024Star {
    type Error = StateError;

    fn try_from(raw: Xorshift1024StarState) -> Result<Self, Self::Error> {
        Xorshift1024Star::from_state(raw.state, raw.cursor)
    }
}

impl From<Xorshift1024Star> for Xorshift1024StarState {
    fn from(rng: Xorshift1024Star) -> Self {
        Self {
            state: rng.state,
            cursor: rng.cursor,
        }
    }
}

impl Generator for Xorshift1024Star {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        Xorshift1024Star::next_u64(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = Xorshift64Star::new(0);
        assert_eq!(rng.state(), XORSHIFT64_FALLBACK_SEED);
    }

    #[test]
    fn test_zero_seed_stream_is_not_constant() {
        let mut rng = Xorshift64Star::new(0);
        let first = rng.next_u64();
        assert_ne!(first, 0);
        assert_ne!(first, rng.next_u64());
    }

    #[test]
    fn test_first_draw_from_seed_one() {
        // 1 ^ (1 >> 12) = 1; 1 ^ (1 << 25) = 0x2000001; >> 27 is zero
        let mut rng = Xorshift64Star::new(1);
        assert_eq!(rng.next_u64(), 0x2000001u64.wrapping_mul(MUL64));
        assert_eq!(rng.state(), 0x2000001);
    }

    #[test]
    fn test_resume_from_state() {
        let mut rng1 = Xorshift64Star::new(12345);
        for _ in 0..10 {
            rng1.next_u64();
        }

        let mut rng2 = Xorshift64Star::new(rng1.state());
        for _ in 0..10 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_1024_state_comes_from_xorshift64() {
        let mut seeder = Xorshift64Star::new(99);
        let rng = Xorshift1024Star::new(99);
        let (state, cursor) = rng.state();

        assert_eq!(cursor, 0);
        for word in state.iter() {
            assert_eq!(*word, seeder.next_u64());
        }
    }

    #[test]
    fn test_1024_cursor_wraps() {
        let mut rng = Xorshift1024Star::new(5);
        for expected in 1..=16 {
            rng.next_u64();
            assert_eq!(rng.state().1, expected & 15);
        }
    }

    #[test]
    fn test_1024_zero_seed_state_not_all_zero() {
        let rng = Xorshift1024Star::new(0);
        assert!(rng.state().0.iter().any(|&w| w != 0));
    }

    #[test]
    fn test_from_state_rejects_zero_word() {
        assert_eq!(
            Xorshift64Star::from_state(0),
            Err(StateError::AllZero {
                algorithm: Algorithm::Xorshift64Star
            })
        );
        assert_eq!(Xorshift64Star::from_state(7).unwrap().state(), 7);
    }

    #[test]
    fn test_from_state_rejects_bad_cursor_and_zero_array() {
        let err = Xorshift1024Star::from_state([1; 16], 16).unwrap_err();
        assert_eq!(
            err,
            StateError::PositionOutOfRange {
                algorithm: Algorithm::Xorshift1024Star,
                position: 16,
                limit: 16,
            }
        );
        assert!(Xorshift1024Star::from_state([0; 16], 0).is_err());
        assert!(Xorshift1024Star::from_state([1; 16], 15).is_ok());
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = Xorshift1024Star::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }
}
