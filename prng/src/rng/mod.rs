//! Deterministic random number generation
//!
//! Three independent generator algorithms behind one capability:
//!
//! - [`Xorshift64Star`]: one 64-bit word of state, period 2^64 - 1
//! - [`Xorshift1024Star`]: sixteen words of state, period 2^1024 - 1
//! - [`Mt64`]: MT19937-64, 312 words of state, period 2^19937 - 1
//!
//! All of them implement [`Generator`], and the free functions in this
//! module ([`int63`], [`float64_closed`], [`float64`]) derive signed
//! integers and doubles from any generator's raw output.
//!
//! CRITICAL: None of these generators are cryptographically secure.

mod mersenne;
mod xorshift;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use mersenne::{Mt64, SeedError, BOOTSTRAP_SEED, MATRIX_A, MM, NN};
pub use xorshift::{Xorshift1024Star, Xorshift64Star, XORSHIFT64_FALLBACK_SEED};

/// Scale for the closed interval [0, 1]: 1 / (2^53 - 1)
const FLOAT_CLOSED_SCALE: f64 = 1.0 / 9_007_199_254_740_991.0;

/// Scale for the half-open interval [0, 1): 1 / 2^53
const FLOAT_OPEN_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Something that produces the next raw 64-bit value on demand.
///
/// Drawing mutates the generator's internal state. There is no failure
/// mode: every generator in this crate is total over its state space.
///
/// The trait is object safe, so `&mut dyn Generator` can be handed to
/// the free scaling functions. Performance-sensitive callers should bind
/// to the concrete type and use its inherent methods instead.
pub trait Generator {
    /// Draw the next value in [0, 2^64 - 1]
    fn next_u64(&mut self) -> u64;
}

impl<G: Generator + ?Sized> Generator for &mut G {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// Map a raw draw to a signed integer in [0, 2^63 - 1]
#[inline]
pub fn int63_from(raw: u64) -> i64 {
    (raw >> 1) as i64
}

/// Map a raw draw to a double in the closed interval [0, 1]
///
/// Keeps the top 53 bits, the full significand of an `f64`.
#[inline]
pub fn float64_closed_from(raw: u64) -> f64 {
    (raw >> 11) as f64 * FLOAT_CLOSED_SCALE
}

/// Map a raw draw to a double in the half-open interval [0, 1)
#[inline]
pub fn float64_from(raw: u64) -> f64 {
    (raw >> 11) as f64 * FLOAT_OPEN_SCALE
}

/// Draw a signed integer in [0, 2^63 - 1]
///
/// # Example
/// ```
/// use prng_core_rs::{int63, Xorshift64Star};
///
/// let mut rng = Xorshift64Star::new(1234);
/// assert!(int63(&mut rng) >= 0);
/// ```
pub fn int63<G: Generator + ?Sized>(rng: &mut G) -> i64 {
    int63_from(rng.next_u64())
}

/// Draw a double in the closed interval [0, 1]
///
/// # Example
/// ```
/// use prng_core_rs::{float64_closed, Mt64};
///
/// let mut rng = Mt64::new(5489);
/// let value = float64_closed(&mut rng);
/// assert!((0.0..=1.0).contains(&value));
/// ```
pub fn float64_closed<G: Generator + ?Sized>(rng: &mut G) -> f64 {
    float64_closed_from(rng.next_u64())
}

/// Draw a double in the half-open interval [0, 1)
///
/// # Example
/// ```
/// use prng_core_rs::{float64, Generator, Xorshift1024Star};
///
/// let mut rng = Xorshift1024Star::new(1234);
/// let dynamic: &mut dyn Generator = &mut rng;
/// let value = float64(dynamic);
/// assert!(value >= 0.0 && value < 1.0);
/// ```
pub fn float64<G: Generator + ?Sized>(rng: &mut G) -> f64 {
    float64_from(rng.next_u64())
}

/// The generator algorithms this crate provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Xorshift64Star,
    Xorshift1024Star,
    Mt64,
}

impl Algorithm {
    /// Number of 64-bit words of generator state
    pub const fn state_words(self) -> usize {
        match self {
            Algorithm::Xorshift64Star => 1,
            Algorithm::Xorshift1024Star => 16,
            Algorithm::Mt64 => NN,
        }
    }
}

/// Errors that can occur when rebuilding a generator from raw state
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("{algorithm:?} state is all zero")]
    AllZero { algorithm: Algorithm },

    #[error("{algorithm:?} position {position} out of range (limit {limit})")]
    PositionOutOfRange {
        algorithm: Algorithm,
        position: usize,
        limit: usize,
    },
}

/// An owned generator of any supported algorithm
///
/// Dispatch is a `match`, not a vtable, so the draw path stays inlinable.
/// Built by [`crate::config::GeneratorConfig::build`] and restored by
/// [`crate::checkpoint::Checkpoint::restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGenerator {
    Xorshift64Star(Xorshift64Star),
    Xorshift1024Star(Xorshift1024Star),
    Mt64(Box<Mt64>),
}

impl AnyGenerator {
    /// Which algorithm this generator runs
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyGenerator::Xorshift64Star(_) => Algorithm::Xorshift64Star,
            AnyGenerator::Xorshift1024Star(_) => Algorithm::Xorshift1024Star,
            AnyGenerator::Mt64(_) => Algorithm::Mt64,
        }
    }
}

impl Generator for AnyGenerator {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            AnyGenerator::Xorshift64Star(rng) => rng.next_u64(),
            AnyGenerator::Xorshift1024Star(rng) => rng.next_u64(),
            AnyGenerator::Mt64(rng) => rng.next_u64(),
        }
    }
}

impl From<Xorshift64Star> for AnyGenerator {
    fn from(rng: Xorshift64Star) -> Self {
        AnyGenerator::Xorshift64Star(rng)
    }
}

impl From<Xorshift1024Star> for AnyGenerator {
    fn from(rng: Xorshift1024Star) -> Self {
        AnyGenerator::Xorshift1024Star(rng)
    }
}

impl From<Mt64> for AnyGenerator {
    fn from(rng: Mt64) -> Self {
        AnyGenerator::Mt64(Box::new(rng))
    }
}
