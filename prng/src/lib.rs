//! PRNG Core - Deterministic Random Number Generators
//!
//! Fast, seedable pseudo-random number generators for simulation and
//! statistics. NOT suitable for cryptography.
//!
//! # Architecture
//!
//! - **rng**: The [`Generator`] capability, scaling functions and the three
//!   algorithms (xorshift64*, xorshift1024*, MT19937-64)
//! - **config**: Serde-described generator construction
//! - **checkpoint**: Save/restore of generator state
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, bit-exact with the reference algorithms
//! 2. No generator is ever left in the all-zero state
//! 3. Drawing never allocates and never fails
//!
//! # Example
//! ```
//! use prng_core_rs::{float64, int63, Generator, Mt64, Xorshift1024Star};
//!
//! let mut fast = Xorshift1024Star::new(1234);
//! let mut twister = Mt64::new(1234);
//!
//! let generators: [&mut dyn Generator; 2] = [&mut fast, &mut twister];
//! for rng in generators {
//!     assert!(int63(rng) >= 0);
//!     assert!(float64(rng) < 1.0);
//! }
//! ```

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{compute_state_hash, Checkpoint, CheckpointError, GeneratorSnapshot};
pub use config::{ConfigError, GeneratorConfig};
pub use rng::{
    float64, float64_closed, float64_closed_from, float64_from, int63, int63_from, Algorithm,
    AnyGenerator, Generator, Mt64, SeedError, StateError, Xorshift1024Star, Xorshift64Star,
};
