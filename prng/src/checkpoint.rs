//! Checkpoint - Save/Restore Generator State
//!
//! Captures the complete state of a generator so a run can be paused and
//! resumed mid-stream. A restored generator continues with exactly the
//! draws the original would have produced.
//!
//! # Critical Invariants
//!
//! - **Determinism**: restore(capture(rng)) yields the identical stream
//! - **Integrity**: the SHA-256 state hash must match on restore
//! - **Shape**: array lengths, cursor and batch index are range-checked
//! - **Non-degeneracy**: an all-zero state is never restored

use crate::rng::{Algorithm, AnyGenerator, Mt64, StateError, Xorshift1024Star, Xorshift64Star};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors that can occur while capturing or restoring a checkpoint
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("State hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch { expected: String, computed: String },

    #[error("Invalid generator state: {0}")]
    InvalidState(String),

    #[error("Invalid generator state: {0}")]
    State(#[from] StateError),

    #[error("Checkpoint serialization failed: {0}")]
    Serialization(String),
}

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Generator state snapshot
///
/// Arrays are stored as `Vec<u64>`; their lengths are checked on restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum GeneratorSnapshot {
    Xorshift64Star {
        state: u64,
    },
    Xorshift1024Star {
        state: Vec<u64>,
        cursor: usize,
    },
    Mt64 {
        state: Vec<u64>,
        /// Batch index in [0, 312]
        index: usize,
    },
}

impl From<&Xorshift64Star> for GeneratorSnapshot {
    fn from(rng: &Xorshift64Star) -> Self {
        GeneratorSnapshot::Xorshift64Star { state: rng.state() }
    }
}

impl From<&Xorshift1024Star> for GeneratorSnapshot {
    fn from(rng: &Xorshift1024Star) -> Self {
        let (state, cursor) = rng.state();
        GeneratorSnapshot::Xorshift1024Star {
            state: state.to_vec(),
            cursor,
        }
    }
}

impl From<&Mt64> for GeneratorSnapshot {
    fn from(rng: &Mt64) -> Self {
        let (state, index) = rng.state();
        GeneratorSnapshot::Mt64 {
            state: state.to_vec(),
            index,
        }
    }
}

impl From<&AnyGenerator> for GeneratorSnapshot {
    fn from(rng: &AnyGenerator) -> Self {
        match rng {
            AnyGenerator::Xorshift64Star(rng) => rng.into(),
            AnyGenerator::Xorshift1024Star(rng) => rng.into(),
            AnyGenerator::Mt64(rng) => GeneratorSnapshot::from(&**rng),
        }
    }
}

impl TryFrom<GeneratorSnapshot> for AnyGenerator {
    type Error = CheckpointError;

    fn try_from(snapshot: GeneratorSnapshot) -> Result<Self, Self::Error> {
        let rng: AnyGenerator = match snapshot {
            GeneratorSnapshot::Xorshift64Star { state } => {
                Xorshift64Star::from_state(state)?.into()
            }
            GeneratorSnapshot::Xorshift1024Star { state, cursor } => {
                let words = fixed_words::<{ Algorithm::Xorshift1024Star.state_words() }>(
                    &state,
                    "xorshift1024*",
                )?;
                Xorshift1024Star::from_state(words, cursor)?.into()
            }
            GeneratorSnapshot::Mt64 { state, index } => {
                let words = fixed_words::<{ Algorithm::Mt64.state_words() }>(&state, "mt64")?;
                Mt64::from_state(words, index)?.into()
            }
        };
        Ok(rng)
    }
}

/// Copy a snapshot vector into a fixed array, rejecting bad lengths
fn fixed_words<const N: usize>(state: &[u64], name: &str) -> Result<[u64; N], CheckpointError> {
    state.try_into().map_err(|_| {
        CheckpointError::InvalidState(format!(
            "{} state has {} words, expected {}",
            name,
            state.len(),
            N
        ))
    })
}

// ============================================================================
// State Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of a snapshot
///
/// The snapshot contains no maps, so its JSON serialization is already
/// canonical.
pub fn compute_state_hash(snapshot: &GeneratorSnapshot) -> Result<String, CheckpointError> {
    let json = serde_json::to_string(snapshot).map_err(|e| {
        CheckpointError::Serialization(format!("Snapshot serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

// ============================================================================
// Checkpoint
// ============================================================================

/// A snapshot plus its integrity hash
///
/// # Example
/// ```
/// use prng_core_rs::{AnyGenerator, Checkpoint, Generator, Xorshift1024Star};
///
/// let mut rng: AnyGenerator = Xorshift1024Star::new(1234).into();
/// rng.next_u64();
///
/// let json = rng.checkpoint().unwrap().to_json().unwrap();
/// let mut resumed = Checkpoint::from_json(&json).unwrap().restore().unwrap();
///
/// assert_eq!(rng.next_u64(), resumed.next_u64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub snapshot: GeneratorSnapshot,

    /// SHA256 hex digest of the snapshot
    pub state_hash: String,
}

impl Checkpoint {
    /// Capture the current state of a generator
    pub fn capture(rng: &AnyGenerator) -> Result<Self, CheckpointError> {
        let snapshot = GeneratorSnapshot::from(rng);
        let state_hash = compute_state_hash(&snapshot)?;
        Ok(Self {
            snapshot,
            state_hash,
        })
    }

    /// Verify the hash and rebuild the generator
    pub fn restore(&self) -> Result<AnyGenerator, CheckpointError> {
        let computed = compute_state_hash(&self.snapshot)?;
        if computed != self.state_hash {
            return Err(CheckpointError::HashMismatch {
                expected: self.state_hash.clone(),
                computed,
            });
        }

        AnyGenerator::try_from(self.snapshot.clone())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }
}

impl AnyGenerator {
    /// Capture this generator's state (see [`Checkpoint::capture`])
    pub fn checkpoint(&self) -> Result<Checkpoint, CheckpointError> {
        Checkpoint::capture(self)
    }
}
