//! Generator configuration
//!
//! Describes which generator to build and how to seed it, in a form that
//! round-trips through JSON. A simulation config can embed a
//! [`GeneratorConfig`] and call [`GeneratorConfig::build`] at startup.
//!
//! ```json
//! { "algorithm": "xorshift1024_star", "seed": 1234 }
//! { "algorithm": "mt64_keys", "keys": [74565, 144470, 214135, 283800] }
//! ```

use crate::rng::{Algorithm, AnyGenerator, Mt64, SeedError, Xorshift1024Star, Xorshift64Star};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading or applying a generator config
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config parse failed: {0}")]
    Parse(String),

    #[error("Config serialization failed: {0}")]
    Serialize(String),

    #[error("Invalid seed: {0}")]
    Seed(#[from] SeedError),
}

/// How to construct a generator
///
/// # Example
/// ```
/// use prng_core_rs::{Algorithm, Generator, GeneratorConfig};
///
/// let config = GeneratorConfig::from_json(r#"{"algorithm": "mt64", "seed": 5489}"#).unwrap();
/// let mut rng = config.build().unwrap();
///
/// assert_eq!(rng.algorithm(), Algorithm::Mt64);
/// assert_eq!(rng.next_u64(), 14514284786278117030);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// xorshift64* from a scalar seed (zero is replaced by the fallback seed)
    Xorshift64Star { seed: u64 },

    /// xorshift1024* from a scalar seed
    Xorshift1024Star { seed: u64 },

    /// MT19937-64 from a scalar seed
    Mt64 { seed: u64 },

    /// MT19937-64 from a non-empty key array
    Mt64Keys { keys: Vec<u64> },
}

impl GeneratorConfig {
    /// Parse a config from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Render the config as JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Which algorithm this config builds
    pub fn algorithm(&self) -> Algorithm {
        match self {
            GeneratorConfig::Xorshift64Star { .. } => Algorithm::Xorshift64Star,
            GeneratorConfig::Xorshift1024Star { .. } => Algorithm::Xorshift1024Star,
            GeneratorConfig::Mt64 { .. } | GeneratorConfig::Mt64Keys { .. } => Algorithm::Mt64,
        }
    }

    /// Check the config without building anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            GeneratorConfig::Mt64Keys { keys } if keys.is_empty() => {
                Err(ConfigError::Seed(SeedError::EmptyKey))
            }
            _ => Ok(()),
        }
    }

    /// Validate, then construct the configured generator
    pub fn build(&self) -> Result<AnyGenerator, ConfigError> {
        self.validate()?;

        let rng: AnyGenerator = match self {
            GeneratorConfig::Xorshift64Star { seed } => Xorshift64Star::new(*seed).into(),
            GeneratorConfig::Xorshift1024Star { seed } => Xorshift1024Star::new(*seed).into(),
            GeneratorConfig::Mt64 { seed } => Mt64::new(*seed).into(),
            GeneratorConfig::Mt64Keys { keys } => Mt64::from_keys(keys)?.into(),
        };
        Ok(rng)
    }
}
