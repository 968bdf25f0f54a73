//! Unique identifiers for sweep results.
//!
//! `SweepId` provides type-safe identifiers for persisted sweeps,
//! preventing accidental misuse of string identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a sweep report.
///
/// Uses UUID v4 internally for globally unique identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SweepId(Uuid);

impl SweepId {
    /// Generate a new random sweep ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get a short representation (first 8 characters).
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for SweepId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SweepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SweepId {
    type Err = SweepIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Short prefixes require a store lookup, not parsing.
        if s.len() < 36 {
            return Err(SweepIdError::ShortFormNotSupported);
        }

        let uuid = Uuid::parse_str(s).map_err(|_| SweepIdError::InvalidFormat(s.to_string()))?;
        Ok(Self(uuid))
    }
}

/// Error type for SweepId parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SweepIdError {
    #[error("invalid sweep ID format: {0}")]
    InvalidFormat(String),
    #[error("short form IDs require a store lookup")]
    ShortFormNotSupported,
}
