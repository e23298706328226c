//! Checkpoint - Save/Load Generator State
//!
//! Captures a generator so a long run can stop and later resume on exactly
//! the stream it would have produced uninterrupted.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator continues the original stream
//! - **Integrity**: the stored digest must match the stored state
//! - **Non-degeneracy**: an all-zero state is never restored

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::rng::{State, StateError, Xoshiro256StarStar};

/// Checkpoint errors
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Checkpoint serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Checkpoint digest mismatch: stored {stored}, computed {computed}")]
    DigestMismatch { stored: String, computed: String },

    #[error("Checkpoint holds an invalid state: {0}")]
    InvalidState(#[from] StateError),
}

/// Generator state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngCheckpoint {
    /// Raw generator words
    pub state: State,

    /// Values drawn before the snapshot (caller bookkeeping, not verified)
    pub draws: u64,

    /// SHA256 of the canonical state encoding
    pub digest: String,
}

impl RngCheckpoint {
    pub fn capture(rng: &Xoshiro256StarStar, draws: u64) -> Self {
        let state = rng.state();
        Self {
            state,
            draws,
            digest: state_digest(&state),
        }
    }

    /// Check digest and state before anything is resumed from this snapshot
    pub fn validate(&self) -> Result<(), CheckpointError> {
        let computed = state_digest(&self.state);
        if computed != self.digest {
            return Err(CheckpointError::DigestMismatch {
                stored: self.digest.clone(),
                computed,
            });
        }
        Xoshiro256StarStar::from_state(self.state)?;
        Ok(())
    }

    /// Rebuild the generator this checkpoint was taken from
    pub fn restore(&self) -> Result<Xoshiro256StarStar, CheckpointError> {
        self.validate()?;
        Ok(Xoshiro256StarStar::from_state(self.state)?)
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a checkpoint written by [`to_json`](Self::to_json)
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: RngCheckpoint = serde_json::from_str(json)?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}

/// Hex SHA256 of the state words as `%016x` joined by `:`
pub fn state_digest(state: &State) -> String {
    let canonical = state
        .iter()
        .map(|w| format!("{:016x}", w))
        .collect::<Vec<_>>()
        .join(":");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}
