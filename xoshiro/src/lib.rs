//! Xoshiro Core - Deterministic PRNG
//!
//! Fast, reproducible pseudo-random numbers for simulations, games and
//! procedural generation. Not cryptographically secure.
//!
//! # Architecture
//!
//! - **rng::splitmix**: Seed expansion (SplitMix64)
//! - **rng::xoshiro**: Core transition (xoshiro256**) and value formatters
//! - **rng::jump**: Jump / long-jump subsequence functions
//! - **rng::streams**: Partitioning one seed into non-overlapping streams
//! - **checkpoint**: Save/restore generator state
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same stream on every platform
//! 2. The state is never all-zero
//! 3. The caller owns the state; there is no hidden global state

// Module declarations
pub mod checkpoint;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, RngCheckpoint};
pub use rng::{
    double, init, int, jump, long_jump, next, split_streams, splitmix64, Granularity, SplitMix64,
    State, StateError, StreamSplitter, Xoshiro256StarStar, STATE_SIZE,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xoshiro_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyXoshiro>()?;
    Ok(())
}
