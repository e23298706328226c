//! Deterministic random number generation
//!
//! Uses xoshiro256** seeded through SplitMix64.
//! CRITICAL: every function here is a pure transformation of caller-owned state.

mod jumps;
mod splitmix;
mod streams;
mod xoshiro;

pub use jumps::{jump, long_jump, JUMP, LONG_JUMP};
pub use splitmix::{splitmix64, SplitMix64};
pub use streams::{split_streams, Granularity, StreamSplitter};
pub use xoshiro::{double, init, int, next, State, StateError, Xoshiro256StarStar, STATE_SIZE};
