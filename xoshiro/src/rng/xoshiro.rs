//! xoshiro256** random number generator
//!
//! Blackman & Vigna's all-purpose 256-bit generator. Sub-nanosecond, passes
//! every statistical battery we know of, period 2^256 - 1.
//!
//! # Algorithm
//!
//! Four 64-bit words are mixed by xor, shift and rotate. The output scrambler
//! (`rotl(s1 * 5, 7) * 9`) is applied to the word *before* the state moves.
//!
//! # Determinism
//!
//! Same seed → same sequence on every platform. All arithmetic wraps
//! modulo 2^64 and no floating point touches the state.
//!
//! # Precondition
//!
//! The free functions trust their input: a state that did not come from
//! [`init`], [`Xoshiro256StarStar::new`] or a jump of one of those can be
//! all-zero, and an all-zero state emits zeros forever. Use
//! [`Xoshiro256StarStar::from_state`] to bring in a state from elsewhere.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::jumps;
use super::splitmix::SplitMix64;

/// Number of 64-bit words in the generator state
pub const STATE_SIZE: usize = 4;

/// Full generator state (256 bits)
pub type State = [u64; STATE_SIZE];

/// 2^64 as f64, written so the literal itself never overflows
const TWO_POW_64: f64 = 0x8000_0000_0000_0000_u64 as f64 * 2.0;

/// Largest f64 strictly below 1.0
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Errors raised when accepting an externally supplied state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Generator state must not be all-zero")]
    AllZero,
}

/// Populate `state` from a single seed via SplitMix64.
pub fn init(state: &mut State, seed: u64) {
    *state = SplitMix64::new(seed).expand();
}

/// One xoshiro256** step: return the output and advance `state`.
#[inline]
pub fn next(state: &mut State) -> u64 {
    let result = state[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);

    let t = state[1] << 17;

    state[2] ^= state[0];
    state[3] ^= state[1];
    state[1] ^= state[2];
    state[0] ^= state[3];

    state[2] ^= t;

    state[3] = state[3].rotate_left(45);

    result
}

/// Uniform f64 in [0.0, 1.0).
pub fn double(state: &mut State) -> f64 {
    unit_f64(next(state))
}

/// Integer offset from `from` by `raw mod |to - from|`.
///
/// `from == to` returns `from` without drawing. The result is always
/// `from + k` with `0 <= k < |to - from|`, including when `from > to`.
///
/// The reduction is a plain modulo, so it carries a small bias whenever the
/// width does not divide 2^64. That is accepted for speed.
pub fn int(state: &mut State, from: i32, to: i32) -> i32 {
    if from == to {
        return from;
    }
    let d = (i64::from(to) - i64::from(from)).unsigned_abs();
    let v = next(state);
    // d < 2^32 so the remainder fits in 32 bits; the add wraps like i32 arithmetic
    from.wrapping_add((v % d) as i32)
}

/// Map a raw output onto [0.0, 1.0) by dividing by 2^64.
///
/// Round-to-nearest sends the top 2^10 raw values to exactly 1.0; those are
/// pulled back to the largest value below 1.0.
#[inline]
fn unit_f64(v: u64) -> f64 {
    let y = v as f64 / TWO_POW_64;
    if y < 1.0 {
        y
    } else {
        BELOW_ONE
    }
}

/// Deterministic random number generator using xoshiro256**
///
/// A plain value type over [`State`]. Cloning forks the stream; use
/// [`jump`](Self::jump) to make clones independent.
///
/// # Example
/// ```
/// use xoshiro_core_rs::Xoshiro256StarStar;
///
/// let mut rng = Xoshiro256StarStar::new(0xDEADBEEF);
/// let _raw = rng.next_u64();
/// assert_eq!(rng.next_i32(0, 1000), 792);
/// let p = rng.next_f64();
/// assert!((p - 0.33190).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "State", into = "State")]
pub struct Xoshiro256StarStar {
    state: State,
}

impl Xoshiro256StarStar {
    /// Create a new generator with the given seed (any value, including 0)
    pub fn new(seed: u64) -> Self {
        Self {
            state: SplitMix64::new(seed).expand(),
        }
    }

    /// Resume from a raw state, e.g. one read back from storage
    ///
    /// # Errors
    /// Returns [`StateError::AllZero`] for the degenerate zero state.
    pub fn from_state(state: State) -> Result<Self, StateError> {
        if state.iter().all(|&w| w == 0) {
            return Err(StateError::AllZero);
        }
        Ok(Self { state })
    }

    /// Current state (for checkpointing/replay)
    pub fn state(&self) -> State {
        self.state
    }

    pub fn next_u64(&mut self) -> u64 {
        next(&mut self.state)
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        double(&mut self.state)
    }

    /// See [`int`] for the range convention.
    pub fn next_i32(&mut self, from: i32, to: i32) -> i32 {
        int(&mut self.state, from, to)
    }

    /// Advance by 2^128 steps
    pub fn jump(&mut self) {
        jumps::jump(&mut self.state);
    }

    /// Advance by 2^192 steps
    pub fn long_jump(&mut self) {
        jumps::long_jump(&mut self.state);
    }

    /// Copy of this generator advanced by 2^128 steps; `self` is untouched.
    pub fn jumped(&self) -> Self {
        let mut other = self.clone();
        other.jump();
        other
    }
}

impl TryFrom<State> for Xoshiro256StarStar {
    type Error = StateError;

    fn try_from(state: State) -> Result<Self, Self::Error> {
        Self::from_state(state)
    }
}

impl From<Xoshiro256StarStar> for State {
    fn from(rng: Xoshiro256StarStar) -> Self {
        rng.state
    }
}
