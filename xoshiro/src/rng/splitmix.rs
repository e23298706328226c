//! SplitMix64 seed expander
//!
//! Stretches a single 64-bit seed into the 256-bit xoshiro state. Each
//! output is a strong avalanche of a Weyl sequence, so nearby seeds give
//! unrelated states and seed 0 still yields a non-zero state.

use super::xoshiro::{State, STATE_SIZE};

/// Weyl increment (golden ratio, odd)
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_2: u64 = 0x94D0_49BB_1331_11EB;

/// Advance a SplitMix64 accumulator and return the mixed output.
///
/// All arithmetic wraps modulo 2^64.
#[inline]
pub fn splitmix64(acc: &mut u64) -> u64 {
    *acc = acc.wrapping_add(GOLDEN_GAMMA);
    let mut z = *acc;
    z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
    z ^ (z >> 31)
}

/// SplitMix64 as a standalone stream
///
/// # Example
/// ```
/// use xoshiro_core_rs::SplitMix64;
///
/// let state = SplitMix64::new(0xDEADBEEF).expand();
/// assert_ne!(state, [0; 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    acc: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { acc: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        splitmix64(&mut self.acc)
    }

    /// Fill a full generator state, one word at a time in order.
    pub fn expand(mut self) -> State {
        let mut state = [0u64; STATE_SIZE];
        for word in state.iter_mut() {
            *word = self.next_u64();
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_seed() {
        let state = SplitMix64::new(0xDEADBEEF).expand();
        assert_eq!(
            state,
            [
                0x4adf_b90f_68c9_eb9b,
                0xde58_6a31_41a1_0922,
                0x021f_bc2f_8e1c_fc1d,
                0x7466_ce73_7be1_6790,
            ]
        );
    }

    #[test]
    fn test_zero_seed_expands_to_nonzero() {
        let state = SplitMix64::new(0).expand();
        assert_eq!(state[0], 0xe220_a839_7b1d_cdaf);
        assert!(state.iter().all(|&w| w != 0));
    }

    #[test]
    fn test_stream_matches_free_function() {
        let mut acc = 7;
        let mut sm = SplitMix64::new(7);
        for _ in 0..16 {
            assert_eq!(splitmix64(&mut acc), sm.next_u64());
        }
    }

    #[test]
    fn test_accumulator_wraps() {
        let mut acc = u64::MAX;
        splitmix64(&mut acc);
        assert_eq!(acc, GOLDEN_GAMMA.wrapping_sub(1));
    }
}
