//! Jump functions
//!
//! Advance a state by 2^128 (`jump`) or 2^192 (`long_jump`) steps at the cost
//! of 256 ordinary steps. The polynomials below encode those distances for
//! xoshiro256**; successive jumps from one ancestor give non-overlapping
//! subsequences of length 2^128 (or 2^192).

use super::xoshiro::{next, State, STATE_SIZE};

/// Jump polynomial for 2^128 steps
pub const JUMP: [u64; 4] = [
    0x180e_c6d3_3cfd_0aba,
    0xd5a6_1266_f0c9_392c,
    0xa958_2618_e03f_c9aa,
    0x39ab_dc45_29b1_661c,
];

/// Jump polynomial for 2^192 steps
pub const LONG_JUMP: [u64; 4] = [
    0x76e1_5d3e_fefd_cbbf,
    0xc500_4e44_1c52_2fb3,
    0x7771_0069_854e_e241,
    0x3910_9bb0_2acb_e635,
];

/// Equivalent to 2^128 calls to [`next`].
///
/// Use it to hand out 2^128 non-overlapping subsequences for parallel work.
pub fn jump(state: &mut State) {
    apply(state, &JUMP);
}

/// Equivalent to 2^192 calls to [`next`].
///
/// Gives 2^64 starting points, from each of which [`jump`] yields 2^64
/// further non-overlapping subsequences.
pub fn long_jump(state: &mut State) {
    apply(state, &LONG_JUMP);
}

fn apply(state: &mut State, poly: &[u64; 4]) {
    let mut acc = [0u64; STATE_SIZE];
    for &word in poly {
        for b in 0..64 {
            if word & (1u64 << b) != 0 {
                for (a, s) in acc.iter_mut().zip(state.iter()) {
                    *a ^= *s;
                }
            }
            next(state);
        }
    }
    *state = acc;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::init;

    fn seeded(seed: u64) -> State {
        let mut state = [0; STATE_SIZE];
        init(&mut state, seed);
        state
    }

    #[test]
    fn test_jump_reference_state() {
        let mut state = seeded(0xDEADBEEF);
        jump(&mut state);
        assert_eq!(
            state,
            [
                0x3d50_a7f7_8116_0c80,
                0xbda6_e05c_ae67_0918,
                0xa8a7_e2da_0c80_acb3,
                0xa0b1_8351_7034_7846,
            ]
        );
        assert_eq!(next(&mut state), 0x2ab8_2554_0e4c_9f2a);
    }

    #[test]
    fn test_long_jump_reference_state() {
        let mut state = seeded(0xDEADBEEF);
        long_jump(&mut state);
        assert_eq!(
            state,
            [
                0x2262_0582_2ae2_677a,
                0xc6ad_5a52_a586_54ee,
                0x429e_4ac3_230d_86b9,
                0x74da_21ac_2a1a_6051,
            ]
        );
        assert_eq!(next(&mut state), 0x3c70_438c_4e76_eef0);
    }

    #[test]
    fn test_jump_is_deterministic() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        jump(&mut a);
        jump(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_jump_and_long_jump_differ() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        jump(&mut a);
        long_jump(&mut b);
        assert_ne!(a, b);
    }
}
