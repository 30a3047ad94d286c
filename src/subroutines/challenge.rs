//! # Challenge
//!
//! Fiat-Shamir expansion of the transcript digest into the hidden party of every repetition.

use crate::{constants::types::Hash, subroutines::prg::PRG};

/// Expands the transcript digest `h` into one hidden party per repetition.
///
/// Two bytes are squeezed per repetition and read as a little endian `u16`, masked to
/// `[0, 2^log_n_mpc)`. While the parameter sets are all within u8 size, `u16` leaves room for a
/// deeper tree.
pub fn expand_hidden_parties(h: &Hash, log_n_mpc: usize, tau: usize) -> Vec<u16> {
    let mut prg = PRG::init_base(h);

    let modulo: u16 = ((1u32 << log_n_mpc) - 1) as u16;
    let mut tmp = [0u8; 2];

    (0..tau)
        .map(|_| {
            prg.sample_field_fq_elements(&mut tmp);
            u16::from_le_bytes(tmp) & modulo
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::constants::params::{PARAM_DIGEST_SIZE, PARAM_N_MPC, PARAM_N_MPC_LOG2, PARAM_TAU};

    use super::*;

    #[test]
    fn test_hidden_parties_are_in_range() {
        let mut prg = PRG::init_base(&[0]);
        let mut h = [0u8; PARAM_DIGEST_SIZE];
        for _ in 0..1000 {
            prg.sample_field_fq_elements(&mut h);
            let alphas = expand_hidden_parties(&h, PARAM_N_MPC_LOG2, PARAM_TAU);
            assert_eq!(alphas.len(), PARAM_TAU);
            for alpha in alphas {
                assert!(
                    (alpha as usize) < PARAM_N_MPC,
                    "Hidden party should be less than N: {alpha} < {PARAM_N_MPC}"
                );
            }
        }
    }

    #[test]
    fn test_hidden_parties_follow_the_xof() {
        let h = [5u8; PARAM_DIGEST_SIZE];
        let mut prg = PRG::init_base(&h);
        let bytes = prg.sample_field_fq_elements_vec(6);

        let alphas = expand_hidden_parties(&h, 3, 3);
        let expected: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|b| u16::from_le_bytes([b[0], b[1]]) & 7)
            .collect();
        assert_eq!(alphas, expected);
    }

    #[test]
    fn test_hidden_parties_depend_on_digest() {
        let a = expand_hidden_parties(&[0u8; PARAM_DIGEST_SIZE], 8, 32);
        let b = expand_hidden_parties(&[1u8; PARAM_DIGEST_SIZE], 8, 32);
        assert_ne!(a, b);
    }
}
