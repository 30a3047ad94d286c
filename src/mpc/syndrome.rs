//! # Syndrome relation
//!
//! The relation proven by the bundled party simulation: the signer knows `x ∈ GF(256)^k` with
//! `H' x = y`, where `H'` is expanded from the public `seed_h`.
//!
//! ## Security
//!
//! The relation is linear and underdetermined (`m - k < k`), so a witness is found from the
//! public key alone by Gaussian elimination. It exercises the seed tree and the sign/verify
//! state machine end to end but gives **no unforgeability**. A hard relation is plugged in by
//! implementing [`PartySimulation`].

use crate::{
    arith::{gf256::gf256_vector::gf256_add_vector, matrices::HPrimeMatrix},
    constants::types::Seed,
};

use super::PartySimulation;

/// Party simulation of the syndrome relation `H' x = y`. Not a hard problem, see the module
/// documentation.
///
/// The contribution of a party holding `x_i` is `H' x_i`, plus `y` for the offset party.
#[derive(Debug, Clone)]
pub struct SyndromeSimulation {
    seed_h: Seed,
    h_prime: HPrimeMatrix,
    y: Vec<u8>,
}

impl SyndromeSimulation {
    /// Expand `H'` with `y.len()` rows and `k` columns from `seed_h`
    pub fn new(seed_h: Seed, y: Vec<u8>, k: usize) -> Self {
        let h_prime = HPrimeMatrix::expand(&seed_h, y.len(), k);
        Self { seed_h, h_prime, y }
    }

    pub fn h_prime(&self) -> &HPrimeMatrix {
        &self.h_prime
    }

    pub fn y(&self) -> &[u8] {
        &self.y
    }

    /// Random instance of the relation together with its witness
    #[cfg(test)]
    pub(crate) fn random_instance(seed: &Seed, k: usize, m_sub_k: usize) -> (Self, Vec<u8>) {
        use crate::subroutines::prg::PRG;

        let mut prg = PRG::init(seed, None);
        let seed_h = prg.sample_seed();
        let witness = prg.sample_field_fq_elements_vec(k);
        let y = HPrimeMatrix::expand(&seed_h, m_sub_k, k).mul_vector(&witness);
        (Self::new(seed_h, y, k), witness)
    }
}

impl PartySimulation for SyndromeSimulation {
    fn share_size(&self) -> usize {
        self.h_prime.cols()
    }

    fn broadcast_size(&self) -> usize {
        self.h_prime.rows()
    }

    fn statement(&self) -> Vec<u8> {
        let mut statement = Vec::with_capacity(self.seed_h.len() + self.y.len());
        statement.extend_from_slice(&self.seed_h);
        statement.extend_from_slice(&self.y);
        statement
    }

    fn party_computation(&self, share: &[u8], with_offset: bool) -> Vec<u8> {
        let mut contribution = self.h_prime.mul_vector(share);
        if with_offset {
            gf256_add_vector(&mut contribution, &self.y);
        }
        contribution
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::params::PARAM_SEED_SIZE;

    use super::*;

    #[test]
    fn test_witness_is_consistent() {
        let (simulation, witness) =
            SyndromeSimulation::random_instance(&[0u8; PARAM_SEED_SIZE], 16, 10);
        assert_eq!(simulation.share_size(), 16);
        assert_eq!(simulation.broadcast_size(), 10);
        assert!(simulation.is_consistent(&witness));

        let mut wrong = witness.clone();
        wrong[3] ^= 0x40;
        assert!(!simulation.is_consistent(&wrong));
    }

    #[test]
    fn test_offset_is_folded_once() {
        let (simulation, witness) =
            SyndromeSimulation::random_instance(&[5u8; PARAM_SEED_SIZE], 12, 6);
        let plain = simulation.party_computation(&witness, false);
        assert_eq!(plain, simulation.y());
        let zero = vec![0u8; 12];
        assert_eq!(simulation.party_computation(&zero, true), simulation.y());
        assert_eq!(simulation.party_computation(&zero, false), vec![0u8; 6]);
    }

    #[test]
    fn test_statement_is_the_public_key() {
        let (simulation, _) = SyndromeSimulation::random_instance(&[7u8; PARAM_SEED_SIZE], 4, 3);
        let statement = simulation.statement();
        assert_eq!(statement.len(), PARAM_SEED_SIZE + 3);
        assert_eq!(&statement[PARAM_SEED_SIZE..], simulation.y());
        let seed_h = statement[..PARAM_SEED_SIZE].try_into().unwrap();
        let rebuilt = SyndromeSimulation::new(seed_h, simulation.y().to_vec(), 4);
        assert_eq!(rebuilt.h_prime(), simulation.h_prime());
    }
}
