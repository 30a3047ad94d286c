//! # MPC
//!
//! The party simulation proven in the head of the signer.
//!
//! The witness is shared additively over a field of characteristic 2: every party expands its
//! share from its seed of the [seed tree](crate::subroutines::seed_tree), and the last party's
//! share is corrected by a public `aux` value so that all shares XOR to the witness. A party's
//! contribution is linear in its share, so the contributions of an honest run XOR to zero and the
//! contribution of the hidden party is the XOR of the other ones.

pub mod syndrome;

use crate::{
    arith::gf256::gf256_vector::{gf256_add_vector, gf256_sum_vectors},
    constants::types::{Salt, Seed},
    subroutines::prg::PRG,
};

/// Party-local computation of the MPC protocol.
///
/// Implementations describe one public relation. The sign/verify orchestration only holds a
/// reference to it and never inspects the shares.
pub trait PartySimulation: Sync {
    /// Size in bytes of a witness share (and of the witness)
    fn share_size(&self) -> usize;

    /// Size in bytes of a party contribution
    fn broadcast_size(&self) -> usize;

    /// Public inputs bound into the Fiat-Shamir transcript
    fn statement(&self) -> Vec<u8>;

    /// The contribution of a party holding `share`. Exactly one party, the offset party, sets
    /// `with_offset` and folds in the public target.
    fn party_computation(&self, share: &[u8], with_offset: bool) -> Vec<u8>;

    /// Expand the uncorrected share of a party from its seed
    fn expand_share(&self, seed: &Seed, salt: &Salt) -> Vec<u8> {
        PRG::init(seed, Some(salt)).sample_field_fq_elements_vec(self.share_size())
    }

    /// Share and contribution of the party holding `seed`. `aux` is the share correction of the
    /// last party.
    fn simulate_party(
        &self,
        seed: &Seed,
        salt: &Salt,
        aux: Option<&[u8]>,
        with_offset: bool,
    ) -> (Vec<u8>, Vec<u8>) {
        let mut share = self.expand_share(seed, salt);
        if let Some(aux) = aux {
            gf256_add_vector(&mut share, aux);
        }
        let contribution = self.party_computation(&share, with_offset);
        (share, contribution)
    }

    /// Checks the witness against the public relation
    fn is_consistent(&self, witness: &[u8]) -> bool {
        self.party_computation(witness, true)
            .iter()
            .all(|byte| *byte == 0)
    }
}

/// Index of the party that folds the public target into its contribution
pub const OFFSET_PARTY: usize = 0;

/// Correction of the last share: `aux = witness + sum(shares)`
pub fn share_correction<'a, I>(witness: &[u8], shares: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut aux = witness.to_vec();
    for share in shares {
        gf256_add_vector(&mut aux, share);
    }
    aux
}

/// Contribution of the hidden party, from the contributions of all other parties
pub fn hidden_contribution<'a, I>(others: I, broadcast_size: usize) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    gf256_sum_vectors(others, broadcast_size)
}

#[cfg(test)]
mod tests {
    use crate::constants::params::{PARAM_SALT_SIZE, PARAM_SEED_SIZE};

    use super::{syndrome::SyndromeSimulation, *};

    #[test]
    fn test_corrected_shares_sum_to_witness() {
        let (simulation, witness) =
            SyndromeSimulation::random_instance(&[1u8; PARAM_SEED_SIZE], 8, 5);
        let salt = [0u8; PARAM_SALT_SIZE];
        let seeds: Vec<Seed> = (0..4u8).map(|i| [i; PARAM_SEED_SIZE]).collect();

        let shares: Vec<Vec<u8>> = seeds
            .iter()
            .map(|seed| simulation.expand_share(seed, &salt))
            .collect();
        let aux = share_correction(&witness, shares.iter().map(Vec::as_slice));

        let corrected: Vec<Vec<u8>> = seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                let aux = (i == seeds.len() - 1).then_some(aux.as_slice());
                simulation.simulate_party(seed, &salt, aux, i == OFFSET_PARTY).0
            })
            .collect();
        assert_eq!(
            gf256_sum_vectors(corrected.iter().map(Vec::as_slice), witness.len()),
            witness
        );
    }

    #[test]
    fn test_hidden_contribution_closes_the_sum() {
        let (simulation, witness) =
            SyndromeSimulation::random_instance(&[2u8; PARAM_SEED_SIZE], 8, 5);
        let salt = [3u8; PARAM_SALT_SIZE];
        let seeds: Vec<Seed> = (0..8u8).map(|i| [i; PARAM_SEED_SIZE]).collect();

        let shares: Vec<Vec<u8>> = seeds
            .iter()
            .map(|seed| simulation.expand_share(seed, &salt))
            .collect();
        let aux = share_correction(&witness, shares.iter().map(Vec::as_slice));

        let contributions: Vec<Vec<u8>> = seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                let aux = (i == seeds.len() - 1).then_some(aux.as_slice());
                simulation.simulate_party(seed, &salt, aux, i == OFFSET_PARTY).1
            })
            .collect();

        for hidden in 0..seeds.len() {
            let others = contributions
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != hidden)
                .map(|(_, c)| c.as_slice());
            assert_eq!(
                hidden_contribution(others, simulation.broadcast_size()),
                contributions[hidden]
            );
        }
    }
}
