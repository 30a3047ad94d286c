use crate::{
    constants::{
        params::{Parameters, PARAM_DIGEST_SIZE, PARAM_SALT_SIZE},
        types::{Hash, Salt},
    },
    error::Result,
    subroutines::{
        commitments::Commitment,
        prg::hashing::{hash_scoped, DOMAIN_SEPARATOR_CHALLENGE},
        seed_tree::PartialTreeSeeds,
    },
    utils::marshalling::{check_size, Marshalling},
};

/// Opened data of a single repetition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Seeds opening every party except the hidden one
    pub partial_seeds: PartialTreeSeeds,
    /// Share correction of the last party
    pub aux: Vec<u8>,
    /// Commitment of the hidden party
    pub com_alpha: Commitment,
}

/// MIRA signature
///
/// `salt || response[0] || ... || response[τ - 1] || h`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub salt: Salt,
    pub responses: Vec<Response>,
    /// Fiat-Shamir digest the hidden parties are expanded from
    pub h: Hash,
}

/// What a repetition contributes to the Fiat-Shamir transcript
#[derive(Debug, Clone, Default)]
pub(super) struct RepetitionTranscript {
    pub(super) aux: Vec<u8>,
    pub(super) commitments: Vec<Commitment>,
    pub(super) contributions: Vec<Vec<u8>>,
}

impl Signature {
    /// Fiat-Shamir hash
    ///
    /// `h = Hash(statement, salt, message, for e in 0..τ: (aux[e], com[e][..], contrib[e][..]))`
    ///
    /// The repetitions are absorbed in index order, independently of how they were computed.
    pub(super) fn gen_h<'a, I>(
        statement: &[u8],
        salt: &Salt,
        message: &[u8],
        repetitions: I,
    ) -> Hash
    where
        I: IntoIterator<Item = &'a RepetitionTranscript>,
    {
        hash_scoped(DOMAIN_SEPARATOR_CHALLENGE, |hasher| {
            hasher.update(statement);
            hasher.update(salt);
            hasher.update(message);
            for repetition in repetitions {
                hasher.update(&repetition.aux);
                for commitment in repetition.commitments.iter() {
                    hasher.update(commitment);
                }
                for contribution in repetition.contributions.iter() {
                    hasher.update(contribution);
                }
            }
        })
    }
}

impl Marshalling<Vec<u8>> for Signature {
    fn serialise(&self) -> Vec<u8> {
        let mut serialised = vec![];
        serialised.extend_from_slice(&self.salt);
        for response in self.responses.iter() {
            response.partial_seeds.write_to(&mut serialised);
            serialised.extend_from_slice(&response.aux);
            serialised.extend_from_slice(&response.com_alpha);
        }
        serialised.extend_from_slice(&self.h);
        serialised
    }

    fn parse_with(signature_plain: &Vec<u8>, params: &Parameters) -> Result<Self> {
        check_size("signature", signature_plain, params.signature_size())?;

        let (salt_plain, rest) = signature_plain.split_at(PARAM_SALT_SIZE);
        let mut salt = [0u8; PARAM_SALT_SIZE];
        salt.copy_from_slice(salt_plain);

        let (responses_plain, h_plain) = rest.split_at(params.tau * params.response_size());
        let mut h = [0u8; PARAM_DIGEST_SIZE];
        h.copy_from_slice(h_plain);

        let seeds_size = PartialTreeSeeds::byte_size(params.log_n_mpc);
        let responses = responses_plain
            .chunks_exact(params.response_size())
            .map(|response| {
                let (seeds, rest) = response.split_at(seeds_size);
                let (aux, com_alpha_plain) = rest.split_at(params.k);
                let mut com_alpha = [0u8; PARAM_DIGEST_SIZE];
                com_alpha.copy_from_slice(com_alpha_plain);
                Ok(Response {
                    partial_seeds: PartialTreeSeeds::read_from(seeds, params.log_n_mpc)?,
                    aux: aux.to_vec(),
                    com_alpha,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Signature { salt, responses, h })
    }
}
