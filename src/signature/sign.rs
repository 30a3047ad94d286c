use tracing::{debug, instrument, trace};

use crate::{
    arith::gf256::gf256_vector::gf256_add_vector,
    constants::{
        params::{Parameters, PARAMETERS},
        types::{Salt, Seed},
    },
    error::{Error, Result},
    keygen::SecretKey,
    mpc::{share_correction, PartySimulation, OFFSET_PARTY},
    subroutines::{
        challenge::expand_hidden_parties, commitments::commit_share, prg::PRG,
        seed_tree::SeedTree,
    },
    utils::{iterator::*, marshalling::Marshalling as _},
};

use super::signature::{RepetitionTranscript, Response, Signature};

/// Prover state of a single repetition
struct ProverRepetition {
    e: u16,
    tree: SeedTree,
    transcript: RepetitionTranscript,
}

impl ProverRepetition {
    /// Expand the seed tree, share the witness and commit to every party
    fn commit<S: PartySimulation>(&mut self, simulation: &S, witness: &[u8], salt: &Salt) {
        self.tree.expand(salt);
        let last = self.tree.n_leaves() - 1;

        let mut shares: Vec<Vec<u8>> = self
            .tree
            .leaves()
            .iter()
            .map(|seed| simulation.expand_share(seed, salt))
            .collect();
        let aux = share_correction(witness, shares.iter().map(Vec::as_slice));
        gf256_add_vector(&mut shares[last], &aux);

        self.transcript.contributions = shares
            .iter()
            .enumerate()
            .map(|(i, share)| simulation.party_computation(share, i == OFFSET_PARTY))
            .collect();
        self.transcript.commitments = self
            .tree
            .leaves()
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                let aux = (i == last).then_some(aux.as_slice());
                commit_share(salt, self.e, i as u16, seed, aux)
            })
            .collect();
        self.transcript.aux = aux;
    }

    /// Open every party except `alpha`
    fn respond(&self, alpha: u16) -> Result<Response> {
        let com_alpha = *self
            .transcript
            .commitments
            .get(alpha as usize)
            .ok_or(Error::InvalidHiddenParty {
                alpha,
                n_parties: self.tree.n_leaves(),
            })?;
        Ok(Response {
            partial_seeds: self.tree.compute_partial(alpha)?,
            aux: self.transcript.aux.clone(),
            com_alpha,
        })
    }
}

/// Checks that `simulation` shares witnesses of the size the signature layout expects
pub(super) fn check_simulation<S: PartySimulation>(
    simulation: &S,
    params: &Parameters,
) -> Result<()> {
    params.validate()?;
    if simulation.share_size() != params.k {
        return Err(Error::InvalidParameters(
            "the party simulation does not match the witness size",
        ));
    }
    Ok(())
}

impl Signature {
    /// Sign `message` with the compiled parameter set and return the serialised signature.
    ///
    /// `entropy` is the master seed the per-repetition tree roots are expanded from and the salt.
    pub fn sign_message(
        entropy: (Seed, Salt),
        secret_key: &SecretKey,
        message: &[u8],
    ) -> Result<Vec<u8>> {
        let simulation = secret_key.public_key().simulation_with(&PARAMETERS);
        let signature = Self::sign_with(entropy, &simulation, &secret_key.x, message, &PARAMETERS)?;
        Ok(signature.serialise())
    }

    /// Sign `message`, proving knowledge of `witness` for `simulation`.
    ///
    /// Fails with [`Error::InconsistentWitness`] before anything is committed if the witness does
    /// not satisfy the relation.
    #[instrument(level = "debug", skip_all, fields(tau = params.tau, n_mpc = params.n_mpc()))]
    pub fn sign_with<S: PartySimulation>(
        entropy: (Seed, Salt),
        simulation: &S,
        witness: &[u8],
        message: &[u8],
        params: &Parameters,
    ) -> Result<Signature> {
        check_simulation(simulation, params)?;
        if witness.len() != params.k {
            return Err(Error::InputSize {
                what: "witness",
                expected: params.k,
                got: witness.len(),
            });
        }
        if !simulation.is_consistent(witness) {
            return Err(Error::InconsistentWitness);
        }

        let (mseed, salt) = entropy;
        let mut prg = PRG::init(&mseed, Some(&salt));
        let mut repetitions = (0..params.tau)
            .map(|e| {
                Ok(ProverRepetition {
                    e: e as u16,
                    tree: SeedTree::new(prg.sample_seed(), params.log_n_mpc)?,
                    transcript: RepetitionTranscript::default(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        get_mut_iterator(&mut repetitions)
            .for_each(|repetition| repetition.commit(simulation, witness, &salt));
        debug!("committed to all repetitions");

        let h = Signature::gen_h(
            &simulation.statement(),
            &salt,
            message,
            repetitions.iter().map(|repetition| &repetition.transcript),
        );

        let alphas = expand_hidden_parties(&h, params.log_n_mpc, params.tau);
        trace!(?alphas, "hidden parties");

        let responses = repetitions
            .iter()
            .zip(alphas)
            .map(|(repetition, alpha)| repetition.respond(alpha))
            .collect::<Result<Vec<_>>>()?;

        Ok(Signature { salt, responses, h })
    }
}
