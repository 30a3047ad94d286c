use tracing::{debug, instrument};

use crate::{
    constants::{
        params::{Parameters, PARAMETERS},
        types::Salt,
    },
    error::{Error, Result},
    keygen::PublicKey,
    mpc::{hidden_contribution, PartySimulation, OFFSET_PARTY},
    subroutines::{
        challenge::expand_hidden_parties, commitments::commit_share,
        seed_tree::PartialSeedTree,
    },
    utils::{iterator::*, marshalling::Marshalling as _},
};

use super::{
    sign::check_simulation,
    signature::{RepetitionTranscript, Response, Signature},
};

/// Recompute the transcript of repetition `e` from its response, hiding party `alpha`
fn recompute_repetition<S: PartySimulation>(
    simulation: &S,
    salt: &Salt,
    e: u16,
    alpha: u16,
    response: &Response,
    params: &Parameters,
) -> Result<RepetitionTranscript> {
    let tree = PartialSeedTree::expand(&response.partial_seeds, salt, alpha, params.log_n_mpc)?;
    let n_parties = tree.n_leaves();
    let last = n_parties - 1;
    let alpha = alpha as usize;

    let mut commitments = vec![response.com_alpha; n_parties];
    let mut contributions = vec![vec![]; n_parties];
    for (i, seed) in tree.revealed_leaves() {
        let aux = (i == last).then_some(response.aux.as_slice());
        let (_, contribution) = simulation.simulate_party(seed, salt, aux, i == OFFSET_PARTY);
        contributions[i] = contribution;
        commitments[i] = commit_share(salt, e, i as u16, seed, aux);
    }

    contributions[alpha] = hidden_contribution(
        contributions
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != alpha)
            .map(|(_, contribution)| contribution.as_slice()),
        simulation.broadcast_size(),
    );

    Ok(RepetitionTranscript {
        aux: response.aux.clone(),
        commitments,
        contributions,
    })
}

impl Signature {
    /// Verify a serialised signature of `message` with the compiled parameter set.
    ///
    /// Returns an error only if the signature does not have the expected size.
    pub fn verify_signature(
        public_key: &PublicKey,
        signature: &[u8],
        message: &[u8],
    ) -> Result<bool> {
        let signature = Signature::parse(&signature.to_vec())?;
        let simulation = public_key.simulation_with(&PARAMETERS);
        signature.verify_with(&simulation, message, &PARAMETERS)
    }

    /// Verify the signature of `message` against `simulation`.
    ///
    /// Every opened party is simulated again, the contribution of the hidden party is derived
    /// from the others and the transcript digest is recomputed. The signature is accepted iff the
    /// digest equals `h`.
    #[instrument(level = "debug", skip_all, fields(tau = params.tau, n_mpc = params.n_mpc()))]
    pub fn verify_with<S: PartySimulation>(
        &self,
        simulation: &S,
        message: &[u8],
        params: &Parameters,
    ) -> Result<bool> {
        check_simulation(simulation, params)?;
        if self.responses.len() != params.tau {
            return Err(Error::InputSize {
                what: "signature responses",
                expected: params.tau,
                got: self.responses.len(),
            });
        }
        if let Some(response) = self.responses.iter().find(|r| r.aux.len() != params.k) {
            return Err(Error::InputSize {
                what: "share correction",
                expected: params.k,
                got: response.aux.len(),
            });
        }

        let alphas = expand_hidden_parties(&self.h, params.log_n_mpc, params.tau);

        let mut repetitions: Vec<(usize, Result<RepetitionTranscript>)> = (0..params.tau)
            .map(|e| (e, Ok(RepetitionTranscript::default())))
            .collect();
        get_mut_iterator(&mut repetitions).for_each(|(e, transcript)| {
            *transcript = recompute_repetition(
                simulation,
                &self.salt,
                *e as u16,
                alphas[*e],
                &self.responses[*e],
                params,
            );
        });

        let mut transcripts = Vec::with_capacity(params.tau);
        for (e, transcript) in repetitions {
            match transcript {
                Ok(transcript) => transcripts.push(transcript),
                Err(err) => {
                    debug!(e, %err, "rejected: repetition can not be recomputed");
                    return Ok(false);
                }
            }
        }

        let h = Signature::gen_h(&simulation.statement(), &self.salt, message, &transcripts);
        let valid = h == self.h;
        debug!(valid, "verified signature");
        Ok(valid)
    }
}
