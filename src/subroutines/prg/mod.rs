//! # Pseudo Random Generator (PRG)
//! Pseudo-randomness used in the MIRA protocol
//!
//! ## Hashing
//! Domain separated hashing for the seed tree, the party commitments and the Fiat-Shamir
//! challenge is implemented in the [`hashing`] module.
//!
//! ## XOF
//! Extendable Output Functions (XOFs) are used to expand seeds into party shares and to expand
//! the challenge digest. The XOFs are implemented in the [`xof`] module.

pub mod hashing;
pub mod xof;

use tiny_keccak::Shake;
use xof::{MiraXOF, MiraXOFTrait as _};

use crate::constants::{
    params::PARAM_SEED_SIZE,
    types::{Salt, Seed},
};

/// Pseudo Random Generator (PRG) struct
///
/// The pseudorandomness is generated through extendable output functions (XOFs), Shake by default.
pub struct PRG {
    xof: MiraXOF<Shake>,
}

impl PRG {
    /// Initialize the PRG with a seed and optional salt
    pub fn init(seed: &Seed, salt: Option<&Salt>) -> Self {
        PRG {
            xof: MiraXOF::init(seed, salt),
        }
    }

    /// Initialize the PRG with a base value e.g. the challenge digest
    pub fn init_base(x: &[u8]) -> Self {
        PRG {
            xof: MiraXOF::init_base(x),
        }
    }

    /// Sample a random [`Vec`] in the field F_q = F_256
    pub fn sample_field_fq_elements_vec(&mut self, n: usize) -> Vec<u8> {
        let mut f = vec![0u8; n];
        self.xof.squeeze(&mut f);

        f
    }

    /// Sample random values in the field F_q = F_256
    /// The byte B_i is returned as the sampled field element. XOF is called to generate n bytes
    pub fn sample_field_fq_elements(&mut self, out: &mut [u8]) {
        self.xof.squeeze(out);
    }

    /// Sample a random [`Seed`].
    pub fn sample_seed(&mut self) -> Seed {
        let mut seed = [0u8; PARAM_SEED_SIZE];
        self.xof.squeeze(&mut seed);
        seed
    }
}
