//! # Key generation
//!
//! A key pair is an instance of the syndrome relation: the public key is `(seed_h, y)` and the
//! secret key additionally holds the witness `x` with `H' x = y`.
//!
//! These keys are a test instance: `x` can be recovered from the public key (see
//! [`crate::mpc::syndrome`]).

use tracing::{debug, instrument};

use crate::{
    arith::matrices::HPrimeMatrix,
    constants::{
        params::{Parameters, PARAMETERS, PARAM_SEED_SIZE},
        types::Seed,
    },
    error::Result,
    mpc::syndrome::SyndromeSimulation,
    subroutines::prg::PRG,
    utils::marshalling::{check_size, Marshalling},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub seed_h: Seed,
    pub y: Vec<u8>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    pub seed_h: Seed,
    pub y: Vec<u8>,
    pub x: Vec<u8>,
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("seed_h", &self.seed_h)
            .field("y", &self.y)
            .finish_non_exhaustive()
    }
}

impl PublicKey {
    /// Party simulation proving knowledge of a witness for this key
    pub fn simulation(&self) -> SyndromeSimulation {
        self.simulation_with(&PARAMETERS)
    }

    pub fn simulation_with(&self, params: &Parameters) -> SyndromeSimulation {
        SyndromeSimulation::new(self.seed_h, self.y.clone(), params.k)
    }
}

impl SecretKey {
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            seed_h: self.seed_h,
            y: self.y.clone(),
        }
    }
}

/// Generate a key pair of the compiled parameter set from `seed_root`
pub fn keygen(seed_root: Seed) -> (PublicKey, SecretKey) {
    keygen_with(seed_root, &PARAMETERS)
}

/// Generate a key pair of the given parameter set from `seed_root`.
///
/// `seed_root` is expanded into `seed_h`, which expands the matrix `H'`, and the seed of the
/// witness `x`. Then `y = H' x`.
#[instrument(level = "debug", skip(seed_root))]
pub fn keygen_with(seed_root: Seed, params: &Parameters) -> (PublicKey, SecretKey) {
    let mut prg = PRG::init(&seed_root, None);
    let seed_h = prg.sample_seed();
    let seed_witness = prg.sample_seed();

    let x = PRG::init(&seed_witness, None).sample_field_fq_elements_vec(params.k);
    let y = HPrimeMatrix::expand(&seed_h, params.m_sub_k, params.k).mul_vector(&x);
    debug!(k = params.k, m_sub_k = params.m_sub_k, "generated key pair");

    let pk = PublicKey {
        seed_h,
        y: y.clone(),
    };
    let sk = SecretKey { seed_h, y, x };
    (pk, sk)
}

impl Marshalling<Vec<u8>> for PublicKey {
    fn serialise(&self) -> Vec<u8> {
        let mut serialised = Vec::with_capacity(PARAM_SEED_SIZE + self.y.len());
        serialised.extend_from_slice(&self.seed_h);
        serialised.extend_from_slice(&self.y);
        serialised
    }

    fn parse_with(serialised: &Vec<u8>, params: &Parameters) -> Result<Self> {
        check_size("public key", serialised, params.public_key_size())?;
        let (seed_h, y) = serialised.split_at(PARAM_SEED_SIZE);
        let mut seed = [0u8; PARAM_SEED_SIZE];
        seed.copy_from_slice(seed_h);
        Ok(PublicKey {
            seed_h: seed,
            y: y.to_vec(),
        })
    }
}

impl Marshalling<Vec<u8>> for SecretKey {
    fn serialise(&self) -> Vec<u8> {
        let mut serialised = self.public_key().serialise();
        serialised.extend_from_slice(&self.x);
        serialised
    }

    fn parse_with(serialised: &Vec<u8>, params: &Parameters) -> Result<Self> {
        check_size("secret key", serialised, params.secret_key_size())?;
        let (public, x) = serialised.split_at(params.public_key_size());
        let PublicKey { seed_h, y } = PublicKey::parse_with(&public.to_vec(), params)?;
        Ok(SecretKey {
            seed_h,
            y,
            x: x.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, mpc::PartySimulation as _, utils::marshalling::test_marshalling};

    use super::*;

    #[test]
    fn test_keygen_relation_holds() {
        let (pk, sk) = keygen([0u8; PARAM_SEED_SIZE]);
        assert_eq!(pk, sk.public_key());
        assert_eq!(sk.x.len(), PARAMETERS.k);
        assert_eq!(pk.y.len(), PARAMETERS.m_sub_k);
        assert!(pk.simulation().is_consistent(&sk.x));
    }

    #[test]
    fn test_public_key_alone_yields_a_witness() {
        // the bundled relation is linear, anyone can solve it
        let (pk, sk) = keygen([3u8; PARAM_SEED_SIZE]);
        let simulation = pk.simulation();
        let recovered = simulation.h_prime().solve(&pk.y).unwrap();
        assert!(simulation.is_consistent(&recovered));
        assert_ne!(recovered, sk.x);
    }

    #[test]
    fn test_keygen_is_deterministic() {
        let (pk1, sk1) = keygen([1u8; PARAM_SEED_SIZE]);
        let (pk2, sk2) = keygen([1u8; PARAM_SEED_SIZE]);
        assert_eq!(pk1, pk2);
        assert_eq!(sk1, sk2);
        let (pk3, _) = keygen([2u8; PARAM_SEED_SIZE]);
        assert_ne!(pk1, pk3);
    }

    #[test]
    fn test_marshalling_public_key() {
        let (pk, _) = keygen([0u8; PARAM_SEED_SIZE]);
        let (other, _) = keygen([1u8; PARAM_SEED_SIZE]);
        test_marshalling(pk, other, &PARAMETERS);
    }

    #[test]
    fn test_marshalling_secret_key() {
        let (_, sk) = keygen([0u8; PARAM_SEED_SIZE]);
        let (_, other) = keygen([1u8; PARAM_SEED_SIZE]);
        assert_eq!(sk.serialise().len(), PARAMETERS.secret_key_size());
        test_marshalling(sk, other, &PARAMETERS);
    }

    #[test]
    fn test_parse_rejects_wrong_size() {
        let (pk, sk) = keygen([0u8; PARAM_SEED_SIZE]);
        let mut bytes = pk.serialise();
        bytes.push(0);
        assert_eq!(
            PublicKey::parse(&bytes),
            Err(Error::InputSize {
                what: "public key",
                expected: PARAMETERS.public_key_size(),
                got: PARAMETERS.public_key_size() + 1,
            })
        );
        let bytes = sk.serialise();
        assert!(SecretKey::parse(&bytes[..bytes.len() - 1].to_vec()).is_err());
    }

    #[test]
    fn test_secret_key_debug_hides_witness() {
        let (_, sk) = keygen([0u8; PARAM_SEED_SIZE]);
        assert!(!format!("{:?}", sk).contains(" x:"));
    }
}
