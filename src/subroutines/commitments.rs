//! # Commitments
//!
//! The prover commits to every party of every repetition before the challenge is derived.

use crate::constants::types::{Hash, Salt, Seed};

use super::prg::hashing::{hash_scoped, DOMAIN_SEPARATOR_COMMITMENT};

pub type Commitment = Hash;

/// Commit to the seed of party `i` in repetition `e`.
///
/// Hashes `salt || e || i || seed [|| aux]` with `e` and `i` as little endian `u16`. The auxiliary
/// share correction is only bound into the commitment of the last party.
pub fn commit_share(salt: &Salt, e: u16, i: u16, seed: &Seed, aux: Option<&[u8]>) -> Commitment {
    hash_scoped(DOMAIN_SEPARATOR_COMMITMENT, |hasher| {
        hasher.update(salt);
        hasher.update(&e.to_le_bytes());
        hasher.update(&i.to_le_bytes());
        hasher.update(seed);
        if let Some(aux) = aux {
            hasher.update(aux);
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::constants::params::{PARAM_SALT_SIZE, PARAM_SEED_SIZE};

    use super::*;

    #[test]
    fn test_commitment_binds_indices() {
        let salt = [0u8; PARAM_SALT_SIZE];
        let seed = [1u8; PARAM_SEED_SIZE];
        let base = commit_share(&salt, 0, 0, &seed, None);
        assert_ne!(base, commit_share(&salt, 1, 0, &seed, None));
        assert_ne!(base, commit_share(&salt, 0, 1, &seed, None));
        // e and i must not be interchangeable
        assert_ne!(
            commit_share(&salt, 1, 2, &seed, None),
            commit_share(&salt, 2, 1, &seed, None)
        );
        assert_ne!(base, commit_share(&[1u8; PARAM_SALT_SIZE], 0, 0, &seed, None));
    }

    #[test]
    fn test_commitment_binds_aux() {
        let salt = [0u8; PARAM_SALT_SIZE];
        let seed = [1u8; PARAM_SEED_SIZE];
        let plain = commit_share(&salt, 3, 7, &seed, None);
        let with_aux = commit_share(&salt, 3, 7, &seed, Some(&[0u8; 4]));
        assert_ne!(plain, with_aux);
        assert_eq!(with_aux, commit_share(&salt, 3, 7, &seed, Some(&[0u8; 4])));
        assert_eq!(plain, commit_share(&salt, 3, 7, &seed, Some(&[])));
    }
}
