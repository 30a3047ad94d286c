//! # Domain separated hashing
//!
//! Every hash call of the protocol runs through a [`DomainHash`] context. The context is bound to
//! a one byte domain tag when it is created and absorbs that tag as the last input byte when it is
//! finalized, so the tree expansion, commitment and challenge call sites can never produce
//! colliding inputs.
//!
//! The digest is always `2λ` bytes: SHA3-256, SHA3-384 or SHA3-512 depending on the category.

use tiny_keccak::{Hasher, Sha3};

use crate::constants::{
    params::{HashPrimitive, HASH_PRIMITIVE, PARAM_DIGEST_SIZE},
    types::Hash,
};

/// Domain tag of the Fiat-Shamir challenge
pub const DOMAIN_SEPARATOR_CHALLENGE: u8 = 2;
/// Domain tag of the party commitments
pub const DOMAIN_SEPARATOR_COMMITMENT: u8 = 3;
/// Domain tag of the seed tree expansion
pub const DOMAIN_SEPARATOR_TREE: u8 = 4;

fn get_hasher() -> Sha3 {
    match HASH_PRIMITIVE {
        HashPrimitive::SHA3_256 => Sha3::v256(),
        HashPrimitive::SHA3_384 => Sha3::v384(),
        HashPrimitive::SHA3_512 => Sha3::v512(),
    }
}

/// Hash context with an explicit `init -> update* -> finalize` lifecycle.
///
/// `finalize` consumes the context, a context can not be updated after its digest was taken.
pub struct DomainHash {
    hasher: Sha3,
    domain: u8,
}

impl DomainHash {
    /// Start a new context for the given domain
    pub fn init(domain: u8) -> Self {
        DomainHash {
            hasher: get_hasher(),
            domain,
        }
    }

    /// Absorb `data`. Order sensitive.
    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Absorb the domain tag and return the digest
    pub fn finalize(mut self) -> Hash {
        self.hasher.update(&[self.domain]);
        let mut digest = [0u8; PARAM_DIGEST_SIZE];
        self.hasher.finalize(&mut digest);
        digest
    }
}

/// Run `absorb` against a fresh context of `domain` and return the finalized digest.
pub fn hash_scoped<F>(domain: u8, absorb: F) -> Hash
where
    F: FnOnce(&mut DomainHash),
{
    let mut ctx = DomainHash::init(domain);
    absorb(&mut ctx);
    ctx.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_tag_is_absorbed_last() {
        let data = [1u8, 2, 3, 4];
        let tagged = hash_scoped(DOMAIN_SEPARATOR_TREE, |h| h.update(&data));

        let mut hasher = get_hasher();
        hasher.update(&data);
        hasher.update(&[DOMAIN_SEPARATOR_TREE]);
        let mut plain = [0u8; PARAM_DIGEST_SIZE];
        hasher.finalize(&mut plain);

        assert_eq!(tagged, plain);
    }

    #[test]
    fn test_domains_do_not_collide() {
        let data = [9u8; 40];
        let tree = hash_scoped(DOMAIN_SEPARATOR_TREE, |h| h.update(&data));
        let commitment = hash_scoped(DOMAIN_SEPARATOR_COMMITMENT, |h| h.update(&data));
        let challenge = hash_scoped(DOMAIN_SEPARATOR_CHALLENGE, |h| h.update(&data));
        assert_ne!(tree, commitment);
        assert_ne!(tree, challenge);
        assert_ne!(commitment, challenge);
    }

    #[test]
    fn test_split_updates_equal_single_update() {
        let mut split = DomainHash::init(DOMAIN_SEPARATOR_COMMITMENT);
        split.update(&[1, 2]);
        split.update(&[3]);
        let single = hash_scoped(DOMAIN_SEPARATOR_COMMITMENT, |h| h.update(&[1, 2, 3]));
        assert_eq!(split.finalize(), single);
    }

    #[cfg(not(any(feature = "category_three", feature = "category_five")))]
    #[test]
    fn test_sha3_256_known_answer() {
        // SHA3-256(0x04), the tree domain tag on its own
        let digest = hash_scoped(DOMAIN_SEPARATOR_TREE, |_| {});
        assert_eq!(
            hex::encode(digest),
            "989216075a288af2c12f115557518d248f93c434965513f5f739df8c9d6e1932"
        );
    }
}
