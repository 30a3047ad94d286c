//! # Parameters
//!
//! The parameter set is selected at compile time through the `category_*` and `variant_short`
//! features. The security width (λ) fixes the size of every seed, salt and digest, the remaining
//! values are also collected in a runtime [`Parameters`] descriptor which the seed tree and the
//! sign/verify orchestration read, so that reduced instances can be exercised in tests.

use crate::error::{Error, Result};

/// Hash primitives used for [`crate::subroutines::prg::hashing::DomainHash`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashPrimitive {
    SHA3_256,
    SHA3_384,
    SHA3_512,
}

/// XOF primitives used for [`crate::subroutines::prg::PRG`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XOFPrimitive {
    SHAKE128,
    SHAKE256,
}

/// Compiled version category of the protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Categories {
    ONE = 1,
    THREE = 3,
    FIVE = 5,
}

#[cfg(not(any(feature = "category_three", feature = "category_five")))]
mod category {
    use super::{Categories, HashPrimitive, XOFPrimitive};

    pub const COMPILED_CATEGORY: Categories = Categories::ONE;
    pub const PARAM_SECURITY_BYTES: usize = 128 / 8;
    pub const HASH_PRIMITIVE: HashPrimitive = HashPrimitive::SHA3_256;
    pub const XOF_PRIMITIVE: XOFPrimitive = XOFPrimitive::SHAKE128;
    pub const PARAM_TAU_FAST: usize = 28;
    pub const PARAM_TAU_SHORT: usize = 17;
    pub const PARAM_K: usize = 126;
    pub const PARAM_M_SUB_K: usize = 116;
}

#[cfg(feature = "category_three")]
mod category {
    use super::{Categories, HashPrimitive, XOFPrimitive};

    pub const COMPILED_CATEGORY: Categories = Categories::THREE;
    pub const PARAM_SECURITY_BYTES: usize = 192 / 8;
    pub const HASH_PRIMITIVE: HashPrimitive = HashPrimitive::SHA3_384;
    pub const XOF_PRIMITIVE: XOFPrimitive = XOFPrimitive::SHAKE256;
    pub const PARAM_TAU_FAST: usize = 41;
    pub const PARAM_TAU_SHORT: usize = 26;
    pub const PARAM_K: usize = 220;
    pub const PARAM_M_SUB_K: usize = 156;
}

#[cfg(all(feature = "category_five", not(feature = "category_three")))]
mod category {
    use super::{Categories, HashPrimitive, XOFPrimitive};

    pub const COMPILED_CATEGORY: Categories = Categories::FIVE;
    pub const PARAM_SECURITY_BYTES: usize = 256 / 8;
    pub const HASH_PRIMITIVE: HashPrimitive = HashPrimitive::SHA3_512;
    pub const XOF_PRIMITIVE: XOFPrimitive = XOFPrimitive::SHAKE256;
    pub const PARAM_TAU_FAST: usize = 54;
    pub const PARAM_TAU_SHORT: usize = 34;
    pub const PARAM_K: usize = 288;
    pub const PARAM_M_SUB_K: usize = 194;
}

pub use category::{COMPILED_CATEGORY, HASH_PRIMITIVE, XOF_PRIMITIVE};
pub use category::{PARAM_K, PARAM_M_SUB_K};

// Signature Parameters
/// (λ) Security parameter in bytes. Size of every seed tree node.
pub const PARAM_SECURITY_BYTES: usize = category::PARAM_SECURITY_BYTES;
/// Seed size in bytes
pub const PARAM_SEED_SIZE: usize = PARAM_SECURITY_BYTES;
/// Salt size in bytes (2λ)
pub const PARAM_SALT_SIZE: usize = 2 * PARAM_SECURITY_BYTES;
/// Digest (Hash) size in bytes (2λ)
pub const PARAM_DIGEST_SIZE: usize = 2 * PARAM_SECURITY_BYTES;

// MPCitH Parameters
/// (log_2(N)) Depth of the seed tree
#[cfg(not(feature = "variant_short"))]
pub const PARAM_N_MPC_LOG2: usize = 5;
#[cfg(feature = "variant_short")]
pub const PARAM_N_MPC_LOG2: usize = 8;

/// (N) Number of parties in the MPC simulation
pub const PARAM_N_MPC: usize = 1 << PARAM_N_MPC_LOG2;

/// (τ) Number of repetitions of the protocol
#[cfg(not(feature = "variant_short"))]
pub const PARAM_TAU: usize = category::PARAM_TAU_FAST;
#[cfg(feature = "variant_short")]
pub const PARAM_TAU: usize = category::PARAM_TAU_SHORT;

/// Largest supported seed tree depth. Parent indices are absorbed as a single byte.
pub const MAX_N_MPC_LOG2: usize = 8;

/// Runtime description of a parameter set.
///
/// The compiled set is [`PARAMETERS`]. Smaller sets are used to exercise the protocol in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    /// (log_2(N)) Depth of the seed tree
    pub log_n_mpc: usize,
    /// (τ) Number of repetitions
    pub tau: usize,
    /// (k) Length of the witness
    pub k: usize,
    /// (m - k) Length of the syndrome
    pub m_sub_k: usize,
}

/// Parameters of the compiled category and variant
pub const PARAMETERS: Parameters = Parameters {
    log_n_mpc: PARAM_N_MPC_LOG2,
    tau: PARAM_TAU,
    k: PARAM_K,
    m_sub_k: PARAM_M_SUB_K,
};

impl Parameters {
    /// (N) Number of parties
    pub const fn n_mpc(&self) -> usize {
        1 << self.log_n_mpc
    }

    /// Number of nodes in a seed tree, `2N - 1`
    pub const fn tree_nodes(&self) -> usize {
        2 * self.n_mpc() - 1
    }

    /// Checks the parameter invariants. `N = 1` is rejected as no party could be hidden.
    pub fn validate(&self) -> Result<()> {
        if self.log_n_mpc == 0 {
            return Err(Error::InvalidParameters(
                "at least two parties are required to hide one",
            ));
        }
        if self.log_n_mpc > MAX_N_MPC_LOG2 {
            return Err(Error::InvalidParameters(
                "parent indices of the seed tree must fit in one byte",
            ));
        }
        if self.tau == 0 {
            return Err(Error::InvalidParameters("at least one repetition is required"));
        }
        if self.k == 0 || self.m_sub_k == 0 {
            return Err(Error::InvalidParameters("the relation dimensions must be non-zero"));
        }
        Ok(())
    }

    /// Size in bytes of the response of a single repetition
    pub const fn response_size(&self) -> usize {
        self.log_n_mpc * PARAM_SEED_SIZE + self.k + PARAM_DIGEST_SIZE
    }

    /// Size in bytes of a signature
    pub const fn signature_size(&self) -> usize {
        PARAM_SALT_SIZE + self.tau * self.response_size() + PARAM_DIGEST_SIZE
    }

    /// Size in bytes of a public key `(seed_h, y)`
    pub const fn public_key_size(&self) -> usize {
        PARAM_SEED_SIZE + self.m_sub_k
    }

    /// Size in bytes of a secret key `(seed_h, y, x)`
    pub const fn secret_key_size(&self) -> usize {
        self.public_key_size() + self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_parameters_are_valid() {
        assert!(PARAMETERS.validate().is_ok());
        assert_eq!(PARAMETERS.n_mpc(), PARAM_N_MPC);
        assert_eq!(PARAMETERS.tree_nodes(), 2 * PARAM_N_MPC - 1);
    }

    #[test]
    fn test_soundness_reaches_security_level() {
        // Each repetition is broken with probability 1/N
        assert!(PARAM_N_MPC_LOG2 * PARAM_TAU >= 8 * PARAM_SECURITY_BYTES);
    }

    #[test]
    fn test_degenerate_tree_is_rejected() {
        let params = Parameters {
            log_n_mpc: 0,
            ..PARAMETERS
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidParameters(_))
        ));

        let params = Parameters {
            log_n_mpc: MAX_N_MPC_LOG2 + 1,
            ..PARAMETERS
        };
        assert!(params.validate().is_err());

        let params = Parameters { tau: 0, ..PARAMETERS };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_signature_size() {
        let params = Parameters {
            log_n_mpc: 3,
            tau: 2,
            k: 10,
            m_sub_k: 4,
        };
        assert_eq!(
            params.signature_size(),
            PARAM_SALT_SIZE + 2 * (3 * PARAM_SEED_SIZE + 10 + PARAM_DIGEST_SIZE) + PARAM_DIGEST_SIZE
        );
    }
}
