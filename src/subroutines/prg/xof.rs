//! # Extendable output function (XOF).
//!
//! The pseudorandomness of the protocol is generated through an extendable output hash function
//! (XOF). Party shares, per-repetition tree roots, the public matrix and the hidden-party challenge
//! are all squeezed from a SHAKE instance.

use tiny_keccak::{Hasher, Shake, Xof};

use crate::constants::{
    params::{XOF_PRIMITIVE, XOFPrimitive},
    types::{Salt, Seed},
};

/// Trait for the extendable output function (XOF) implementation
///
/// The trait holds the necessary functions to initialize the XOF, update the XOF with data, and
/// squeeze the XOF to get the output.
pub trait MiraXOFTrait<T> {
    /// Get the XOF instance
    ///
    /// Matches the [`XOF_PRIMITIVE`] to get the correct XOF based on Category configuration.
    fn get_xof() -> T;
    /// Initialize the XOF with a base value `x`
    fn init_base(x: &[u8]) -> Self;
    /// Initialize the XOF with a [`Seed`] and optional [`Salt`]
    fn init(seed: &Seed, salt: Option<&Salt>) -> Self;
    /// Squeeze the XOF to get the output of size `output.len()`
    fn squeeze(&mut self, output: &mut [u8]);
}

/// MiraXOF struct
///
/// Holds the generic XOF
pub struct MiraXOF<T> {
    xof: T,
}

impl MiraXOFTrait<Shake> for MiraXOF<Shake> {
    fn get_xof() -> Shake {
        match XOF_PRIMITIVE {
            XOFPrimitive::SHAKE128 => Shake::v128(),
            XOFPrimitive::SHAKE256 => Shake::v256(),
        }
    }

    fn init_base(x: &[u8]) -> Self {
        let mut xof = Self::get_xof();
        xof.update(x);
        MiraXOF { xof }
    }

    fn init(seed: &Seed, salt: Option<&Salt>) -> Self {
        let mut xof = Self::get_xof();

        if let Some(salt) = salt {
            xof.update(salt);
        }

        xof.update(seed);

        MiraXOF { xof }
    }

    fn squeeze(&mut self, output: &mut [u8]) {
        self.xof.squeeze(output);
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::params::{PARAM_SALT_SIZE, PARAM_SEED_SIZE};

    use super::*;

    #[test]
    fn test_squeeze_is_a_stream() {
        // Two squeezes of 8 bytes equal one squeeze of 16 bytes
        let seed = [7u8; PARAM_SEED_SIZE];
        let mut split = MiraXOF::<Shake>::init(&seed, None);
        let mut a = [0u8; 16];
        split.squeeze(&mut a[..8]);
        split.squeeze(&mut a[8..]);

        let mut whole = MiraXOF::<Shake>::init(&seed, None);
        let mut b = [0u8; 16];
        whole.squeeze(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_salt_changes_output() {
        let seed = [0u8; PARAM_SEED_SIZE];
        let mut unsalted = MiraXOF::<Shake>::init(&seed, None);
        let mut salted = MiraXOF::<Shake>::init(&seed, Some(&[1u8; PARAM_SALT_SIZE]));
        let (mut a, mut b) = ([0u8; 32], [0u8; 32]);
        unsalted.squeeze(&mut a);
        salted.squeeze(&mut b);
        assert_ne!(a, b);
    }
}
