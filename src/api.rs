//! # NIST API
//!
//! Byte array interface of the compiled parameter set, in the shape of the NIST PQC signature API.
//! The randomness of key generation and signing is drawn from the caller's RNG.
//!
//! The keys are those of [`crate::keygen`], a linear test relation without unforgeability.

use rand::{CryptoRng, RngCore};

use crate::{
    constants::{
        params::{PARAMETERS, PARAM_SALT_SIZE, PARAM_SEED_SIZE},
        types::{Salt, Seed},
    },
    error::{Error, Result},
    keygen::{keygen, PublicKey, SecretKey},
    signature::Signature,
    utils::marshalling::Marshalling as _,
};

/// Size in bytes of a serialised public key
pub const CRYPTO_PUBLICKEYBYTES: usize = PARAMETERS.public_key_size();
/// Size in bytes of a serialised secret key
pub const CRYPTO_SECRETKEYBYTES: usize = PARAMETERS.secret_key_size();
/// Size in bytes of a signature
pub const CRYPTO_BYTES: usize = PARAMETERS.signature_size();

fn sample_entropy<R: RngCore + CryptoRng>(rng: &mut R) -> (Seed, Salt) {
    let mut mseed = [0u8; PARAM_SEED_SIZE];
    let mut salt = [0u8; PARAM_SALT_SIZE];
    rng.fill_bytes(&mut mseed);
    rng.fill_bytes(&mut salt);
    (mseed, salt)
}

/// Generate a key pair, returns `(pk, sk)`
pub fn crypto_sign_keypair<R: RngCore + CryptoRng>(rng: &mut R) -> (Vec<u8>, Vec<u8>) {
    let mut seed_root = [0u8; PARAM_SEED_SIZE];
    rng.fill_bytes(&mut seed_root);
    let (pk, sk) = keygen(seed_root);
    (pk.serialise(), sk.serialise())
}

/// Detached signature of `m`
pub fn crypto_sign_signature<R: RngCore + CryptoRng>(
    m: &[u8],
    sk: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    let secret_key = SecretKey::parse(&sk.to_vec())?;
    Signature::sign_message(sample_entropy(rng), &secret_key, m)
}

/// Verify a detached signature of `m`
pub fn crypto_sign_verify(sig: &[u8], m: &[u8], pk: &[u8]) -> Result<bool> {
    let public_key = PublicKey::parse(&pk.to_vec())?;
    Signature::verify_signature(&public_key, sig, m)
}

/// Signed message `sig || m`
pub fn crypto_sign<R: RngCore + CryptoRng>(m: &[u8], sk: &[u8], rng: &mut R) -> Result<Vec<u8>> {
    let mut sm = crypto_sign_signature(m, sk, rng)?;
    sm.extend_from_slice(m);
    Ok(sm)
}

/// Open a signed message. Returns the message, or `None` if the signature is invalid.
pub fn crypto_sign_open(sm: &[u8], pk: &[u8]) -> Result<Option<Vec<u8>>> {
    if sm.len() < CRYPTO_BYTES {
        return Err(Error::InputSize {
            what: "signed message",
            expected: CRYPTO_BYTES,
            got: sm.len(),
        });
    }
    let (sig, m) = sm.split_at(CRYPTO_BYTES);
    Ok(crypto_sign_verify(sig, m, pk)?.then(|| m.to_vec()))
}

#[cfg(test)]
mod tests {
    use nist_pqc_seeded_rng::{NistPqcAes256CtrRng, Seed};
    use rand::SeedableRng as _;

    use super::*;

    fn rng() -> NistPqcAes256CtrRng {
        NistPqcAes256CtrRng::from_seed(Seed::default())
    }

    #[test]
    fn test_sizes() {
        let (pk, sk) = crypto_sign_keypair(&mut rng());
        assert_eq!(pk.len(), CRYPTO_PUBLICKEYBYTES);
        assert_eq!(sk.len(), CRYPTO_SECRETKEYBYTES);
        let sig = crypto_sign_signature(b"message", &sk, &mut rng()).unwrap();
        assert_eq!(sig.len(), CRYPTO_BYTES);
    }

    #[test]
    fn test_detached_round_trip() {
        let mut rng = rng();
        let (pk, sk) = crypto_sign_keypair(&mut rng);
        let sig = crypto_sign_signature(b"message", &sk, &mut rng).unwrap();
        assert_eq!(crypto_sign_verify(&sig, b"message", &pk), Ok(true));
        assert_eq!(crypto_sign_verify(&sig, b"other", &pk), Ok(false));
    }

    #[test]
    fn test_signed_message_round_trip() {
        let mut rng = rng();
        let (pk, sk) = crypto_sign_keypair(&mut rng);
        let message = b"Hello, World!".to_vec();
        let sm = crypto_sign(&message, &sk, &mut rng).unwrap();
        assert_eq!(sm.len(), CRYPTO_BYTES + message.len());
        assert_eq!(crypto_sign_open(&sm, &pk), Ok(Some(message)));

        let mut tampered = sm.clone();
        let last = tampered.len() - 1;
        tampered[last] ^= 1;
        assert_eq!(crypto_sign_open(&tampered, &pk), Ok(None));

        // empty message
        let sm = crypto_sign(&[], &sk, &mut rng).unwrap();
        assert_eq!(crypto_sign_open(&sm, &pk), Ok(Some(vec![])));
    }

    #[test]
    fn test_malformed_inputs() {
        let mut rng = rng();
        let (pk, sk) = crypto_sign_keypair(&mut rng);
        assert!(matches!(
            crypto_sign_signature(b"m", &sk[1..], &mut rng),
            Err(Error::InputSize { what: "secret key", .. })
        ));
        assert_eq!(
            crypto_sign_open(&[0u8; 3], &pk),
            Err(Error::InputSize {
                what: "signed message",
                expected: CRYPTO_BYTES,
                got: 3,
            })
        );
        // a bare signature opens to the empty message
        let sig = crypto_sign_signature(&[], &sk, &mut rng).unwrap();
        assert_eq!(crypto_sign_open(&sig, &pk), Ok(Some(vec![])));
        let sig = crypto_sign_signature(b"m", &sk, &mut rng).unwrap();
        assert!(matches!(
            crypto_sign_verify(&sig, b"m", &pk[..pk.len() - 1]),
            Err(Error::InputSize { what: "public key", .. })
        ));
    }
}
