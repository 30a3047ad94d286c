//! # Signature
//!
//! Fiat-Shamir signing and verification over `τ` repetitions of the seed tree and the party
//! simulation.
//!
//! Signing, for every repetition `e`:
//! 1. expand a seed tree from a root squeezed from `(mseed, salt)`
//! 2. expand the share of every party from its leaf, correct the last share with `aux[e]`
//! 3. commit to every party and compute its contribution
//!
//! All repetitions are then hashed in order into `h`, which is expanded into the hidden party
//! `alpha[e]` of every repetition. The response of a repetition opens every party but `alpha[e]`.
//!
//! Verification rebuilds all leaves but `alpha[e]`, simulates the opened parties again and derives
//! the contribution of the hidden party from theirs. The signature is valid iff the recomputed
//! digest equals `h`.

mod sign;
pub mod signature;
mod verify;

pub use signature::{Response, Signature};
