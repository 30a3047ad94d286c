//! # rmira
//!
//! MPC-in-the-Head signatures in the MIRA layout: the GGM seed tree with all-but-one opening,
//! the additive party simulation and the Fiat-Shamir sign/verify orchestration over `τ`
//! repetitions.
//!
//! The parameter set is chosen at compile time with the `category_*` and `variant_short`
//! features. The `parallel` feature (default) runs the repetitions on rayon.
//!
//! **Not a secure signature scheme as shipped.** The bundled [`mpc::syndrome`] relation is
//! linear and can be solved from the public key, so [`keygen`], [`api`] and the `mira` CLI only
//! demonstrate the protocol. Security comes from a hard relation behind
//! [`mpc::PartySimulation`].

pub mod api;
pub mod arith;
pub mod constants;
pub mod error;
pub mod keygen;
pub mod mpc;
pub mod signature;
pub mod subroutines;
pub mod utils;
