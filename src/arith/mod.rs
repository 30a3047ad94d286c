//! # Arithmetic
//!
//! Finite field arithmetic of the syndrome relation proven by [`crate::mpc::syndrome`].

pub mod gf256;
pub mod matrices;
