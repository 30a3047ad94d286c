//! # Subroutines
//!
//! This module contains the subroutines the MIRA sign and verify orchestration is built on.
//!
//! - [`seed_tree`]: expansion of a master seed into party seeds and their all-but-one opening.
//! - [`commitments`]: commitments to the parties of a repetition.
//! - [`challenge`]: expansion of the Fiat-Shamir digest into the hidden parties.
//! - [`prg`]: domain separated hashing and pseudo random generation.

pub mod challenge;
pub mod commitments;
pub mod prg;
pub mod seed_tree;
