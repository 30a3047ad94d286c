//! # Constants
//!
//! The MIRA signature scheme comes with three categories of parameters according to the NIST
//! post-quantum cryptography standardization process, each in a fast and a short variant.
//!
//! The category is selected with the `category_one` (default), `category_three` and
//! `category_five` features, the short variant with `variant_short`. The values are exposed
//! through the [`params`] module.
//!
//! The [`types`] module contains the types used in the protocol like
//! [`crate::constants::types::Hash`] and [`crate::constants::types::Seed`].

pub mod params;
pub mod types;
