//! # Utilities
//!
//! - [`marshalling`]: the trait for serialising and parsing keys and signatures.
//! - `iterator`: sequential or parallel iteration depending on the `parallel` feature.

pub(crate) mod iterator;
pub mod marshalling;
