//! Error types for the MIRA signature protocol

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A byte array does not have the length required by the parameter set
    #[error("Invalid {what} size: expected {expected} bytes, got {got}")]
    InputSize {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("Hidden party {alpha} is out of range for {n_parties} parties")]
    InvalidHiddenParty { alpha: u16, n_parties: usize },

    #[error("Seed tree index {index} is out of range for {n_nodes} nodes")]
    TreeIndexOutOfRange { index: usize, n_nodes: usize },

    #[error("Seed tree node {0} is not set")]
    MissingNode(usize),

    /// The secret witness does not satisfy the public relation. Signing is aborted.
    #[error("The witness is inconsistent with the public key")]
    InconsistentWitness,
}
