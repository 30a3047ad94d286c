//! Marshalling module for serialising and deserialising types

use std::fmt::Debug;

use crate::{
    constants::params::{Parameters, PARAMETERS},
    error::{Error, Result},
};

/// Trait for serialising and deserialising types
pub trait Marshalling<S>
where
    Self: Sized,
{
    /// Serialise the type into an array of bytes
    fn serialise(&self) -> S;

    /// Parse the type from an array of bytes of the compiled parameter set
    fn parse(serialised: &S) -> Result<Self> {
        Self::parse_with(serialised, &PARAMETERS)
    }

    /// Parse the type from an array of bytes of the given parameter set
    fn parse_with(serialised: &S, params: &Parameters) -> Result<Self>;
}

/// Checks that `bytes` has the size `expected`
pub(crate) fn check_size(what: &'static str, bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        return Err(Error::InputSize {
            what,
            expected,
            got: bytes.len(),
        });
    }
    Ok(())
}

/// Test the marshalling of a type
#[cfg(test)]
pub(crate) fn test_marshalling<T, S>(value: T, changed_value: T, params: &Parameters)
where
    T: Marshalling<S> + Debug + Eq,
    S: PartialEq + Debug,
{
    let serialised_value = value.serialise();
    let parsed = T::parse_with(&serialised_value, params).unwrap();
    assert_eq!(value, parsed);

    assert_ne!(changed_value, value);

    let serialised_changed_value = changed_value.serialise();
    assert_ne!(serialised_changed_value, serialised_value);

    let parsed = T::parse_with(&serialised_changed_value, params).unwrap();
    assert_ne!(value, parsed);
}
