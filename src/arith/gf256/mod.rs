//! # Galois Field 256
//!
//! The field the witness, shares and syndromes of [`crate::mpc::syndrome`] live in.
//!
//! - [`gf256_arith`]: the [`FieldArith`] implementation for [`u8`]
//! - [`gf256_vector`]: element-wise operations on byte vectors

pub mod gf256_arith;
pub mod gf256_vector;

/// Arithmetic of a finite field element
pub trait FieldArith
where
    Self: Sized + Clone + Copy + PartialEq,
{
    fn field_one() -> Self;
    fn field_add(&self, rhs: Self) -> Self;
    fn field_mul(&self, rhs: Self) -> Self;
}

/// Checks the field axioms on three elements
#[cfg(test)]
pub(super) fn test_field_definitions<T>(a: T, b: T, c: T)
where
    T: FieldArith + std::fmt::Debug,
{
    assert_eq!(a.field_add(b), b.field_add(a));
    assert_eq!(a.field_mul(b), b.field_mul(a));

    assert_eq!(a.field_add(b.field_add(c)), a.field_add(b).field_add(c));
    assert_eq!(a.field_mul(b.field_mul(c)), a.field_mul(b).field_mul(c));

    assert_eq!(a.field_mul(T::field_one()), a);
    // characteristic two
    assert_eq!(a.field_add(a).field_add(b), b);

    assert_eq!(
        a.field_mul(b.field_add(c)),
        a.field_mul(b).field_add(a.field_mul(c))
    );
}
