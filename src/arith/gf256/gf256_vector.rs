// ----------------------- Vector operations -----------------------

use super::FieldArith;

/// vz'[] = vz[] + vx[]
pub fn gf256_add_vector(vz: &mut [u8], vx: &[u8]) {
    debug_assert!(vx.len() >= vz.len());
    for (z, x) in vz.iter_mut().zip(vx) {
        *z = z.field_add(*x);
    }
}

/// vz'[] = vz[] + vx[] * scalar
pub fn gf256_add_vector_mul_scalar(vz: &mut [u8], vx: &[u8], scalar: u8) {
    debug_assert!(vx.len() >= vz.len());
    for (z, x) in vz.iter_mut().zip(vx) {
        *z = z.field_add(x.field_mul(scalar));
    }
}

/// XOR of all `vectors`, each of length `len`
pub fn gf256_sum_vectors<'a, I>(vectors: I, len: usize) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut acc = vec![0u8; len];
    for v in vectors {
        gf256_add_vector(&mut acc, v);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vector() {
        let mut vz = [1u8, 2, 3, 0xff];
        gf256_add_vector(&mut vz, &[1, 1, 1, 0x0f]);
        assert_eq!(vz, [0, 3, 2, 0xf0]);
    }

    #[test]
    fn test_add_vector_mul_scalar() {
        let mut vz = [5u8, 0, 9];
        let vx = [0x80u8, 3, 0];
        gf256_add_vector_mul_scalar(&mut vz, &vx, 2);
        assert_eq!(vz, [5 ^ 0x1d, 6, 9]);
    }

    #[test]
    fn test_sum_vectors() {
        let a = [1u8, 2];
        let b = [3u8, 4];
        let c = [1u8, 6];
        let sum = gf256_sum_vectors([&a[..], &b[..], &c[..]], 2);
        assert_eq!(sum, vec![3, 0]);
        assert_eq!(gf256_sum_vectors(std::iter::empty(), 3), vec![0, 0, 0]);
    }
}
