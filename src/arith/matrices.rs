use crate::{constants::types::Seed, subroutines::prg::PRG};

use super::gf256::gf256_vector::gf256_add_vector_mul_scalar;

/// Public matrix `H'` of the syndrome relation, `m - k` rows by `k` columns over GF(256).
///
/// Columns are stored contiguously, i.e. the first `m - k` bytes are the first column.
/// Or visually for a 2x3 matrix:
///
/// ```text
/// | 1 2 3 |
/// | 4 5 6 | = [1, 4, 2, 5, 3, 6]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HPrimeMatrix {
    rows: usize,
    cols: usize,
    elements: Vec<u8>,
}

impl HPrimeMatrix {
    /// Expand `H'` from a seed, column by column
    pub fn expand(seed: &Seed, rows: usize, cols: usize) -> Self {
        let mut prg = PRG::init(seed, None);
        Self {
            rows,
            cols,
            elements: prg.sample_field_fq_elements_vec(rows * cols),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `out += H' v`, `v` of length `cols` and `out` of length `rows`
    pub fn mul_vector_add(&self, out: &mut [u8], v: &[u8]) {
        debug_assert_eq!(v.len(), self.cols);
        debug_assert_eq!(out.len(), self.rows);
        if self.rows == 0 {
            return;
        }
        for (column, vi) in self.elements.chunks_exact(self.rows).zip(v) {
            gf256_add_vector_mul_scalar(out, column, *vi);
        }
    }

    /// `H' v`
    pub fn mul_vector(&self, v: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; self.rows];
        self.mul_vector_add(&mut out, v);
        out
    }

    /// One solution of `H' x = y` by Gauss-Jordan elimination, free coordinates set to zero.
    /// `None` if the system is inconsistent.
    #[cfg(test)]
    pub(crate) fn solve(&self, y: &[u8]) -> Option<Vec<u8>> {
        use super::gf256::FieldArith as _;

        let inverse = |a: u8| (1..=255u8).find(|b| a.field_mul(*b) == 1);

        // augmented rows [H' | y]
        let mut rows: Vec<Vec<u8>> = (0..self.rows)
            .map(|r| {
                let mut row: Vec<u8> = (0..self.cols)
                    .map(|c| self.elements[c * self.rows + r])
                    .collect();
                row.push(y[r]);
                row
            })
            .collect();

        let mut pivots = Vec::with_capacity(self.rows);
        for col in 0..self.cols {
            let rank = pivots.len();
            if rank == self.rows {
                break;
            }
            let Some(found) = (rank..self.rows).find(|&r| rows[r][col] != 0) else {
                continue;
            };
            rows.swap(rank, found);
            let inv = inverse(rows[rank][col])?;
            for v in rows[rank].iter_mut() {
                *v = v.field_mul(inv);
            }
            let pivot_row = rows[rank].clone();
            for (r, row) in rows.iter_mut().enumerate() {
                if r != rank && row[col] != 0 {
                    let factor = row[col];
                    gf256_add_vector_mul_scalar(row, &pivot_row, factor);
                }
            }
            pivots.push(col);
        }

        if rows[pivots.len()..].iter().any(|row| row[self.cols] != 0) {
            return None;
        }
        let mut x = vec![0u8; self.cols];
        for (row, col) in rows.iter().zip(pivots) {
            x[col] = row[self.cols];
        }
        Some(x)
    }
}
