//! Linear Solver - Dense square matrix helpers
//!
//! Gauss-Jordan inversion with partial pivoting over fixed-size arrays.
//! The regression trainer uses it on the 5x5 Gram matrix.

use crate::constants::PIVOT_EPSILON;

/// Row-major square matrix of dimension N
pub type Matrix<const N: usize> = [[f64; N]; N];

/// Identity matrix
pub fn identity<const N: usize>() -> Matrix<N> {
    let mut m = [[0.0; N]; N];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    m
}

/// Invert a square matrix by reducing [A | I] to [I | A^-1].
///
/// Returns `None` when a pivot column has no entry with magnitude at least
/// `PIVOT_EPSILON` on or below the diagonal. No further reduction is
/// attempted once that happens.
pub fn invert<const N: usize>(a: &Matrix<N>) -> Option<Matrix<N>> {
    let mut m = *a;
    let mut inv = identity::<N>();

    for col in 0..N {
        // Partial pivoting: largest magnitude from the diagonal down
        let mut pivot = col;
        for r in col..N {
            if m[r][col].abs() > m[pivot][col].abs() {
                pivot = r;
            }
        }
        if m[pivot][col].abs() < PIVOT_EPSILON {
            return None;
        }

        m.swap(col, pivot);
        inv.swap(col, pivot);

        let pv = m[col][col];
        for c in 0..N {
            m[col][c] /= pv;
            inv[col][c] /= pv;
        }

        for r in 0..N {
            if r == col {
                continue;
            }
            let f = m[r][col];
            if f == 0.0 {
                continue;
            }
            for c in 0..N {
                m[r][c] -= f * m[col][c];
                inv[r][c] -= f * inv[col][c];
            }
        }
    }

    Some(inv)
}

/// Matrix-vector product
pub fn mat_vec<const N: usize>(m: &Matrix<N>, v: &[f64; N]) -> [f64; N] {
    let mut out = [0.0; N];
    for (r, row) in m.iter().enumerate() {
        out[r] = row.iter().zip(v.iter()).map(|(a, b)| a * b).sum();
    }
    out
}

/// Matrix-matrix product
pub fn mat_mul<const N: usize>(a: &Matrix<N>, b: &Matrix<N>) -> Matrix<N> {
    let mut out = [[0.0; N]; N];
    for r in 0..N {
        for c in 0..N {
            out[r][c] = (0..N).map(|k| a[r][k] * b[k][c]).sum();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_identity<const N: usize>(m: &Matrix<N>, tol: f64) {
        for r in 0..N {
            for c in 0..N {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!(
                    (m[r][c] - expected).abs() < tol,
                    "entry ({}, {}) = {} not within {} of {}",
                    r, c, m[r][c], tol, expected
                );
            }
        }
    }

    #[test]
    fn test_inverse_times_matrix_is_identity() {
        let a: Matrix<5> = [
            [4.0, 1.0, 0.5, 0.0, 2.0],
            [1.0, 5.0, 0.0, 1.0, 1.0],
            [0.5, 0.0, 3.0, 0.2, 0.0],
            [0.0, 1.0, 0.2, 6.0, 1.5],
            [2.0, 1.0, 0.0, 1.5, 7.0],
        ];
        let inv = invert(&a).expect("matrix is invertible");
        assert_identity(&mat_mul(&inv, &a), 1e-9);
        assert_identity(&mat_mul(&a, &inv), 1e-9);
    }

    #[test]
    fn test_requires_row_swap() {
        // Zero on the first diagonal entry forces a pivot swap
        let a: Matrix<5> = [
            [0.0, 2.0, 0.0, 0.0, 0.0],
            [3.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 4.0],
            [0.0, 0.0, 0.0, 5.0, 0.0],
        ];
        let inv = invert(&a).expect("permutation-like matrix is invertible");
        assert_identity(&mat_mul(&inv, &a), 1e-9);
        assert!((inv[0][1] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_row_is_singular() {
        let a: Matrix<5> = [
            [1.0, 2.0, 3.0, 4.0, 5.0],
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [2.0, 1.0, 0.0, 1.0, 2.0],
            [1.0, 1.0, 1.0, 1.0, 1.0],
            [3.0, 0.0, 1.0, 0.0, 3.0],
        ];
        assert!(invert(&a).is_none());
    }

    #[test]
    fn test_duplicate_rows_are_singular() {
        let a: Matrix<5> = [
            [1.0, 2.0, 3.0, 4.0, 5.0],
            [1.0, 2.0, 3.0, 4.0, 5.0],
            [2.0, 1.0, 0.0, 1.0, 2.0],
            [0.0, 1.0, 1.0, 2.0, 1.0],
            [3.0, 0.0, 1.0, 0.0, 3.0],
        ];
        assert!(invert(&a).is_none());
    }

    #[test]
    fn test_mat_vec() {
        let m = identity::<5>();
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(mat_vec(&m, &v), v);
    }
}
