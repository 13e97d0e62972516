//! Dense `f64` matrices stored as rows.

use crate::{Error, Result};

/// Pivots smaller than this are treated as zero.
pub const EPS: f64 = 1e-10;

pub type Matrix = Vec<Vec<f64>>;

/// Solves `a x = b` by Gauss-Jordan elimination with partial pivoting. `O(n^3)`.
///
/// Fails with [`Error::SingularMatrix`] when the solution is missing or not unique.
pub fn gauss_jordan(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>> {
    let n = a.len();
    if b.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: b.len(),
        });
    }
    if let Some(row) = a.iter().find(|row| row.len() != n) {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: row.len(),
        });
    }

    // the augmented matrix [a | b]
    let mut m: Matrix = a
        .iter()
        .zip(b)
        .map(|(row, &rhs)| row.iter().copied().chain(Some(rhs)).collect::<Vec<f64>>())
        .collect();

    for i in 0..n {
        let pivot = (i..n)
            .max_by(|&x, &y| m[x][i].abs().total_cmp(&m[y][i].abs()))
            .unwrap_or(i);
        m.swap(i, pivot);
        if m[i][i].abs() < EPS {
            log::debug!("singular matrix: no usable pivot in column {i}");
            return Err(Error::SingularMatrix);
        }
        let head = m[i][i];
        for j in i + 1..=n {
            m[i][j] /= head;
        }
        for j in 0..n {
            if j == i {
                continue;
            }
            let factor = m[j][i];
            for k in i + 1..=n {
                m[j][k] -= factor * m[i][k];
            }
        }
    }
    Ok(m.into_iter().map(|row| row[n]).collect())
}

/// The matrix product `a * b`.
pub fn mul(a: &[Vec<f64>], b: &[Vec<f64>]) -> Matrix {
    let inner = b.len();
    let width = b.first().map_or(0, Vec::len);
    a.iter()
        .map(|row| {
            assert_eq!(row.len(), inner, "cannot multiply matrices of mismatched shapes");
            (0..width)
                .map(|j| (0..inner).map(|k| row[k] * b[k][j]).sum::<f64>())
                .collect::<Vec<f64>>()
        })
        .collect()
}

/// The product of the matrix `a` with the column vector `v`.
pub fn mul_vec(a: &[Vec<f64>], v: &[f64]) -> Vec<f64> {
    a.iter()
        .map(|row| {
            assert_eq!(row.len(), v.len(), "cannot multiply a matrix by a vector of another size");
            row.iter().zip(v).map(|(x, y)| x * y).sum::<f64>()
        })
        .collect()
}

pub fn identity(n: usize) -> Matrix {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect::<Vec<f64>>())
        .collect()
}
