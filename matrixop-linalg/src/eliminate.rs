//! Gauss-Jordan elimination with partial pivoting

use matrixop_core::MatrixError;
use nalgebra::DMatrix;
use tracing::trace;

use crate::types::Matrix;

/// Reduce `m` to reduced row-echelon form in place, returning the number of
/// pivots found.
///
/// The pivot for column `k` is the row at or below the current one with the
/// largest absolute value (first such row on ties). A column is skipped only
/// when that value is exactly zero; there is no tolerance, so entries that
/// should cancel but carry rounding noise become pivots.
pub fn gauss_jordan(m: &mut DMatrix<f64>) -> usize {
    let (rows, cols) = m.shape();
    let mut h = 0;
    let mut k = 0;

    while h < rows && k < cols {
        let (pivot_row, pivot_abs) = find_pivot(m, h, k);

        if pivot_abs == 0.0 {
            k += 1;
            continue;
        }

        if pivot_row != h {
            trace!(column = k, from = pivot_row, to = h, "swapping pivot row");
            m.swap_rows(h, pivot_row);
        }

        let pivot = m[(h, k)];
        for j in 0..cols {
            m[(h, j)] /= pivot;
        }

        for i in 0..rows {
            if i == h {
                continue;
            }
            let factor = m[(i, k)];
            m[(i, k)] = 0.0;
            for j in k + 1..cols {
                let delta = m[(h, j)] * factor;
                m[(i, j)] -= delta;
            }
        }

        h += 1;
        k += 1;
    }

    h
}

// Row at or below `h` with the largest |m[(i, k)]|; the first one wins ties.
fn find_pivot(m: &DMatrix<f64>, h: usize, k: usize) -> (usize, f64) {
    let mut pivot_row = h;
    let mut pivot_abs = m[(h, k)].abs();
    for i in h + 1..m.nrows() {
        let v = m[(i, k)].abs();
        if v > pivot_abs {
            pivot_row = i;
            pivot_abs = v;
        }
    }
    (pivot_row, pivot_abs)
}

/// Reduced row-echelon form
pub fn rref(m: Matrix) -> Matrix {
    let mut data = m.into_dmatrix();
    gauss_jordan(&mut data);
    Matrix::from_dmatrix(data)
}

/// Inverse via reduction of the augmented matrix `[A | I]`.
///
/// The left half must come out as the identity exactly, element by element.
pub fn inverse(a: &Matrix) -> Result<Matrix, MatrixError> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare(a.dims()));
    }
    let n = a.rows();

    let mut augmented = DMatrix::<f64>::zeros(n, 2 * n);
    augmented.view_mut((0, 0), (n, n)).copy_from(a.as_dmatrix());
    for i in 0..n {
        augmented[(i, n + i)] = 1.0;
    }

    let rank = gauss_jordan(&mut augmented);
    trace!(n, rank, "augmented reduction done");

    for i in 0..n {
        for j in 0..n {
            let expected = if i == j { 1.0 } else { 0.0 };
            if augmented[(i, j)] != expected {
                return Err(MatrixError::Singular { n });
            }
        }
    }

    Ok(Matrix::from_dmatrix(augmented.columns(n, n).clone_owned()))
}
