//! Core matrix type

use matrixop_core::{Dimensions, MatrixError};
use nalgebra::DMatrix;
use std::fmt;

use crate::validate::validate;

/// A validated dense matrix of `f64`
///
/// Always has at least one row and one column. The only public way in is
/// `from_rows`, which runs the shape validator first.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// Create a matrix from row-major nested rows
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let dims = validate(&rows)?;
        let data = DMatrix::from_fn(dims.rows, dims.cols, |i, j| rows[i][j]);
        Ok(Self { data })
    }

    /// Wrap a DMatrix produced by an operation on validated input.
    /// Callers guarantee both extents are non-zero.
    pub(crate) fn from_dmatrix(data: DMatrix<f64>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Self { data }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn dims(&self) -> Dimensions {
        Dimensions::new(self.rows(), self.cols())
    }

    pub fn is_square(&self) -> bool {
        self.dims().is_square()
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Get a row as a vector of values
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.rows() {
            return None;
        }
        Some(self.data.row(row).iter().copied().collect())
    }

    /// Convert to row-major nested rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows())
            .map(|i| self.data.row(i).iter().copied().collect())
            .collect()
    }

    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub(crate) fn into_dmatrix(self) -> DMatrix<f64> {
        self.data
    }

    /// Largest element-wise absolute difference, or `None` on shape mismatch
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.dims() != other.dims() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::format_matrix(self))
    }
}
