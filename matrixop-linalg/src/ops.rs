//! Matrix arithmetic: add, multiply, scale, transpose

use matrixop_core::{Axis, MatrixError};

use crate::types::Matrix;

/// Which of the two inputs of a binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

/// Result of `scale`, remembering which input was the scalar
#[derive(Debug, Clone, PartialEq)]
pub struct Scaled {
    pub matrix: Matrix,
    pub scalar: Operand,
}

/// Element-wise sum. Row counts are checked before column counts.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.rows() != b.rows() {
        return Err(MatrixError::DimensionMismatch { axis: Axis::Rows, left: a.rows(), right: b.rows() });
    }
    if a.cols() != b.cols() {
        return Err(MatrixError::DimensionMismatch { axis: Axis::Cols, left: a.cols(), right: b.cols() });
    }
    Ok(Matrix::from_dmatrix(a.as_dmatrix() + b.as_dmatrix()))
}

/// Matrix product `a × b`
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch { axis: Axis::Inner, left: a.cols(), right: b.rows() });
    }
    Ok(Matrix::from_dmatrix(a.as_dmatrix() * b.as_dmatrix()))
}

/// Multiply the non-scalar input by the 1×1 one.
///
/// The left input wins when both are 1×1.
pub fn scale(a: &Matrix, b: &Matrix) -> Result<Scaled, MatrixError> {
    let (scalar, target, side) = if a.dims().is_scalar() {
        (a, b, Operand::Left)
    } else if b.dims().is_scalar() {
        (b, a, Operand::Right)
    } else {
        return Err(MatrixError::InvalidScalar { left: a.dims(), right: b.dims() });
    };

    let k = scalar.as_dmatrix()[(0, 0)];
    Ok(Scaled { matrix: scale_by(target, k), scalar: side })
}

/// Multiply every element by `k`
pub fn scale_by(m: &Matrix, k: f64) -> Matrix {
    Matrix::from_dmatrix(m.as_dmatrix() * k)
}

pub fn transpose(m: &Matrix) -> Matrix {
    Matrix::from_dmatrix(m.as_dmatrix().transpose())
}
