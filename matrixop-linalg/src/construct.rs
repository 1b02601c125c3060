//! Matrix construction: identity, zeros, blank templates

use matrixop_core::{Dimensions, MatrixError, ShapeError};
use nalgebra::DMatrix;

use crate::types::Matrix;

/// n×n identity
pub fn identity(n: usize) -> Result<Matrix, MatrixError> {
    if n == 0 {
        return Err(ShapeError::Empty.into());
    }
    Ok(Matrix::from_dmatrix(DMatrix::identity(n, n)))
}

/// Largest number of entries `zeros` will allocate
pub const MAX_TEMPLATE_CELLS: usize = 1_000_000;

/// Zero-filled matrix of the given shape, at most `MAX_TEMPLATE_CELLS` entries
pub fn zeros(dims: Dimensions) -> Result<Matrix, MatrixError> {
    if dims.rows == 0 {
        return Err(ShapeError::Empty.into());
    }
    if dims.cols == 0 {
        return Err(ShapeError::EmptyRow { row: 0 }.into());
    }
    match dims.rows.checked_mul(dims.cols) {
        Some(cells) if cells <= MAX_TEMPLATE_CELLS => {}
        _ => {
            return Err(ShapeError::TooLarge {
                rows: dims.rows,
                cols: dims.cols,
                max: MAX_TEMPLATE_CELLS,
            }
            .into())
        }
    }
    Ok(Matrix::from_dmatrix(DMatrix::zeros(dims.rows, dims.cols)))
}

/// Parse a shape like `3x2` (also `3X2`, `3×2`, spaces allowed)
pub fn parse_shape(text: &str) -> Result<Dimensions, MatrixError> {
    let text = text.trim();
    let (rows, cols) = text
        .split_once(['x', 'X', '×'])
        .ok_or_else(|| MatrixError::ParseFailure { token: text.to_string(), line: 1 })?;

    let extent = |s: &str| {
        let s = s.trim();
        s.parse::<usize>()
            .map_err(|_| MatrixError::ParseFailure { token: s.to_string(), line: 1 })
    };

    Ok(Dimensions::new(extent(rows)?, extent(cols)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let i = identity(3).unwrap();
        assert_eq!(i.dims(), Dimensions::new(3, 3));
        assert_eq!(i.row(1), Some(vec![0.0, 1.0, 0.0]));
        assert!(identity(0).is_err());
    }

    #[test]
    fn test_zeros() {
        let z = zeros(Dimensions::new(2, 3)).unwrap();
        assert_eq!(z.to_rows(), vec![vec![0.0; 3]; 2]);
        assert_eq!(
            zeros(Dimensions::new(0, 3)).unwrap_err(),
            MatrixError::ShapeInvalid(ShapeError::Empty)
        );
        assert_eq!(
            zeros(Dimensions::new(2, 0)).unwrap_err(),
            MatrixError::ShapeInvalid(ShapeError::EmptyRow { row: 0 })
        );
    }

    #[test]
    fn test_zeros_rejects_oversized_shapes() {
        let huge = 1usize << 32;
        assert_eq!(
            zeros(Dimensions::new(huge, huge)).unwrap_err(),
            MatrixError::ShapeInvalid(ShapeError::TooLarge { rows: huge, cols: huge, max: MAX_TEMPLATE_CELLS })
        );
        assert!(zeros(Dimensions::new(100_000, 100_000)).is_err());
        assert!(zeros(Dimensions::new(1000, 1001)).is_err());
        assert_eq!(zeros(Dimensions::new(1000, 1000)).unwrap().dims(), Dimensions::new(1000, 1000));
    }

    #[test]
    fn test_parse_shape() {
        assert_eq!(parse_shape("3x2").unwrap(), Dimensions::new(3, 2));
        assert_eq!(parse_shape(" 4 X 1 ").unwrap(), Dimensions::new(4, 1));
        assert_eq!(parse_shape("2×5").unwrap(), Dimensions::new(2, 5));
    }

    #[test]
    fn test_parse_shape_rejects_garbage() {
        assert_eq!(
            parse_shape("3 by 2").unwrap_err(),
            MatrixError::ParseFailure { token: "3 by 2".to_string(), line: 1 }
        );
        assert_eq!(
            parse_shape("3x-2").unwrap_err(),
            MatrixError::ParseFailure { token: "-2".to_string(), line: 1 }
        );
    }
}
