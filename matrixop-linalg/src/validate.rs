//! Shape validation

use matrixop_core::{Dimensions, MatrixError, ShapeError};

/// Confirm a grid is non-empty and rectangular, returning its shape
pub fn validate(grid: &[Vec<f64>]) -> Result<Dimensions, MatrixError> {
    let first = grid.first().ok_or(ShapeError::Empty)?;
    let cols = first.len();

    for (row, values) in grid.iter().enumerate() {
        if values.is_empty() {
            return Err(ShapeError::EmptyRow { row }.into());
        }
        if values.len() != cols {
            return Err(ShapeError::Ragged { row, expected: cols, found: values.len() }.into());
        }
    }

    Ok(Dimensions::new(grid.len(), cols))
}
