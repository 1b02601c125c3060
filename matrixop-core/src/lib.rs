//! Matrixop Core - Fundamental types
//!
//! This crate provides the core types used throughout Matrixop:
//! - `Dimensions`: the (rows, cols) shape of a validated matrix
//! - `MatrixError`: typed failures of a single operation
//! - `ErrorReport`: structured, serializable errors for the host boundary

mod dims;
mod error;

pub use dims::{Axis, Dimensions};
pub use error::{codes, ErrorContext, ErrorReport, MatrixError, ShapeError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Axis, Dimensions, ErrorReport, MatrixError, ShapeError};
    pub use crate::error::codes;
}
