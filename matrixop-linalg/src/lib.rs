//! Matrixop Linalg - dense matrix engine
//!
//! Everything here is a pure function over owned or borrowed values:
//! - Parsing text into a numeric grid (`parse_grid`, `parse_matrix`)
//! - Shape validation (`validate`)
//! - Arithmetic (`add`, `multiply`, `scale`, `transpose`)
//! - Gauss-Jordan elimination with partial pivoting (`rref`, `inverse`)
//! - Canonical aligned text output (`MatrixFormatter`)
//!
//! Storage is `f64` in an `nalgebra::DMatrix`.

mod types;
mod parse;
mod validate;
mod format;
mod ops;
mod eliminate;
mod construct;

#[cfg(test)]
mod proptests;

pub use types::Matrix;
pub use parse::{parse_grid, parse_matrix, Grid};
pub use validate::validate;
pub use format::{format_matrix, format_value, MatrixFormatter, DEFAULT_PRECISION, MAX_PRECISION};
pub use ops::{add, multiply, scale, scale_by, transpose, Operand, Scaled};
pub use eliminate::{gauss_jordan, inverse, rref};
pub use construct::{identity, parse_shape, zeros, MAX_TEMPLATE_CELLS};
