//! Matrix shape

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a validated matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// A literal 1×1 shape. Both axes are checked.
    pub fn is_scalar(&self) -> bool {
        self.rows == 1 && self.cols == 1
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Which pair of extents disagreed in a dimension check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Row counts of the two operands
    Rows,
    /// Column counts of the two operands
    Cols,
    /// Columns of the left operand against rows of the right
    Inner,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => write!(f, "rows"),
            Axis::Cols => write!(f, "columns"),
            Axis::Inner => write!(f, "inner"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Dimensions::new(2, 3).to_string(), "2×3");
    }

    #[test]
    fn test_scalar_checks_both_axes() {
        assert!(Dimensions::new(1, 1).is_scalar());
        assert!(!Dimensions::new(1, 3).is_scalar());
        assert!(!Dimensions::new(3, 1).is_scalar());
    }

    #[test]
    fn test_square() {
        assert!(Dimensions::new(4, 4).is_square());
        assert!(!Dimensions::new(2, 5).is_square());
    }
}
