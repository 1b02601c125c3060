//! Structured errors
//!
//! Every failure is local to one operation. `MatrixError` is what library
//! code returns and propagates; `ErrorReport` is the serializable form handed
//! to the host, which decides how to present it.

use crate::{Axis, Dimensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_FAILURE: &str = "PARSE_FAILURE";
    pub const SHAPE_INVALID: &str = "SHAPE_INVALID";
    pub const SELECTION_COUNT: &str = "SELECTION_COUNT";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const INVALID_SCALAR: &str = "INVALID_SCALAR";
    pub const NOT_SQUARE: &str = "NOT_SQUARE";
    pub const SINGULAR: &str = "SINGULAR";
    pub const UNKNOWN_OPERATION: &str = "UNKNOWN_OPERATION";
}

/// Why a parsed grid is not a matrix
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("no rows")]
    Empty,

    #[error("row {row} is empty")]
    EmptyRow { row: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("{rows}×{cols} exceeds the limit of {max} entries")]
    TooLarge { rows: usize, cols: usize, max: usize },
}

/// Failure of a single matrix operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Invalid input: '{token}' on line {line} is not a number")]
    ParseFailure { token: String, line: usize },

    #[error("Invalid input: {0}")]
    ShapeInvalid(#[from] ShapeError),

    #[error("Incorrect number of matrices for {operation} ({found} != {expected})")]
    SelectionCountMismatch { operation: String, expected: usize, found: usize },

    #[error("Dimensions do not align: {axis} {left} != {right}")]
    DimensionMismatch { axis: Axis, left: usize, right: usize },

    #[error("At least one input must be a 1×1 scalar, got {left} and {right}")]
    InvalidScalar { left: Dimensions, right: Dimensions },

    #[error("Matrix must be square, got {0}")]
    NotSquare(Dimensions),

    #[error("Matrix is not invertible ({n}×{n} reduction did not reach the identity)")]
    Singular { n: usize },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl MatrixError {
    /// Machine-readable code for this failure
    pub fn code(&self) -> &'static str {
        match self {
            MatrixError::ParseFailure { .. } => codes::PARSE_FAILURE,
            MatrixError::ShapeInvalid(_) => codes::SHAPE_INVALID,
            MatrixError::SelectionCountMismatch { .. } => codes::SELECTION_COUNT,
            MatrixError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            MatrixError::InvalidScalar { .. } => codes::INVALID_SCALAR,
            MatrixError::NotSquare(_) => codes::NOT_SQUARE,
            MatrixError::Singular { .. } => codes::SINGULAR,
            MatrixError::UnknownOperation(_) => codes::UNKNOWN_OPERATION,
        }
    }

    /// Hint for fixing the input, if one applies
    pub fn suggestion(&self) -> Option<String> {
        match self {
            MatrixError::ParseFailure { .. } => {
                Some("Use whitespace-separated numbers, one row per line".to_string())
            }
            MatrixError::ShapeInvalid(ShapeError::TooLarge { max, .. }) => {
                Some(format!("Ask for at most {} entries", max))
            }
            MatrixError::ShapeInvalid(_) => {
                Some("Every row must have the same number of entries".to_string())
            }
            MatrixError::SelectionCountMismatch { expected, .. } => {
                Some(format!("Select exactly {} matri{}", expected, if *expected == 1 { "x" } else { "ces" }))
            }
            MatrixError::DimensionMismatch { axis: Axis::Inner, .. } => {
                Some("Columns of the first matrix must equal rows of the second".to_string())
            }
            MatrixError::DimensionMismatch { .. } => {
                Some("Both matrices must have the same shape".to_string())
            }
            MatrixError::InvalidScalar { .. } => {
                Some("Select a single number as one of the two inputs".to_string())
            }
            MatrixError::NotSquare(_) => None,
            MatrixError::Singular { .. } => None,
            MatrixError::UnknownOperation(_) => {
                Some("Use list_operations to see available operations".to_string())
            }
        }
    }
}

/// Context about where an error occurred
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Operation that was being run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    /// Zero-based index of the selection the failure came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<usize>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Structured error for the host boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Where the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl ErrorReport {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set operation context
    pub fn in_operation(mut self, operation: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.operation = Some(operation.into());
        self
    }

    /// Builder: set selection context
    pub fn in_selection(mut self, index: usize) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.selection = Some(index);
        self
    }

    /// Builder: add note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }
}

impl From<MatrixError> for ErrorReport {
    fn from(err: MatrixError) -> Self {
        let report = ErrorReport::new(err.code(), err.to_string());
        match err.suggestion() {
            Some(s) => report.with_suggestion(s),
            None => report,
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = MatrixError::DimensionMismatch { axis: Axis::Rows, left: 2, right: 3 };
        assert_eq!(err.code(), codes::DIMENSION_MISMATCH);
        assert_eq!(err.to_string(), "Dimensions do not align: rows 2 != 3");
    }

    #[test]
    fn test_shape_error_converts() {
        let err: MatrixError = ShapeError::Ragged { row: 1, expected: 2, found: 3 }.into();
        assert_eq!(err.code(), codes::SHAPE_INVALID);
        assert_eq!(err.to_string(), "Invalid input: row 1 has 3 columns, expected 2");

        let err: MatrixError = ShapeError::TooLarge { rows: 2000, cols: 2000, max: 1_000_000 }.into();
        assert_eq!(err.code(), codes::SHAPE_INVALID);
        assert_eq!(err.suggestion().as_deref(), Some("Ask for at most 1000000 entries"));
    }

    #[test]
    fn test_report_display() {
        let report = ErrorReport::from(MatrixError::NotSquare(Dimensions::new(2, 3)));
        assert_eq!(report.to_string(), "[NOT_SQUARE] Matrix must be square, got 2×3");

        let report = ErrorReport::from(MatrixError::SelectionCountMismatch {
            operation: "add".to_string(),
            expected: 2,
            found: 1,
        });
        assert_eq!(
            report.to_string(),
            "[SELECTION_COUNT] Incorrect number of matrices for add (1 != 2) (suggestion: Select exactly 2 matrices)"
        );
    }

    #[test]
    fn test_report_context_serialization() {
        let report = ErrorReport::from(MatrixError::ParseFailure { token: "x".to_string(), line: 2 })
            .in_operation("rref")
            .in_selection(0)
            .with_note("while reading input");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["code"], "PARSE_FAILURE");
        assert_eq!(json["context"]["operation"], "rref");
        assert_eq!(json["context"]["selection"], 0);
        assert_eq!(json["context"]["notes"][0], "while reading input");

        let bare = serde_json::to_value(ErrorReport::new("SINGULAR", "nope")).unwrap();
        assert!(bare.get("context").is_none());
        assert!(bare.get("suggestion").is_none());
    }
}
