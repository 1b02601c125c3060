//! Operation dispatch: selections in, placed text out
//!
//! Every stage (selection count, parse, validate, compute, format) either
//! succeeds or ends the call with a `DispatchError`. Nothing is written on
//! failure, so the host never sees a partial result.

use matrixop_core::{Dimensions, ErrorReport, MatrixError};
use matrixop_linalg::{
    add, inverse, multiply, parse_matrix, rref, scale, transpose, Matrix, MatrixFormatter, Operand,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, debug_span, warn};

use crate::operation::Operation;

/// A successful operation and where its output goes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub operation: Operation,
    /// Rendered result
    pub text: String,
    /// Selection index whose text is replaced by `text`
    pub target: usize,
    /// Selection indices to erase
    pub cleared: Vec<usize>,
    pub dims: Dimensions,
}

/// A failed operation, with the selection that caused it when there is one
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{source}")]
pub struct DispatchError {
    pub operation: Option<Operation>,
    pub selection: Option<usize>,
    pub source: MatrixError,
    /// Extra detail for the report, such as the input shapes
    pub notes: Vec<String>,
}

impl DispatchError {
    fn new(operation: Operation, source: MatrixError) -> Self {
        Self { operation: Some(operation), selection: None, source, notes: Vec::new() }
    }

    fn at(operation: Operation, selection: usize, source: MatrixError) -> Self {
        Self { operation: Some(operation), selection: Some(selection), source, notes: Vec::new() }
    }

    fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn code(&self) -> &'static str {
        self.source.code()
    }

    pub fn to_report(&self) -> ErrorReport {
        let mut report = ErrorReport::from(self.source.clone());
        if let Some(op) = self.operation {
            report = report.in_operation(op.name());
        }
        if let Some(index) = self.selection {
            report = report.in_selection(index);
        }
        self.notes.iter().fold(report, |report, note| report.with_note(note.as_str()))
    }
}

impl From<MatrixError> for DispatchError {
    fn from(source: MatrixError) -> Self {
        Self { operation: None, selection: None, source, notes: Vec::new() }
    }
}

/// Run `op` over the given selection texts
pub fn dispatch<S: AsRef<str>>(
    op: Operation,
    selections: &[S],
    formatter: &MatrixFormatter,
) -> Result<Outcome, DispatchError> {
    let span = debug_span!("dispatch", operation = op.name(), selections = selections.len());
    let _enter = span.enter();

    let result = run(op, selections, formatter);
    match &result {
        Ok(outcome) => debug!(
            rows = outcome.dims.rows,
            cols = outcome.dims.cols,
            target = outcome.target,
            "operation succeeded"
        ),
        Err(e) => warn!(code = e.code(), selection = ?e.selection, "operation failed: {}", e),
    }
    result
}

fn run<S: AsRef<str>>(
    op: Operation,
    selections: &[S],
    formatter: &MatrixFormatter,
) -> Result<Outcome, DispatchError> {
    if selections.len() != op.arity() {
        return Err(DispatchError::new(op, MatrixError::SelectionCountMismatch {
            operation: op.name().to_string(),
            expected: op.arity(),
            found: selections.len(),
        }));
    }

    let inputs = selections
        .iter()
        .enumerate()
        .map(|(i, text)| parse_matrix(text.as_ref()).map_err(|e| DispatchError::at(op, i, e)))
        .collect::<Result<Vec<Matrix>, _>>()?;

    let (result, target, cleared) = apply(op, &inputs).map_err(|e| {
        let shapes: Vec<String> = inputs.iter().map(|m| m.dims().to_string()).collect();
        DispatchError::new(op, e).with_note(format!("inputs: {}", shapes.join(", ")))
    })?;

    Ok(Outcome {
        operation: op,
        text: formatter.format(&result),
        target,
        cleared,
        dims: result.dims(),
    })
}

// Binary results land on the second selection and clear the first, except
// scale, which writes over whichever input was not the scalar.
fn apply(op: Operation, inputs: &[Matrix]) -> Result<(Matrix, usize, Vec<usize>), MatrixError> {
    match (op, inputs) {
        (Operation::Add, [a, b]) => Ok((add(a, b)?, 1, vec![0])),
        (Operation::Multiply, [a, b]) => Ok((multiply(a, b)?, 1, vec![0])),
        (Operation::Scale, [a, b]) => {
            let scaled = scale(a, b)?;
            Ok(match scaled.scalar {
                Operand::Left => (scaled.matrix, 1, vec![0]),
                Operand::Right => (scaled.matrix, 0, vec![1]),
            })
        }
        (Operation::Transpose, [a]) => Ok((transpose(a), 0, Vec::new())),
        (Operation::Inverse, [a]) => Ok((inverse(a)?, 0, Vec::new())),
        (Operation::Rref, [a]) => Ok((rref(a.clone()), 0, Vec::new())),
        (Operation::Format, [a]) => Ok((a.clone(), 0, Vec::new())),
        _ => Err(MatrixError::SelectionCountMismatch {
            operation: op.name().to_string(),
            expected: op.arity(),
            found: inputs.len(),
        }),
    }
}
