//! The closed set of operations and their metadata

use matrixop_core::MatrixError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An operation the dispatcher can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    #[serde(rename = "mult")]
    Multiply,
    Scale,
    Transpose,
    #[serde(rename = "inv")]
    Inverse,
    Rref,
    Format,
}

/// Metadata about an operation, for catalogues and help
#[derive(Debug, Clone, Serialize)]
pub struct OperationMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub selections: usize,
    pub description: &'static str,
    pub usage: &'static str,
    pub examples: &'static [&'static str],
    pub related: &'static [&'static str],
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Multiply,
        Operation::Scale,
        Operation::Transpose,
        Operation::Inverse,
        Operation::Rref,
        Operation::Format,
    ];

    /// Name accepted at the boundary
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Multiply => "mult",
            Operation::Scale => "scale",
            Operation::Transpose => "transpose",
            Operation::Inverse => "inv",
            Operation::Rref => "rref",
            Operation::Format => "format",
        }
    }

    /// Number of selections the operation consumes
    pub fn arity(&self) -> usize {
        match self {
            Operation::Add | Operation::Multiply | Operation::Scale => 2,
            Operation::Transpose | Operation::Inverse | Operation::Rref | Operation::Format => 1,
        }
    }

    pub fn meta(&self) -> OperationMeta {
        match self {
            Operation::Add => OperationMeta {
                name: "add",
                aliases: &["sum"],
                selections: 2,
                description: "Element-wise sum of two matrices of the same shape",
                usage: "add(a, b) → a + b, written over b; a is cleared",
                examples: &["1 2\\n3 4 + 5 6\\n7 8 → 6 8\\n10 12"],
                related: &["scale", "mult"],
            },
            Operation::Multiply => OperationMeta {
                name: "mult",
                aliases: &["multiply", "matmul"],
                selections: 2,
                description: "Matrix product; columns of a must equal rows of b",
                usage: "mult(a, b) → a × b, written over b; a is cleared",
                examples: &["1 2\\n3 4 × 5 6\\n7 8 → 19 22\\n43 50"],
                related: &["scale", "transpose"],
            },
            Operation::Scale => OperationMeta {
                name: "scale",
                aliases: &["smul"],
                selections: 2,
                description: "Multiply a matrix by a 1×1 scalar selection",
                usage: "scale(k, m) or scale(m, k) → k·m, written over m; k is cleared",
                examples: &["2 · 1 2\\n3 4 → 2 4\\n6 8"],
                related: &["mult", "add"],
            },
            Operation::Transpose => OperationMeta {
                name: "transpose",
                aliases: &["t"],
                selections: 1,
                description: "Swap rows and columns",
                usage: "transpose(m)",
                examples: &["1 2 3 → 1\\n2\\n3"],
                related: &["mult"],
            },
            Operation::Inverse => OperationMeta {
                name: "inv",
                aliases: &["inverse"],
                selections: 1,
                description: "Inverse of a square matrix by Gauss-Jordan reduction of [A | I]",
                usage: "inv(m)",
                examples: &["4 7\\n2 6 → 0.6 -0.7\\n-0.2 0.4"],
                related: &["rref"],
            },
            Operation::Rref => OperationMeta {
                name: "rref",
                aliases: &["reduce"],
                selections: 1,
                description: "Reduced row-echelon form with partial pivoting",
                usage: "rref(m)",
                examples: &["0 1\\n1 0 → 1 0\\n0 1"],
                related: &["inv"],
            },
            Operation::Format => OperationMeta {
                name: "format",
                aliases: &["align"],
                selections: 1,
                description: "Re-render a matrix with aligned columns",
                usage: "format(m)",
                examples: &["1 22\\n333 4 →   1 22\\n333  4"],
                related: &[],
            },
        }
    }
}

impl FromStr for Operation {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == wanted || op.meta().aliases.contains(&wanted.as_str()))
            .ok_or_else(|| MatrixError::UnknownOperation(s.trim().to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
