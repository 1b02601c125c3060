//! Text to numeric grid

use matrixop_core::MatrixError;

use crate::types::Matrix;

/// Row-major grid straight out of the parser, not yet shape-checked
pub type Grid = Vec<Vec<f64>>;

/// Parse whitespace-separated numbers, one row per line.
///
/// Blank lines are skipped. The first token that does not parse as `f64`
/// fails the whole parse; its 1-based line number counts skipped lines too.
pub fn parse_grid(text: &str) -> Result<Grid, MatrixError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|_| MatrixError::ParseFailure {
                        token: token.to_string(),
                        line: idx + 1,
                    })
                })
                .collect()
        })
        .collect()
}

/// Parse and validate in one step
pub fn parse_matrix(text: &str) -> Result<Matrix, MatrixError> {
    Matrix::from_rows(parse_grid(text)?)
}
