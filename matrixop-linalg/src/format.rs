//! Canonical aligned text output
//!
//! Whole numbers render without a decimal point. Everything else is rounded
//! half away from zero at `precision` decimal places (`f64::round` on the
//! value scaled by `10^precision`) and printed in shortest form, so trailing
//! zeros never appear. Columns are right-aligned; the first column has no
//! leading pad and every other column is separated by at least one space.

use crate::types::Matrix;

/// Decimal places used when nothing else is configured
pub const DEFAULT_PRECISION: u32 = 4;

/// Beyond this, scaling by `10^precision` no longer rounds anything
pub const MAX_PRECISION: u32 = 15;

/// Matrix renderer
#[derive(Debug, Clone, Copy)]
pub struct MatrixFormatter {
    precision: u32,
}

impl MatrixFormatter {
    pub fn new() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }

    /// Decimal places for non-integral values, capped at `MAX_PRECISION`
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn format(&self, m: &Matrix) -> String {
        let tokens: Vec<Vec<String>> = m
            .to_rows()
            .iter()
            .map(|row| row.iter().map(|&x| format_value(x, self.precision)).collect())
            .collect();

        let widths: Vec<usize> = (0..m.cols())
            .map(|j| {
                let widest = tokens.iter().map(|row| row[j].chars().count()).max().unwrap_or(0);
                if j == 0 { widest } else { widest + 1 }
            })
            .collect();

        tokens
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&widths)
                    .map(|(token, &width)| format!("{:>width$}", token, width = width))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for MatrixFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render with the default precision
pub fn format_matrix(m: &Matrix) -> String {
    MatrixFormatter::new().format(m)
}

/// Render a single value
pub fn format_value(x: f64, precision: u32) -> String {
    if x.trunc() == x {
        return shortest(x);
    }
    let scale = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    // A fraction that rounds to a whole number prints as that integer (0.99999 -> "1").
    shortest((x * scale).round() / scale)
}

// `{}` on f64 is the shortest round-trip form and never uses an exponent.
fn shortest(x: f64) -> String {
    if x == 0.0 {
        "0".to_string()
    } else {
        format!("{}", x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_integers_have_no_decimal_point() {
        assert_eq!(format_value(6.0, 4), "6");
        assert_eq!(format_value(-12.0, 4), "-12");
        assert_eq!(format_value(-0.0, 4), "0");
        assert_eq!(format_value(1e20, 4), "100000000000000000000");
    }

    #[test]
    fn test_fractions_round_to_precision() {
        assert_eq!(format_value(1.0 / 3.0, 4), "0.3333");
        assert_eq!(format_value(2.0 / 3.0, 4), "0.6667");
        assert_eq!(format_value(-2.0 / 3.0, 4), "-0.6667");
        assert_eq!(format_value(0.5, 4), "0.5");
        assert_eq!(format_value(1.0 / 3.0, 2), "0.33");
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 1.03125 and 0.25 are exact in binary, so these are true ties.
        assert_eq!(format_value(1.03125, 4), "1.0313");
        assert_eq!(format_value(-1.03125, 4), "-1.0313");
        assert_eq!(format_value(0.25, 1), "0.3");
        assert_eq!(format_value(-0.25, 1), "-0.3");
        assert_eq!(format_value(2.5, 0), "3");
    }

    #[test]
    fn test_rounding_to_whole_or_zero() {
        assert_eq!(format_value(0.99999, 4), "1");
        assert_eq!(format_value(0.00001, 4), "0");
        assert_eq!(format_value(-0.00001, 4), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_value(f64::INFINITY, 4), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY, 4), "-inf");
        assert_eq!(format_value(f64::NAN, 4), "NaN");
    }

    #[test]
    fn test_alignment() {
        let out = format_matrix(&m(vec![vec![6.0, 8.0], vec![10.0, 12.0]]));
        assert_eq!(out, " 6  8\n10 12");
    }

    #[test]
    fn test_alignment_mixed_widths() {
        let out = format_matrix(&m(vec![vec![1.0, -0.5, 100.0], vec![-25.0, 2.0, 3.0]]));
        assert_eq!(out, "  1 -0.5 100\n-25    2   3");
    }

    #[test]
    fn test_single_value_and_column() {
        assert_eq!(format_matrix(&m(vec![vec![7.0]])), "7");
        assert_eq!(format_matrix(&m(vec![vec![1.0], vec![-10.0]])), "  1\n-10");
    }

    #[test]
    fn test_no_trailing_newline() {
        let out = format_matrix(&m(vec![vec![1.0], vec![2.0], vec![3.0]]));
        assert!(!out.ends_with('\n'));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_precision_is_capped() {
        let f = MatrixFormatter::new().with_precision(40);
        assert_eq!(f.precision(), MAX_PRECISION);
        assert_eq!(MatrixFormatter::default().precision(), DEFAULT_PRECISION);
    }

    #[test]
    fn test_custom_precision() {
        let f = MatrixFormatter::new().with_precision(2);
        assert_eq!(f.format(&m(vec![vec![1.0 / 3.0, 1.0]])), "0.33 1");
    }
}
