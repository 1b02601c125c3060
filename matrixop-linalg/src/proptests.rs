//! Property-based tests for the algebraic laws of the engine.

use proptest::prelude::*;

use crate::{add, format_matrix, identity, inverse, multiply, parse_matrix, rref, transpose, Matrix};

// Small integers keep sums and products exact in f64.
fn small_int() -> impl Strategy<Value = f64> {
    (-50i32..50i32).prop_map(f64::from)
}

fn matrix_with(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(prop::collection::vec(small_int(), cols), rows)
        .prop_map(|data| Matrix::from_rows(data).unwrap())
}

fn any_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..5, 1usize..5).prop_flat_map(|(r, c)| matrix_with(r, c))
}

fn same_shape_triple() -> impl Strategy<Value = (Matrix, Matrix, Matrix)> {
    (1usize..5, 1usize..5)
        .prop_flat_map(|(r, c)| (matrix_with(r, c), matrix_with(r, c), matrix_with(r, c)))
}

// Values with up to four decimals, as the formatter would print them.
fn decimal_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..4, 1usize..4).prop_flat_map(|(r, c)| {
        prop::collection::vec(
            prop::collection::vec((-100_000i32..100_000).prop_map(|v| f64::from(v) / 1000.0), c),
            r,
        )
        .prop_map(|data| Matrix::from_rows(data).unwrap())
    })
}

// Diagonally dominant, hence invertible.
fn invertible_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..5).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(-5i32..5, n), n).prop_map(move |data| {
            let rows = data
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    row.iter()
                        .enumerate()
                        .map(|(j, &v)| if i == j { 50.0 + f64::from(v) } else { f64::from(v) })
                        .collect()
                })
                .collect();
            Matrix::from_rows(rows).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn transpose_is_involutive(a in any_matrix()) {
        prop_assert_eq!(transpose(&transpose(&a)), a);
    }

    #[test]
    fn add_commutative((a, b, _c) in same_shape_triple()) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn add_associative((a, b, c) in same_shape_triple()) {
        let left = add(&add(&a, &b).unwrap(), &c).unwrap();
        let right = add(&a, &add(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn multiply_by_identity(a in any_matrix()) {
        let i = identity(a.cols()).unwrap();
        prop_assert_eq!(multiply(&a, &i).unwrap(), a);
    }

    #[test]
    fn rref_idempotent(a in any_matrix()) {
        let once = rref(a);
        let twice = rref(once.clone());
        prop_assert!(once.max_abs_diff(&twice).unwrap() < 1e-9);
    }

    #[test]
    fn matrix_times_inverse_is_identity(a in invertible_matrix()) {
        let inv = inverse(&a).unwrap();
        let product = multiply(&a, &inv).unwrap();
        let i = identity(a.rows()).unwrap();
        prop_assert!(product.max_abs_diff(&i).unwrap() < 1e-9);
    }

    #[test]
    fn zero_row_is_singular(a in invertible_matrix(), row in 0usize..4) {
        let mut rows = a.to_rows();
        let row = row % rows.len();
        rows[row].iter_mut().for_each(|v| *v = 0.0);
        let singular = Matrix::from_rows(rows).unwrap();
        prop_assert!(inverse(&singular).is_err());
    }

    #[test]
    fn format_then_parse_round_trips(a in decimal_matrix()) {
        let reparsed = parse_matrix(&format_matrix(&a)).unwrap();
        prop_assert_eq!(reparsed.dims(), a.dims());
        prop_assert!(reparsed.max_abs_diff(&a).unwrap() < 1e-9);
    }
}
