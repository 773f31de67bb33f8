//! Property-based tests for the matrix algebra
//!
//! Matrices are generated as small random triple lists so every property
//! exercises coalescing, sorting and the merge paths together.

use coomat::{add, approx_equal, multiply, negate, transpose, CooMatrix, SparseElement};
use proptest::prelude::*;
use std::collections::HashSet;

const SIZE: usize = 6;

/// Random sparse matrix with integer-valued entries
///
/// Integer values keep sums exact, so set comparisons need no tolerance.
fn matrix_strategy(max_nnz: usize) -> impl Strategy<Value = CooMatrix> {
    prop::collection::vec((0..SIZE, 0..SIZE, -20i32..20), 0..=max_nnz).prop_map(|entries| {
        CooMatrix::from_triplets(
            SIZE,
            entries
                .into_iter()
                .map(|(row, col, value)| (row, col, f64::from(value))),
        )
    })
}

fn element_strategy() -> impl Strategy<Value = SparseElement> {
    (0..SIZE, 0..SIZE, -5.0..5.0f64).prop_map(|(row, col, value)| SparseElement::new(row, col, value))
}

fn triple_set(m: &CooMatrix) -> Vec<(usize, usize, i64)> {
    let mut triples: Vec<_> = m
        .triplets()
        .map(|(row, col, value)| (row, col, value as i64))
        .collect();
    triples.sort_unstable();
    triples
}

proptest! {
    /// Property: ordering is antisymmetric and transitive on positions
    #[test]
    fn prop_ordering_is_strict_weak(
        a in element_strategy(),
        b in element_strategy(),
        c in element_strategy(),
    ) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        if a.compare(&b).is_le() && b.compare(&c).is_le() {
            prop_assert!(a.compare(&c).is_le());
        }
        prop_assert_eq!(a.compare(&b).is_eq(), a.row == b.row && a.col == b.col);
    }

    /// Property: A + B and B + A hold the same triples
    #[test]
    fn prop_addition_commutes(a in matrix_strategy(15), b in matrix_strategy(15)) {
        prop_assert_eq!(triple_set(&add(&a, &b)), triple_set(&add(&b, &a)));
    }

    /// Property: addition output has one entry per position, in order
    #[test]
    fn prop_addition_keeps_positions_unique(a in matrix_strategy(20), b in matrix_strategy(20)) {
        let sum = add(&a, &b);
        let positions: HashSet<_> = sum.iter().map(|e| e.coord()).collect();
        prop_assert_eq!(positions.len(), sum.len());
        prop_assert!(sum.is_sorted());
    }

    /// Property: adding the negation cancels every entry
    #[test]
    fn prop_negation_annihilates(a in matrix_strategy(20)) {
        prop_assert!(add(&a, &negate(&a)).is_empty());
    }

    /// Property: transposing twice restores the triples
    #[test]
    fn prop_transpose_involution(a in matrix_strategy(20)) {
        prop_assert_eq!(triple_set(&transpose(&transpose(&a))), triple_set(&a));
    }

    /// Property: multiplication distributes over addition
    #[test]
    fn prop_multiply_distributes(
        a in matrix_strategy(12),
        b in matrix_strategy(12),
        c in matrix_strategy(12),
    ) {
        let lhs = multiply(&a, &add(&b, &c));
        let rhs = add(&multiply(&a, &b), &multiply(&a, &c));
        prop_assert!(approx_equal(&lhs, &rhs, coomat::EPSILON));
    }

    /// Property: a matrix equals itself and its sorted copy
    #[test]
    fn prop_equality_is_reflexive(a in matrix_strategy(20)) {
        let mut sorted = a.clone();
        sorted.sort();
        prop_assert!(a.approx_eq(&a));
        prop_assert!(a.approx_eq(&sorted));
    }
}
