//! Transpose-then-merge multiplication
//!
//! Entries of a coordinate matrix are grouped by row once sorted. After
//! transposing the right operand, its rows are the original columns, so
//! `C[r][c]` is the sparse dot product of row `r` of the left operand and
//! row `c` of the transposed right operand.

use coomat_core::SparseElement;
use std::cmp::Ordering;
use tracing::debug;

use crate::algebra::transpose;
use crate::CooMatrix;

/// Matrix product `a · b`
///
/// Only pairs of populated rows are visited, and each pair costs the sum of
/// their lengths. Zero sums are not stored. The result takes `a`'s declared
/// size and is sorted in row-major order.
pub fn multiply(a: &CooMatrix, b: &CooMatrix) -> CooMatrix {
    let lhs = a.sorted_elements();
    let bt = transpose(b);
    let mut result = CooMatrix::new(a.size());

    for lhs_row in lhs.chunk_by(same_row) {
        let r = lhs_row[0].row;
        for rhs_row in bt.elements().chunk_by(same_row) {
            let c = rhs_row[0].row;
            let sum = sparse_dot(lhs_row, rhs_row);
            if sum != 0.0 {
                result.push(SparseElement::new(r, c, sum));
            }
        }
    }

    debug!(
        lhs_nnz = lhs.len(),
        rhs_nnz = bt.len(),
        nnz = result.len(),
        "multiplied matrices"
    );
    result
}

fn same_row(x: &SparseElement, y: &SparseElement) -> bool {
    x.row == y.row
}

/// Dot product of two column-sorted row segments, matched on column index
fn sparse_dot(lhs: &[SparseElement], rhs: &[SparseElement]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;

    while i < lhs.len() && j < rhs.len() {
        match lhs[i].col.cmp(&rhs[j].col) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                sum += lhs[i].value * rhs[j].value;
                i += 1;
                j += 1;
            }
        }
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense(size: usize, rows: &[&[f64]]) -> CooMatrix {
        let triplets = rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, v)| **v != 0.0)
                .map(move |(c, v)| (r, c, *v))
        });
        CooMatrix::from_triplets(size, triplets)
    }

    #[test]
    fn test_multiply_two_by_two() {
        let a = dense(2, &[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = dense(2, &[&[5.0, 6.0], &[7.0, 8.0]]);

        let c = a.multiply(&b);
        assert_eq!(
            c.triplets().collect::<Vec<_>>(),
            vec![(0, 0, 19.0), (0, 1, 22.0), (1, 0, 43.0), (1, 1, 50.0)]
        );
        assert_eq!(c.size(), 2);
    }

    #[test]
    fn test_multiply_skips_empty_rows_and_zero_sums() {
        // Row 1 of `a` is empty, and row 0 times column 0 of `b` cancels
        let a = dense(3, &[&[1.0, 1.0, 0.0], &[0.0, 0.0, 0.0], &[0.0, 0.0, 2.0]]);
        let b = dense(3, &[&[1.0, 0.0, 0.0], &[-1.0, 3.0, 0.0], &[0.0, 0.0, 4.0]]);

        let c = multiply(&a, &b);
        assert_eq!(
            c.triplets().collect::<Vec<_>>(),
            vec![(0, 1, 3.0), (2, 2, 8.0)]
        );
    }

    #[test]
    fn test_multiply_unsorted_left_operand() {
        let a = CooMatrix::from_triplets(2, [(1, 1, 4.0), (0, 0, 1.0), (1, 0, 3.0), (0, 1, 2.0)]);
        let b = dense(2, &[&[5.0, 6.0], &[7.0, 8.0]]);

        let c = multiply(&a, &b);
        assert_eq!(c.value_at(1, 0), Some(43.0));
        assert_eq!(c.value_at(0, 1), Some(22.0));
        assert!(c.is_sorted());
    }

    #[test]
    fn test_multiply_by_empty() {
        let a = dense(2, &[&[1.0, 2.0], &[3.0, 4.0]]);
        let empty = CooMatrix::new(2);

        assert!(multiply(&a, &empty).is_empty());
        assert!(multiply(&empty, &a).is_empty());
    }

    #[test]
    fn test_multiply_size_from_left() {
        let a = CooMatrix::from_triplets(7, [(0, 0, 2.0)]);
        let b = CooMatrix::from_triplets(1, [(0, 0, 3.0)]);
        let c = multiply(&a, &b);
        assert_eq!(c.size(), 7);
        assert_eq!(c.value_at(0, 0), Some(6.0));
    }

    #[test]
    fn test_sparse_dot() {
        let lhs = [SparseElement::new(0, 0, 1.0), SparseElement::new(0, 3, 2.0)];
        let rhs = [
            SparseElement::new(5, 1, 9.0),
            SparseElement::new(5, 3, 4.0),
            SparseElement::new(5, 4, 1.0),
        ];
        assert_eq!(sparse_dot(&lhs, &rhs), 8.0);
        assert_eq!(sparse_dot(&lhs, &[]), 0.0);
    }
}
