//! Merge-based addition

use coomat_core::SparseElement;
use std::cmp::Ordering;
use tracing::debug;

use crate::CooMatrix;

/// Sum of two matrices
///
/// Both operands are walked in row-major order with one cursor each.
/// Entries at the same position are summed and dropped when the sum is
/// exactly zero; every other entry is copied through. The result is sorted
/// and holds at most one entry per position. No dimension check is made;
/// the result takes the larger of the two declared sizes.
pub fn add(a: &CooMatrix, b: &CooMatrix) -> CooMatrix {
    let lhs = a.sorted_elements();
    let rhs = b.sorted_elements();
    let merged = merge_sorted(&lhs, &rhs);

    debug!(
        lhs_nnz = lhs.len(),
        rhs_nnz = rhs.len(),
        nnz = merged.len(),
        "added matrices"
    );
    CooMatrix::from_elements(a.size().max(b.size()), merged)
}

/// Two-pointer merge of row-major sorted entry lists
pub(crate) fn merge_sorted(lhs: &[SparseElement], rhs: &[SparseElement]) -> Vec<SparseElement> {
    let mut merged = Vec::with_capacity(lhs.len() + rhs.len());
    let (mut i, mut j) = (0, 0);

    while i < lhs.len() && j < rhs.len() {
        let (x, y) = (lhs[i], rhs[j]);
        match x.compare(&y) {
            Ordering::Equal => {
                let sum = x.value + y.value;
                if sum != 0.0 {
                    merged.push(SparseElement { value: sum, ..x });
                }
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                merged.push(x);
                i += 1;
            }
            Ordering::Greater => {
                merged.push(y);
                j += 1;
            }
        }
    }

    merged.extend_from_slice(&lhs[i..]);
    merged.extend_from_slice(&rhs[j..]);
    merged
}
