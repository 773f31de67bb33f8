//! Transpose

use tracing::debug;

use crate::matrix::sort_elements;
use crate::CooMatrix;

/// Matrix with every entry's row and column swapped
///
/// Values and the declared size are unchanged; the result is sorted in
/// row-major order.
pub fn transpose(m: &CooMatrix) -> CooMatrix {
    let mut elements: Vec<_> = m.iter().map(|e| e.transposed()).collect();
    sort_elements(&mut elements);

    debug!(nnz = elements.len(), "transposed matrix");
    CooMatrix::from_elements(m.size(), elements)
}
