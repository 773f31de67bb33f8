//! Core matrix access traits
//!
//! These traits describe read access to a sparse matrix independent of how
//! its entries are stored.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Core sparse matrix trait for format-agnostic access
pub trait SparseMatrix {
    /// The entry type stored in this matrix
    type Element;

    /// Get the entry at the specified position
    ///
    /// Returns `None` if nothing is stored there.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries
    fn nnz(&self) -> usize;

    /// Whether no entries are stored
    fn is_empty(&self) -> bool {
        self.nnz() == 0
    }
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Get all stored entries in a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<Self::Element>;

    /// Get all stored entries in a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<Self::Element>;
}
