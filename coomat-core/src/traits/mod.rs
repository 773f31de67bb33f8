//! Abstract interfaces for coomat matrices
//!
//! Traits are pure interfaces - implementations live in the `coomat` crate.

pub mod matrix;

#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use matrix::SparseMatrix;
