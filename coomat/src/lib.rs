//! coomat - coordinate-format sparse matrices
//!
//! This library loads square sparse matrices from two plain-text layouts and
//! combines them with merge-based algorithms that never densify.
//!
//! ## Architecture
//!
//! coomat follows a definition/implementation split:
//!
//! - **coomat-core**: element types, ordering, text-format descriptors and
//!   pure line parsing (no I/O, `no_std`)
//! - **coomat**: the matrix container, readers and writer, and the algebra
//!
//! ## Quick Start
//!
//! ```rust
//! use coomat::{read_general, CooMatrix};
//!
//! fn example() -> coomat::Result<()> {
//!     let a = read_general("2\n-\n1, 0, 0\n2, 0, 1\n3, 1, 0\n4, 1, 1\n".as_bytes())?;
//!     let b = CooMatrix::from_triplets(2, [(0, 0, 5.0), (0, 1, 6.0), (1, 0, 7.0), (1, 1, 8.0)]);
//!
//!     let product = a.multiply(&b);
//!     assert_eq!(product.value_at(1, 1), Some(50.0));
//!
//!     let sum = &a + &b;
//!     assert!(sum.approx_eq(&CooMatrix::from_triplets(
//!         2,
//!         [(0, 0, 6.0), (0, 1, 8.0), (1, 0, 10.0), (1, 1, 12.0)],
//!     )));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **serde** (default): serializable matrices, elements and config
//! - **async**: `tokio`-based file loading
//! - **cli**: the `coomat` command-line binary

// Re-export core abstractions and format definitions
pub use coomat_core::{
    // Core traits
    MatrixOperations, SparseMatrix,
    // Element types
    Coord, SparseElement,
    // Format definitions
    BandLayout, TextFormat, EPSILON,
    // Error taxonomy
    CooError, ErrorCategory,
};

// Implementation modules
pub mod algebra;
pub mod builder;
pub mod config;
pub mod error;
pub mod matrix;
pub mod reader;
pub mod writer;

// Public exports
pub use algebra::{add, approx_equal, approx_equal_with, multiply, negate, transpose};
pub use builder::CooBuilder;
pub use config::{EngineConfig, ToleranceMode};
pub use error::{Error, Result};
pub use matrix::CooMatrix;
pub use reader::{
    load, parse_str, read, read_banded, read_banded_path, read_general, read_general_path,
};
pub use writer::{to_general_string, write_general, write_general_path};

// Async loading
#[cfg(feature = "async")]
pub use reader::{load_async, read_banded_async, read_general_async};
