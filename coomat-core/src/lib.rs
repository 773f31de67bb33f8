#![no_std]

//! coomat core - coordinate-format sparse matrix definitions
//!
//! This crate provides the element and coordinate types, the error taxonomy,
//! the plain-text format descriptors and the pure parsing helpers shared by
//! every coomat implementation. Nothing here performs I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod element;
pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use element::*;
pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::{
    is_blank, parse_band_value, parse_coordinate_line, parse_header_value, tokenize,
    validate_band_offsets, validate_block_len,
};
