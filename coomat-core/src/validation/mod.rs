//! Input validation utilities for coomat
//!
//! This module contains pure parsing and validation functions with no I/O
//! dependencies. Readers feed them one line at a time.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_band_offsets, validate_block_len};
pub use parsing::{
    is_blank, parse_band_value, parse_coordinate_line, parse_header_value, tokenize,
};
