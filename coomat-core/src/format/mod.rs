//! Plain-text format definitions for coomat
//!
//! This module describes the two line-oriented layouts a matrix can be
//! loaded from. No I/O happens here; readers live in the `coomat` crate.

pub mod band;
pub mod constants;
pub mod text;

pub use band::BandLayout;
pub use constants::EPSILON;
pub use text::TextFormat;
