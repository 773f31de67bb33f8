//! Format constants for coomat text layouts

/// Default tolerance for approximate matrix equality
pub const EPSILON: f64 = 0.0001;

/// Characters that separate tokens on a data line
pub const TOKEN_DELIMITERS: &[char] = &[',', ' ', '\t', '\r'];
