//! Matrix element and coordinate definitions
//!
//! Elements are ordered by position only. Two elements at the same
//! (row, col) occupy the same slot no matter what value they carry, so the
//! ordering is exposed through [`SparseElement::compare`] and the [`Coord`]
//! sort key rather than through `Ord` on the element itself.

use core::cmp::Ordering;

/// A (row, col) position in a matrix
///
/// The derived ordering is row-major: rows compare first, then columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Coordinate with row and column swapped
    pub const fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A stored entry of a coordinate-format matrix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseElement {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Stored value
    pub value: f64,
}

impl SparseElement {
    /// Create a new element
    pub const fn new(row: usize, col: usize, value: f64) -> Self {
        Self { row, col, value }
    }

    /// Get the position of this element
    pub const fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Compare two elements by position, ignoring their values
    pub fn compare(&self, other: &Self) -> Ordering {
        self.coord().cmp(&other.coord())
    }

    /// Whether both elements occupy the same (row, col) slot
    pub fn same_slot(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }

    /// Element with row and column swapped
    pub const fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
            value: self.value,
        }
    }

    /// Element with its value replaced by the additive inverse
    pub fn negated(self) -> Self {
        Self {
            value: -self.value,
            ..self
        }
    }
}

impl From<(usize, usize, f64)> for SparseElement {
    fn from((row, col, value): (usize, usize, f64)) -> Self {
        Self { row, col, value }
    }
}

impl core::fmt::Display for SparseElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "( Row : {}; Col : {}; Val : {} )",
            self.row, self.col, self.value
        )
    }
}
