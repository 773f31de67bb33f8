//! Geometry of the banded layout
//!
//! A banded file stores the main diagonal, one super-diagonal at distance
//! `upper` and one sub-diagonal at distance `lower`, each as a block of
//! single values. The block for a diagonal at distance `d` holds `size - d`
//! values.

use crate::element::Coord;
use crate::error::Result;
use crate::validation::validate_band_offsets;

/// Dimensions and offsets of a banded matrix file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLayout {
    /// Matrix dimension
    pub size: usize,
    /// Distance of the super-diagonal above the main diagonal
    pub upper: usize,
    /// Distance of the sub-diagonal below the main diagonal
    pub lower: usize,
}

impl BandLayout {
    /// Create a validated layout
    pub fn new(size: usize, upper: usize, lower: usize) -> Result<Self> {
        validate_band_offsets(size, upper, lower)?;
        Ok(Self { size, upper, lower })
    }

    /// Number of values in the main diagonal block
    pub const fn diagonal_len(&self) -> usize {
        self.size
    }

    /// Number of values in the super-diagonal block
    pub const fn upper_len(&self) -> usize {
        self.size.saturating_sub(self.upper)
    }

    /// Number of values in the sub-diagonal block
    pub const fn lower_len(&self) -> usize {
        self.size.saturating_sub(self.lower)
    }

    /// Total number of values across all three blocks
    ///
    /// Saturates at `usize::MAX` for header sizes no file could satisfy.
    pub const fn total_values(&self) -> usize {
        self.diagonal_len()
            .saturating_add(self.upper_len())
            .saturating_add(self.lower_len())
    }

    /// Position of the `i`-th main diagonal value
    pub const fn diagonal_coord(&self, i: usize) -> Coord {
        Coord::new(i, i)
    }

    /// Position of the `i`-th super-diagonal value
    pub const fn upper_coord(&self, i: usize) -> Coord {
        Coord::new(i, i + self.upper)
    }

    /// Position of the `i`-th sub-diagonal value
    pub const fn lower_coord(&self, i: usize) -> Coord {
        Coord::new(i + self.lower, i)
    }
}
