//! Coalescing matrix builder
//!
//! Readers push every parsed entry through [`CooBuilder`], which sums
//! entries that land on an already-populated position instead of storing a
//! second copy.

use coomat_core::{Coord, SparseElement};
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use tracing::trace;

use crate::matrix::CooMatrix;

/// Builder that keeps at most one entry per position
#[derive(Debug, Clone, Default)]
pub struct CooBuilder {
    size: usize,
    elements: Vec<SparseElement>,
    index: HashMap<Coord, usize>,
}

impl CooBuilder {
    /// Create a builder for a matrix of the given dimension
    pub fn new(size: usize) -> Self {
        Self::with_capacity(size, 0)
    }

    /// Create a builder with room for `capacity` distinct positions
    pub fn with_capacity(size: usize, capacity: usize) -> Self {
        Self {
            size,
            elements: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Add an entry, summing it into any entry already at its position
    ///
    /// Explicit zeros are stored like any other value.
    pub fn accumulate(&mut self, element: SparseElement) {
        let coord = element.coord();
        match self.index.entry(coord) {
            Entry::Occupied(slot) => {
                trace!(
                    row = coord.row,
                    col = coord.col,
                    "coalescing repeated coordinate"
                );
                self.elements[*slot.get()].value += element.value;
            }
            Entry::Vacant(slot) => {
                slot.insert(self.elements.len());
                self.elements.push(element);
            }
        }
    }

    /// Add a value at a position, summing into any existing entry
    pub fn accumulate_at(&mut self, coord: Coord, value: f64) {
        self.accumulate(SparseElement::new(coord.row, coord.col, value));
    }

    /// Number of distinct positions collected so far
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Finish building; entries keep first-seen order
    pub fn build(self) -> CooMatrix {
        CooMatrix::from_elements(self.size, self.elements)
    }
}
