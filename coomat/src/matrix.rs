//! Coordinate-format sparse matrix
//!
//! [`CooMatrix`] keeps its entries in a plain vector. Entries stay in
//! insertion order until [`CooMatrix::sort`] is called or an algebraic
//! operation normalizes a copy.

use coomat_core::{CooError, Coord, MatrixOperations, SparseElement, SparseMatrix};
use std::borrow::Cow;
use std::cmp::Ordering;

use crate::builder::CooBuilder;
use crate::Result;

/// Square sparse matrix stored as (row, col, value) triples
///
/// `size` is advisory: it is carried from the source header or the left
/// operand of an operation and never checked against the stored indices.
/// The derived `PartialEq` is exact and order-sensitive; use
/// [`CooMatrix::approx_eq`] to compare values within a tolerance.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooMatrix {
    size: usize,
    elements: Vec<SparseElement>,
}

impl CooMatrix {
    /// Create an empty matrix with the given dimension
    pub fn new(size: usize) -> Self {
        Self {
            size,
            elements: Vec::new(),
        }
    }

    /// Wrap an existing element list without coalescing or sorting it
    pub fn from_elements(size: usize, elements: Vec<SparseElement>) -> Self {
        Self { size, elements }
    }

    /// Build a matrix from triples, summing repeated coordinates
    pub fn from_triplets<I>(size: usize, triplets: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut builder = CooBuilder::new(size);
        for (row, col, value) in triplets {
            builder.accumulate(SparseElement::new(row, col, value));
        }
        builder.build()
    }

    /// Get the declared dimension
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no entries are stored
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Stored entries in their current order
    pub fn elements(&self) -> &[SparseElement] {
        &self.elements
    }

    /// Iterate over stored entries in their current order
    pub fn iter(&self) -> std::slice::Iter<'_, SparseElement> {
        self.elements.iter()
    }

    /// Iterate over stored entries as (row, col, value) triples
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.elements.iter().map(|e| (e.row, e.col, e.value))
    }

    /// Append an entry without checking for an existing one at its position
    pub fn push(&mut self, element: SparseElement) {
        self.elements.push(element);
    }

    /// Sort entries into row-major order
    pub fn sort(&mut self) {
        sort_elements(&mut self.elements);
    }

    /// Whether entries are already in row-major order
    pub fn is_sorted(&self) -> bool {
        self.elements
            .windows(2)
            .all(|pair| pair[0].compare(&pair[1]) != Ordering::Greater)
    }

    /// Find the entry stored at a position
    pub fn get(&self, row: usize, col: usize) -> Option<&SparseElement> {
        let target = Coord::new(row, col);
        self.elements.iter().find(|e| e.coord() == target)
    }

    /// Value stored at a position, if any
    pub fn value_at(&self, row: usize, col: usize) -> Option<f64> {
        self.get(row, col).map(|e| e.value)
    }

    /// Overwrite the value of an existing entry
    ///
    /// The position is taken from `element`. Fails with
    /// [`CooError::NullUpdate`] when no element is given and with
    /// [`CooError::CoordinateNotFound`] when nothing is stored there; the
    /// matrix is left untouched in both cases.
    pub fn update(&mut self, element: Option<SparseElement>) -> Result<()> {
        let element = element.ok_or(CooError::NullUpdate)?;
        let slot = self
            .elements
            .iter_mut()
            .find(|e| e.same_slot(&element))
            .ok_or(CooError::CoordinateNotFound {
                row: element.row,
                col: element.col,
            })?;
        slot.value = element.value;
        Ok(())
    }

    /// Overwrite the value stored at a position
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.update(Some(SparseElement::new(row, col, value)))
    }

    /// Entries in row-major order, copied only when not already sorted
    pub(crate) fn sorted_elements(&self) -> Cow<'_, [SparseElement]> {
        if self.is_sorted() {
            Cow::Borrowed(&self.elements)
        } else {
            let mut owned = self.elements.clone();
            sort_elements(&mut owned);
            Cow::Owned(owned)
        }
    }
}

/// Stable row-major sort by position
pub(crate) fn sort_elements(elements: &mut [SparseElement]) {
    elements.sort_by_key(SparseElement::coord);
}

impl SparseMatrix for CooMatrix {
    type Element = SparseElement;

    fn get_element(&self, row: usize, col: usize) -> Option<SparseElement> {
        self.get(row, col).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn nnz(&self) -> usize {
        self.elements.len()
    }
}

impl MatrixOperations for CooMatrix {
    fn get_row(&self, row_index: usize) -> Vec<SparseElement> {
        let mut row: Vec<SparseElement> = self
            .elements
            .iter()
            .filter(|e| e.row == row_index)
            .copied()
            .collect();
        sort_elements(&mut row);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<SparseElement> {
        let mut col: Vec<SparseElement> = self
            .elements
            .iter()
            .filter(|e| e.col == col_index)
            .copied()
            .collect();
        sort_elements(&mut col);
        col
    }
}

impl<'a> IntoIterator for &'a CooMatrix {
    type Item = &'a SparseElement;
    type IntoIter = std::slice::Iter<'a, SparseElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl std::fmt::Display for CooMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for element in &self.elements {
            writeln!(f, "{element}")?;
        }
        Ok(())
    }
}
