//! Sparse matrix algebra
//!
//! Every operation takes its operands by reference and returns a fresh
//! matrix. Operands that are not sorted yet are normalized as private
//! copies, so the caller's entry order never changes.

pub mod add;
pub mod equality;
pub mod multiply;
pub mod transpose;

pub use add::add;
pub use equality::{approx_equal, approx_equal_with, negate};
pub use multiply::multiply;
pub use transpose::transpose;

use crate::CooMatrix;

impl CooMatrix {
    /// Matrix product `self · rhs`
    pub fn multiply(&self, rhs: &CooMatrix) -> CooMatrix {
        multiply(self, rhs)
    }

    /// Matrix with rows and columns swapped, in row-major order
    pub fn transpose(&self) -> CooMatrix {
        transpose(self)
    }

    /// Matrix with every value replaced by its additive inverse
    pub fn negate(&self) -> CooMatrix {
        negate(self)
    }

    /// Compare against `other` with the default tolerance
    pub fn approx_eq(&self, other: &CooMatrix) -> bool {
        approx_equal_with(self, other, &crate::EngineConfig::default())
    }
}

impl std::ops::Add for &CooMatrix {
    type Output = CooMatrix;

    fn add(self, rhs: &CooMatrix) -> CooMatrix {
        add(self, rhs)
    }
}

impl std::ops::Neg for &CooMatrix {
    type Output = CooMatrix;

    fn neg(self) -> CooMatrix {
        negate(self)
    }
}
