//! Negation and tolerance-based equality

use tracing::debug;

use crate::algebra::add;
use crate::{CooMatrix, EngineConfig};

/// Matrix with every value replaced by its additive inverse
pub fn negate(m: &CooMatrix) -> CooMatrix {
    CooMatrix::from_elements(m.size(), m.iter().map(|e| e.negated()).collect())
}

/// Whether every entry of `a - b` lies within `epsilon` in absolute value
pub fn approx_equal(a: &CooMatrix, b: &CooMatrix, epsilon: f64) -> bool {
    approx_equal_with(a, b, &EngineConfig::default().with_epsilon(epsilon))
}

/// Compare two matrices under an explicit configuration
///
/// Computes `a + (-b)`; positions that cancel exactly vanish from the
/// difference, and each remaining entry is tested with
/// [`EngineConfig::is_mismatch`].
pub fn approx_equal_with(a: &CooMatrix, b: &CooMatrix, config: &EngineConfig) -> bool {
    let diff = add(a, &negate(b));

    match diff.iter().find(|e| config.is_mismatch(e.value)) {
        Some(e) => {
            debug!(
                row = e.row,
                col = e.col,
                diff = e.value,
                epsilon = config.epsilon,
                "matrices differ"
            );
            false
        }
        None => true,
    }
}
