//! Engine configuration
//!
//! Controls how approximate equality judges the difference between two
//! matrices.

use coomat_core::{CooError, EPSILON};

/// How a per-entry difference is tested against the tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ToleranceMode {
    /// Mismatch when `|diff| > epsilon`
    #[default]
    Absolute,
    /// Mismatch only when `diff > epsilon`
    ///
    /// Large negative differences pass. Kept for compatibility with
    /// results produced by the one-sided check.
    UpperBound,
}

impl ToleranceMode {
    /// Whether `diff` falls outside the tolerance
    ///
    /// A NaN difference is always a mismatch.
    pub fn is_mismatch(self, diff: f64, epsilon: f64) -> bool {
        if diff.is_nan() {
            return true;
        }
        match self {
            ToleranceMode::Absolute => diff.abs() > epsilon,
            ToleranceMode::UpperBound => diff > epsilon,
        }
    }
}

impl std::fmt::Display for ToleranceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToleranceMode::Absolute => write!(f, "absolute"),
            ToleranceMode::UpperBound => write!(f, "upper-bound"),
        }
    }
}

impl std::str::FromStr for ToleranceMode {
    type Err = CooError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" | "abs" => Ok(ToleranceMode::Absolute),
            "upper-bound" | "upper" | "one-sided" => Ok(ToleranceMode::UpperBound),
            _ => Err(CooError::UnrecognizedOption),
        }
    }
}

/// Configuration for matrix comparison
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Largest difference still treated as equal
    pub epsilon: f64,
    /// How differences are tested against `epsilon`
    pub tolerance: ToleranceMode,
}

impl EngineConfig {
    /// Set the equality tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the tolerance mode
    pub fn with_tolerance(mut self, tolerance: ToleranceMode) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Config reproducing the one-sided comparison
    pub fn upper_bound() -> Self {
        Self::default().with_tolerance(ToleranceMode::UpperBound)
    }

    /// Whether a per-entry difference breaks equality under this config
    pub fn is_mismatch(&self, diff: f64) -> bool {
        self.tolerance.is_mismatch(diff, self.epsilon)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            tolerance: ToleranceMode::Absolute,
        }
    }
}
