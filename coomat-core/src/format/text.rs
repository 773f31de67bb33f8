//! Text layout selector

use crate::error::{CooError, Result};

/// Supported plain-text matrix layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextFormat {
    /// Size line, ignored line, then `value, row, col` lines
    #[default]
    General,
    /// Size, upper offset, lower offset, then three single-value blocks
    Banded,
}

impl TextFormat {
    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            TextFormat::General => "general",
            TextFormat::Banded => "banded",
        }
    }
}

impl core::fmt::Display for TextFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl core::str::FromStr for TextFormat {
    type Err = CooError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("general") || s.eq_ignore_ascii_case("coo") {
            Ok(TextFormat::General)
        } else if s.eq_ignore_ascii_case("banded") || s.eq_ignore_ascii_case("tridiagonal") {
            Ok(TextFormat::Banded)
        } else {
            Err(CooError::UnrecognizedOption)
        }
    }
}
