//! Line parsing for the coomat text layouts
//!
//! Every function here works on a single line and maps failures onto the
//! [`CooError`] variant the calling reader reports.

use crate::format::constants::TOKEN_DELIMITERS;
use crate::{CooError, SparseElement};

/// Split a line into tokens on any mix of commas and whitespace
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(TOKEN_DELIMITERS).filter(|token| !token.is_empty())
}

/// Whether a line carries no tokens at all
pub fn is_blank(line: &str) -> bool {
    tokenize(line).next().is_none()
}

/// Parse a dimension or band-offset header line
pub fn parse_header_value(line: &str) -> Result<usize, CooError> {
    line.trim().parse().map_err(|_| CooError::InvalidHeader)
}

/// Parse a `value, row, col` data line
///
/// Tokens after the third are ignored.
pub fn parse_coordinate_line(line: &str) -> Result<SparseElement, CooError> {
    let mut tokens = tokenize(line);
    let mut next = || tokens.next().ok_or(CooError::InvalidElement);

    let (value, row, col) = (next()?, next()?, next()?);

    Ok(SparseElement {
        value: value.parse().map_err(|_| CooError::InvalidElement)?,
        row: row.parse().map_err(|_| CooError::InvalidElement)?,
        col: col.parse().map_err(|_| CooError::InvalidElement)?,
    })
}

/// Parse a single-value line from a banded block
///
/// Only the first token is read.
pub fn parse_band_value(line: &str) -> Result<f64, CooError> {
    tokenize(line)
        .next()
        .ok_or(CooError::MalformedBand)?
        .parse()
        .map_err(|_| CooError::MalformedBand)
}
