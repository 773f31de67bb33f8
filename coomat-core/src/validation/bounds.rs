//! Band geometry validation

use crate::CooError;

/// Validate that both band offsets fit inside the matrix dimension
///
/// An offset larger than the dimension would give its block a negative
/// length, which the header cannot describe.
pub const fn validate_band_offsets(size: usize, upper: usize, lower: usize) -> Result<(), CooError> {
    if upper > size || lower > size {
        return Err(CooError::InvalidHeader);
    }
    Ok(())
}

/// Validate that a block delivered as many values as the header promised
pub const fn validate_block_len(expected: usize, actual: usize) -> Result<(), CooError> {
    if actual < expected {
        return Err(CooError::MalformedBand);
    }
    Ok(())
}
