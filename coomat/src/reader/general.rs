//! Reader for the general coordinate layout
//!
//! ```text
//! 3            <- matrix dimension
//! anything     <- ignored
//! 2.0, 0, 0    <- value, row, col
//! 3.0, 1, 1
//! ```

use coomat_core::{is_blank, parse_coordinate_line, CooError};
use std::io::BufRead;
use tracing::debug;

use super::lines::LineSource;
use crate::{CooBuilder, CooMatrix, Result};

/// Read a matrix in the general coordinate layout
///
/// Repeated coordinates are summed into one entry and blank lines are
/// skipped. The first bad line aborts the load.
pub fn read_general<R: BufRead>(reader: R) -> Result<CooMatrix> {
    let mut lines = LineSource::new(reader, CooError::InvalidElement);
    let size = lines.header_value()?;
    lines.skip()?;

    let mut builder = CooBuilder::new(size);
    while let Some(line) = lines.next_line()? {
        if is_blank(&line) {
            continue;
        }
        let element = parse_coordinate_line(&line).map_err(|kind| lines.error(kind))?;
        builder.accumulate(element);
    }

    let matrix = builder.build();
    debug!(
        size,
        nnz = matrix.len(),
        lines = lines.line_no(),
        "loaded general matrix"
    );
    Ok(matrix)
}
