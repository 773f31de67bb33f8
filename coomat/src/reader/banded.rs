//! Reader for the banded layout
//!
//! ```text
//! 3        <- n
//! 1        <- p, super-diagonal distance
//! 1        <- q, sub-diagonal distance
//! -        <- ignored
//! 4.0      <- n values for (i, i)
//! 5.0
//! 6.0
//! -        <- ignored
//! 1.0      <- n - p values for (i, i + p)
//! 2.0
//! -        <- ignored
//! 7.0      <- n - q values for (i + q, i)
//! 8.0
//! ```

use coomat_core::{parse_band_value, validate_block_len, BandLayout, CooError, Coord};
use std::io::BufRead;
use tracing::debug;

use super::lines::LineSource;
use crate::{CooBuilder, CooMatrix, Result};

/// Upper bound on entries reserved up front from the header size
const MAX_RESERVED_VALUES: usize = 4096;

/// Read a matrix in the banded layout
///
/// Values landing on the same position (a zero offset folds a band onto the
/// main diagonal) are summed.
pub fn read_banded<R: BufRead>(reader: R) -> Result<CooMatrix> {
    let mut lines = LineSource::new(reader, CooError::MalformedBand);
    let size = lines.header_value()?;
    let upper = lines.header_value()?;
    let lower = lines.header_value()?;
    let layout = BandLayout::new(size, upper, lower).map_err(|kind| lines.error(kind))?;
    lines.skip()?;

    let reserved = layout.total_values().min(MAX_RESERVED_VALUES);
    let mut builder = CooBuilder::with_capacity(size, reserved);
    read_block(&mut lines, &mut builder, layout.diagonal_len(), |i| {
        layout.diagonal_coord(i)
    })?;
    lines.skip()?;
    read_block(&mut lines, &mut builder, layout.upper_len(), |i| {
        layout.upper_coord(i)
    })?;
    lines.skip()?;
    read_block(&mut lines, &mut builder, layout.lower_len(), |i| {
        layout.lower_coord(i)
    })?;

    let matrix = builder.build();
    debug!(
        size,
        upper,
        lower,
        nnz = matrix.len(),
        "loaded banded matrix"
    );
    Ok(matrix)
}

/// Read `len` single-value lines, placing value `i` at `coord(i)`
fn read_block<R, F>(
    lines: &mut LineSource<R>,
    builder: &mut CooBuilder,
    len: usize,
    coord: F,
) -> Result<()>
where
    R: BufRead,
    F: Fn(usize) -> Coord,
{
    let mut read = 0;
    while read < len {
        let Some(line) = lines.next_line()? else {
            break;
        };
        let value = parse_band_value(&line).map_err(|kind| lines.error(kind))?;
        builder.accumulate_at(coord(read), value);
        read += 1;
    }

    validate_block_len(len, read).map_err(|kind| lines.error(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const TRIDIAGONAL: &str = "3\n1\n1\n-\n4.0\n5.0\n6.0\n-\n1.0\n2.0\n-\n7.0\n8.0\n";

    #[test]
    fn test_read_tridiagonal() {
        let mut m = read_banded(TRIDIAGONAL.as_bytes()).unwrap();
        m.sort();

        assert_eq!(m.size(), 3);
        assert_eq!(
            m.triplets().collect::<Vec<_>>(),
            vec![
                (0, 0, 4.0),
                (0, 1, 1.0),
                (1, 0, 7.0),
                (1, 1, 5.0),
                (1, 2, 2.0),
                (2, 1, 8.0),
                (2, 2, 6.0),
            ]
        );
    }

    #[test]
    fn test_read_wide_offsets() {
        let text = "4\n2\n3\n-\n1\n1\n1\n1\n-\n9\n9\n-\n5\n";
        let m = read_banded(text.as_bytes()).unwrap();

        assert_eq!(m.len(), 7);
        assert_eq!(m.value_at(0, 2), Some(9.0));
        assert_eq!(m.value_at(1, 3), Some(9.0));
        assert_eq!(m.value_at(3, 0), Some(5.0));
    }

    #[test]
    fn test_zero_offset_folds_onto_diagonal() {
        let text = "2\n0\n2\n-\n1.0\n2.0\n-\n10.0\n20.0\n-\n";
        let m = read_banded(text.as_bytes()).unwrap();

        assert_eq!(m.len(), 2);
        assert_eq!(m.value_at(0, 0), Some(11.0));
        assert_eq!(m.value_at(1, 1), Some(22.0));
    }

    #[test]
    fn test_short_block() {
        let text = "3\n1\n1\n-\n4.0\n5.0\n6.0\n-\n1.0\n";
        let err = read_banded(text.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), Some(CooError::MalformedBand));
    }

    #[test]
    fn test_bad_band_value() {
        let text = "2\n1\n1\n-\n4.0\n\n";
        let err = read_banded(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                line: 6,
                kind: CooError::MalformedBand
            }
        ));
    }

    #[test]
    fn test_huge_header_size_is_short_block() {
        let text = "100000000000\n0\n0\n-\n1.0\n";
        let err = read_banded(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                line: 5,
                kind: CooError::MalformedBand
            }
        ));

        let text = format!("{}\n0\n0\n-\n1.0\n", usize::MAX / 2);
        let err = read_banded(text.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), Some(CooError::MalformedBand));
    }

    #[test]
    fn test_undecodable_band_value() {
        let text: &[u8] = b"2\n1\n1\n\xff ignored\n4.0\n\xfe\n";
        let err = read_banded(text).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                line: 6,
                kind: CooError::MalformedBand
            }
        ));
    }

    #[test]
    fn test_bad_header() {
        let err = read_banded("3\nx\n1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                line: 2,
                kind: CooError::InvalidHeader
            }
        ));

        let err = read_banded("3\n4\n1\n-\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), Some(CooError::InvalidHeader));

        let err = read_banded("3\n1\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), Some(CooError::InvalidHeader));
    }
}
