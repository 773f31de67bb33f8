//! Writer for the general coordinate layout
//!
//! Output reloads through [`crate::read_general`]. The ignored second line
//! carries the entry count.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::{CooMatrix, Result};

/// Write a matrix in the general coordinate layout
pub fn write_general<W: Write>(matrix: &CooMatrix, mut writer: W) -> Result<()> {
    write!(writer, "{}", GeneralLayout(matrix))?;
    writer.flush()?;
    Ok(())
}

/// Write a matrix to a file in the general coordinate layout
pub fn write_general_path<P: AsRef<Path>>(matrix: &CooMatrix, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_general(matrix, BufWriter::new(file))?;
    debug!(path = %path.display(), nnz = matrix.len(), "wrote general matrix");
    Ok(())
}

/// Render a matrix in the general coordinate layout
pub fn to_general_string(matrix: &CooMatrix) -> String {
    GeneralLayout(matrix).to_string()
}

/// Formats a matrix as general-layout text
struct GeneralLayout<'a>(&'a CooMatrix);

impl fmt::Display for GeneralLayout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.size())?;
        writeln!(f, "{}", self.0.len())?;
        for e in self.0 {
            writeln!(f, "{}, {}, {}", e.value, e.row, e.col)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_general;

    #[test]
    fn test_write_layout() {
        let m = CooMatrix::from_triplets(3, [(0, 0, 2.5), (2, 1, -1.0)]);
        assert_eq!(to_general_string(&m), "3\n2\n2.5, 0, 0\n-1, 2, 1\n");

        let mut out = Vec::new();
        write_general(&m, &mut out).unwrap();
        assert_eq!(out, to_general_string(&m).into_bytes());
        assert_eq!(to_general_string(&CooMatrix::new(2)), "2\n0\n");
    }

    #[test]
    fn test_write_then_read() {
        let m = CooMatrix::from_triplets(5, [(4, 0, 0.1), (1, 3, 1e-12), (2, 2, 123456.789)]);
        let text = to_general_string(&m);
        let back = read_general(text.as_bytes()).unwrap();
        assert_eq!(back, m);
    }
}
