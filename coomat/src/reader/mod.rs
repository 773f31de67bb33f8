//! Text readers for coomat matrices
//!
//! Readers accept any [`BufRead`] source. The path helpers open a buffered
//! file, and with the `async` feature the whole file can be fetched through
//! `tokio::fs` before the same parsers run over it.

mod banded;
mod general;
mod lines;

pub use banded::read_banded;
pub use general::read_general;

use coomat_core::TextFormat;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::{CooMatrix, Result};

/// Read a matrix in the given layout from a buffered source
pub fn read<R: BufRead>(reader: R, format: TextFormat) -> Result<CooMatrix> {
    match format {
        TextFormat::General => read_general(reader),
        TextFormat::Banded => read_banded(reader),
    }
}

/// Parse a matrix in the given layout from an in-memory string
pub fn parse_str(text: &str, format: TextFormat) -> Result<CooMatrix> {
    read(text.as_bytes(), format)
}

/// Load a matrix file in the given layout
pub fn load<P: AsRef<Path>>(path: P, format: TextFormat) -> Result<CooMatrix> {
    let path = path.as_ref();
    debug!(path = %path.display(), %format, "opening matrix file");
    let file = File::open(path)?;
    read(BufReader::new(file), format)
}

/// Load a matrix file in the general coordinate layout
pub fn read_general_path<P: AsRef<Path>>(path: P) -> Result<CooMatrix> {
    load(path, TextFormat::General)
}

/// Load a matrix file in the banded layout
pub fn read_banded_path<P: AsRef<Path>>(path: P) -> Result<CooMatrix> {
    load(path, TextFormat::Banded)
}

/// Load a matrix file in the given layout without blocking the runtime
#[cfg(feature = "async")]
pub async fn load_async<P: AsRef<Path>>(path: P, format: TextFormat) -> Result<CooMatrix> {
    let path = path.as_ref();
    debug!(path = %path.display(), %format, "reading matrix file");
    let text = tokio::fs::read_to_string(path).await?;
    parse_str(&text, format)
}

/// Load a general-layout matrix file asynchronously
#[cfg(feature = "async")]
pub async fn read_general_async<P: AsRef<Path>>(path: P) -> Result<CooMatrix> {
    load_async(path, TextFormat::General).await
}

/// Load a banded-layout matrix file asynchronously
#[cfg(feature = "async")]
pub async fn read_banded_async<P: AsRef<Path>>(path: P) -> Result<CooMatrix> {
    load_async(path, TextFormat::Banded).await
}
