//! Error types for coomat
//!
//! Wraps the core [`CooError`] taxonomy with the context only the std
//! implementation knows about: I/O failures and the line a parse failed on.

use coomat_core::CooError;

/// Errors returned by matrix loading, writing and updating
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading or writing the underlying stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input text was rejected at the given 1-based line
    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: CooError },

    /// An in-memory operation on a matrix failed
    #[error(transparent)]
    Matrix(#[from] CooError),
}

impl Error {
    pub(crate) fn parse(line: usize, kind: CooError) -> Self {
        Error::Parse { line, kind }
    }

    /// Get the taxonomy variant behind this error, if it has one
    pub fn kind(&self) -> Option<CooError> {
        match self {
            Error::Io(_) => None,
            Error::Parse { kind, .. } => Some(*kind),
            Error::Matrix(kind) => Some(*kind),
        }
    }
}

/// Result type for coomat operations
pub type Result<T> = std::result::Result<T, Error>;
