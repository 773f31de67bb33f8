//! Error types for coomat operations

/// Errors that can occur while loading or updating a sparse matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooError {
    /// Dimension or band-offset line could not be parsed
    InvalidHeader,
    /// Coordinate line has fewer than three tokens or an unparsable number
    InvalidElement,
    /// Banded block is too short or holds an unparsable value
    MalformedBand,
    /// Update targets a coordinate with no stored element
    CoordinateNotFound { row: usize, col: usize },
    /// Update was given no element to write
    NullUpdate,
    /// Option string does not name a known format or mode
    UnrecognizedOption,
}

/// Coarse grouping of [`CooError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input text could not be turned into a matrix
    Parse,
    /// In-place modification of an existing matrix failed
    Update,
    /// Caller supplied an unknown option
    Config,
}

impl CooError {
    /// Get the category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            CooError::InvalidHeader | CooError::InvalidElement | CooError::MalformedBand => {
                ErrorCategory::Parse
            }
            CooError::CoordinateNotFound { .. } | CooError::NullUpdate => ErrorCategory::Update,
            CooError::UnrecognizedOption => ErrorCategory::Config,
        }
    }

    /// Whether this error was raised while parsing text input
    pub const fn is_parse_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Parse)
    }
}

impl core::fmt::Display for CooError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CooError::InvalidHeader => write!(f, "Invalid matrix header"),
            CooError::InvalidElement => write!(f, "Invalid coordinate element"),
            CooError::MalformedBand => write!(f, "Malformed band data"),
            CooError::CoordinateNotFound { row, col } => {
                write!(f, "No value at ({row}, {col})")
            }
            CooError::NullUpdate => write!(f, "Update without a value"),
            CooError::UnrecognizedOption => write!(f, "Unrecognized option value"),
        }
    }
}

impl core::error::Error for CooError {}

/// Result type for coomat core operations
pub type Result<T> = core::result::Result<T, CooError>;
