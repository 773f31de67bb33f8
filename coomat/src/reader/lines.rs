//! Line cursor shared by the text readers

use coomat_core::{parse_header_value, CooError};
use std::io::{self, BufRead, Lines};

use crate::{Error, Result};

/// Wraps a buffered reader and tracks the 1-based number of the last line read
///
/// A line that is not valid UTF-8 is reported as a parse error of the kind
/// the caller expected at that line, never as an I/O failure.
pub(crate) struct LineSource<R> {
    lines: Lines<R>,
    line_no: usize,
    data_kind: CooError,
}

impl<R: BufRead> LineSource<R> {
    /// `data_kind` is the error reported for undecodable data lines
    pub(crate) fn new(reader: R, data_kind: CooError) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            data_kind,
        }
    }

    /// Next data line, or `None` at end of input
    pub(crate) fn next_line(&mut self) -> Result<Option<String>> {
        self.read_line(self.data_kind)
    }

    /// Next line, failing with `kind` at end of input or on bad encoding
    pub(crate) fn expect_line(&mut self, kind: CooError) -> Result<String> {
        match self.read_line(kind)? {
            Some(line) => Ok(line),
            None => Err(Error::parse(self.line_no + 1, kind)),
        }
    }

    /// Read and parse one integer header line
    pub(crate) fn header_value(&mut self) -> Result<usize> {
        let line = self.expect_line(CooError::InvalidHeader)?;
        parse_header_value(&line).map_err(|kind| self.error(kind))
    }

    /// Discard one line; end of input and bad encoding are not errors
    pub(crate) fn skip(&mut self) -> Result<()> {
        match self.lines.next() {
            Some(Err(err)) if err.kind() != io::ErrorKind::InvalidData => Err(err.into()),
            Some(_) => {
                self.line_no += 1;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Parse error located at the last line read
    pub(crate) fn error(&self, kind: CooError) -> Error {
        Error::parse(self.line_no, kind)
    }

    pub(crate) fn line_no(&self) -> usize {
        self.line_no
    }

    fn read_line(&mut self, kind: CooError) -> Result<Option<String>> {
        let Some(line) = self.lines.next() else {
            return Ok(None);
        };
        self.line_no += 1;
        match line {
            Ok(line) => Ok(Some(line)),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => Err(self.error(kind)),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_numbers_and_eof() {
        let mut lines = LineSource::new("7\nabc\n".as_bytes(), CooError::InvalidElement);
        assert_eq!(lines.header_value().unwrap(), 7);
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("abc"));
        assert_eq!(lines.line_no(), 2);
        assert!(lines.next_line().unwrap().is_none());
        lines.skip().unwrap();

        let err = lines.expect_line(CooError::InvalidHeader).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                line: 3,
                kind: CooError::InvalidHeader
            }
        ));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let input: &[u8] = b"\xff\n\xfe\n\xfd\n";
        let mut lines = LineSource::new(input, CooError::MalformedBand);

        let err = lines.header_value().unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                line: 1,
                kind: CooError::InvalidHeader
            }
        ));

        // Ignored lines may hold anything
        lines.skip().unwrap();
        assert_eq!(lines.line_no(), 2);

        let err = lines.next_line().unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                line: 3,
                kind: CooError::MalformedBand
            }
        ));
    }
}
