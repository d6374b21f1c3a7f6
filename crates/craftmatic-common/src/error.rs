use std::error::Error;
use std::fmt;

/// Error type shared by every craftmatic crate.
///
/// `FormatError` covers malformed bytes from untrusted files (truncated
/// varints, bogus lengths, excessive nesting). `SchemaError` covers a
/// structurally valid document that is missing a required field or carries it
/// with the wrong tag type. `GridError` covers violated grid preconditions.
#[derive(Debug)]
pub enum CraftmaticError {
    IoError(std::io::Error),
    FormatError(String),
    SchemaError(String),
    GridError(String),
}

impl fmt::Display for CraftmaticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CraftmaticError::IoError(err) => write!(f, "IO error: {}", err),
            CraftmaticError::FormatError(msg) => write!(f, "Format error: {}", msg),
            CraftmaticError::SchemaError(msg) => write!(f, "Schema error: {}", msg),
            CraftmaticError::GridError(msg) => write!(f, "Grid error: {}", msg),
        }
    }
}

impl Error for CraftmaticError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CraftmaticError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CraftmaticError {
    fn from(err: std::io::Error) -> Self {
        CraftmaticError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_display() {
        let err = CraftmaticError::FormatError("truncated varint".to_string());
        assert_eq!(format!("{}", err), "Format error: truncated varint");

        let err = CraftmaticError::SchemaError("missing field".to_string());
        assert_eq!(format!("{}", err), "Schema error: missing field");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: CraftmaticError = io_err.into();
        assert_matches!(err, CraftmaticError::IoError(_));
        assert!(std::error::Error::source(&err).is_some());
    }
}
