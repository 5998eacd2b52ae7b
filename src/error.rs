//! Error types and utilities.
//!
//! Lookups only fail when handed an empty argument. An unknown extension or
//! MIME type is not an error: it resolves to `None` or to the stream default.
//!
//! # Examples
//!
//! ```rust
//! use media_mime::{mime_type, to_extension};
//!
//! let err = mime_type("").unwrap_err();
//! assert_eq!(err.argument(), "path");
//! assert_eq!(err.to_string(), "`path` must not be empty");
//!
//! let err = to_extension("").unwrap_err();
//! assert_eq!(err.argument(), "mime_type");
//! ```
use core::fmt;

/// Raised when a lookup receives an empty argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    argument: &'static str,
}

impl Error {
    pub(crate) const fn empty(argument: &'static str) -> Self {
        Self { argument }
    }

    /// Name of the rejected argument.
    pub const fn argument(&self) -> &'static str {
        self.argument
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` must not be empty", self.argument)
    }
}

impl core::error::Error for Error {}

/// A specialized Result type for lookups.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_argument() {
        let error = Error::empty("path");
        assert_eq!(error.argument(), "path");
        assert_eq!(error, Error::empty("path"));
        assert_ne!(error, Error::empty("mime_type"));
    }

    #[test]
    fn test_error_has_no_source() {
        let error = Error::empty("mime_type");
        assert!(core::error::Error::source(&error).is_none());
    }
}
