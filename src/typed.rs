//! Lookups over [`mime::Mime`] values.
//!
//! Requires the `mime` feature.
//!
//! ```rust
//! use media_mime::typed::{extension_of, mime_of};
//!
//! let mime = mime_of("four.mkv")?;
//! assert_eq!(mime.type_(), mime::VIDEO);
//! assert_eq!(extension_of(&mime), Some(".mkv"));
//! # Ok::<(), media_mime::Error>(())
//! ```

use mime::Mime;
use tracing::trace;

use crate::error::Result;
use crate::resolve::mime_type;
use crate::table::{self, MIME_TYPES};

/// Guesses the MIME type of `path` as a parsed [`Mime`].
///
/// Unrecognized extensions resolve to `application/octet-stream`.
///
/// # Errors
///
/// Fails when `path` is empty.
pub fn mime_of(path: &str) -> Result<Mime> {
    let raw = mime_type(path)?;
    match raw.parse() {
        Ok(mime) => Ok(mime),
        Err(error) => {
            trace!(path, raw, %error, "unparsable MIME type, using stream default");
            debug_assert!(false, "unparsable MIME type {raw:?} for {path:?}");
            Ok(mime::APPLICATION_OCTET_STREAM)
        }
    }
}

/// Returns the canonical extension for `mime`, ignoring its parameters.
pub fn extension_of(mime: &Mime) -> Option<&'static str> {
    table::lookup(MIME_TYPES, mime.essence_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::EXTENSIONS;

    #[test]
    fn test_tables_hold_valid_mime_types() {
        for (_, raw) in EXTENSIONS {
            assert!(raw.parse::<Mime>().is_ok(), "{raw}");
        }
        for (raw, _) in MIME_TYPES {
            assert!(raw.parse::<Mime>().is_ok(), "{raw}");
        }
    }

    #[test]
    fn test_mime_of_parses_lookup() {
        let mime = mime_of("six-hyphenated.srt").unwrap();
        assert_eq!(mime.essence_str(), "application/x-subrip");

        let mime = mime_of("five.svg").unwrap();
        assert_eq!(mime, mime::IMAGE_SVG);
    }

    #[cfg(feature = "guess")]
    #[test]
    fn test_mime_of_parses_general_database_answers() {
        for path in ["x.zip", "x.7z", "x.gz", "x.rtf", "x.woff2"] {
            let raw = crate::mime_type(path).unwrap();
            assert_eq!(mime_of(path).unwrap().essence_str(), raw, "{path}");
        }
    }

    #[test]
    fn test_mime_of_unknown_is_octet_stream() {
        assert_eq!(
            mime_of("15.FakeExtension").unwrap(),
            mime::APPLICATION_OCTET_STREAM
        );
        assert!(mime_of("").is_err());
    }

    #[test]
    fn test_extension_of_ignores_parameters() {
        let mime: Mime = "text/x-ssa; charset=UTF-8".parse().unwrap();
        assert_eq!(extension_of(&mime), Some(".ass"));

        let mime: Mime = "text/html; charset=UTF-8".parse().unwrap();
        assert_eq!(extension_of(&mime), None);

        assert_eq!(extension_of(&mime::IMAGE_PNG), Some(".png"));
    }
}
