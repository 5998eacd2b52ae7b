//! `Content-Type` header values.
//!
//! Requires the `http` feature.

use http::HeaderValue;

use crate::error::Result;
use crate::resolve::mime_type;

/// Builds the `Content-Type` header value for serving `path`.
///
/// Unrecognized extensions are served as `application/octet-stream`.
///
/// # Errors
///
/// Fails when `path` is empty.
///
/// # Examples
///
/// ```rust
/// use http::header::CONTENT_TYPE;
/// use http::HeaderMap;
/// use media_mime::header::content_type;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_TYPE, content_type("three.mp4")?);
/// assert_eq!(headers[CONTENT_TYPE], "video/mp4");
/// # Ok::<(), media_mime::Error>(())
/// ```
pub fn content_type(path: &str) -> Result<HeaderValue> {
    mime_type(path).map(HeaderValue::from_static)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for_known_and_unknown() {
        assert_eq!(content_type("eight.three.dots.ass").unwrap(), "text/x-ssa");
        assert_eq!(
            content_type("15.FakeExtension").unwrap(),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_content_type_rejects_empty_path() {
        assert_eq!(content_type("").unwrap_err().argument(), "path");
    }
}
