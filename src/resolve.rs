//! MIME type guessing from file paths, and extension lookup from MIME types.
//!
//! Path lookups consult, in order and ignoring ASCII case:
//!
//! 1. the media-server table of specific mappings (`.mkv` is
//!    `video/x-matroska`, `.ass` is `text/x-ssa`, ...),
//! 2. the video container set, served as `video/<extension>` (`.divx` is
//!    `video/divx`),
//! 3. the general `mime_guess` database, when the `guess` feature is enabled.
//!
//! Anything still unknown resolves to [`STREAM_DEFAULT`] or to `None`,
//! depending on what the caller asks for.
//!
//! # Examples
//!
//! ```rust
//! use media_mime::{mime_type, mime_type_with, to_extension};
//!
//! assert_eq!(mime_type("movie.mkv")?, "video/x-matroska");
//! assert_eq!(mime_type("clip.FakeExtension")?, "application/octet-stream");
//! assert_eq!(mime_type_with("clip.NoDefault", false)?, None);
//!
//! assert_eq!(to_extension("text/x-ssa; charset=UTF-8")?, Some(".ass"));
//! assert_eq!(to_extension("abc/def")?, None);
//! # Ok::<(), media_mime::Error>(())
//! ```

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::table::{self, EXTENSIONS, MIME_TYPES, VIDEO_EXTENSIONS};

/// Fallback MIME type for content whose extension is not recognized.
pub const STREAM_DEFAULT: &str = "application/octet-stream";

/// Returns the extension of the file-name component of `path`, leading dot
/// included.
///
/// Both `/` and `\` separate path components.
fn extension(path: &str) -> Option<&str> {
    let name = match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(index) => &path[index + 1..],
        None => path,
    };
    name.rfind('.').map(|index| &name[index..])
}

fn lookup_extension(extension: &str) -> Option<&'static str> {
    if let Some(mime) = table::lookup(EXTENSIONS, extension) {
        return Some(mime);
    }
    if let Some(mime) = table::lookup(VIDEO_EXTENSIONS, extension) {
        trace!(extension, mime, "resolved as generic video container");
        return Some(mime);
    }
    guess_extension(extension)
}

#[cfg(feature = "guess")]
fn guess_extension(extension: &str) -> Option<&'static str> {
    let mime = mime_guess::from_ext(&extension[1..]).first_raw()?;
    trace!(extension, mime, "resolved from general database");
    Some(mime)
}

#[cfg(not(feature = "guess"))]
fn guess_extension(_extension: &str) -> Option<&'static str> {
    None
}

/// Guesses the MIME type of `path`, falling back to [`STREAM_DEFAULT`].
///
/// Equivalent to [`mime_type_with`] with the stream default enabled.
///
/// # Errors
///
/// Fails when `path` is empty.
///
/// # Examples
///
/// ```rust
/// use media_mime::mime_type;
///
/// assert_eq!(mime_type("one.jpg")?, "image/jpeg");
/// assert_eq!(mime_type("eight.three.dots.ass")?, "text/x-ssa");
/// assert_eq!(mime_type("ten.divx")?, "video/divx");
/// assert_eq!(mime_type("15.FakeExtension")?, "application/octet-stream");
/// assert!(mime_type("").is_err());
/// # Ok::<(), media_mime::Error>(())
/// ```
pub fn mime_type(path: &str) -> Result<&'static str> {
    mime_type_or(path, STREAM_DEFAULT)
}

/// Guesses the MIME type of `path`.
///
/// A recognized extension resolves to its MIME type whatever the value of
/// `enable_stream_default`. An unrecognized one resolves to
/// [`STREAM_DEFAULT`] when `enable_stream_default` is set, and to `None`
/// otherwise.
///
/// # Errors
///
/// Fails when `path` is empty.
///
/// # Examples
///
/// ```rust
/// use media_mime::mime_type_with;
///
/// assert_eq!(mime_type_with("two.jpeg", false)?, Some("image/jpeg"));
/// assert_eq!(mime_type_with("16.NoDefault", true)?, Some("application/octet-stream"));
/// assert_eq!(mime_type_with("16.NoDefault", false)?, None);
/// # Ok::<(), media_mime::Error>(())
/// ```
pub fn mime_type_with(path: &str, enable_stream_default: bool) -> Result<Option<&'static str>> {
    if path.is_empty() {
        debug!("rejected empty path");
        return Err(Error::empty("path"));
    }

    if let Some(mime) = extension(path).and_then(lookup_extension) {
        return Ok(Some(mime));
    }

    if enable_stream_default {
        trace!(path, "unrecognized extension, using stream default");
        Ok(Some(STREAM_DEFAULT))
    } else {
        Ok(None)
    }
}

/// Guesses the MIME type of `path`, falling back to `default`.
///
/// # Errors
///
/// Fails when `path` is empty.
///
/// # Examples
///
/// ```rust
/// use media_mime::mime_type_or;
///
/// assert_eq!(mime_type_or("13.log", "text/x-unknown")?, "text/plain");
/// assert_eq!(mime_type_or("data.FakeExtension", "text/x-unknown")?, "text/x-unknown");
/// # Ok::<(), media_mime::Error>(())
/// ```
pub fn mime_type_or<'a>(path: &str, default: &'a str) -> Result<&'a str> {
    Ok(mime_type_with(path, false)?.unwrap_or(default))
}

/// Returns the canonical extension, leading dot included, for `mime_type`.
///
/// Parameters after the first `;` are dropped and surrounding whitespace is
/// trimmed. What remains must match a known type exactly (ignoring ASCII
/// case); anything else, including trailing garbage, gives `None`.
///
/// # Errors
///
/// Fails when `mime_type` is empty.
///
/// # Examples
///
/// ```rust
/// use media_mime::to_extension;
///
/// assert_eq!(to_extension("image/jpg")?, Some(".jpg"));
/// assert_eq!(to_extension("TEXT/X-SSA")?, Some(".ass"));
/// assert_eq!(to_extension("image/jpeg: other data")?, None);
/// assert_eq!(to_extension("text/html; charset=UTF-8")?, None);
/// # Ok::<(), media_mime::Error>(())
/// ```
pub fn to_extension(mime_type: &str) -> Result<Option<&'static str>> {
    if mime_type.is_empty() {
        debug!("rejected empty MIME type");
        return Err(Error::empty("mime_type"));
    }

    let essence = mime_type
        .split_once(';')
        .map_or(mime_type, |(essence, _)| essence)
        .trim();
    Ok(table::lookup(MIME_TYPES, essence))
}

/// Returns `true` if `path` names a video container.
///
/// # Examples
///
/// ```rust
/// use media_mime::is_video;
///
/// assert!(is_video("/media/movies/Heat (1995).MKV"));
/// assert!(is_video("episode.m2ts"));
/// assert!(!is_video("poster.jpg"));
/// assert!(!is_video(""));
/// ```
pub fn is_video(path: &str) -> bool {
    extension(path).is_some_and(|extension| table::lookup(VIDEO_EXTENSIONS, extension).is_some())
}

/// Returns `true` if `mime_type` has the `image` top-level type.
///
/// # Examples
///
/// ```rust
/// use media_mime::is_image;
///
/// assert!(is_image("image/jpeg"));
/// assert!(is_image("IMAGE/x-png"));
/// assert!(!is_image("video/mp4"));
/// assert!(!is_image("image"));
/// ```
pub fn is_image(mime_type: &str) -> bool {
    mime_type
        .split_once('/')
        .is_some_and(|(top, _)| top.trim().eq_ignore_ascii_case("image"))
}
