#![deny(unsafe_code)]
#![no_std]
#![warn(missing_docs, missing_debug_implementations)]
//! MIME type lookups for a media server.
//!
//! This crate maps file paths to MIME types by extension, and MIME types back
//! to canonical file extensions. Lookups ignore ASCII case, never allocate,
//! and read only immutable static tables, so they are safe to call from any
//! thread.
//!
//! # Features
//!
//! - **Media-aware mappings** - Subtitles, comic archives, audio codecs and
//!   streaming manifests resolve to the types media clients expect
//! - **Stream default** - Unknown extensions resolve to
//!   `application/octet-stream`, or to `None` when the caller opts out
//! - **Strict reverse lookup** - Parameters such as `; charset=UTF-8` are
//!   dropped, anything else must match exactly
//!
//! # Optional Features
//!
//! - `guess` - Consult the `mime_guess` database for extensions the media
//!   tables do not cover (enabled by default)
//! - `mime` - Typed lookups over `mime::Mime` (enabled by default)
//! - `http` - `Content-Type` header values (enabled by default)
//! - `std` - Enable standard library support (enabled by default)
//!
//! # Examples
//!
//! ```rust
//! use media_mime::{mime_type, mime_type_with, to_extension, Result};
//!
//! # fn main() -> Result<()> {
//! assert_eq!(mime_type("four.mkv")?, "video/x-matroska");
//! assert_eq!(mime_type("six-hyphenated.srt")?, "application/x-subrip");
//! assert_eq!(mime_type_with("16.NoDefault", false)?, None);
//!
//! assert_eq!(to_extension("image/x-png")?, Some(".png"));
//! assert_eq!(to_extension("audio/ogg")?, Some(".oga"));
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub use error::{Error, Result};

mod table;

mod resolve;
pub use resolve::{
    is_image, is_video, mime_type, mime_type_or, mime_type_with, to_extension, STREAM_DEFAULT,
};

#[cfg(feature = "mime")]
pub mod typed;

#[cfg(feature = "http")]
pub mod header;
