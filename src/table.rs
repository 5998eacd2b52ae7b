//! Static lookup tables.
//!
//! Every table is sorted by key under ASCII case folding and has unique keys.

use unicase::UniCase;

/// Extension (with leading dot) to MIME type.
pub(crate) static EXTENSIONS: &[(&str, &str)] = &[
    (".3g2", "video/3gpp2"),
    (".3gp", "video/3gpp"),
    (".aac", "audio/aac"),
    (".ac3", "audio/ac3"),
    (".ape", "audio/x-ape"),
    (".asf", "video/x-ms-asf"),
    (".ass", "text/x-ssa"),
    (".avi", "video/x-msvideo"),
    (".azw", "application/vnd.amazon.ebook"),
    (".azw3", "application/vnd.amazon.ebook"),
    (".bmp", "image/bmp"),
    (".cb7", "application/x-cb7"),
    (".cba", "application/x-cba"),
    (".cbr", "application/vnd.comicbook-rar"),
    (".cbt", "application/x-cbt"),
    (".cbz", "application/vnd.comicbook+zip"),
    (".css", "text/css"),
    (".dll", "application/octet-stream"),
    (".dsf", "audio/dsf"),
    (".dsp", "audio/dsp"),
    (".dts", "audio/vnd.dts"),
    (".edl", "text/plain"),
    (".epub", "application/epub+zip"),
    (".flac", "audio/flac"),
    (".flv", "video/x-flv"),
    (".gif", "image/gif"),
    (".htm", "text/html"),
    (".html", "text/html"),
    (".ico", "image/vnd.microsoft.icon"),
    (".jpeg", "image/jpeg"),
    (".jpg", "image/jpeg"),
    (".js", "application/javascript"),
    (".json", "application/json"),
    (".log", "text/plain"),
    (".m3u8", "application/x-mpegurl"),
    (".m4a", "audio/mp4"),
    (".m4b", "audio/mp4"),
    (".m4v", "video/x-m4v"),
    (".mka", "audio/x-matroska"),
    (".mkv", "video/x-matroska"),
    (".mov", "video/quicktime"),
    (".mp3", "audio/mpeg"),
    (".mp4", "video/mp4"),
    (".mpd", "video/vnd.mpeg.dash.mpd"),
    (".mpegts", "video/mp2t"),
    (".oga", "audio/ogg"),
    (".ogg", "audio/ogg"),
    (".ogv", "video/ogg"),
    (".opus", "audio/ogg"),
    (".pdf", "application/pdf"),
    (".png", "image/png"),
    (".srt", "application/x-subrip"),
    (".ssa", "text/x-ssa"),
    (".svg", "image/svg+xml"),
    (".tbn", "image/jpeg"),
    (".tif", "image/tiff"),
    (".tiff", "image/tiff"),
    (".ts", "video/mp2t"),
    (".txt", "text/plain"),
    (".vorbis", "audio/vorbis"),
    (".vtt", "text/vtt"),
    (".wav", "audio/wav"),
    (".webm", "video/webm"),
    (".webma", "audio/webm"),
    (".webp", "image/webp"),
    (".wma", "audio/x-ms-wma"),
    (".wmv", "video/x-ms-wmv"),
    (".wv", "audio/x-wavpack"),
    (".xml", "application/xml"),
    (".xsp", "audio/xsp"),
];

/// MIME type essence to canonical extension.
///
/// Authored independently of [`EXTENSIONS`]; the two need not round-trip.
pub(crate) static MIME_TYPES: &[(&str, &str)] = &[
    ("application/epub+zip", ".epub"),
    ("application/javascript", ".js"),
    ("application/json", ".json"),
    ("application/pdf", ".pdf"),
    ("application/vnd.amazon.ebook", ".azw3"),
    ("application/vnd.comicbook+zip", ".cbz"),
    ("application/vnd.comicbook-rar", ".cbr"),
    ("application/x-cb7", ".cb7"),
    ("application/x-cba", ".cba"),
    ("application/x-cbr", ".cbr"),
    ("application/x-cbt", ".cbt"),
    ("application/x-cbz", ".cbz"),
    ("application/x-javascript", ".js"),
    ("application/x-mpegurl", ".m3u8"),
    ("application/x-subrip", ".srt"),
    ("application/xml", ".xml"),
    ("audio/aac", ".aac"),
    ("audio/ac3", ".ac3"),
    ("audio/dsf", ".dsf"),
    ("audio/dsp", ".dsp"),
    ("audio/flac", ".flac"),
    ("audio/m4b", ".m4b"),
    ("audio/mp4", ".m4a"),
    ("audio/mpeg", ".mp3"),
    ("audio/ogg", ".oga"),
    ("audio/vorbis", ".vorbis"),
    ("audio/wav", ".wav"),
    ("audio/webm", ".webma"),
    ("audio/x-aac", ".aac"),
    ("audio/x-ape", ".ape"),
    ("audio/x-matroska", ".mka"),
    ("audio/x-wavpack", ".wv"),
    ("image/bmp", ".bmp"),
    ("image/gif", ".gif"),
    ("image/jpeg", ".jpg"),
    ("image/jpg", ".jpg"),
    ("image/png", ".png"),
    ("image/svg+xml", ".svg"),
    ("image/tiff", ".tiff"),
    ("image/webp", ".webp"),
    ("image/x-icon", ".ico"),
    ("image/x-png", ".png"),
    ("text/css", ".css"),
    ("text/plain", ".edl"),
    ("text/vtt", ".vtt"),
    ("text/x-ssa", ".ass"),
    ("video/mp2t", ".ts"),
    ("video/mp4", ".mp4"),
    ("video/quicktime", ".mov"),
    ("video/vnd.mpeg.dash.mpd", ".mpd"),
    ("video/webm", ".webm"),
    ("video/x-matroska", ".mkv"),
    ("video/x-msvideo", ".avi"),
];

/// Containers served as `video/<extension>` when [`EXTENSIONS`] has no
/// specific entry.
pub(crate) static VIDEO_EXTENSIONS: &[(&str, &str)] = &[
    (".3gp", "video/3gp"),
    (".asf", "video/asf"),
    (".avi", "video/avi"),
    (".divx", "video/divx"),
    (".dvr-ms", "video/dvr-ms"),
    (".f4v", "video/f4v"),
    (".flv", "video/flv"),
    (".img", "video/img"),
    (".iso", "video/iso"),
    (".m2t", "video/m2t"),
    (".m2ts", "video/m2ts"),
    (".m2v", "video/m2v"),
    (".m4v", "video/m4v"),
    (".mk3d", "video/mk3d"),
    (".mkv", "video/mkv"),
    (".mov", "video/mov"),
    (".mp4", "video/mp4"),
    (".mpeg", "video/mpeg"),
    (".mpg", "video/mpg"),
    (".mts", "video/mts"),
    (".ogg", "video/ogg"),
    (".ogm", "video/ogm"),
    (".ogv", "video/ogv"),
    (".rec", "video/rec"),
    (".rmvb", "video/rmvb"),
    (".ts", "video/ts"),
    (".vob", "video/vob"),
    (".webm", "video/webm"),
    (".wmv", "video/wmv"),
    (".wtv", "video/wtv"),
];

/// Case-insensitive binary search over a sorted static table.
pub(crate) fn lookup<V: Copy>(table: &'static [(&'static str, V)], key: &str) -> Option<V> {
    let key = UniCase::ascii(key);
    table
        .binary_search_by(|(k, _)| UniCase::ascii(*k).cmp(&key))
        .ok()
        .map(|index| table[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(table: &[(&str, &str)]) {
        for pair in table.windows(2) {
            assert!(
                UniCase::ascii(pair[0].0) < UniCase::ascii(pair[1].0),
                "{:?} must sort before {:?}",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn test_tables_sorted_without_duplicates() {
        assert_sorted(EXTENSIONS);
        assert_sorted(MIME_TYPES);
        assert_sorted(VIDEO_EXTENSIONS);
    }

    #[test]
    fn test_keys_are_lowercase() {
        for (key, _) in EXTENSIONS.iter().chain(MIME_TYPES).chain(VIDEO_EXTENSIONS) {
            assert!(!key.bytes().any(|b| b.is_ascii_uppercase()), "{key}");
        }
    }

    #[test]
    fn test_extension_keys_carry_leading_dot() {
        for (key, _) in EXTENSIONS.iter().chain(VIDEO_EXTENSIONS) {
            assert!(key.starts_with('.') && key.len() > 1, "{key}");
        }
        for (_, extension) in MIME_TYPES {
            assert!(extension.starts_with('.'), "{extension}");
        }
    }

    #[test]
    fn test_video_values_follow_extension() {
        for (extension, mime) in VIDEO_EXTENSIONS {
            assert_eq!(mime.strip_prefix("video/"), Some(&extension[1..]));
        }
    }

    #[test]
    fn test_lookup_ignores_ascii_case() {
        assert_eq!(lookup(EXTENSIONS, ".MKV"), Some("video/x-matroska"));
        assert_eq!(lookup(EXTENSIONS, ".Jpg"), Some("image/jpeg"));
        assert_eq!(lookup(MIME_TYPES, "TEXT/X-SSA"), Some(".ass"));
        assert_eq!(lookup(MIME_TYPES, "Application/X-MpegURL"), Some(".m3u8"));
    }

    #[test]
    fn test_lookup_misses() {
        assert_eq!(lookup(EXTENSIONS, ""), None);
        assert_eq!(lookup(EXTENSIONS, "jpg"), None);
        assert_eq!(lookup(EXTENSIONS, ".jpgx"), None);
        assert_eq!(lookup(MIME_TYPES, "text/html"), None);
        assert_eq!(lookup(VIDEO_EXTENSIONS, ".ébook"), None);
    }
}
