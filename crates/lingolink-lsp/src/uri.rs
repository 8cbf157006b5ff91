//! `file://` URI helpers.
//!
//! Diagnostics publishers and workspace edits address documents by URI;
//! the engine addresses them by filesystem path. These helpers round-trip
//! between the two with minimal percent encoding, targeting the URIs this
//! crate itself produces.

use std::path::{Path, PathBuf};

/// Convert a local filesystem path to a `file://` URI.
///
/// The path is used as given (document identities are host-provided and may
/// not exist on the publishing machine), normalized to forward slashes.
pub fn path_to_file_uri(path: &Path) -> String {
    let mut path_str = path.to_string_lossy().to_string();

    if cfg!(windows) {
        path_str = path_str.replace('\\', "/");
        if !path_str.starts_with('/') {
            path_str.insert(0, '/');
        }
    }

    format!("file://{}", percent_encode_path(&path_str))
}

/// Percent-encode a path for a `file://` URI, keeping URI-safe bytes.
pub fn percent_encode_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for &b in path.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Percent-decode a `file://` URI path component.
pub fn percent_decode_path(path: &str) -> String {
    fn hex_val(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    let bytes = path.as_bytes();
    let mut out = Vec::<u8>::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2]))
        {
            out.push((hi << 4) | lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).to_string()
}

/// Convert a `file://` URI back into a local filesystem path.
///
/// Intended to round-trip URIs created by [`path_to_file_uri`].
pub fn file_uri_to_path(uri: &str) -> Option<PathBuf> {
    let uri = uri.strip_prefix("file://")?;
    let uri = uri.strip_prefix("localhost/").unwrap_or(uri);

    let mut path_str = percent_decode_path(uri);

    // `file:///C:/...` -> `C:\...`
    if cfg!(windows) {
        if path_str.starts_with('/') && path_str.get(2..3) == Some(":") {
            path_str.remove(0);
        }
        path_str = path_str.replace('/', "\\");
    }

    Some(PathBuf::from(path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_roundtrip() {
        let input = "/content/ko/docs/hello world.md";
        let encoded = percent_encode_path(input);
        assert_eq!(encoded, "/content/ko/docs/hello%20world.md");
        assert_eq!(percent_decode_path(&encoded), input);
    }

    #[test]
    fn file_uri_roundtrip() {
        let path = Path::new("/site/content/ko/docs/concepts/overview.md");
        let uri = path_to_file_uri(path);
        assert_eq!(uri, "file:///site/content/ko/docs/concepts/overview.md");
        assert_eq!(file_uri_to_path(&uri), Some(path.to_path_buf()));
    }

    #[test]
    fn non_ascii_paths_encode_and_decode() {
        let path = Path::new("/content/ko/docs/개요.md");
        let uri = path_to_file_uri(path);
        assert!(uri.starts_with("file:///content/ko/docs/%"));
        assert_eq!(file_uri_to_path(&uri), Some(path.to_path_buf()));
    }
}
