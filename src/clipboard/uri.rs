//! `file://` URIs and `text/uri-list` payloads.
//!
//! X11 and Wayland clipboards carry file references as a `text/uri-list`
//! (RFC 2483): one URI per line, `#` comment lines, CRLF line endings.

use std::path::{Path, PathBuf};

/// Build a file:// URI for the given path.
///
/// Spaces and special characters are percent-encoded per RFC 3986. The
/// path's raw bytes are encoded, so names that are not valid UTF-8 survive.
pub fn build_file_uri(path: &Path) -> String {
    let mut encoded = String::new();

    for &byte in path.as_os_str().as_encoded_bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'/' | b'.' | b'-' | b'_' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }

    format!("file://{}", encoded)
}

/// Build a `text/uri-list` payload for the given paths, preserving order.
pub fn build_uri_list(paths: &[PathBuf]) -> String {
    let mut list = String::new();
    for path in paths {
        list.push_str(&build_file_uri(path));
        list.push_str("\r\n");
    }
    list
}

/// Parse a single `file://` URI into a local path.
///
/// Returns `None` for other schemes and for files on a remote host.
pub fn parse_file_uri(uri: &str) -> Option<PathBuf> {
    let rest = uri.strip_prefix("file://")?;
    let path = if rest.starts_with('/') {
        rest
    } else {
        rest.strip_prefix("localhost")
            .filter(|p| p.starts_with('/'))?
    };
    Some(bytes_to_path(percent_decode(path)))
}

/// Parse a `text/uri-list` payload into local paths, in order.
///
/// Comment lines, blank lines, and non-file URIs are skipped.
pub fn parse_uri_list(list: &str) -> Vec<PathBuf> {
    list.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_file_uri)
        .collect()
}

fn percent_decode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                decoded.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    decoded
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}

#[cfg(unix)]
fn bytes_to_path(bytes: Vec<u8>) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}
