//! Transport decoding
//!
//! Payloads arrive percent-encoded, usually behind an `irealb://` scheme,
//! and may hold a whole playlist.

/// URL schemes a payload may be wrapped in.
pub const SCHEMES: [&str; 2] = ["irealbook://", "irealb://"];
/// Songs of a playlist are separated by a doubled `==`. A single `==` shows
/// up inside any song whose unused header field is empty.
pub const PLAYLIST_SEPARATOR: &str = "====";

/// Decode `%XX` escapes. Malformed escapes are kept as written and invalid
/// UTF-8 is replaced.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// The payload after its URL scheme, if it has one.
pub fn strip_scheme(input: &str) -> Option<&str> {
    let trimmed = input.trim_start();
    SCHEMES
        .iter()
        .find_map(|scheme| trimmed.strip_prefix(scheme))
}

pub fn is_playlist(content: &str) -> bool {
    content.contains(PLAYLIST_SEPARATOR)
}

/// Split a playlist into song payloads, dropping blank entries.
pub fn split_playlist(content: &str) -> Vec<&str> {
    content
        .split(PLAYLIST_SEPARATOR)
        .filter(|song| !song.trim().is_empty())
        .collect()
}
