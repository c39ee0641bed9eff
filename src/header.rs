//! Song header fields
//!
//! A song payload is a list of fields joined with `=`:
//!
//! ```text
//! title = composer = (unused) = style = key = progression... [= tempo [= repeats]]
//! ```
//!
//! The progression may itself contain `=`, so everything after the key up to
//! the first all-digit field is the progression. The digit fields after it
//! are the tempo and the repeat count.

pub const FIELD_SEPARATOR: char = '=';

/// The flat fields of one song payload, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    pub title: &'a str,
    pub composer: &'a str,
    pub style: &'a str,
    pub key: &'a str,
    pub progression: String,
    pub tempo: u32,
    pub repeats: u32,
}

/// Split a song payload into its fields. Missing fields come back empty.
pub fn split_header(payload: &str) -> Header<'_> {
    let fields: Vec<&str> = payload.split(FIELD_SEPARATOR).collect();
    let field = |i: usize| fields.get(i).copied().unwrap_or("");

    let rest = fields.get(5..).unwrap_or(&[]);
    let digits_at = rest
        .iter()
        .position(|f| is_number(f))
        .unwrap_or(rest.len());

    let mut numbers = rest[digits_at..]
        .iter()
        .filter(|f| is_number(f))
        .filter_map(|f| f.parse::<u32>().ok());

    Header {
        title: field(0),
        composer: field(1),
        style: field(3),
        key: field(4),
        progression: rest[..digits_at].join("="),
        tempo: numbers.next().unwrap_or(0),
        repeats: numbers.next().unwrap_or(0),
    }
}

fn is_number(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Tidy a free-text field: `+` and encoded spaces become spaces, leftover
/// `%23`/`%2D` escapes become `#`/`-`.
pub fn clean_text(text: &str) -> String {
    text.replace('+', " ")
        .replace("%20", " ")
        .replace("%23", "#")
        .replace("%2D", "-")
        .trim()
        .to_string()
}
