//! Chord symbol canonicalization
//!
//! Expands the single-character quality shorthands used by iReal charts into
//! the spelled-out names readers expect: `Db^7` becomes `Dbmaj7`, `Eh7`
//! becomes `Em7b5`, `Co7` becomes `Cdim7`.

use std::iter::Peekable;
use std::str::Chars;

use crate::progression::tokenizer::{classify, CharClass};

/// Shorthand glyphs for the three spelled-out qualities
pub const MAJOR_GLYPH: char = '^';
pub const HALF_DIMINISHED_GLYPH: char = 'h';
pub const DIMINISHED_GLYPH: char = 'o';

/// Major quality before an explicit extension (`^9`)
pub const MAJOR: &str = "maj";
/// Major seventh quality (`^`)
pub const MAJOR_SEVENTH: &str = "maj7";
/// Half-diminished seventh quality (`h`)
pub const HALF_DIMINISHED: &str = "m7b5";
/// Diminished quality (`o`)
pub const DIMINISHED: &str = "dim";

/// The seven note letters that can open a chord symbol.
pub fn is_root_letter(c: char) -> bool {
    matches!(c, 'A'..='G')
}

/// Characters that alter a root directly after it (`Bb`, `F#`).
pub fn is_accidental(c: char) -> bool {
    c == 'b' || c == '#'
}

/// Rewrite quality shorthand in a chord token or key string.
///
/// The root and its accidental are copied untouched. The rest is scanned once,
/// left to right, into a new string, so text produced by one replacement is
/// never scanned again:
/// - `^` becomes `maj` plus `7` unless a digit follows (`^` and `^7` are both
///   `maj7`, `^9` is `maj9`);
/// - `h` becomes `m7b5` (absorbing a following `7`) and `o` becomes `dim`, but
///   only in quality position: right after the root, or after a leading `-`.
///
/// # Examples
/// ```
/// use ireal::symbol::canonicalize;
///
/// assert_eq!(canonicalize("Db^7"), "Dbmaj7");
/// assert_eq!(canonicalize("Eh7"), "Em7b5");
/// assert_eq!(canonicalize("Co7 "), "Cdim7");
/// assert_eq!(canonicalize("C-^7"), "C-maj7");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars().peekable();
    let mut out = String::with_capacity(trimmed.len() + 4);

    // Root and accidental
    if let Some(&root) = chars.peek() {
        if is_root_letter(root) {
            out.push(root);
            chars.next();
            if let Some(&accidental) = chars.peek() {
                if is_accidental(accidental) {
                    out.push(accidental);
                    chars.next();
                }
            }
        }
    }

    let mut quality_position = true;
    while let Some(c) = chars.next() {
        match classify(c) {
            // `^` is expanded anywhere, `h` and `o` only in quality position
            CharClass::QualityGlyph if c == MAJOR_GLYPH || quality_position => {
                expand_quality(c, &mut chars, &mut out);
                quality_position = false;
            }
            // Minor sign keeps us in quality position: `-^7`
            _ if c == '-' && quality_position => out.push('-'),
            _ => {
                out.push(c);
                quality_position = false;
            }
        }
    }

    out.trim().to_string()
}

fn expand_quality(glyph: char, rest: &mut Peekable<Chars<'_>>, out: &mut String) {
    match glyph {
        MAJOR_GLYPH => {
            if rest.peek().map_or(false, |next| next.is_ascii_digit()) {
                out.push_str(MAJOR);
            } else {
                out.push_str(MAJOR_SEVENTH);
            }
        }
        HALF_DIMINISHED_GLYPH => {
            out.push_str(HALF_DIMINISHED);
            if rest.peek() == Some(&'7') {
                rest.next();
            }
        }
        _ => out.push_str(DIMINISHED),
    }
}
