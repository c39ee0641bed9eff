//! Chord tokenizer
//!
//! Every character of a bar falls into exactly one class. A root letter opens
//! a new chord token; everything else is carried by the token that is open.

use crate::progression::duration::{HALF_NOTE, QUARTER_NOTE};
use crate::symbol::{is_root_letter, DIMINISHED_GLYPH, HALF_DIMINISHED_GLYPH, MAJOR_GLYPH};

/// Character classes of the progression grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `A`-`G`: starts a chord
    Root,
    /// `:` or `;`: explicit chord length
    DurationGlyph,
    /// `^`, `h`, `o`: quality shorthand
    QualityGlyph,
    /// Anything else (accidentals, extensions, spaces)
    Other,
}

pub fn classify(c: char) -> CharClass {
    match c {
        c if is_root_letter(c) => CharClass::Root,
        HALF_NOTE | QUARTER_NOTE => CharClass::DurationGlyph,
        MAJOR_GLYPH | HALF_DIMINISHED_GLYPH | DIMINISHED_GLYPH => CharClass::QualityGlyph,
        _ => CharClass::Other,
    }
}

/// Partition one bar into raw chord tokens.
///
/// Text before the first root letter has no chord to belong to and is
/// dropped, so a bar that opens with stray punctuation still tokenizes.
///
/// # Examples
/// ```
/// use ireal::progression::tokenizer::tokenize_bar;
///
/// assert_eq!(tokenize_bar("C G7 "), vec!["C ", "G7 "]);
/// assert_eq!(tokenize_bar(",Bb-7Eb7"), vec!["Bb-7", "Eb7"]);
/// ```
pub fn tokenize_bar(bar: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut open: Option<usize> = None;

    for (i, c) in bar.char_indices() {
        if classify(c) == CharClass::Root {
            if let Some(start) = open {
                tokens.push(&bar[start..i]);
            }
            open = Some(i);
        }
    }

    if let Some(start) = open {
        tokens.push(&bar[start..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_chord() {
        assert_eq!(tokenize_bar("Db^7"), vec!["Db^7"]);
    }

    #[test]
    fn test_chord_changes() {
        assert_eq!(tokenize_bar("C G7 "), vec!["C ", "G7 "]);
        assert_eq!(tokenize_bar("D-7G7"), vec!["D-7", "G7"]);
    }

    #[test]
    fn test_lowercase_letters_continue_token() {
        // Flats and quality letters are never roots
        assert_eq!(tokenize_bar("Bbh7Ebo"), vec!["Bbh7", "Ebo"]);
    }

    #[test]
    fn test_leading_junk_discarded() {
        assert_eq!(tokenize_bar("  ,C"), vec!["C"]);
        assert!(tokenize_bar(" ,.").is_empty());
        assert!(tokenize_bar("").is_empty());
    }

    #[test]
    fn test_duration_glyphs_stay_with_chord() {
        assert_eq!(tokenize_bar("C:G7;A7;"), vec!["C:", "G7;", "A7;"]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('E'), CharClass::Root);
        assert_eq!(classify('e'), CharClass::Other);
        assert_eq!(classify(':'), CharClass::DurationGlyph);
        assert_eq!(classify('h'), CharClass::QualityGlyph);
        assert_eq!(classify('#'), CharClass::Other);
    }
}
