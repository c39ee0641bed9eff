//! Markup stripping
//!
//! Removes everything from a progression that isn't a bar line or chord
//! material. Passes run in a fixed order, each over the previous one's output:
//!
//! 1. `{...}` annotation spans
//! 2. `[...]` section markers, which also cut the text into section chunks
//! 3. control codes `l n p s x` (the quality words `sus` and `alt` survive)
//! 4. the `Y` placeholder
//! 5. the `XyQ` end marker
//!
//! Spans are matched by a bounded scan: an opener closes at the nearest
//! closer and spans never nest. An opener with no closer is dropped on its
//! own and the text after it is kept.

use crate::error::Warning;

const ANNOTATION: (char, char) = ('{', '}');
const SECTION_MARKER: (char, char) = ('[', ']');
const CONTROL_CODES: [char; 5] = ['l', 'n', 'p', 's', 'x'];
const PROTECTED_WORDS: [&str; 2] = ["sus", "alt"];
const PLACEHOLDER: char = 'Y';
const END_MARKER: &str = "XyQ";

/// A progression with its markup removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Stripped {
    /// Text between section markers, in order. The first chunk is whatever
    /// precedes the first marker and is often empty.
    pub chunks: Vec<String>,
    pub warnings: Vec<Warning>,
}

impl Stripped {
    /// True when at least one section marker was found.
    pub fn has_sections(&self) -> bool {
        self.chunks.len() > 1
    }
}

pub fn strip_markup(text: &str) -> Stripped {
    let mut warnings = Vec::new();

    let without_annotations = cut_spans(text, ANNOTATION, &mut warnings).concat();
    let chunks = cut_spans(&without_annotations, SECTION_MARKER, &mut warnings)
        .into_iter()
        .map(|chunk| strip_codes(&chunk))
        .collect();

    Stripped { chunks, warnings }
}

/// Cut every `open...close` span out of `text`, returning the pieces between
/// spans. Offsets in warnings are byte offsets into `text`.
fn cut_spans(text: &str, (open, close): (char, char), warnings: &mut Vec<Warning>) -> Vec<String> {
    let mut pieces = vec![String::new()];
    let mut rest = text;
    let mut offset = 0;

    while let Some(start) = rest.find(open) {
        if let Some(piece) = pieces.last_mut() {
            piece.push_str(&rest[..start]);
        }
        let body_start = start + open.len_utf8();
        let body = &rest[body_start..];

        match body.find(close) {
            Some(end) => {
                let consumed = body_start + end + close.len_utf8();
                pieces.push(String::new());
                rest = &rest[consumed..];
                offset += consumed;
            }
            None => {
                warnings.push(Warning::UnterminatedSpan {
                    open,
                    offset: offset + start,
                });
                rest = body;
                offset += body_start;
            }
        }
    }

    if let Some(piece) = pieces.last_mut() {
        piece.push_str(rest);
    }
    pieces
}

fn strip_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while let Some(c) = rest.chars().next() {
        for word in PROTECTED_WORDS {
            if rest.starts_with(word) {
                out.push_str(word);
                rest = &rest[word.len()..];
                continue 'scan;
            }
        }
        if !CONTROL_CODES.contains(&c) {
            out.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    out.replace(PLACEHOLDER, "").replace(END_MARKER, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(text: &str) -> Vec<String> {
        strip_markup(text).chunks
    }

    #[test]
    fn test_annotation_removed() {
        assert_eq!(chunks("{intro}C|"), vec!["C|"]);
        assert_eq!(chunks("C{a}|{b}D|"), vec!["C|D|"]);
    }

    #[test]
    fn test_annotation_non_greedy() {
        // The first closer ends the span; text between spans survives
        assert_eq!(chunks("{x}C|{y}"), vec!["C|"]);
    }

    #[test]
    fn test_section_markers_cut_chunks() {
        let stripped = strip_markup("[A]Cmaj7|Dm7|[B]G7|");
        assert!(stripped.has_sections());
        assert_eq!(stripped.chunks, vec!["", "Cmaj7|Dm7|", "G7|"]);
        assert!(stripped.warnings.is_empty());
    }

    #[test]
    fn test_brackets_inside_annotation_ignored() {
        let stripped = strip_markup("{see [B]}C|");
        assert!(!stripped.has_sections());
        assert_eq!(stripped.chunks, vec!["C|"]);
    }

    #[test]
    fn test_control_codes_removed() {
        assert_eq!(chunks("lC|nD|pE|sF|xG|"), vec!["C|D|E|F|G|"]);
    }

    #[test]
    fn test_quality_words_survive() {
        assert_eq!(chunks("C7sus|G7alt|"), vec!["C7sus|G7alt|"]);
        assert_eq!(chunks("sC7sus4|"), vec!["C7sus4|"]);
    }

    #[test]
    fn test_placeholder_and_end_marker() {
        assert_eq!(chunks("YC|XyQD|"), vec!["C|D|"]);
    }

    #[test]
    fn test_unterminated_annotation_keeps_rest() {
        let stripped = strip_markup("C|{tag D|E|");
        assert_eq!(stripped.chunks, vec!["C|tag D|E|"]);
        assert_eq!(
            stripped.warnings,
            vec![Warning::UnterminatedSpan { open: '{', offset: 2 }]
        );
    }

    #[test]
    fn test_unterminated_marker_is_not_a_section() {
        let stripped = strip_markup("[A]C|[D|");
        assert_eq!(stripped.chunks, vec!["", "C|D|"]);
        assert_eq!(
            stripped.warnings,
            vec![Warning::UnterminatedSpan { open: '[', offset: 5 }]
        );
    }

    #[test]
    fn test_empty_input() {
        let stripped = strip_markup("");
        assert_eq!(stripped.chunks, vec![""]);
        assert!(stripped.warnings.is_empty());
    }
}
