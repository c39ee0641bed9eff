//! Duration allocation
//!
//! The notation has no field for chord length, so it is inferred per bar:
//!
//! 1. A token carrying duration glyphs gets exactly what they say. `:` is a
//!    half note and `;` a quarter note, counted in the meter's beat unit, and
//!    repeated glyphs add up (`C;;;` is three quarters).
//! 2. A lone token without glyphs fills the bar.
//! 3. The beats left over are shared by the tokens without glyphs: integer
//!    division, remainder to the last of them. When there are more chords than
//!    beats the share is an exact fraction instead.
//!
//! If explicit glyphs already fill the bar, the remaining tokens share a fresh
//! bar's worth and the decoder carries them into a continuation bar.

use crate::ast::{Beats, ChordSlot, TimeSignature};
use crate::progression::tokenizer::{classify, CharClass};

pub const HALF_NOTE: char = ':';
pub const QUARTER_NOTE: char = ';';

/// Length of one duration glyph in beats of `meter`.
pub fn glyph_duration(glyph: char, meter: &TimeSignature) -> Option<Beats> {
    let unit = meter.beat_type as i32;
    match glyph {
        HALF_NOTE => Some(Beats::new(unit, 2)),
        QUARTER_NOTE => Some(Beats::new(unit, 4)),
        _ => None,
    }
}

/// Assign a duration to every token of a bar, in order.
///
/// The returned slots carry the token text with its glyphs removed, not yet
/// canonicalized.
pub fn allocate(tokens: &[&str], meter: &TimeSignature) -> Vec<ChordSlot> {
    let mut symbols = Vec::with_capacity(tokens.len());
    let mut explicit = Vec::with_capacity(tokens.len());

    for token in tokens {
        let (symbol, duration) = split_glyphs(token, meter);
        symbols.push(symbol);
        explicit.push(duration);
    }

    let shares = share_remaining(&explicit, meter);
    let mut shares = shares.into_iter();

    symbols
        .into_iter()
        .zip(explicit)
        .map(|(chord, duration)| ChordSlot {
            chord,
            duration: duration
                .or_else(|| shares.next())
                .unwrap_or_else(|| meter.bar_length()),
        })
        .collect()
}

/// Separate the glyphs from a token and total them up.
fn split_glyphs(token: &str, meter: &TimeSignature) -> (String, Option<Beats>) {
    let mut symbol = String::with_capacity(token.len());
    let mut total: Option<Beats> = None;

    for c in token.chars() {
        if classify(c) == CharClass::DurationGlyph {
            if let Some(beats) = glyph_duration(c, meter) {
                total = Some(total.unwrap_or_else(Beats::zero) + beats);
            }
        } else {
            symbol.push(c);
        }
    }

    (symbol, total)
}

/// Durations for the tokens that have no glyph, in order.
fn share_remaining(explicit: &[Option<Beats>], meter: &TimeSignature) -> Vec<Beats> {
    let open = explicit.iter().filter(|d| d.is_none()).count();
    if open == 0 {
        return Vec::new();
    }

    let bar = meter.bar_length();
    let claimed: Beats = explicit.iter().flatten().copied().sum();
    let mut remaining = bar - claimed;
    if !remaining.is_positive() {
        remaining = bar;
    }

    let count = open as i32;
    if remaining.is_whole() {
        let total = remaining.0.to_integer();
        let each = total / count;
        if each > 0 {
            let mut shares = vec![Beats::whole(each); open];
            if let Some(last) = shares.last_mut() {
                *last = Beats::whole(total - each * (count - 1));
            }
            return shares;
        }
    }

    let each = Beats(remaining.0 / count);
    vec![each; open]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn durations(tokens: &[&str], meter: TimeSignature) -> Vec<String> {
        allocate(tokens, &meter)
            .iter()
            .map(|slot| slot.duration.to_string())
            .collect()
    }

    #[test]
    fn test_single_token_fills_bar() {
        assert_eq!(durations(&["Eb7"], TimeSignature::new(4, 4)), vec!["4"]);
        assert_eq!(durations(&["C"], TimeSignature::new(3, 4)), vec!["3"]);
    }

    #[test]
    fn test_even_split() {
        assert_eq!(durations(&["C ", "G7 "], TimeSignature::new(4, 4)), vec!["2", "2"]);
    }

    #[test]
    fn test_remainder_goes_to_last() {
        assert_eq!(durations(&["C", "D", "E"], TimeSignature::new(4, 4)), vec!["1", "1", "2"]);
        assert_eq!(durations(&["C", "D"], TimeSignature::new(3, 4)), vec!["1", "2"]);
    }

    #[test]
    fn test_more_chords_than_beats() {
        assert_eq!(
            durations(&["C", "D", "E", "F", "G"], TimeSignature::new(4, 4)),
            vec!["4/5", "4/5", "4/5", "4/5", "4/5"]
        );
    }

    #[test]
    fn test_explicit_glyphs() {
        assert_eq!(durations(&["C:", "G7:"], TimeSignature::new(4, 4)), vec!["2", "2"]);
        assert_eq!(durations(&["C;;;", "G7"], TimeSignature::new(4, 4)), vec!["3", "1"]);
        assert_eq!(durations(&["C;", "D", "E"], TimeSignature::new(4, 4)), vec!["1", "1", "2"]);
    }

    #[test]
    fn test_glyphs_in_other_meters() {
        assert_eq!(durations(&["C:", "D"], TimeSignature::new(6, 8)), vec!["4", "2"]);
        assert_eq!(durations(&["C;", "D"], TimeSignature::new(2, 2)), vec!["1/2", "3/2"]);
    }

    #[test]
    fn test_glyphs_removed_from_symbol() {
        let slots = allocate(&["Db^7:", "G7;"], &TimeSignature::default());
        assert_eq!(slots[0].chord, "Db^7");
        assert_eq!(slots[1].chord, "G7");
    }

    #[test]
    fn test_full_bar_claimed_by_glyphs() {
        // Nothing left: the trailing chord gets a bar of its own
        assert_eq!(durations(&["C::", "G7"], TimeSignature::new(4, 4)), vec!["4", "4"]);
    }

    #[test]
    fn test_sum_matches_bar_without_glyphs() {
        let meter = TimeSignature::new(4, 4);
        for n in 1..=8 {
            let tokens: Vec<&str> = std::iter::repeat("C").take(n).collect();
            let total: Beats = allocate(&tokens, &meter).iter().map(|s| s.duration).sum();
            assert_eq!(total, meter.bar_length(), "{} tokens", n);
        }
    }
}
