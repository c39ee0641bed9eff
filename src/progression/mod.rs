//! # Progression Decoder
//!
//! Turns the chord-chart part of a song into lettered sections of numbered
//! bars.
//!
//! ## Sub-modules
//! - `markup` - strips annotations, section markers, and control codes
//! - `bars` - splits stripped text on `|`
//! - `tokenizer` - cuts a bar into chord tokens at each root letter
//! - `duration` - infers how many beats each chord gets
//!
//! Symbol canonicalization lives in [`crate::symbol`], since keys use it too.
//!
//! ## Pipeline
//! ```text
//! text ─► strip_markup ─► section chunks
//!           chunk ─► split_bars ─► bar ─► tokenize_bar ─► allocate ─► canonicalize
//!                                                  └─► pack into bars (overflow rule)
//! ```
//!
//! ## Numbering
//! Bars are numbered from 1 across the whole progression, not per section.
//! A bar dropped for having no chord keeps its number reserved, and a
//! continuation bar made by the overflow rule takes the next one.
//!
//! ## Example
//! ```rust
//! use ireal::{decode_progression, TimeSignature};
//!
//! let decoded = decode_progression("[A]Cmaj7|Dm7|[B]G7|", &TimeSignature::default());
//! let sections = decoded.value;
//!
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[0].name, "A");
//! assert_eq!(sections[1].bars[0].number, 3);
//! assert_eq!(sections[1].bars[0].chords[0].chord, "G7");
//! ```

pub mod bars;
pub mod duration;
pub mod markup;
pub mod tokenizer;


use crate::ast::{Bar, Beats, ChordSlot, Decoded, Section, TimeSignature};
use crate::error::Warning;
use crate::symbol::canonicalize;

pub use bars::split_bars;
pub use duration::allocate;
pub use markup::strip_markup;
pub use tokenizer::tokenize_bar;

/// Decode one progression into sections, given the song's time signature.
///
/// Never fails. Anything that can't be read cleanly is skipped or repaired
/// and reported in [`Decoded::warnings`].
pub fn decode_progression(text: &str, meter: &TimeSignature) -> Decoded<Vec<Section>> {
    // The fields are public, so a zero meter can get here without `new`
    let meter = &TimeSignature::new(meter.beats, meter.beat_type);
    let stripped = strip_markup(text);
    let marked = stripped.has_sections();
    let mut warnings = stripped.warnings;
    let mut sections = Vec::new();
    let mut next_number = 1;

    for chunk in &stripped.chunks {
        let mut bars = Vec::new();

        for bar_text in split_bars(chunk) {
            let tokens = tokenize_bar(bar_text);
            if tokens.is_empty() {
                warnings.push(Warning::EmptyBar {
                    number: next_number,
                    text: bar_text.trim().to_string(),
                });
                next_number += 1;
                continue;
            }

            let slots = allocate(&tokens, meter)
                .into_iter()
                .map(|slot| ChordSlot {
                    chord: canonicalize(&slot.chord),
                    duration: slot.duration,
                })
                .collect();
            pack_bar(slots, meter, &mut next_number, &mut bars, &mut warnings);
        }

        if !bars.is_empty() {
            sections.push(Section {
                name: section_name(sections.len()),
                bars,
            });
        }
    }

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    tracing::debug!(
        sections = sections.len(),
        marked,
        bars = next_number - 1,
        "decoded progression"
    );

    Decoded::new(sections, warnings)
}

/// Lay slots out into one bar, opening continuation bars while the running
/// total would pass the bar length. A chord longer than a whole bar keeps
/// its bar to itself and is reported.
fn pack_bar(
    slots: Vec<ChordSlot>,
    meter: &TimeSignature,
    next_number: &mut usize,
    bars: &mut Vec<Bar>,
    warnings: &mut Vec<Warning>,
) {
    let bar_length = meter.bar_length();
    let mut chords: Vec<ChordSlot> = Vec::new();
    let mut filled = Beats::zero();

    for slot in slots {
        if !chords.is_empty() && filled + slot.duration > bar_length {
            let number = *next_number;
            bars.push(Bar {
                number,
                chords: std::mem::take(&mut chords),
            });
            *next_number += 1;
            warnings.push(Warning::BarOverflow {
                number,
                beats: meter.beats as u32,
                continued_in: *next_number,
            });
            filled = Beats::zero();
        }
        if slot.duration > bar_length {
            warnings.push(Warning::LongChord {
                number: *next_number,
                chord: slot.chord.clone(),
                duration: slot.duration,
                beats: meter.beats as u32,
            });
        }
        filled = filled + slot.duration;
        chords.push(slot);
    }

    if !chords.is_empty() {
        bars.push(Bar {
            number: *next_number,
            chords,
        });
        *next_number += 1;
    }
}

/// Sequential section names: A through Z, then AA, AB, ...
pub fn section_name(index: usize) -> String {
    let mut name = String::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        name.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    name
}
