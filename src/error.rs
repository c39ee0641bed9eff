//! # Error and Warning Types
//!
//! Decoding a lead sheet never fails: anything odd in the progression text is
//! reported as a [`Warning`] next to the decoded structure. [`IrealError`] is
//! reserved for the layers around the decoder (configuration, I/O, output).
//!
//! ## Warning Types
//! - `UnterminatedSpan` - a `{` or `[` with no closing character
//! - `EmptyBar` - a bar with no chord in it, omitted from the output
//! - `BarOverflow` - explicit durations spilled past the end of a bar
//! - `LongChord` - one chord alone lasts longer than its bar
//!
//! ## Usage
//! ```rust
//! use ireal::{decode_progression, TimeSignature, Warning};
//!
//! let decoded = decode_progression("{intro C|", &TimeSignature::default());
//! for warning in &decoded.warnings {
//!     if let Warning::UnterminatedSpan { offset, .. } = warning {
//!         eprintln!("unclosed annotation at byte {}", offset);
//!     }
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::ast::Beats;

#[derive(Error, Debug)]
pub enum IrealError {
    /// Invalid configuration.
    ///
    /// Occurs when a styles file is not valid YAML or names a time signature
    /// that isn't in `N/D` form.
    ///
    /// # Example
    /// ```
    /// # use ireal::IrealError;
    /// let err = IrealError::Config("time signature must be in format N/D".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: time signature must be in format N/D");
    /// ```
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Reading the input or writing the output failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The decoded structure could not be serialized.
    #[error("Could not serialize output: {0}")]
    Serialize(String),
}

/// A recoverable anomaly found while decoding a progression.
///
/// Offsets are byte offsets into the text handed to the pass that found the
/// problem; bar numbers are the 1-based ordinals used in the output.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Warning {
    #[error("Unterminated '{open}' at offset {offset}; kept the text after it")]
    UnterminatedSpan { open: char, offset: usize },

    #[error("Bar {number} has no chord ('{text}'); omitted")]
    EmptyBar { number: usize, text: String },

    #[error("Bar {number} overflows its {beats} beats; continued in bar {continued_in}")]
    #[serde(rename_all = "camelCase")]
    BarOverflow {
        number: usize,
        beats: u32,
        continued_in: usize,
    },

    #[error("Chord '{chord}' in bar {number} lasts {duration} beats, longer than the bar's {beats}")]
    LongChord {
        number: usize,
        chord: String,
        duration: Beats,
        beats: u32,
    },
}
