//! # Lead Sheet Types
//!
//! The decoded form of an iReal-style lead sheet.
//!
//! ## Type Hierarchy
//! ```text
//! Document (enum)
//!   ├── Song
//!   │     ├── title, composer, style, key
//!   │     ├── time_signature: TimeSignature
//!   │     ├── tempo, repeats (0 = absent)
//!   │     └── Vec<Section>
//!   │           ├── name: "A", "B", ...
//!   │           └── Vec<Bar>
//!   │                 ├── number (1-based over the whole progression)
//!   │                 └── Vec<ChordSlot>
//!   │                       ├── chord: canonical symbol ("Dbmaj7")
//!   │                       └── duration: Beats
//!   └── Playlist
//!         └── Vec<Song>
//! ```
//!
//! Every level owns the level below it. The tree is built once by the
//! decoder and only read afterwards.

use std::fmt;

use num_rational::Rational32;
use serde::{Serialize, Serializer};

use crate::error::Warning;

/// Time signature (e.g., 4/4, 3/4, 6/8)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSignature {
    pub beats: u8,
    pub beat_type: u8,
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self {
            beats: 4,
            beat_type: 4,
        }
    }
}

impl TimeSignature {
    /// Zero in either part is raised to 1, so every bar and beat has length.
    pub fn new(beats: u8, beat_type: u8) -> Self {
        Self {
            beats: beats.max(1),
            beat_type: beat_type.max(1),
        }
    }

    /// Parse an `N/D` string like "3/4". Both parts must be non-zero.
    pub fn from_str(s: &str) -> Option<Self> {
        let (beats, beat_type) = s.trim().split_once('/')?;
        let beats: u8 = beats.trim().parse().ok()?;
        let beat_type: u8 = beat_type.trim().parse().ok()?;
        if beats == 0 || beat_type == 0 {
            return None;
        }
        Some(Self { beats, beat_type })
    }

    /// The length of a full bar, in beats.
    pub fn bar_length(&self) -> Beats {
        Beats::whole(self.beats as i32)
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.beats, self.beat_type)
    }
}

impl Serialize for TimeSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A chord duration in beats of the meter's beat unit.
///
/// Stored as an exact fraction so that splits like five chords over four
/// beats stay exact. Serialized as a number when whole, `"n/d"` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Beats(pub Rational32);

impl Beats {
    pub fn whole(beats: i32) -> Self {
        Self(Rational32::from_integer(beats))
    }

    pub fn new(numer: i32, denom: i32) -> Self {
        Self(Rational32::new(numer, denom))
    }

    pub fn zero() -> Self {
        Self::whole(0)
    }

    pub fn is_whole(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Rational32::from_integer(0)
    }
}

impl std::ops::Add for Beats {
    type Output = Beats;

    fn add(self, rhs: Beats) -> Beats {
        Beats(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Beats {
    type Output = Beats;

    fn sub(self, rhs: Beats) -> Beats {
        Beats(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Beats {
    fn sum<I: Iterator<Item = Beats>>(iter: I) -> Beats {
        iter.fold(Beats::zero(), |acc, b| acc + b)
    }
}

impl fmt::Display for Beats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.0.to_integer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

impl Serialize for Beats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i32(self.0.to_integer())
        } else {
            serializer.collect_str(self)
        }
    }
}

/// One chord symbol and how long it sounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordSlot {
    pub chord: String,
    pub duration: Beats,
}

/// One measure of the progression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub number: usize,
    pub chords: Vec<ChordSlot>,
}

impl Bar {
    pub fn duration(&self) -> Beats {
        self.chords.iter().map(|slot| slot.duration).sum()
    }
}

/// A lettered run of bars
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    pub bars: Vec<Bar>,
}

/// A fully decoded song
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub composer: String,
    pub style: String,
    pub key: String,
    pub time_signature: TimeSignature,
    pub tempo: u32,
    pub repeats: u32,
    pub sections: Vec<Section>,
}

impl Song {
    /// All bars of the song in order, across sections.
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.sections.iter().flat_map(|section| section.bars.iter())
    }
}

/// Several songs delivered in one payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Playlist {
    pub songs: Vec<Song>,
}

/// Whatever a payload turned out to contain
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Document {
    Song(Song),
    Playlist(Playlist),
}

/// A decoded value plus the recoverable problems found on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Decoded<T> {
    pub fn new(value: T, warnings: Vec<Warning>) -> Self {
        Self { value, warnings }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}
