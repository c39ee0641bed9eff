//! # Style Configuration
//!
//! iReal charts name a style ("Jazz Waltz", "Bossa Nova") rather than a
//! meter. This module maps style names to time signatures.
//!
//! A built-in table covers the common styles and anything unknown falls back
//! to the default meter (4/4). Extra styles can be supplied as YAML:
//!
//! ```yaml
//! default-time-signature: 4/4
//! styles:
//!   Afro 12/8: 12/8
//!   Jazz Waltz: 3/4
//! ```
//!
//! Entries from YAML are layered over the built-ins.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::ast::TimeSignature;
use crate::error::IrealError;

const BUILTIN_STYLES: [(&str, u8, u8); 9] = [
    ("Waltz", 3, 4),
    ("Jazz Waltz", 3, 4),
    ("Bossa Nova", 4, 4),
    ("Samba", 4, 4),
    ("Swing", 4, 4),
    ("Latin", 4, 4),
    ("Ballad", 4, 4),
    ("Medium Swing", 4, 4),
    ("Choro", 2, 4),
];

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawConfig {
    pub default_time_signature: Option<String>,
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
}

/// Style lookup used while decoding songs
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_time_signature: TimeSignature,
    styles: BTreeMap<String, TimeSignature>,
}

impl Default for Config {
    fn default() -> Self {
        let styles = BUILTIN_STYLES
            .iter()
            .map(|&(name, beats, beat_type)| (name.to_string(), TimeSignature::new(beats, beat_type)))
            .collect();
        Self {
            default_time_signature: TimeSignature::default(),
            styles,
        }
    }
}

impl Config {
    /// Load a YAML styles file, layered over the built-in table.
    pub fn from_yaml(content: &str) -> Result<Self, IrealError> {
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| IrealError::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, IrealError> {
        let mut config = Self::default();

        if let Some(ts) = &raw.default_time_signature {
            config.default_time_signature = parse_time_signature(ts)?;
        }
        for (style, ts) in &raw.styles {
            config.styles.insert(style.clone(), parse_time_signature(ts)?);
        }

        Ok(config)
    }

    /// Add or replace one style. A zero part of the meter is raised to 1.
    pub fn with_style(mut self, style: &str, time_signature: TimeSignature) -> Self {
        let TimeSignature { beats, beat_type } = time_signature;
        self.styles
            .insert(style.to_string(), TimeSignature::new(beats, beat_type));
        self
    }

    /// The meter for a style name, or the default for unknown styles.
    pub fn time_signature_for(&self, style: &str) -> TimeSignature {
        self.styles
            .get(style.trim())
            .copied()
            .unwrap_or(self.default_time_signature)
    }
}

fn parse_time_signature(s: &str) -> Result<TimeSignature, IrealError> {
    TimeSignature::from_str(s)
        .ok_or_else(|| IrealError::Config(format!("Invalid time signature: {}", s)))
}
