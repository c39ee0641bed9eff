//! Output rendering
//!
//! Serializes a decoded [`Document`] for other tools. Field names are
//! camelCase, time signatures are `"N/D"` strings, and durations are numbers
//! (or `"n/d"` strings when fractional).

use serde::Serialize;

use crate::ast::{Decoded, Document};
use crate::error::{IrealError, Warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// A document plus its warnings, as written by the CLI.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub document: &'a Document,
    #[serde(skip_serializing_if = "no_warnings")]
    pub warnings: &'a [Warning],
}

impl<'a> From<&'a Decoded<Document>> for Report<'a> {
    fn from(decoded: &'a Decoded<Document>) -> Self {
        Self {
            document: &decoded.value,
            warnings: &decoded.warnings,
        }
    }
}

fn no_warnings(warnings: &&[Warning]) -> bool {
    warnings.is_empty()
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, IrealError> {
    serde_json::to_string_pretty(value).map_err(|e| IrealError::Serialize(e.to_string()))
}

pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, IrealError> {
    serde_yaml::to_string(value).map_err(|e| IrealError::Serialize(e.to_string()))
}

pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String, IrealError> {
    match format {
        OutputFormat::Json => to_json(value),
        OutputFormat::Yaml => to_yaml(value),
    }
}
