// SPDX-License-Identifier: MIT OR Apache-2.0
//! Text encoders for `uerr` error views.
//!
//! All encoders consume the same sorted mapping produced by
//! [`Projection::to_map`], so JSON, YAML and XML always agree on key set,
//! omission rules and key order. Encoding the same view twice yields
//! byte-identical output.
#![deny(unsafe_code)]
#![warn(missing_docs)]

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::trace;
use uerr_core::{ErrorView, Projection};

pub mod xml;

pub use xml::XmlOptions;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while encoding or decoding a projection.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// JSON encoding or decoding failed.
    #[error("JSON codec failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding failed.
    #[error("YAML codec failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The XML writer failed.
    #[error("XML encoding failed: {reason}")]
    Xml {
        /// Writer error detail.
        reason: String,
    },

    /// A map key cannot be used as an XML element name.
    #[error("invalid XML element name '{name}'")]
    InvalidElementName {
        /// Offending key.
        name: String,
    },

    /// A format name was not recognised.
    #[error("unknown format '{name}' (expected json, yaml or xml)")]
    UnknownFormat {
        /// Name that failed to parse.
        name: String,
    },
}

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// Supported text formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Compact JSON.
    Json,
    /// YAML.
    Yaml,
    /// XML fragment, one element per key.
    Xml,
}

impl Format {
    /// Lowercase format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "xml" => Ok(Self::Xml),
            _ => Err(FormatError::UnknownFormat { name: s.to_owned() }),
        }
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode `view` in `format`.
pub fn encode<V: ErrorView + ?Sized>(view: &V, format: Format) -> Result<String, FormatError> {
    let map = view.project().to_map()?;
    let out = encode_map(&map, format)?;
    trace!(%format, id = %view.id(), bytes = out.len(), "encoded error view");
    Ok(out)
}

/// Encode an already projected mapping in `format`.
pub fn encode_map(map: &Map<String, Value>, format: Format) -> Result<String, FormatError> {
    match format {
        Format::Json => Ok(serde_json::to_string(map)?),
        Format::Yaml => Ok(serde_yaml::to_string(map)?),
        Format::Xml => xml::encode_map(map, &XmlOptions::default()),
    }
}

/// Compact JSON.
pub fn to_json<V: ErrorView + ?Sized>(view: &V) -> Result<String, FormatError> {
    encode(view, Format::Json)
}

/// Indented JSON.
pub fn to_json_pretty<V: ErrorView + ?Sized>(view: &V) -> Result<String, FormatError> {
    let map = view.project().to_map()?;
    Ok(serde_json::to_string_pretty(&map)?)
}

/// YAML document.
pub fn to_yaml<V: ErrorView + ?Sized>(view: &V) -> Result<String, FormatError> {
    encode(view, Format::Yaml)
}

/// XML fragment without a root element.
pub fn to_xml<V: ErrorView + ?Sized>(view: &V) -> Result<String, FormatError> {
    encode(view, Format::Xml)
}

/// XML with custom options (root element, array item name).
pub fn to_xml_with<V: ErrorView + ?Sized>(
    view: &V,
    options: &XmlOptions,
) -> Result<String, FormatError> {
    let map = view.project().to_map()?;
    xml::encode_map(&map, options)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode a JSON projection.
pub fn from_json(input: &str) -> Result<Projection, FormatError> {
    Ok(serde_json::from_str(input)?)
}

/// Decode a YAML projection.
pub fn from_yaml(input: &str) -> Result<Projection, FormatError> {
    Ok(serde_yaml::from_str(input)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse_and_display() {
        for format in [Format::Json, Format::Yaml, Format::Xml] {
            assert_eq!(format.as_str().parse::<Format>().unwrap(), format);
            assert_eq!(format.to_string(), format.as_str());
        }
        assert_eq!("YML".parse::<Format>().unwrap(), Format::Yaml);
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = "toml".parse::<Format>().unwrap_err();
        assert!(matches!(err, FormatError::UnknownFormat { ref name } if name == "toml"));
        assert!(err.to_string().contains("toml"));
    }

    #[test]
    fn json_error_converts() {
        let err = from_json("{not json").unwrap_err();
        assert!(matches!(err, FormatError::Json(_)));
    }

    #[test]
    fn yaml_error_converts() {
        let err = from_yaml("status: [unterminated").unwrap_err();
        assert!(matches!(err, FormatError::Yaml(_)));
    }
}
