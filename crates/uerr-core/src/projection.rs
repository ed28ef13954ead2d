// SPDX-License-Identifier: MIT OR Apache-2.0
//! Canonical projection of a view: the one shape every encoder consumes.
//!
//! Struct fields are declared in lexicographic key order so that serde
//! already emits sorted keys; [`Projection::to_map`] additionally yields a
//! sorted [`serde_json::Map`] for encoders that walk the map themselves.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uerr_codes::StatusCode;

use crate::fields::Fields;
use crate::id::ErrorId;
use crate::record::{ErrorType, Record};
use crate::status::Status;

/// `code_message` used when a protocol view has no configured code.
pub const UNKNOWN_CODE_MESSAGE: &str = "Unknown";

/// Top-level canonical mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Projection {
    /// Protocol code; present only for protocol views with a code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Protocol code name; present only for protocol views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_message: Option<String>,
    /// Record details.
    pub error: ErrorSection,
    /// Display message.
    pub message: String,
    /// Severity.
    pub status: Status,
}

/// The nested `error` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorSection {
    /// Fields; omitted when empty.
    #[serde(default, skip_serializing_if = "Fields::is_empty")]
    pub fields: Fields,
    /// Identifier.
    pub id: ErrorId,
    /// Cause text.
    pub message: String,
    /// Shape tag.
    #[serde(rename = "type")]
    pub kind: ErrorType,
}

impl Projection {
    /// Projection of a record without any protocol code.
    pub fn from_record(record: &Record) -> Self {
        Self {
            code: None,
            code_message: None,
            error: ErrorSection {
                fields: record.fields().clone(),
                id: record.id().clone(),
                message: record.error(),
                kind: record.kind(),
            },
            message: record.message(&[]),
            status: record.status(),
        }
    }

    /// Add the protocol code; an unset code drops `code` and forces
    /// `code_message` to [`UNKNOWN_CODE_MESSAGE`].
    pub fn with_code<C: StatusCode>(mut self, code: Option<C>) -> Self {
        match code {
            Some(code) => {
                self.code = Some(code.raw());
                self.code_message = Some(code.name().to_owned());
            }
            None => {
                self.code = None;
                self.code_message = Some(UNKNOWN_CODE_MESSAGE.to_owned());
            }
        }
        self
    }

    /// Sorted key/value mapping of this projection.
    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "projection serialized to a non-object value: {other}"
            ))),
        }
    }
}
