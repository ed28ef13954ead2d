// SPDX-License-Identifier: MIT OR Apache-2.0
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque error identifier.
///
/// Deployments pick either numeric ids (`1000000000000000`, signed) or string
/// ids (`"T-000001"`); both serialize as the bare value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ErrorId {
    /// Numeric identifier.
    Numeric(i64),
    /// Textual identifier.
    Text(String),
}

impl Default for ErrorId {
    fn default() -> Self {
        Self::Numeric(0)
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ErrorId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for ErrorId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for ErrorId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ErrorId::from(1_000_000_000_000_000).to_string(), "1000000000000000");
        assert_eq!(ErrorId::from("T-000001").to_string(), "T-000001");
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&ErrorId::from(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&ErrorId::from("x")).unwrap(), r#""x""#);
        let back: ErrorId = serde_json::from_str("42").unwrap();
        assert_eq!(back, ErrorId::Numeric(42));
        let back: ErrorId = serde_json::from_str(r#""T-1""#).unwrap();
        assert_eq!(back, ErrorId::Text("T-1".into()));
    }

    #[test]
    fn negative_ids_round_trip() {
        let id = ErrorId::from(-17);
        assert_eq!(id.to_string(), "-17");
        assert_eq!(serde_json::to_string(&id).unwrap(), "-17");
        let back: ErrorId = serde_json::from_str("-17").unwrap();
        assert_eq!(back, ErrorId::Numeric(-17));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(ErrorId::default(), ErrorId::Numeric(0));
    }
}
