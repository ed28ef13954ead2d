// SPDX-License-Identifier: MIT OR Apache-2.0
//! TOML-defined catalogs of canned errors.
//!
//! A catalog file names each error once:
//!
//! ```toml
//! [errors.user_not_found]
//! id = 404001
//! status = "failed"
//! message = "user {{id}} not found"
//! grpc = 5
//! http = 404
//! ```
//!
//! [`Catalog`] turns every entry into a [`Constructor`] so call-sites only
//! attach their cause: `catalog.builder("user_not_found")?.grpc()`.
#![deny(unsafe_code)]
#![warn(missing_docs)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};
use uerr_codes::{GrpcCode, HttpCode, Protocol, StatusCode, WsCode};
use uerr_core::{Builder, Constructor, ErrorId, Field, Status};

/// Environment variable consulted by [`load_catalog`] when no path is given.
pub const CATALOG_PATH_ENV: &str = "UERR_CATALOG";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or querying a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The requested catalog file was not found.
    #[error("catalog file not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: String,
    },

    /// The file could not be parsed as a catalog.
    #[error("failed to parse catalog: {reason}")]
    ParseError {
        /// Human-readable parse error detail.
        reason: String,
    },

    /// Semantic validation failed (one or more problems).
    #[error("catalog validation failed: {reasons:?}")]
    ValidationError {
        /// Individual validation failure messages.
        reasons: Vec<String>,
    },

    /// No entry has the requested name.
    #[error("no catalog entry named '{name}'")]
    UnknownEntry {
        /// Requested name.
        name: String,
    },
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

/// Advisory issues that do not prevent the catalog from loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    /// A code has no entry in its protocol table.
    UnknownCode {
        /// Entry name.
        entry: String,
        /// Protocol of the code.
        protocol: Protocol,
        /// Raw code.
        code: u16,
    },
    /// A code of zero was given, which means "no code".
    ZeroCode {
        /// Entry name.
        entry: String,
        /// Protocol of the code.
        protocol: Protocol,
    },
    /// Several entries share one id.
    DuplicateId {
        /// Shared id.
        id: ErrorId,
        /// Entry names using it.
        entries: Vec<String>,
    },
    /// An entry has no message and will show its cause text instead.
    MissingMessage {
        /// Entry name.
        entry: String,
    },
}

impl std::fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogWarning::UnknownCode {
                entry,
                protocol,
                code,
            } => write!(f, "entry '{entry}': {protocol} code {code} has no known name"),
            CatalogWarning::ZeroCode { entry, protocol } => {
                write!(f, "entry '{entry}': {protocol} code 0 is treated as unset")
            }
            CatalogWarning::DuplicateId { id, entries } => {
                write!(f, "id {id} is shared by {}", entries.join(", "))
            }
            CatalogWarning::MissingMessage { entry } => {
                write!(f, "entry '{entry}' has no message; the cause text will be shown")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Entries keyed by name.
    #[serde(default)]
    pub errors: BTreeMap<String, ErrorEntry>,
}

/// One canned error.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorEntry {
    /// Identifier (integer or string).
    pub id: ErrorId,

    /// Severity; defaults to `"unknown"`.
    #[serde(default)]
    pub status: Status,

    /// Message template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Fields attached to every instance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    /// gRPC status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grpc: Option<u16>,

    /// HTTP status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<u16>,

    /// WebSocket close code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws: Option<u16>,
}

impl ErrorEntry {
    /// Constructor described by this entry.
    pub fn constructor(&self) -> Constructor {
        let mut c = Constructor::new(self.id.clone(), self.status)
            .set_fields(self.fields.iter().cloned());
        if let Some(message) = &self.message {
            c = c.with_message(message.as_str());
        }
        if let Some(code) = self.grpc {
            c = c.with_grpc(GrpcCode(code));
        }
        if let Some(code) = self.http {
            c = c.with_http(HttpCode(code));
        }
        if let Some(code) = self.ws {
            c = c.with_ws(WsCode(code));
        }
        c
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a catalog from an optional TOML file path.
///
/// * If `path` is `Some`, reads and parses the file.
/// * If `path` is `None`, reads the file named by [`CATALOG_PATH_ENV`] when
///   set, otherwise returns an empty catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let config = match path {
        Some(p) => read_file(p)?,
        None => match std::env::var(CATALOG_PATH_ENV) {
            Ok(p) => read_file(Path::new(&p))?,
            Err(_) => CatalogConfig::default(),
        },
    };
    Catalog::from_config(config)
}

fn read_file(path: &Path) -> Result<CatalogConfig, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|_| CatalogError::FileNotFound {
        path: path.display().to_string(),
    })?;
    parse_toml(&content)
}

/// Parse a TOML string into a [`CatalogConfig`].
pub fn parse_toml(content: &str) -> Result<CatalogConfig, CatalogError> {
    toml::from_str::<CatalogConfig>(content).map_err(|e| CatalogError::ParseError {
        reason: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a parsed catalog, returning advisory warnings.
///
/// Empty entry names, empty string ids and fields with empty keys are hard
/// errors; unknown codes, zero codes, shared ids and missing messages come
/// back as warnings.
pub fn validate_catalog(config: &CatalogConfig) -> Result<Vec<CatalogWarning>, CatalogError> {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<CatalogWarning> = Vec::new();
    let mut ids: BTreeMap<&ErrorId, Vec<String>> = BTreeMap::new();

    for (name, entry) in &config.errors {
        if name.trim().is_empty() {
            errors.push("entry name must not be empty".into());
        }
        if matches!(&entry.id, ErrorId::Text(s) if s.trim().is_empty()) {
            errors.push(format!("entry '{name}': id must not be empty"));
        }
        for field in &entry.fields {
            if field.key.is_empty() {
                errors.push(format!("entry '{name}': field key must not be empty"));
            }
        }

        check_code::<GrpcCode>(name, entry.grpc, &mut warnings);
        check_code::<HttpCode>(name, entry.http, &mut warnings);
        check_code::<WsCode>(name, entry.ws, &mut warnings);

        if entry.message.as_deref().is_none_or(str::is_empty) {
            warnings.push(CatalogWarning::MissingMessage {
                entry: name.clone(),
            });
        }

        ids.entry(&entry.id).or_default().push(name.clone());
    }

    for (id, entries) in ids {
        if entries.len() > 1 {
            warnings.push(CatalogWarning::DuplicateId {
                id: id.clone(),
                entries,
            });
        }
    }

    if errors.is_empty() {
        Ok(warnings)
    } else {
        Err(CatalogError::ValidationError { reasons: errors })
    }
}

fn check_code<C: StatusCode>(entry: &str, code: Option<u16>, warnings: &mut Vec<CatalogWarning>) {
    match code {
        Some(0) => warnings.push(CatalogWarning::ZeroCode {
            entry: entry.to_owned(),
            protocol: C::PROTOCOL,
        }),
        Some(raw) if !C::from_raw(raw).is_known() => warnings.push(CatalogWarning::UnknownCode {
            entry: entry.to_owned(),
            protocol: C::PROTOCOL,
            code: raw,
        }),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Merging
// ---------------------------------------------------------------------------

/// Merge two catalogs. On name collisions the overlay entry wins.
pub fn merge_catalogs(base: CatalogConfig, overlay: CatalogConfig) -> CatalogConfig {
    let mut errors = base.errors;
    errors.extend(overlay.errors);
    CatalogConfig { errors }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Validated catalog of named constructors.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, Constructor>,
}

impl Catalog {
    /// Validate `config` and build a constructor per entry.
    ///
    /// Advisory warnings are logged and otherwise ignored; use
    /// [`validate_catalog`] to inspect them.
    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        for warning in validate_catalog(&config)? {
            warn!(%warning, "error catalog warning");
        }
        let entries: BTreeMap<String, Constructor> = config
            .errors
            .iter()
            .map(|(name, entry)| (name.clone(), entry.constructor()))
            .collect();
        debug!(entries = entries.len(), "loaded error catalog");
        Ok(Self { entries })
    }

    /// Constructor registered under `name`.
    pub fn constructor(&self, name: &str) -> Result<&Constructor, CatalogError> {
        self.entries
            .get(name)
            .ok_or_else(|| CatalogError::UnknownEntry {
                name: name.to_owned(),
            })
    }

    /// Frozen builder for `name`.
    pub fn builder(&self, name: &str) -> Result<Builder, CatalogError> {
        self.constructor(name).map(Constructor::build)
    }

    /// Entry names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
