// SPDX-License-Identifier: MIT OR Apache-2.0
//! Protocol option bundles and the sub-constructors that produce them.
//!
//! A bundle holds at most one code. A raw code of `0` is treated as "not
//! configured", so `CodeOptions::new(GrpcCode(0))` and
//! `CodeOptions::default()` are the same value.

use serde::{Deserialize, Serialize};
use uerr_codes::{GrpcCode, HttpCode, StatusCode, WsCode};

/// Immutable option bundle holding one protocol code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeOptions<C> {
    code: Option<C>,
}

impl<C: StatusCode> CodeOptions<C> {
    /// Bundle for `code`; a zero code yields an empty bundle.
    pub fn new(code: C) -> Self {
        Self {
            code: (code.raw() != 0).then_some(code),
        }
    }

    /// The configured code, if any.
    pub fn code(&self) -> Option<C> {
        self.code
    }
}

impl<C> Default for CodeOptions<C> {
    fn default() -> Self {
        Self { code: None }
    }
}

/// gRPC option bundle.
pub type GrpcOptions = CodeOptions<GrpcCode>;
/// HTTP option bundle.
pub type HttpOptions = CodeOptions<HttpCode>;
/// WebSocket option bundle.
pub type WsOptions = CodeOptions<WsCode>;

/// Composite transport bundle: one HTTP and one WebSocket bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WebOptions {
    /// Request/response code.
    pub http: HttpOptions,
    /// Socket close code.
    pub ws: WsOptions,
}

/// Every bundle a universal error carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProtocolOptions {
    /// gRPC bundle.
    pub grpc: GrpcOptions,
    /// Transport bundles.
    pub web: WebOptions,
}

// ---------------------------------------------------------------------------
// Sub-constructors
// ---------------------------------------------------------------------------

/// Describes the gRPC code of a constructed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrpcConstructor {
    /// gRPC status code.
    pub code: GrpcCode,
}

impl GrpcConstructor {
    /// Freeze into a bundle.
    pub fn options(&self) -> GrpcOptions {
        CodeOptions::new(self.code)
    }
}

/// Describes the HTTP code of a constructed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConstructor {
    /// HTTP status code.
    pub code: HttpCode,
}

impl HttpConstructor {
    /// Freeze into a bundle.
    pub fn options(&self) -> HttpOptions {
        CodeOptions::new(self.code)
    }
}

/// Describes the WebSocket close code of a constructed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WsConstructor {
    /// WebSocket close code.
    pub code: WsCode,
}

impl WsConstructor {
    /// Freeze into a bundle.
    pub fn options(&self) -> WsOptions {
        CodeOptions::new(self.code)
    }
}

/// Describes the transport codes of a constructed error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConstructor {
    /// HTTP part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpConstructor>,
    /// WebSocket part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws: Option<WsConstructor>,
}

impl WebConstructor {
    /// Freeze into a bundle; missing parts become empty bundles.
    pub fn options(&self) -> WebOptions {
        WebOptions {
            http: self.http.map(|c| c.options()).unwrap_or_default(),
            ws: self.ws.map(|c| c.options()).unwrap_or_default(),
        }
    }
}
