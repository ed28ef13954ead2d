// SPDX-License-Identifier: MIT OR Apache-2.0
//! Static status-code tables for the protocols a `uerr` error can be viewed
//! through.
//!
//! Each protocol gets a transparent newtype over its numeric code
//! ([`GrpcCode`], [`HttpCode`], [`WsCode`]) with named constants and a
//! [`StatusCode::name`] lookup. Codes outside a protocol's valid range, or
//! inside it but without an assigned meaning, resolve to
//! [`UNKNOWN_STATUS_CODE`].
#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::fmt;
use std::ops::RangeInclusive;

mod grpc;
mod http;
mod ws;

pub use grpc::GrpcCode;
pub use http::HttpCode;
pub use ws::WsCode;

/// Label returned for codes that have no entry in their protocol's table.
pub const UNKNOWN_STATUS_CODE: &str = "Unknown Status Code";

// ---------------------------------------------------------------------------
// Protocol
// ---------------------------------------------------------------------------

/// Protocol family a status code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// gRPC status codes.
    Grpc,
    /// HTTP response status codes.
    Http,
    /// WebSocket close codes.
    Ws,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Grpc => "grpc",
            Self::Http => "http",
            Self::Ws => "ws",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// StatusCode
// ---------------------------------------------------------------------------

/// Common surface of the per-protocol code newtypes.
pub trait StatusCode: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Protocol this code type belongs to.
    const PROTOCOL: Protocol;

    /// Inclusive range of values the table covers.
    const RANGE: RangeInclusive<u16>;

    /// Wrap a raw numeric code.
    fn from_raw(code: u16) -> Self;

    /// The raw numeric code.
    fn raw(self) -> u16;

    /// Table entry for an in-range code, `None` for unassigned slots.
    fn lookup(self) -> Option<&'static str>;

    /// Display name of the code, or [`UNKNOWN_STATUS_CODE`].
    fn name(self) -> &'static str {
        if !Self::RANGE.contains(&self.raw()) {
            return UNKNOWN_STATUS_CODE;
        }
        self.lookup().unwrap_or(UNKNOWN_STATUS_CODE)
    }

    /// Whether the code has an entry in the table.
    fn is_known(self) -> bool {
        Self::RANGE.contains(&self.raw()) && self.lookup().is_some()
    }
}

/// Look up the display name of a raw code for `protocol`.
pub fn code_name(protocol: Protocol, code: u16) -> &'static str {
    match protocol {
        Protocol::Grpc => GrpcCode(code).name(),
        Protocol::Http => HttpCode(code).name(),
        Protocol::Ws => WsCode(code).name(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
