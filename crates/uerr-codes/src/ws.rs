// SPDX-License-Identifier: MIT OR Apache-2.0
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::{Protocol, StatusCode};

/// WebSocket close code (RFC 6455 §7.4 and the IANA registry, `1000..=1015`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WsCode(pub u16);

impl WsCode {
    /// Normal closure.
    pub const NORMAL_CLOSURE: Self = Self(1000);
    /// Endpoint is going away.
    pub const GOING_AWAY: Self = Self(1001);
    /// Protocol error.
    pub const PROTOCOL_ERROR: Self = Self(1002);
    /// Received a data type it cannot accept.
    pub const UNSUPPORTED_DATA: Self = Self(1003);
    /// No status code was present.
    pub const NO_STATUS_RECEIVED: Self = Self(1005);
    /// Connection closed without a close frame.
    pub const ABNORMAL_CLOSURE: Self = Self(1006);
    /// Message payload was inconsistent with its type.
    pub const INVALID_PAYLOAD: Self = Self(1007);
    /// Message violated endpoint policy.
    pub const POLICY_VIOLATION: Self = Self(1008);
    /// Message too big to process.
    pub const MESSAGE_TOO_BIG: Self = Self(1009);
    /// Client expected an extension the server did not negotiate.
    pub const MANDATORY_EXTENSION: Self = Self(1010);
    /// Server hit an unexpected condition.
    pub const INTERNAL_ERROR: Self = Self(1011);
    /// Service is restarting.
    pub const SERVICE_RESTART: Self = Self(1012);
    /// Temporary condition, try again later.
    pub const TRY_AGAIN_LATER: Self = Self(1013);
    /// Gateway received an invalid upstream response.
    pub const BAD_GATEWAY: Self = Self(1014);
    /// TLS handshake failed.
    pub const TLS_HANDSHAKE: Self = Self(1015);
}

impl StatusCode for WsCode {
    const PROTOCOL: Protocol = Protocol::Ws;
    const RANGE: RangeInclusive<u16> = 1000..=1015;

    fn from_raw(code: u16) -> Self {
        Self(code)
    }

    fn raw(self) -> u16 {
        self.0
    }

    fn lookup(self) -> Option<&'static str> {
        // 1004 is reserved.
        let name = match self.0 {
            1000 => "Successful operation / regular socket shutdown. ",
            1001 => "Client is leaving",
            1002 => "Endpoint received a malformed frame",
            1003 => "Endpoint received an unsupported frame",
            1005 => "Expected close status, received none",
            1006 => "No close code frame has been receieved",
            1007 => "Endpoint received inconsistent message",
            1008 => "Policy violation",
            1009 => "Endpoint won't process large frame",
            1010 => "Client wanted an extension which server did not negotiate",
            1011 => "Internal server error while operating",
            1012 => "Server/service is restarting",
            1013 => "Temporary server condition forced blocking client's request",
            1014 => "Server acting as gateway received an invalid response",
            1015 => "Transport Layer Security handshake failure",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for WsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for WsCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNKNOWN_STATUS_CODE;
    use proptest::prelude::*;

    #[test]
    fn reserved_1004_has_no_name() {
        assert!(!WsCode(1004).is_known());
    }

    #[test]
    fn internal_error_name() {
        assert_eq!(WsCode::INTERNAL_ERROR.name(), "Internal server error while operating");
        assert_eq!(
            WsCode::NORMAL_CLOSURE.name(),
            "Successful operation / regular socket shutdown. "
        );
    }

    proptest! {
        #[test]
        fn codes_below_range_are_unknown(raw in 0u16..1000) {
            prop_assert_eq!(WsCode(raw).name(), UNKNOWN_STATUS_CODE);
        }

        #[test]
        fn codes_above_range_are_unknown(raw in 1016u16..=u16::MAX) {
            prop_assert_eq!(WsCode(raw).name(), UNKNOWN_STATUS_CODE);
        }
    }
}
