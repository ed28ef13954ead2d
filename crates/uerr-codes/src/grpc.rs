// SPDX-License-Identifier: MIT OR Apache-2.0
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::{Protocol, StatusCode};

/// gRPC status code (`1..=16`; `OK` is not an error and has no entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrpcCode(pub u16);

impl GrpcCode {
    /// The operation was cancelled.
    pub const CANCELED: Self = Self(1);
    /// Unknown error.
    pub const UNKNOWN: Self = Self(2);
    /// Client specified an invalid argument.
    pub const INVALID_ARGUMENT: Self = Self(3);
    /// Deadline expired before the operation could complete.
    pub const DEADLINE_EXCEEDED: Self = Self(4);
    /// Requested entity was not found.
    pub const NOT_FOUND: Self = Self(5);
    /// Entity already exists.
    pub const ALREADY_EXISTS: Self = Self(6);
    /// Caller lacks permission.
    pub const PERMISSION_DENIED: Self = Self(7);
    /// Some resource has been exhausted.
    pub const RESOURCE_EXHAUSTED: Self = Self(8);
    /// System is not in a state required for the operation.
    pub const FAILED_PRECONDITION: Self = Self(9);
    /// Operation was aborted.
    pub const ABORTED: Self = Self(10);
    /// Operation was attempted past the valid range.
    pub const OUT_OF_RANGE: Self = Self(11);
    /// Operation is not implemented.
    pub const UNIMPLEMENTED: Self = Self(12);
    /// Internal server error.
    pub const INTERNAL: Self = Self(13);
    /// Service is currently unavailable.
    pub const UNAVAILABLE: Self = Self(14);
    /// Unrecoverable data loss or corruption.
    pub const DATA_LOSS: Self = Self(15);
    /// Request lacks valid authentication credentials.
    pub const UNAUTHENTICATED: Self = Self(16);
}

impl StatusCode for GrpcCode {
    const PROTOCOL: Protocol = Protocol::Grpc;
    const RANGE: RangeInclusive<u16> = 1..=16;

    fn from_raw(code: u16) -> Self {
        Self(code)
    }

    fn raw(self) -> u16 {
        self.0
    }

    fn lookup(self) -> Option<&'static str> {
        let name = match self.0 {
            1 => "Canceled",
            2 => "Unknown",
            3 => "InvalidArgument",
            4 => "DeadlineExceeded",
            5 => "NotFound",
            6 => "AlreadyExists",
            7 => "PermissionDenied",
            8 => "ResourceExhausted",
            9 => "FailedPrecondition",
            10 => "Aborted",
            11 => "OutOfRange",
            12 => "Unimplemented",
            13 => "Internal server error",
            14 => "Unavailable",
            15 => "DataLoss",
            16 => "Unauthenticated",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for GrpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for GrpcCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}
