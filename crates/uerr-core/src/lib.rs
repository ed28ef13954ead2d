// SPDX-License-Identifier: MIT OR Apache-2.0
//! Build one error, view it through several protocols.
//!
//! A [`Constructor`] describes an error (id, [`Status`], [`Message`],
//! [`Fields`], cause, protocol codes). [`Constructor::build`] freezes it into a
//! [`Builder`] that hands out immutable [`Record`]s wrapped in views:
//!
//! * [`BasicError`]: no protocol code.
//! * [`GrpcError`]: gRPC status code.
//! * [`WebError`]: composite transport view, converting to [`HttpError`] and
//!   [`WsError`].
//! * [`UniversalError`]: carries every bundle and converts to the others.
//!
//! Every view projects to the same canonical [`Projection`], which is what
//! the encoders in `uerr-format` consume.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod constructor;
mod fields;
mod id;
mod message;
mod options;
mod projection;
mod record;
mod status;
mod view;

pub use constructor::{Builder, Constructor};
pub use fields::{Field, Fields};
pub use id::ErrorId;
pub use message::{Binding, Message};
pub use options::{
    CodeOptions, GrpcConstructor, GrpcOptions, HttpConstructor, HttpOptions, ProtocolOptions,
    WebConstructor, WebOptions, WsConstructor, WsOptions,
};
pub use projection::{ErrorSection, Projection, UNKNOWN_CODE_MESSAGE};
pub use record::{Cause, ErrorType, Record};
pub use status::Status;
pub use view::{
    BasicError, ErrorView, GrpcError, HttpError, ProtocolView, UniversalError, WebError, WsError,
};
