// SPDX-License-Identifier: MIT OR Apache-2.0
//! Describe an error once, instantiate it many times.
//!
//! A [`Constructor`] is plain data, suitable for a catalog of canned errors.
//! [`Constructor::build`] freezes it into a [`Builder`]; each `Builder` call
//! produces a fresh record and bundle set, so causes attached per call-site
//! never leak into the catalog entry.

use std::error::Error as StdError;
use std::sync::Arc;
use tracing::debug;
use uerr_codes::{GrpcCode, HttpCode, WsCode};

use crate::fields::{Field, Fields};
use crate::id::ErrorId;
use crate::message::Message;
use crate::options::{
    GrpcConstructor, HttpConstructor, ProtocolOptions, WebConstructor, WsConstructor,
};
use crate::record::{Cause, Record};
use crate::status::Status;
use crate::view::{BasicError, GrpcError, HttpError, UniversalError, WebError, WsError};

/// Raw description of an error.
///
/// # Example
///
/// ```
/// use uerr_core::{Constructor, ErrorView, Message, ProtocolView, Status};
/// use uerr_codes::GrpcCode;
///
/// let not_found = Constructor::new(404_001i64, Status::Failed)
///     .with_message(Message::new("user {{id}} not found"))
///     .with_grpc(GrpcCode::NOT_FOUND)
///     .build();
///
/// let err = not_found.grpc();
/// assert_eq!(err.code(), Some(GrpcCode::NOT_FOUND));
/// assert_eq!(err.message(&[uerr_core::Binding::new("id", 7)]), "user 7 not found");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Constructor {
    /// Identifier.
    pub id: ErrorId,
    /// Severity.
    pub status: Status,
    /// Underlying error, usually attached per call-site via
    /// [`Constructor::set_error`].
    pub cause: Option<Cause>,
    /// Message; `None` falls back to the cause text.
    pub message: Option<Message>,
    /// Fields.
    pub fields: Fields,
    /// gRPC code description.
    pub grpc: Option<GrpcConstructor>,
    /// Transport code descriptions.
    pub web: Option<WebConstructor>,
}

impl Constructor {
    /// Start describing an error.
    pub fn new(id: impl Into<ErrorId>, status: Status) -> Self {
        Self {
            id: id.into(),
            status,
            ..Self::default()
        }
    }

    /// Set the message.
    pub fn with_message(mut self, message: impl Into<Message>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Append a field.
    pub fn with_field(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.fields.push(Field::new(key, message));
        self
    }

    /// Attach an underlying cause.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Set the gRPC code.
    pub fn with_grpc(mut self, code: GrpcCode) -> Self {
        self.grpc = Some(GrpcConstructor { code });
        self
    }

    /// Set the HTTP code.
    pub fn with_http(mut self, code: HttpCode) -> Self {
        let web = self.web.get_or_insert_with(WebConstructor::default);
        web.http = Some(HttpConstructor { code });
        self
    }

    /// Set the WebSocket close code.
    pub fn with_ws(mut self, code: WsCode) -> Self {
        let web = self.web.get_or_insert_with(WebConstructor::default);
        web.ws = Some(WsConstructor { code });
        self
    }

    /// Copy of this description with the cause replaced.
    pub fn set_error<E>(&self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.clone().with_cause(cause)
    }

    /// Copy of this description with a shared cause.
    pub fn set_cause(&self, cause: Cause) -> Self {
        Self {
            cause: Some(cause),
            ..self.clone()
        }
    }

    /// Copy of this description with the fields replaced.
    pub fn set_fields(&self, fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            ..self.clone()
        }
    }

    /// Freeze into a reusable [`Builder`].
    ///
    /// An empty message is treated as unset, so the cause text shows through.
    pub fn build(&self) -> Builder {
        let message = self.message.clone().filter(|m| !m.is_empty());
        let record = Record::new(self.id.clone(), self.status).with_parts(
            message,
            self.fields.clone(),
            self.cause.clone(),
        );
        let options = ProtocolOptions {
            grpc: self.grpc.map(|c| c.options()).unwrap_or_default(),
            web: self.web.map(|c| c.options()).unwrap_or_default(),
        };

        debug!(
            id = %record.id(),
            status = %record.status(),
            kind = %record.kind(),
            fields = record.fields().len(),
            has_cause = record.cause().is_some(),
            "built error constructor"
        );

        Builder { record, options }
    }
}

/// Frozen [`Constructor`]; every method yields an independent instance.
#[derive(Debug, Clone)]
pub struct Builder {
    record: Record,
    options: ProtocolOptions,
}

impl Builder {
    /// The record template instances are copied from.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Bundles attached to every instance.
    pub fn options(&self) -> &ProtocolOptions {
        &self.options
    }

    fn instance(&self) -> Arc<Record> {
        Arc::new(self.record.clone())
    }

    /// Fresh universal error.
    pub fn universal(&self) -> UniversalError {
        UniversalError::new(self.instance(), self.options)
    }

    /// Fresh generic view.
    pub fn basic(&self) -> BasicError {
        BasicError::new(self.instance())
    }

    /// Fresh RPC view.
    pub fn grpc(&self) -> GrpcError {
        GrpcError::new(self.instance(), self.options.grpc)
    }

    /// Fresh composite transport view.
    pub fn web(&self) -> WebError {
        WebError::new(self.instance(), self.options.web)
    }

    /// Fresh request/response view.
    pub fn http(&self) -> HttpError {
        HttpError::new(self.instance(), self.options.web.http)
    }

    /// Fresh socket view.
    pub fn ws(&self) -> WsError {
        WsError::new(self.instance(), self.options.web.ws)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
