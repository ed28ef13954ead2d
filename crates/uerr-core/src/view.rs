// SPDX-License-Identifier: MIT OR Apache-2.0
//! Read-only façades over a shared [`Record`].
//!
//! Each view pairs an `Arc<Record>` with the option bundle of its protocol.
//! Accessors forward to the record through [`ErrorView::record`]; protocol
//! views add [`ProtocolView::code`] and [`ProtocolView::code_name`].
//! Conversions between views clone the `Arc`, never the record.

use serde::{Serialize, Serializer};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use uerr_codes::{GrpcCode, HttpCode, StatusCode, UNKNOWN_STATUS_CODE, WsCode};

use crate::fields::Fields;
use crate::id::ErrorId;
use crate::message::{Binding, Message};
use crate::options::{GrpcOptions, HttpOptions, ProtocolOptions, WebOptions, WsOptions};
use crate::projection::Projection;
use crate::record::{Cause, ErrorType, Record};
use crate::status::Status;

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Accessors shared by every view.
pub trait ErrorView {
    /// The shared record.
    fn record(&self) -> &Arc<Record>;

    /// Same view kind and bundle over another record.
    fn with_record(&self, record: Arc<Record>) -> Self
    where
        Self: Sized;

    /// Identifier.
    fn id(&self) -> &ErrorId {
        self.record().id()
    }

    /// Severity.
    fn status(&self) -> Status {
        self.record().status()
    }

    /// Shape tag.
    fn kind(&self) -> ErrorType {
        self.record().kind()
    }

    /// Display message rendered with `bindings`.
    fn message(&self, bindings: &[Binding]) -> String {
        self.record().message(bindings)
    }

    /// Cause text, or `""`.
    fn error(&self) -> String {
        self.record().error()
    }

    /// Attached fields.
    fn fields(&self) -> &Fields {
        self.record().fields()
    }

    /// Whether `candidate` is the cause or is in its source chain.
    fn is(&self, candidate: &(dyn StdError + 'static)) -> bool {
        self.record().is(candidate)
    }

    /// Canonical projection.
    fn project(&self) -> Projection {
        Projection::from_record(self.record())
    }

    /// Copy of this view with the cause replaced.
    fn set_error<E>(&self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
        Self: Sized,
    {
        self.with_record(Arc::new(self.record().set_error(cause)))
    }

    /// Copy of this view with a shared cause.
    fn set_cause(&self, cause: Cause) -> Self
    where
        Self: Sized,
    {
        self.with_record(Arc::new(self.record().set_cause(cause)))
    }

    /// Copy of this view with the fields replaced.
    fn set_fields(&self, fields: Fields) -> Self
    where
        Self: Sized,
    {
        self.with_record(Arc::new(self.record().set_fields(fields)))
    }

    /// Copy of this view with an explicit message.
    fn set_message(&self, message: Message) -> Self
    where
        Self: Sized,
    {
        self.with_record(Arc::new(self.record().set_message(message)))
    }
}

/// A view that carries one protocol code.
pub trait ProtocolView: ErrorView {
    /// Code table of the protocol.
    type Code: StatusCode;

    /// Configured code, `None` when unset.
    fn code(&self) -> Option<Self::Code>;

    /// Table name of the code; [`UNKNOWN_STATUS_CODE`] when unset or out of
    /// range.
    fn code_name(&self) -> &'static str {
        self.code().map_or(UNKNOWN_STATUS_CODE, |c| c.name())
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Generic view: no protocol code.
#[derive(Debug, Clone)]
pub struct BasicError {
    record: Arc<Record>,
}

impl BasicError {
    /// Wrap a shared record.
    pub fn new(record: Arc<Record>) -> Self {
        Self { record }
    }
}

impl ErrorView for BasicError {
    fn record(&self) -> &Arc<Record> {
        &self.record
    }

    fn with_record(&self, record: Arc<Record>) -> Self {
        Self { record }
    }
}

/// RPC view carrying a gRPC status code.
#[derive(Debug, Clone)]
pub struct GrpcError {
    record: Arc<Record>,
    options: GrpcOptions,
}

impl GrpcError {
    /// Wrap a shared record with a gRPC bundle.
    pub fn new(record: Arc<Record>, options: GrpcOptions) -> Self {
        Self { record, options }
    }
}

impl ErrorView for GrpcError {
    fn record(&self) -> &Arc<Record> {
        &self.record
    }

    fn with_record(&self, record: Arc<Record>) -> Self {
        Self {
            record,
            options: self.options,
        }
    }

    fn project(&self) -> Projection {
        Projection::from_record(&self.record).with_code(self.code())
    }
}

impl ProtocolView for GrpcError {
    type Code = GrpcCode;

    fn code(&self) -> Option<GrpcCode> {
        self.options.code()
    }
}

/// Composite transport view; converts to [`HttpError`] and [`WsError`].
#[derive(Debug, Clone)]
pub struct WebError {
    record: Arc<Record>,
    options: WebOptions,
}

impl WebError {
    /// Wrap a shared record with the transport bundles.
    pub fn new(record: Arc<Record>, options: WebOptions) -> Self {
        Self { record, options }
    }

    /// Request/response view.
    pub fn to_http(&self) -> HttpError {
        HttpError::new(Arc::clone(&self.record), self.options.http)
    }

    /// Socket view.
    pub fn to_ws(&self) -> WsError {
        WsError::new(Arc::clone(&self.record), self.options.ws)
    }
}

impl ErrorView for WebError {
    fn record(&self) -> &Arc<Record> {
        &self.record
    }

    fn with_record(&self, record: Arc<Record>) -> Self {
        Self {
            record,
            options: self.options,
        }
    }
}

/// Request/response view carrying an HTTP status code.
#[derive(Debug, Clone)]
pub struct HttpError {
    record: Arc<Record>,
    options: HttpOptions,
}

impl HttpError {
    /// Wrap a shared record with an HTTP bundle.
    pub fn new(record: Arc<Record>, options: HttpOptions) -> Self {
        Self { record, options }
    }
}

impl ErrorView for HttpError {
    fn record(&self) -> &Arc<Record> {
        &self.record
    }

    fn with_record(&self, record: Arc<Record>) -> Self {
        Self {
            record,
            options: self.options,
        }
    }

    fn project(&self) -> Projection {
        Projection::from_record(&self.record).with_code(self.code())
    }
}

impl ProtocolView for HttpError {
    type Code = HttpCode;

    fn code(&self) -> Option<HttpCode> {
        self.options.code()
    }
}

/// Socket view carrying a WebSocket close code.
#[derive(Debug, Clone)]
pub struct WsError {
    record: Arc<Record>,
    options: WsOptions,
}

impl WsError {
    /// Wrap a shared record with a WebSocket bundle.
    pub fn new(record: Arc<Record>, options: WsOptions) -> Self {
        Self { record, options }
    }
}

impl ErrorView for WsError {
    fn record(&self) -> &Arc<Record> {
        &self.record
    }

    fn with_record(&self, record: Arc<Record>) -> Self {
        Self {
            record,
            options: self.options,
        }
    }

    fn project(&self) -> Projection {
        Projection::from_record(&self.record).with_code(self.code())
    }
}

impl ProtocolView for WsError {
    type Code = WsCode;

    fn code(&self) -> Option<WsCode> {
        self.options.code()
    }
}

/// Top-level view carrying every bundle.
#[derive(Debug, Clone)]
pub struct UniversalError {
    record: Arc<Record>,
    options: ProtocolOptions,
}

impl UniversalError {
    /// Wrap a shared record with all bundles.
    pub fn new(record: Arc<Record>, options: ProtocolOptions) -> Self {
        Self { record, options }
    }

    /// Bundles this error was built with.
    pub fn options(&self) -> &ProtocolOptions {
        &self.options
    }

    /// Generic view.
    pub fn to_basic(&self) -> BasicError {
        BasicError::new(Arc::clone(&self.record))
    }

    /// RPC view.
    pub fn to_grpc(&self) -> GrpcError {
        GrpcError::new(Arc::clone(&self.record), self.options.grpc)
    }

    /// Composite transport view.
    pub fn to_web(&self) -> WebError {
        WebError::new(Arc::clone(&self.record), self.options.web)
    }
}

impl ErrorView for UniversalError {
    fn record(&self) -> &Arc<Record> {
        &self.record
    }

    fn with_record(&self, record: Arc<Record>) -> Self {
        Self {
            record,
            options: self.options,
        }
    }
}

// ---------------------------------------------------------------------------
// Display / Error / Serialize
// ---------------------------------------------------------------------------

macro_rules! impl_view_traits {
    ($($view:ty),+ $(,)?) => {$(
        impl fmt::Display for $view {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&*self.record, f)
            }
        }

        impl StdError for $view {
            fn source(&self) -> Option<&(dyn StdError + 'static)> {
                self.record.source()
            }
        }

        impl Serialize for $view {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.project().serialize(serializer)
            }
        }
    )+};
}

impl_view_traits!(BasicError, GrpcError, WebError, HttpError, WsError, UniversalError);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
