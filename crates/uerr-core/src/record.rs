// SPDX-License-Identifier: MIT OR Apache-2.0
//! The frozen error core shared by every view.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::fields::Fields;
use crate::id::ErrorId;
use crate::message::{Binding, Message};
use crate::status::Status;

/// Underlying error a [`Record`] wraps.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

// ---------------------------------------------------------------------------
// ErrorType
// ---------------------------------------------------------------------------

/// Shape tag derived from the field count when a record is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    /// No fields attached.
    Basic,
    /// One or more fields attached.
    Fields,
}

impl ErrorType {
    /// Tag for a record carrying `fields`.
    pub fn for_fields(fields: &Fields) -> Self {
        if fields.is_empty() {
            Self::Basic
        } else {
            Self::Fields
        }
    }

    /// `"basic"` or `"fields"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Fields => "fields",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Immutable error value.
///
/// Every `set_*` method returns a new record; the receiver is never touched.
/// Views share a record through an [`Arc`].
#[derive(Debug, Clone)]
pub struct Record {
    id: ErrorId,
    status: Status,
    kind: ErrorType,
    message: Option<Message>,
    fields: Fields,
    cause: Option<Cause>,
}

impl Record {
    /// A record with no message, fields or cause.
    pub fn new(id: impl Into<ErrorId>, status: Status) -> Self {
        Self {
            id: id.into(),
            status,
            kind: ErrorType::Basic,
            message: None,
            fields: Fields::new(),
            cause: None,
        }
    }

    /// Identifier.
    pub fn id(&self) -> &ErrorId {
        &self.id
    }

    /// Severity.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Shape tag (`"basic"` / `"fields"`).
    pub fn kind(&self) -> ErrorType {
        self.kind
    }

    /// Attached fields.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Explicit message, if one was set.
    pub fn explicit_message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Wrapped cause, if any.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Display message.
    ///
    /// An explicit message wins (rendered with `bindings`); otherwise the
    /// cause's text; otherwise `""`.
    pub fn message(&self, bindings: &[Binding]) -> String {
        match &self.message {
            Some(message) => message.render(bindings),
            None => self.error(),
        }
    }

    /// The cause's text, or `""` without a cause.
    pub fn error(&self) -> String {
        self.cause.as_ref().map(|c| c.to_string()).unwrap_or_default()
    }

    /// Whether `candidate` is the cause or appears in its `source()` chain.
    ///
    /// Matching is by identity: `candidate` must be the same error value,
    /// usually reached through a shared [`Cause`].
    pub fn is(&self, candidate: &(dyn StdError + 'static)) -> bool {
        let candidate = candidate as *const dyn StdError;
        self.chain().any(|e| std::ptr::addr_eq(e as *const dyn StdError, candidate))
    }

    /// Whether an error equal to `candidate` appears in the cause chain.
    pub fn is_eq<E>(&self, candidate: &E) -> bool
    where
        E: StdError + PartialEq + 'static,
    {
        self.chain()
            .any(|e| e.downcast_ref::<E>().is_some_and(|e| e == candidate))
    }

    /// First error of type `E` in the cause chain.
    pub fn downcast_cause<E: StdError + 'static>(&self) -> Option<&E> {
        self.chain().find_map(|e| e.downcast_ref::<E>())
    }

    /// Copy with the cause replaced.
    pub fn set_error<E>(&self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.set_cause(Arc::new(cause))
    }

    /// Copy with the cause replaced by an already shared error.
    pub fn set_cause(&self, cause: Cause) -> Self {
        Self {
            cause: Some(cause),
            ..self.clone()
        }
    }

    /// Copy with the fields replaced and the type tag derived again.
    pub fn set_fields(&self, fields: Fields) -> Self {
        Self {
            kind: ErrorType::for_fields(&fields),
            fields,
            ..self.clone()
        }
    }

    /// Copy with an explicit message.
    pub fn set_message(&self, message: Message) -> Self {
        Self {
            message: Some(message),
            ..self.clone()
        }
    }

    pub(crate) fn with_parts(
        mut self,
        message: Option<Message>,
        fields: Fields,
        cause: Option<Cause>,
    ) -> Self {
        self.kind = ErrorType::for_fields(&fields);
        self.message = message;
        self.fields = fields;
        self.cause = cause;
        self
    }

    fn chain(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        let first: Option<&(dyn StdError + 'static)> = self.cause.as_deref().map(|c| c as _);
        std::iter::successors(first, |&e| e.source())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message(&[]);
        if message.is_empty() {
            f.write_str(&self.error())
        } else {
            f.write_str(&message)
        }
    }
}

impl StdError for Record {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|c| c as _)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug, PartialEq)]
    struct Wrapper {
        inner: io::ErrorKind,
    }

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped {:?}", self.inner)
        }
    }

    impl StdError for Wrapper {}

    #[derive(Debug)]
    struct Outer {
        inner: Cause,
    }

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "outer: {}", self.inner)
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(self.inner.as_ref())
        }
    }

    fn record() -> Record {
        Record::new(1i64, Status::Failed)
    }

    #[test]
    fn new_record_is_basic_and_empty() {
        let r = record();
        assert_eq!(r.kind(), ErrorType::Basic);
        assert_eq!(r.message(&[]), "");
        assert_eq!(r.error(), "");
        assert_eq!(r.to_string(), "");
        assert!(r.cause().is_none());
    }

    #[test]
    fn message_falls_back_to_cause() {
        let r = record().set_error(io::Error::other("Test error. "));
        assert_eq!(r.message(&[]), "Test error. ");
        assert_eq!(r.to_string(), "Test error. ");
        assert_eq!(r.error(), "Test error. ");
    }

    #[test]
    fn explicit_message_wins_over_cause() {
        let r = record()
            .set_message(Message::new("Explicit. "))
            .set_error(io::Error::other("Cause. "));
        assert_eq!(r.message(&[]), "Explicit. ");
        assert_eq!(r.to_string(), "Explicit. ");
        assert_eq!(r.error(), "Cause. ");
    }

    #[test]
    fn explicit_empty_message_is_still_explicit() {
        let r = record()
            .set_message(Message::new(""))
            .set_error(io::Error::other("Cause. "));
        assert_eq!(r.message(&[]), "");
        // Display still falls back to the cause text.
        assert_eq!(r.to_string(), "Cause. ");
    }

    #[test]
    fn message_renders_bindings() {
        let r = record().set_message(Message::new("bad {{field}}"));
        assert_eq!(r.message(&[Binding::new("field", "email")]), "bad email");
        assert_eq!(r.message(&[]), "bad {{field}}");
    }

    #[test]
    fn set_error_does_not_touch_original() {
        let original = record().set_error(io::Error::other("first"));
        let replaced = original.set_error(io::Error::other("second"));
        assert_eq!(original.error(), "first");
        assert_eq!(replaced.error(), "second");
    }

    #[test]
    fn set_fields_derives_type() {
        let r = record().set_fields(Fields::new().with("test", "Invalid value"));
        assert_eq!(r.kind(), ErrorType::Fields);
        let cleared = r.set_fields(Fields::new());
        assert_eq!(cleared.kind(), ErrorType::Basic);
        assert_eq!(r.kind(), ErrorType::Fields);
    }

    #[test]
    fn is_matches_shared_cause_by_identity() {
        let cause: Cause = Arc::new(io::Error::other("boom"));
        let r = record().set_cause(cause.clone());
        assert!(r.is(cause.as_ref()));

        let lookalike = io::Error::other("boom");
        assert!(!r.is(&lookalike));
    }

    #[test]
    fn is_walks_source_chain() {
        let inner: Cause = Arc::new(io::Error::other("inner"));
        let r = record().set_error(Outer {
            inner: inner.clone(),
        });
        assert!(r.is(inner.as_ref()));
    }

    #[test]
    fn is_without_cause_is_false() {
        let err = io::Error::other("x");
        assert!(!record().is(&err));
    }

    #[test]
    fn is_eq_compares_by_value() {
        let r = record().set_error(Wrapper {
            inner: io::ErrorKind::NotFound,
        });
        assert!(r.is_eq(&Wrapper {
            inner: io::ErrorKind::NotFound
        }));
        assert!(!r.is_eq(&Wrapper {
            inner: io::ErrorKind::Other
        }));
    }

    #[test]
    fn downcast_cause_finds_nested_type() {
        let r = record().set_error(Outer {
            inner: Arc::new(io::Error::new(io::ErrorKind::NotFound, "gone")),
        });
        let io_err = r.downcast_cause::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn std_error_source_is_cause() {
        let r = record().set_error(io::Error::other("src"));
        assert_eq!(StdError::source(&r).unwrap().to_string(), "src");
        assert!(StdError::source(&record()).is_none());
    }

    #[test]
    fn error_type_display() {
        assert_eq!(ErrorType::Basic.to_string(), "basic");
        assert_eq!(ErrorType::Fields.to_string(), "fields");
    }
}
