// SPDX-License-Identifier: MIT OR Apache-2.0
//! Literal or templated error text.
//!
//! Placeholders use the `{{key}}` syntax. A [`Binding`] replaces every literal
//! occurrence of its placeholder with the display string of its value;
//! placeholders without a binding are left untouched.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `{{key}}` → value substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    key: String,
    value: String,
}

impl Binding {
    /// Bind `key` to the display string of `value`.
    pub fn new(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }

    /// Placeholder name, without braces.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replacement text.
    pub fn value(&self) -> &str {
        &self.value
    }

    fn placeholder(&self) -> String {
        format!("{{{{{}}}}}", self.key)
    }
}

/// Error message text.
///
/// A `Message` is immutable: [`Message::render`] returns the substituted text
/// and leaves the stored text as it was, so rendering is repeatable with
/// different bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Message {
    content: String,
}

impl Message {
    /// A message holding `text` verbatim.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
        }
    }

    /// A message holding `text` with `bindings` already applied.
    pub fn set(text: impl Into<String>, bindings: &[Binding]) -> Self {
        Self {
            content: substitute(text.into(), bindings),
        }
    }

    /// The stored text with `bindings` applied.
    pub fn render(&self, bindings: &[Binding]) -> String {
        substitute(self.content.clone(), bindings)
    }

    /// The stored text.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Whether the stored text is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

fn substitute(mut text: String, bindings: &[Binding]) -> String {
    for binding in bindings {
        let placeholder = binding.placeholder();
        if text.contains(&placeholder) {
            text = text.replace(&placeholder, &binding.value);
        }
    }
    text
}
