// SPDX-License-Identifier: MIT OR Apache-2.0
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A keyed message, typically pointing at one invalid input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Field {
    /// Key the message refers to.
    pub key: String,
    /// Human-readable message.
    pub message: String,
}

impl Field {
    /// Create a field.
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Whether this is the zero field returned for a missing key.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.message.is_empty()
    }
}

/// Ordered field list. Duplicate keys are kept; lookups return the first.
///
/// Order matters for iteration and serialization only: two lists holding the
/// same fields (duplicates counted) compare equal in any order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Fields(Vec<Field>);

impl Fields {
    /// An empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// First field with `key`, or the zero [`Field`] when absent.
    pub fn get(&self, key: &str) -> Field {
        self.find(key).cloned().unwrap_or_default()
    }

    /// First field with `key`, if any.
    pub fn find(&self, key: &str) -> Option<&Field> {
        self.0.iter().find(|f| f.key == key)
    }

    /// Whether any field has `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Append a field.
    pub fn push(&mut self, field: Field) {
        self.0.push(field);
    }

    /// Builder-style [`Fields::push`].
    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.push(Field::new(key, message));
        self
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    /// Fields as a slice.
    pub fn as_slice(&self) -> &[Field] {
        &self.0
    }
}

impl PartialEq for Fields {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.0.iter().all(|field| {
                let count = |list: &[Field]| list.iter().filter(|f| *f == field).count();
                count(&self.0) == count(&other.0)
            })
    }
}

impl Eq for Fields {}

impl From<Vec<Field>> for Fields {
    fn from(fields: Vec<Field>) -> Self {
        Self(fields)
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K: Into<String>, M: Into<String>> FromIterator<(K, M)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, M)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, m)| Field::new(k, m)).collect()
    }
}

impl Extend<Field> for Fields {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Fields {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_first_match() {
        let fields = Fields::new().with("a", "first").with("a", "second");
        assert_eq!(fields.get("a").message, "first");
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn get_missing_returns_zero_field() {
        let fields = Fields::new().with("test", "Invalid value");
        let missing = fields.get("missing");
        assert!(missing.is_empty());
        assert_eq!(missing, Field::default());
    }

    #[test]
    fn iteration_keeps_insertion_order() {
        let fields: Fields = [("z", "1"), ("a", "2"), ("m", "3")].into_iter().collect();
        let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let xy = Fields::new().with("x", "1").with("y", "2");
        let yx = Fields::new().with("y", "2").with("x", "1");
        assert_eq!(xy, yx);
        let keys: Vec<&str> = yx.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["y", "x"]);
    }

    #[test]
    fn equality_counts_duplicates() {
        let a = Fields::new().with("x", "1").with("x", "1").with("y", "2");
        let b = Fields::new().with("x", "1").with("y", "2").with("y", "2");
        assert_ne!(a, b);
        assert_ne!(a, Fields::new().with("x", "1").with("y", "2"));
        assert_eq!(a, Fields::new().with("y", "2").with("x", "1").with("x", "1"));
    }

    #[test]
    fn serializes_as_list_of_objects() {
        let fields = Fields::new().with("test", "Invalid value");
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"[{"key":"test","message":"Invalid value"}]"#);
    }

    #[test]
    fn clone_shares_nothing() {
        let original = Fields::new().with("a", "1");
        let mut copy = original.clone();
        copy.push(Field::new("b", "2"));
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }
}
