//! Generated value representations.
//!
//! `MockValue` is the type-agnostic value produced for one field and
//! `MockObject` is the object produced for one schema scope. Objects keep
//! fields in generation order so output is stable and readable.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A generated value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MockValue {
    /// Null value
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    String(String),

    /// Date/time with timezone
    DateTime(DateTime<Utc>),

    /// Array of values
    Array(Vec<MockValue>),

    /// Nested object
    Object(MockObject),
}

impl MockValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Vec<MockValue>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&MockObject> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

}

impl From<bool> for MockValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MockValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for MockValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for MockValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MockValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for MockValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<Vec<MockValue>> for MockValue {
    fn from(value: Vec<MockValue>) -> Self {
        Self::Array(value)
    }
}

impl From<MockObject> for MockValue {
    fn from(value: MockObject) -> Self {
        Self::Object(value)
    }
}

/// Generated object for one schema scope.
///
/// Fields iterate and serialize in the order they were inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockObject {
    fields: Vec<(String, MockValue)>,
}

impl MockObject {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<MockValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a field. Re-inserting a name replaces the value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<MockValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&MockValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Get a string field by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(MockValue::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MockValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

}

impl Serialize for MockObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
