//! Value - a dynamically typed item that dotted paths can walk into.

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collection::Collection;
use crate::enumerable::Enumerable;
use crate::key::Key;
use crate::number::{AsNumber, Number};

/// A dynamically typed value
///
/// `Array` is an ordered keyed container and supports key access and
/// wildcards. `Object` only exposes named properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Collection<Value>),
    Object(IndexMap<String, Value>),
}

/// Broad shape of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Sequence,
    Mapping,
    Opaque,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Scalar => write!(f, "scalar"),
            ValueKind::Sequence => write!(f, "sequence"),
            ValueKind::Mapping => write!(f, "mapping"),
            ValueKind::Opaque => write!(f, "object"),
        }
    }
}

impl Value {
    /// Builds an array value with fresh indices
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::<Value>::into).collect())
    }

    /// Builds an array value from key/value pairs
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<Key>,
    {
        Value::Array(
            entries
                .into_iter()
                .map(|(key, value)| (Into::<Key>::into(key), value))
                .collect(),
        )
    }

    /// Builds an object value from named properties
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Object(
            properties
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => {
                ValueKind::Scalar
            }
            Value::Array(items) if items.is_list() => ValueKind::Sequence,
            Value::Array(_) => ValueKind::Mapping,
            Value::Object(_) => ValueKind::Opaque,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_array(&self) -> Option<&Collection<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Child stored under `key` in an array value.
    pub fn get_key(&self, key: impl Into<Key>) -> Option<&Value> {
        match self {
            Value::Array(items) => items.offset_get(key).ok(),
            _ => None,
        }
    }

    /// Named property of an object value.
    pub fn get_property(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(properties) => properties.get(name),
            _ => None,
        }
    }
}

/// Leading numeric portion of `text` and where it ends, if any
fn numeric_prefix(text: &str) -> Option<(Number, usize)> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut integral = true;
    let mut has_digits = end > digits_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut fraction_end = end + 1;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if fraction_end > end + 1 || has_digits {
            has_digits = has_digits || fraction_end > end + 1;
            integral = false;
            end = fraction_end;
        }
    }
    if !has_digits {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits {
            integral = false;
            end = exponent_end;
        }
    }

    let literal = &text[..end];
    if integral {
        if let Ok(value) = literal.parse::<i64>() {
            return Some((Number::Int(value), end));
        }
    }
    literal.parse::<f64>().ok().map(|value| (Number::Float(value), end))
}

/// Number held by `text` when the whole string is numeric, ignoring
/// surrounding whitespace.
fn numeric_string(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    numeric_prefix(trimmed)
        .filter(|(_, end)| *end == trimmed.len())
        .map(|(number, _)| number)
}

fn compare_numbers(a: Number, b: Number) -> Option<Ordering> {
    match (a, b) {
        (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
        (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
    }
}

impl AsNumber for Value {
    fn as_number(&self) -> Number {
        match self {
            Value::Null => Number::ZERO,
            Value::Bool(flag) => flag.as_number(),
            Value::Int(value) => Number::Int(*value),
            Value::Float(value) => Number::Float(*value),
            Value::String(text) => numeric_prefix(text)
                .map(|(number, _)| number)
                .unwrap_or(Number::ZERO),
            Value::Array(_) | Value::Object(_) => Number::ZERO,
        }
    }
}

// Scalars compare loosely: numbers against numeric strings compare by value,
// booleans against numbers compare by truthiness.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::Bool(a), Value::Int(_) | Value::Float(_)) => {
                a.partial_cmp(&(other.as_number().as_f64() != 0.0))
            }
            (Value::Int(_) | Value::Float(_), Value::Bool(b)) => {
                (self.as_number().as_f64() != 0.0).partial_cmp(b)
            }
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                compare_numbers(self.as_number(), other.as_number())
            }
            (Value::Int(_) | Value::Float(_), Value::String(text)) => match numeric_string(text) {
                Some(number) => compare_numbers(self.as_number(), number),
                None => self.as_number().to_string().as_str().partial_cmp(text.as_str()),
            },
            (Value::String(_), Value::Int(_) | Value::Float(_)) => {
                other.partial_cmp(self).map(Ordering::reverse)
            }
            (Value::String(a), Value::String(b)) => match (numeric_string(a), numeric_string(b)) {
                (Some(a), Some(b)) => compare_numbers(a, b),
                _ => a.partial_cmp(b),
            },
            (Value::Array(a), Value::Array(b)) => a.count().partial_cmp(&b.count()),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(flag) => serializer.serialize_bool(*flag),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::String(text) => serializer.serialize_str(text),
            Value::Array(items) => items.serialize(serializer),
            Value::Object(properties) => properties.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

// JSON objects become keyed arrays, the way an associative decode does.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(value) => Value::Int(value),
                None => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(text) => Value::String(text),
            serde_json::Value::Array(items) => Value::array(items),
            serde_json::Value::Object(properties) => Value::map(
                properties
                    .into_iter()
                    .map(|(name, value)| (name, Value::from(value))),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

impl From<Collection<Value>> for Value {
    fn from(items: Collection<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Collection::from(items))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
