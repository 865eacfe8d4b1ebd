//! Dotted path lookup into nested values.
//!
//! A path such as `"orders.*.total"` is split into segments. Plain segments
//! descend one level, either by key into an array or by property into an
//! object. A wildcard segment fans out over every element of the current
//! array and resolves the rest of the path against each one.

use crate::collection::Collection;
use crate::config::PathConfig;
use crate::enumerable::Enumerable;
use crate::key::Key;
use crate::number::{AsNumber, Number};
use crate::value::Value;

/// A path given as text or as pre-split segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    Text(String),
    Segments(Vec<String>),
}

impl Path {
    /// Splits the path on the configured separator.
    pub fn split(&self, config: &PathConfig) -> Vec<String> {
        match self {
            Path::Text(text) => text.split(config.separator.as_str()).map(str::to_string).collect(),
            Path::Segments(segments) => segments.clone(),
        }
    }
}

impl From<&str> for Path {
    fn from(text: &str) -> Self {
        Path::Text(text.to_string())
    }
}

impl From<String> for Path {
    fn from(text: String) -> Self {
        Path::Text(text)
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Path::Segments(segments)
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Path::Segments(segments.iter().map(|segment| segment.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Path::Segments(segments.iter().map(|segment| segment.to_string()).collect())
    }
}

/// Resolves `path` against `target`, returning `default` when it fails.
pub fn resolve_path(
    target: &Value,
    path: impl Into<Path>,
    default: Value,
    config: &PathConfig,
) -> Value {
    let segments = path.into().split(config);
    data_get(target, &segments, &config.wildcard, &default)
}

/// Walks `segments` from `target`.
///
/// An empty segment list yields `target` itself.
pub fn data_get(target: &Value, segments: &[String], wildcard: &str, default: &Value) -> Value {
    let mut current = target;

    for (position, segment) in segments.iter().enumerate() {
        if segment == wildcard {
            let Value::Array(items) = current else {
                log::debug!("wildcard applied to {} value", current.kind());
                return default.clone();
            };
            let rest = &segments[position + 1..];
            let plucked = pluck(items, rest, wildcard);
            return if rest.iter().any(|segment| segment == wildcard) {
                collapse(plucked)
            } else {
                Value::Array(plucked)
            };
        }

        match descend(current, segment) {
            Some(next) => current = next,
            None => {
                log::debug!("path segment '{segment}' not found");
                return default.clone();
            }
        }
    }

    current.clone()
}

fn descend<'a>(target: &'a Value, segment: &str) -> Option<&'a Value> {
    match target {
        Value::Array(items) => items.offset_get(Key::from(segment)).ok(),
        // Null properties count as unset.
        Value::Object(properties) => properties.get(segment).filter(|value| !value.is_null()),
        _ => None,
    }
}

/// Resolves `rest` against every element; misses become `Null`.
fn pluck(items: &Collection<Value>, rest: &[String], wildcard: &str) -> Collection<Value> {
    items
        .iter()
        .map(|(_, item)| data_get(item, rest, wildcard, &Value::Null))
        .collect()
}

/// Merges one level of nested arrays; non-array results are dropped.
///
/// Integer keys are appended, string keys are written in place so a later
/// entry replaces an earlier one with the same name.
fn collapse(results: Collection<Value>) -> Value {
    let mut merged: Collection<Value> = Collection::new();
    for (_, result) in results {
        let Value::Array(inner) = result else {
            continue;
        };
        for (key, value) in inner {
            if key.is_index() {
                merged.add(value);
            } else {
                merged.set(key, value);
            }
        }
    }
    Value::Array(merged)
}

/// Numeric contribution of a resolved value to a sum.
pub(crate) fn numeric_total(value: &Value) -> Number {
    match value {
        Value::Array(items) => items.iter().map(|(_, item)| numeric_total(item)).sum(),
        other => other.as_number(),
    }
}
