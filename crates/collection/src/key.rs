//! Entry keys.
//!
//! A key is either a non-negative integer index or a string name. Strings that
//! spell a canonical non-negative decimal integer are stored as indices, the
//! same way PHP arrays treat `"5"` and `5` as one key.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Key of a collection entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    /// Returns the integer index if this is an index key.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Normalizes a string key; canonical integers become `Key::Index`.
    pub fn parse(name: &str) -> Self {
        match canonical_index(name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name.to_string()),
        }
    }
}

fn canonical_index(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    name.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::parse(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        match canonical_index(&name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name),
        }
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

// Map keys in JSON are always strings.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Index(index) => serializer.collect_str(index),
            Key::Name(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Key::from(name))
    }
}

/// One key or a list of keys, as accepted by `has`
pub trait IntoKeys {
    fn into_keys(self) -> Vec<Key>;
}

impl IntoKeys for Key {
    fn into_keys(self) -> Vec<Key> {
        vec![self]
    }
}

impl IntoKeys for &Key {
    fn into_keys(self) -> Vec<Key> {
        vec![self.clone()]
    }
}

impl IntoKeys for usize {
    fn into_keys(self) -> Vec<Key> {
        vec![Key::Index(self)]
    }
}

impl IntoKeys for &str {
    fn into_keys(self) -> Vec<Key> {
        vec![Key::from(self)]
    }
}

impl IntoKeys for String {
    fn into_keys(self) -> Vec<Key> {
        vec![Key::from(self)]
    }
}

impl<K: Into<Key>, const N: usize> IntoKeys for [K; N] {
    fn into_keys(self) -> Vec<Key> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<K: Into<Key>> IntoKeys for Vec<K> {
    fn into_keys(self) -> Vec<Key> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<K: Into<Key> + Clone> IntoKeys for &[K] {
    fn into_keys(self) -> Vec<Key> {
        self.iter().cloned().map(Into::into).collect()
    }
}
