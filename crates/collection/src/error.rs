use thiserror::Error;

use crate::key::Key;

/// Collection-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollectionError {
    #[error("Key not found: {0}")]
    KeyNotFound(Key),

    #[error("Invalid step: {0}")]
    InvalidStep(i64),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for collection operations
pub type CollectionResult<T> = Result<T, CollectionError>;

impl CollectionError {
    pub fn key_not_found(key: impl Into<Key>) -> Self {
        Self::KeyNotFound(key.into())
    }
}

impl From<serde_json::Error> for CollectionError {
    fn from(err: serde_json::Error) -> Self {
        CollectionError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CollectionError {
    fn from(err: toml::de::Error) -> Self {
        CollectionError::Config(err.to_string())
    }
}
