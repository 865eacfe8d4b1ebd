//! Path resolution settings.

use serde::{Deserialize, Serialize};

use crate::error::{CollectionError, CollectionResult};

/// Default separator between path segments
pub const DEFAULT_SEPARATOR: &str = ".";
/// Default wildcard segment
pub const DEFAULT_WILDCARD: &str = "*";

/// Settings used when a collection resolves dotted paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub separator: String,
    pub wildcard: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            wildcard: DEFAULT_WILDCARD.to_string(),
        }
    }
}

impl PathConfig {
    pub fn new(separator: impl Into<String>, wildcard: impl Into<String>) -> CollectionResult<Self> {
        let config = Self {
            separator: separator.into(),
            wildcard: wildcard.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML fragment; missing fields take their defaults.
    ///
    /// ```toml
    /// separator = "/"
    /// wildcard = "*"
    /// ```
    pub fn from_toml_str(text: &str) -> CollectionResult<Self> {
        let config: PathConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CollectionResult<()> {
        if self.separator.is_empty() {
            return Err(CollectionError::Config(
                "path separator must not be empty".to_string(),
            ));
        }
        if self.wildcard.is_empty() {
            return Err(CollectionError::Config(
                "path wildcard must not be empty".to_string(),
            ));
        }
        if self.wildcard.contains(self.separator.as_str()) {
            return Err(CollectionError::Config(format!(
                "wildcard '{}' contains the separator '{}'",
                self.wildcard, self.separator
            )));
        }
        Ok(())
    }
}
