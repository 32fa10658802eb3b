//! Configuration types for lint-bridge.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::charset::Charset;

/// Rule repository namespace used when none is configured.
pub const DEFAULT_REPOSITORY: &str = "android-lint";

/// Platform language this integration attributes violations to.
pub const DEFAULT_LANGUAGE: &str = "java";

/// Top-level configuration for lint-bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Rule repository namespace that issue ids are looked up in.
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Only resources declared with this language receive per-file violations.
    #[serde(default = "default_language")]
    pub language: String,

    /// Charset used when the file system view declares none.
    #[serde(default)]
    pub encoding: Charset,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            language: default_language(),
            encoding: Charset::default(),
        }
    }
}

fn default_repository() -> String {
    DEFAULT_REPOSITORY.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl BridgeConfig {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or fails validation.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository or language key is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repository.trim().is_empty() {
            return Err(ConfigError::Validation(
                "repository key must not be empty".to_string(),
            ));
        }
        if self.language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "language key must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the rule repository namespace.
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    /// Sets the supported language key.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.repository, "android-lint");
        assert_eq!(config.language, "java");
        assert_eq!(config.encoding, Charset::Utf8);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
repository = "lint"
language = "kotlin"
encoding = "ISO-8859-1"
"#;

        let config = BridgeConfig::parse(toml).expect("Failed to parse");
        assert_eq!(config.repository, "lint");
        assert_eq!(config.language, "kotlin");
        assert_eq!(config.encoding, Charset::Latin1);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = BridgeConfig::parse("").expect("Failed to parse");
        assert_eq!(config, BridgeConfig::default());
    }

    #[test]
    fn test_unknown_encoding_is_rejected() {
        let err = BridgeConfig::parse(r#"encoding = "EBCDIC""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_blank_repository_is_rejected() {
        let err = BridgeConfig::parse(r#"repository = " ""#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
