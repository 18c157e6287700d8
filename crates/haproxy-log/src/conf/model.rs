//! Model — ParserConfig and its errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default upper bound on a single line (1MB)
pub const DEFAULT_MAX_LINE_SIZE: usize = 1_048_576;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Lines longer than this (in bytes) are rejected before identification
    pub max_line_size: usize,
    /// Reject unparseable accept dates instead of leaving them empty
    pub strict_timestamps: bool,
    /// Strip trailing `\r`/`\n` left behind by the line source
    pub trim_line_endings: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_line_size: DEFAULT_MAX_LINE_SIZE,
            strict_timestamps: false,
            trim_line_endings: true,
        }
    }
}

impl ParserConfig {
    /// Validate that configuration values are sane
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_line_size == 0 {
            return Err(ConfigError::Invalid("max_line_size must be > 0".to_string()));
        }
        Ok(())
    }
}
