//! Load — config loading from file and environment variables.

use std::fs;
use std::path::Path;

use super::model::{ConfigError, ParserConfig};

pub const CONFIG_FILE_ENV: &str = "HAPROXY_LOG_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "/etc/haproxy-log/parser.toml";

const MAX_LINE_SIZE_ENV: &str = "HAPROXY_LOG_MAX_LINE_SIZE";
const STRICT_TIMESTAMPS_ENV: &str = "HAPROXY_LOG_STRICT_TIMESTAMPS";
const TRIM_LINE_ENDINGS_ENV: &str = "HAPROXY_LOG_TRIM_LINE_ENDINGS";

impl ParserConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var(CONFIG_FILE_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading parser configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", config_path);
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_string(),
            source,
        })
    }

    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Override fields from `lookup`; unparseable values are ignored.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(size) = lookup(MAX_LINE_SIZE_ENV).and_then(|s| s.parse().ok()) {
            self.max_line_size = size;
        }
        if let Some(strict) = lookup(STRICT_TIMESTAMPS_ENV).and_then(|s| s.parse().ok()) {
            self.strict_timestamps = strict;
        }
        if let Some(trim) = lookup(TRIM_LINE_ENDINGS_ENV).and_then(|s| s.parse().ok()) {
            self.trim_line_endings = trim;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ParserConfig::default();
        config.apply_env(lookup(&[
            ("HAPROXY_LOG_MAX_LINE_SIZE", "4096"),
            ("HAPROXY_LOG_STRICT_TIMESTAMPS", "true"),
            ("HAPROXY_LOG_TRIM_LINE_ENDINGS", "false"),
        ]));
        assert_eq!(config.max_line_size, 4096);
        assert!(config.strict_timestamps);
        assert!(!config.trim_line_endings);
    }

    #[test]
    fn test_invalid_env_ignored() {
        let mut config = ParserConfig::default();
        config.apply_env(lookup(&[("HAPROXY_LOG_MAX_LINE_SIZE", "not_a_number")]));
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("haproxy-log-conf-{}.toml", std::process::id()));
        fs::write(&path, "max_line_size = 2048\nstrict_timestamps = true\n").unwrap();

        let config = ParserConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.max_line_size, 2048);
        assert!(config.strict_timestamps);
        assert!(config.trim_line_endings);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_missing() {
        let err = ParserConfig::from_file("/nonexistent/haproxy-log.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_from_file_bad_toml() {
        let path = std::env::temp_dir().join(format!("haproxy-log-bad-{}.toml", std::process::id()));
        fs::write(&path, "max_line_size = \"big\"").unwrap();

        let err = ParserConfig::from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));

        fs::remove_file(&path).unwrap();
    }
}
