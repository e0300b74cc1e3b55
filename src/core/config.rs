//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own settings (site address, site root) stay in `[package.metadata.leptos]`
//! and the `LEPTOS_*` variables.

use std::str::FromStr;

use tracing::Level;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LOG_LEVEL must be one of trace, debug, info, warn, error (got `{0}`)")]
    InvalidLogLevel(String),

    #[error("{name} must be a boolean (got `{value}`)")]
    InvalidBool { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum level emitted by the tracing subscriber (`LOG_LEVEL`)
    pub log_level: Level,

    /// Compress dynamic responses with brotli/gzip (`ENABLE_COMPRESSION`)
    pub compression: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            compression: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup("LOG_LEVEL") {
            config.log_level = Level::from_str(level.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(level.clone()))?;
        }

        if let Some(value) = lookup("ENABLE_COMPRESSION") {
            config.compression = parse_bool("ENABLE_COMPRESSION", &value)?;
        }

        Ok(config)
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.compression);
    }

    #[test]
    fn test_log_level_parsing() {
        let config = Config::from_lookup(lookup(&[("LOG_LEVEL", "debug")])).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);

        let config = Config::from_lookup(lookup(&[("LOG_LEVEL", " WARN ")])).unwrap();
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Config::from_lookup(lookup(&[("LOG_LEVEL", "loud")])).unwrap_err();

        assert_eq!(err, ConfigError::InvalidLogLevel("loud".to_string()));
        assert!(err.to_string().contains("`loud`"));
    }

    #[test]
    fn test_compression_flag() {
        for (raw, expected) in [("false", false), ("0", false), ("On", true), ("yes", true)] {
            let config = Config::from_lookup(lookup(&[("ENABLE_COMPRESSION", raw)])).unwrap();
            assert_eq!(config.compression, expected, "value {raw}");
        }
    }

    #[test]
    fn test_invalid_compression_flag() {
        let err = Config::from_lookup(lookup(&[("ENABLE_COMPRESSION", "maybe")])).unwrap_err();

        assert_eq!(
            err.to_string(),
            "ENABLE_COMPRESSION must be a boolean (got `maybe`)"
        );
    }

    #[test]
    fn test_config_from_env_returns_result() {
        // Actual values depend on environment, so only check it does not panic
        let _ = Config::from_env();
    }
}
