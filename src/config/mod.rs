//! Configuration module for scopelens.
//!
//! Provides layered configuration loading from files, environment variables,
//! and defaults.
//!
//! # Configuration Precedence
//!
//! 1. Environment variables (highest priority)
//! 2. Configuration file (TOML)
//! 3. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use scopelens::config::ScopelensConfig;
//!
//! // Load defaults
//! let config = ScopelensConfig::default();
//! assert_eq!(config.backend.model, "llama3.2");
//!
//! // Parse from TOML
//! let toml = r#"
//! [backend]
//! model = "mistral"
//! "#;
//! let config: ScopelensConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.backend.model, "mistral");
//! ```

pub mod backend;
pub mod error;
pub mod logging;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration: backend endpoint plus logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScopelensConfig {
    /// Completion backend settings
    pub backend: BackendConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ScopelensConfig {
    /// Load configuration from a TOML file.
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// `MODEL_BACKEND_URL` and `MODEL_NAME` select the backend;
    /// `SCOPELENS_LOG_LEVEL` and `SCOPELENS_LOG_FORMAT` tune logging.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("MODEL_BACKEND_URL") {
            self.backend.base_url = url;
        }
        if let Ok(model) = std::env::var("MODEL_NAME") {
            self.backend.model = model;
        }

        if let Ok(level) = std::env::var("SCOPELENS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SCOPELENS_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ScopelensConfig::default();
        assert_eq!(config.backend.base_url, "http://localhost:11434/v1");
        assert_eq!(config.backend.model, "llama3.2");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_none_returns_defaults() {
        let config = ScopelensConfig::load(None).unwrap();
        assert_eq!(config, ScopelensConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let result = ScopelensConfig::load(Some(Path::new("/nonexistent/scopelens.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[backend]\nbase_url = \"http://gpu-box:11434/v1\"\nmodel = \"qwen2.5\"\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = ScopelensConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.backend.base_url, "http://gpu-box:11434/v1");
        assert_eq!(config.backend.model, "qwen2.5");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "backend = not toml at all [").unwrap();

        let result = ScopelensConfig::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = ScopelensConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: ScopelensConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
