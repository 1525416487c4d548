//! Configuration file handling
//!
//! The file is JSON; every section and field is optional.
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8080, "base_path": "/api" },
//!   "logging": { "level": "info", "json_format": false }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LoggingSettings;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from a path if given, else use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        self.server
            .validate()
            .map_err(|e| CliError::Config(format!("Server config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| CliError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_object_is_all_defaults() {
        let file = write_config("{}");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_partial_sections() {
        let file = write_config(r#"{"server": {"port": 9001}, "logging": {"json_format": true}}"#);
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.base_path, "/api");
        assert!(config.logging.json_format);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_invalid_json() {
        let file = write_config("{ not json");
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config JSON"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config(r#"{"server": {"base_path": "api/"}}"#);
        assert!(Config::load(file.path()).is_err());

        let file = write_config(r#"{"logging": {"level": "chatty"}}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
