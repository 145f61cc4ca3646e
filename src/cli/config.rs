//! Service configuration
//!
//! Resolution order, lowest to highest: built-in defaults, the JSON file
//! given by `--config`, then flags and their environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::args::ServeArgs;
use super::errors::{CliError, CliResult};
use axum::http::HeaderValue;

use crate::store::StoreOptions;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind to (default "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on (default 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Books file (default "books.json")
    #[serde(default = "default_books_file")]
    pub books_file: PathBuf,

    /// Id strategy and persistence failure policy
    #[serde(flatten)]
    pub store: StoreOptions,

    /// Default log filter when RUST_LOG is unset (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines (default false)
    #[serde(default)]
    pub json_logs: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_books_file() -> PathBuf {
    PathBuf::from("books.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            books_file: default_books_file(),
            store: StoreOptions::default(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: ServiceConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Build the effective configuration for `serve`
    pub fn resolve(args: &ServeArgs) -> CliResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        config.apply_overrides(args);
        config.validate()?;

        Ok(config)
    }

    /// `host:port` to bind
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn apply_overrides(&mut self, args: &ServeArgs) {
        if let Some(host) = &args.host {
            self.host = host.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(books_file) = &args.books_file {
            self.books_file = books_file.clone();
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        if args.json_logs {
            self.json_logs = true;
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.host.is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if self.books_file.as_os_str().is_empty() {
            return Err(CliError::config_error("books_file must not be empty"));
        }

        for origin in &self.cors_origins {
            origin.parse::<HeaderValue>().map_err(|_| {
                CliError::config_error(format!("Invalid CORS origin: {:?}", origin))
            })?;
        }

        EnvFilter::try_new(&self.log_level).map_err(|e| {
            CliError::config_error(format!("Invalid log_level '{}': {}", self.log_level, e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{IdStrategy, PersistFailurePolicy};
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("bookshelf.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_original_service() {
        let config = ServiceConfig::resolve(&ServeArgs::default()).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.books_file, PathBuf::from("books.json"));
        assert_eq!(config.store.id_strategy, IdStrategy::Length);
        assert_eq!(config.store.on_persist_failure, PersistFailurePolicy::Respond);
    }

    #[test]
    fn test_load_flat_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
                "port": 9100,
                "books_file": "/var/lib/books.json",
                "id_strategy": "monotonic",
                "on_persist_failure": "exit",
                "json_logs": true
            }"#,
        );

        let config = ServiceConfig::load(&path).unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.books_file, PathBuf::from("/var/lib/books.json"));
        assert_eq!(config.store.id_strategy, IdStrategy::Monotonic);
        assert_eq!(config.store.on_persist_failure, PersistFailurePolicy::Exit);
        assert!(config.json_logs);
    }

    #[test]
    fn test_flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"port": 9100, "books_file": "a.json"}"#);

        let args = ServeArgs {
            config: Some(path),
            port: Some(9200),
            ..Default::default()
        };

        let config = ServiceConfig::resolve(&args).unwrap();
        assert_eq!(config.port, 9200);
        assert_eq!(config.books_file, PathBuf::from("a.json"));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let dir = TempDir::new().unwrap();
        let args = ServeArgs {
            config: Some(dir.path().join("absent.json")),
            ..Default::default()
        };

        assert!(ServiceConfig::resolve(&args).is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServiceConfig {
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_cors_origin_rejected() {
        let dir = TempDir::new().unwrap();

        let path = write_config(&dir, r#"{"cors_origins": ["http://localhost:5173"]}"#);
        assert!(ServiceConfig::load(&path).is_ok());

        let path = write_config(&dir, r#"{"cors_origins": ["http://ok", "bad\norigin"]}"#);
        let err = ServiceConfig::load(&path).unwrap_err();
        assert!(err.message().contains("CORS origin"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();

        let path = write_config(&dir, r#"{"id_strategy": "random"}"#);
        assert!(ServiceConfig::load(&path).is_err());

        let path = write_config(&dir, r#"{"log_level": "bookshelf=loudest"}"#);
        assert!(ServiceConfig::load(&path).is_err());
    }
}
