//! Server configuration for trivia-server
//!
//! Loads and parses the trivia-server.toml configuration file with HTTP
//! listener and database settings. The configuration is an explicit struct
//! handed to the binary and router constructor; there is no process-global
//! configuration state.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default location of the configuration file, relative to the working
/// directory. Overridable with the `CONFIG_PATH` environment variable.
pub const DEFAULT_CONFIG_PATH: &str = "config/trivia-server.toml";

#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file path
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "trivia.db".to_string(),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP listener settings
    pub server: HttpConfig,
    /// Database settings
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from the default path or `CONFIG_PATH`
    ///
    /// # Returns
    /// Parsed configuration or a read/parse error
    pub fn load() -> Result<Self, ServerConfigError> {
        let path = std::env::var("CONFIG_PATH")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_file(path)
    }

    /// Load configuration from an explicit file path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ServerConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// SQLite connection URL for the configured database path
    ///
    /// `mode=rwc` creates the database file on first startup.
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.database.path)
    }
}
