//! Configuration loading and management
//!
//! Configuration is read from a YAML file whose path is given by
//! `GRUBDASH_CONFIG`. Every key is optional:
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 5000
//! log_level: debug
//! seed_file: data/seed.yaml
//! ```
//!
//! `GRUBDASH_PORT` overrides `server.port`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "GRUBDASH_CONFIG";

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "GRUBDASH_PORT";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,

    /// Default tracing filter, used when `RUST_LOG` is unset
    pub log_level: String,

    /// Seed fixtures to load instead of the bundled ones
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            log_level: "info".to_string(),
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file
    ///
    /// A relative `seed_file` is resolved against the config file's directory.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_yaml_str(&content)?;
        if let (Some(seed), Some(dir)) = (&config.seed_file, path.parent()) {
            if seed.is_relative() {
                config.seed_file = Some(dir.join(seed));
            }
        }
        Ok(config)
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            std::env::var(CONFIG_ENV).ok().as_deref(),
            std::env::var(PORT_ENV).ok().as_deref(),
        )
    }

    /// Build configuration from an optional file path and port override
    pub fn resolve(config_path: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };

        if let Some(port) = port {
            config.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV,
                value: port.to_string(),
            })?;
        }

        Ok(config)
    }

    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
