//! Application configuration
//!
//! Loaded from an optional TOML file. Every field has a default, so an empty
//! file (or no file) yields a working configuration:
//!
//! ```toml
//! [sources]
//! endpoint_template = "https://raw.githubusercontent.com/smart-data-models/dataModel.{subject}/master/{datamodel}/model.yaml"
//! batch_template = "https://raw.githubusercontent.com/smart-data-models/{subject}/master/{datamodel}/model.yaml"
//! official_list = "https://raw.githubusercontent.com/smart-data-models/data-models/master/specs/AllSubjects/official_list_data_models.json"
//!
//! [http]
//! timeout_secs = 30
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//!
//! [mapping]
//! strict = false
//! ```

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::loader::UrlTemplate;
use crate::loader::default::DEFAULT_TIMEOUT_SECS;
use crate::mapping::MappingConfig;

pub const DEFAULT_ENDPOINT_TEMPLATE: &str = "https://raw.githubusercontent.com/smart-data-models/dataModel.{subject}/master/{datamodel}/model.yaml";
pub const DEFAULT_BATCH_TEMPLATE: &str =
    "https://raw.githubusercontent.com/smart-data-models/{subject}/master/{datamodel}/model.yaml";
pub const DEFAULT_OFFICIAL_LIST: &str = "https://raw.githubusercontent.com/smart-data-models/data-models/master/specs/AllSubjects/official_list_data_models.json";

/// Errors loading or interpreting configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid bind address {0}")]
    InvalidAddress(String),
}

/// Where documents are fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Template used by the HTTP endpoint
    pub endpoint_template: UrlTemplate,
    /// Template used by the batch runner
    pub batch_template: UrlTemplate,
    /// Official data model list, checked by the batch runner
    pub official_list: Option<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            endpoint_template: UrlTemplate::new(DEFAULT_ENDPOINT_TEMPLATE),
            batch_template: UrlTemplate::new(DEFAULT_BATCH_TEMPLATE),
            official_list: Some(DEFAULT_OFFICIAL_LIST.to_string()),
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// HTTP endpoint bind settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidAddress(format!("{}: {}", addr, e)))
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sources: SourcesConfig,
    pub http: HttpConfig,
    pub server: ServerConfig,
    pub mapping: MappingConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
