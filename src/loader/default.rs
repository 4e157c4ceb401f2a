//! Default document loader
//!
//! Fetches URLs with a shared reqwest client and reads local paths with
//! tokio's filesystem API.

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use super::{DocumentLoader, DocumentLocation, LoadError};

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Loader for HTTP(S) URLs and local files
pub struct DefaultDocumentLoader {
    #[cfg(feature = "http-loader")]
    client: reqwest::Client,
}

impl DefaultDocumentLoader {
    /// Create a loader with the default timeout
    pub fn new() -> Result<Self, LoadError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a loader whose HTTP requests time out after `timeout`
    #[cfg(feature = "http-loader")]
    pub fn with_timeout(timeout: Duration) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LoadError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    #[cfg(not(feature = "http-loader"))]
    pub fn with_timeout(_timeout: Duration) -> Result<Self, LoadError> {
        Ok(Self {})
    }

    #[cfg(feature = "http-loader")]
    async fn fetch_url(&self, url: &str) -> Result<String, LoadError> {
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::NetworkError(format!("Failed to fetch URL {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| {
            LoadError::NetworkError(format!("Failed to read response from {}: {}", url, e))
        })
    }

    #[cfg(not(feature = "http-loader"))]
    async fn fetch_url(&self, url: &str) -> Result<String, LoadError> {
        Err(LoadError::InvalidLocation(format!(
            "Loading {} requires the 'http-loader' feature",
            url
        )))
    }

    async fn read_path(path: &Path) -> Result<String, LoadError> {
        debug!("Reading {}", path.display());
        tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::FileNotFound(path.display().to_string())
            } else {
                LoadError::IoError(format!("Failed to read {}: {}", path.display(), e))
            }
        })
    }
}

#[async_trait]
impl DocumentLoader for DefaultDocumentLoader {
    async fn load_text(&self, location: &DocumentLocation) -> Result<String, LoadError> {
        match location {
            DocumentLocation::Url(url) => self.fetch_url(url).await,
            DocumentLocation::Path(path) => Self::read_path(path).await,
        }
    }
}
