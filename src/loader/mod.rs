//! Document loading
//!
//! Resolves a location (URL or local path) to document text and parses it.
//! Implementations:
//! - DefaultDocumentLoader: HTTP(S) via reqwest, local files via tokio
//! - MemoryDocumentLoader: fixed in-memory documents (tests, embedding)

use async_trait::async_trait;

pub mod default;
pub mod location;
pub mod memory;

pub use default::DefaultDocumentLoader;
pub use location::{DocumentLocation, UrlTemplate};
pub use memory::MemoryDocumentLoader;

/// Error type for document loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid location: {0}")]
    InvalidLocation(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("HTTP error {status} when fetching {url}")]
    HttpStatus { status: u16, url: String },
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Failed to parse {location}: {message}")]
    ParseError { location: String, message: String },
}

/// Trait for document loaders
///
/// Only `load_text` must be implemented; parsing is shared.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Read the raw text at a location
    async fn load_text(&self, location: &DocumentLocation) -> Result<String, LoadError>;

    /// Load and parse a YAML (or JSON) document
    async fn load_yaml(&self, location: &DocumentLocation) -> Result<serde_yaml::Value, LoadError> {
        let text = self.load_text(location).await?;
        serde_yaml::from_str(&text).map_err(|e| LoadError::ParseError {
            location: location.to_string(),
            message: e.to_string(),
        })
    }

    /// Load and parse a JSON document
    async fn load_json(&self, location: &DocumentLocation) -> Result<serde_json::Value, LoadError> {
        let text = self.load_text(location).await?;
        serde_json::from_str(&text).map_err(|e| LoadError::ParseError {
            location: location.to_string(),
            message: e.to_string(),
        })
    }
}
