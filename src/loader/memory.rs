//! In-memory document loader

use async_trait::async_trait;
use std::collections::HashMap;

use super::{DocumentLoader, DocumentLocation, LoadError};

/// Loader serving fixed documents keyed by their location string
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentLoader {
    documents: HashMap<String, String>,
}

impl MemoryDocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under a location
    pub fn with_document(mut self, location: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(location, content);
        self
    }

    pub fn insert(&mut self, location: impl Into<String>, content: impl Into<String>) {
        self.documents.insert(location.into(), content.into());
    }
}

#[async_trait]
impl DocumentLoader for MemoryDocumentLoader {
    async fn load_text(&self, location: &DocumentLocation) -> Result<String, LoadError> {
        let key = location.to_string();
        self.documents
            .get(&key)
            .cloned()
            .ok_or(LoadError::FileNotFound(key))
    }
}
