//! Batch configuration

use serde::{Deserialize, Serialize};

use super::BatchError;
use crate::loader::{DocumentLoader, DocumentLocation};

/// The list of data models to convert
///
/// ```json
/// {"subject": "dataModel.Building", "dataModels": ["Building", "BuildingOperation"]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    pub subject: String,
    pub data_models: Vec<String>,
}

impl BatchConfig {
    pub fn new(subject: impl Into<String>, data_models: Vec<String>) -> Self {
        Self {
            subject: subject.into(),
            data_models,
        }
    }

    /// Load a batch configuration from a local file or URL
    pub async fn load(
        loader: &dyn DocumentLoader,
        location: &DocumentLocation,
    ) -> Result<Self, BatchError> {
        let value = loader.load_json(location).await?;
        serde_json::from_value(value)
            .map_err(|e| BatchError::InvalidConfig(format!("{}: {}", location, e)))
    }
}
