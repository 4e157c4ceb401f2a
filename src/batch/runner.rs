//! Batch runner
//!
//! Converts each configured data model in order. A failing model is recorded
//! in the report and the remaining models are still processed.

use std::sync::Arc;
use tracing::{info, warn};

use super::BatchConfig;
use crate::convert::{ConversionError, convert_location};
use crate::loader::{DocumentLoader, DocumentLocation, UrlTemplate};
use crate::mapping::SchemaMapper;

/// Comment placed above each exported schema
pub fn export_header(subject: &str, data_model: &str) -> String {
    format!(
        "/* (Beta) Export of data model {} of the subject {} for a PostgreSQL database. \
         Pending translation of enumerations and multityped attributes */",
        data_model, subject
    )
}

/// Result for one configured data model
#[derive(Debug)]
pub struct BatchOutcome {
    pub data_model: String,
    /// Header comment and generated SQL, or the reason the model failed
    pub result: Result<String, ConversionError>,
}

/// Results of a batch run, in configuration order
#[derive(Debug)]
pub struct BatchReport {
    pub subject: String,
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs a batch of conversions against a document loader
pub struct BatchRunner {
    loader: Arc<dyn DocumentLoader>,
    mapper: SchemaMapper,
    template: UrlTemplate,
    official_list: Option<DocumentLocation>,
}

impl BatchRunner {
    pub fn new(loader: Arc<dyn DocumentLoader>, mapper: SchemaMapper, template: UrlTemplate) -> Self {
        Self {
            loader,
            mapper,
            template,
            official_list: None,
        }
    }

    /// Check the configured subject against an official data model list
    pub fn with_official_list(mut self, location: DocumentLocation) -> Self {
        self.official_list = Some(location);
        self
    }

    pub async fn run(&self, config: &BatchConfig) -> BatchReport {
        info!(
            "Processing {} data model(s) of subject {}",
            config.data_models.len(),
            config.subject
        );

        if let Some(location) = &self.official_list {
            self.check_official_list(location, &config.subject).await;
        }

        let mut outcomes = Vec::with_capacity(config.data_models.len());
        for data_model in &config.data_models {
            let result = self
                .convert(&config.subject, data_model)
                .await
                .map(|sql| format!("{}\n{}", export_header(&config.subject, data_model), sql));
            if let Err(e) = &result {
                warn!("Failed to convert {}: {}", data_model, e);
            }
            outcomes.push(BatchOutcome {
                data_model: data_model.clone(),
                result,
            });
        }

        let report = BatchReport {
            subject: config.subject.clone(),
            outcomes,
        };
        info!(
            "Batch finished: {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        report
    }

    async fn convert(&self, subject: &str, data_model: &str) -> Result<String, ConversionError> {
        let location = self.template.expand(subject, data_model)?;
        convert_location(self.loader.as_ref(), &self.mapper, &location).await
    }

    /// The list is advisory: failures to load it are logged and ignored.
    async fn check_official_list(&self, location: &DocumentLocation, subject: &str) {
        let list = match self.loader.load_json(location).await {
            Ok(list) => list,
            Err(e) => {
                warn!("Could not load official data model list: {}", e);
                return;
            }
        };

        let Some(entries) = list.get("officialList").and_then(|v| v.as_array()) else {
            warn!("Official data model list at {} has no 'officialList' array", location);
            return;
        };

        let known = entries.iter().any(|entry| {
            entry.get("repoName").and_then(|v| v.as_str()) == Some(subject)
        });
        if known {
            info!("Subject {} found in official list ({} entries)", subject, entries.len());
        } else {
            warn!("Subject {} is not in the official data model list", subject);
        }
    }
}
