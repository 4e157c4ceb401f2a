//! CLI command implementations

pub mod batch;
pub mod convert;
pub mod serve;

use std::sync::Arc;

use crate::cli::CliError;
use crate::config::AppConfig;
use crate::loader::{DefaultDocumentLoader, DocumentLoader};

/// Build the loader shared by all commands from the HTTP settings
pub(crate) fn default_loader(config: &AppConfig) -> Result<Arc<dyn DocumentLoader>, CliError> {
    Ok(Arc::new(DefaultDocumentLoader::with_timeout(
        config.http.timeout(),
    )?))
}
