//! Batch conversion of configured data models

pub mod config;
pub mod runner;

pub use config::BatchConfig;
pub use runner::{BatchOutcome, BatchReport, BatchRunner, export_header};

use crate::loader::LoadError;

/// Errors that stop a batch before any model is processed
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Invalid batch configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Load(#[from] LoadError),
}
