//! CLI error type

use thiserror::Error;

use crate::batch::BatchError;
use crate::config::ConfigError;
use crate::convert::ConversionError;
use crate::loader::LoadError;
use crate::server::ServerError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}
