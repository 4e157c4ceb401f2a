//! Error types for schema mapping

use thiserror::Error;

/// Errors that can occur while mapping a data model document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The document lacks a usable entity key or its `properties` mapping
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// A `type` value outside the type table (strict mode only)
    #[error("Unmapped type '{value}' for attribute '{attribute}'")]
    UnmappedType { attribute: String, value: String },

    /// A `format` value outside the format table (strict mode only)
    #[error("Unmapped format '{value}' for attribute '{attribute}'")]
    UnmappedFormat { attribute: String, value: String },
}

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;
