//! Smart Data Models to PostgreSQL
//!
//! Converts `model.yaml` data model documents into `CREATE TYPE` /
//! `CREATE TABLE` statements.
//!
//! Provides:
//! - The schema mapper (pure, synchronous, no I/O)
//! - PostgreSQL rendering of the generated schema
//! - Document loading from URLs and local files
//! - A batch runner over a configured list of data models
//! - An HTTP endpoint (feature `server`)
//! - A CLI (feature `cli`)

pub mod batch;
pub mod cli;
pub mod config;
pub mod convert;
pub mod export;
pub mod loader;
pub mod mapping;
pub mod models;
#[cfg(feature = "server")]
pub mod server;
pub mod validation;

// Re-export commonly used types
pub use batch::{BatchConfig, BatchError, BatchReport, BatchRunner};
pub use config::{AppConfig, ConfigError};
pub use convert::{ConversionError, convert_location};
pub use export::PostgresExporter;
pub use loader::{
    DefaultDocumentLoader, DocumentLoader, DocumentLocation, LoadError, MemoryDocumentLoader,
    UrlTemplate,
};
pub use mapping::{MappingConfig, MappingError, MappingResult, SchemaMapper, generate_sql};
pub use models::{DataModelDocument, GeneratedSchema, SqlColumn, SqlEnumType, SqlType};
pub use validation::{IdentifierIssue, check_identifiers};
