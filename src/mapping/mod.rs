//! Schema mapping module for turning data model documents into PostgreSQL DDL
//!
//! This module provides:
//! - The fixed `type` and `format` tables
//! - Enum type declarations for attributes with an `enum` constraint
//! - `allOf` flattening into sibling columns
//! - A tolerant (placeholder) or strict policy for unmapped values
//!
//! # Example
//!
//! ```rust
//! use sdm_sql_schema::mapping::{MappingConfig, SchemaMapper};
//! use sdm_sql_schema::models::DataModelDocument;
//!
//! let doc = DataModelDocument::from_yaml_str(r#"
//! Streetlight:
//!   properties:
//!     id:
//!       type: string
//!     status:
//!       type: string
//!       enum: [ok, broken]
//!     dateModified:
//!       type: string
//!       format: date-time
//! "#).unwrap();
//!
//! let mapper = SchemaMapper::with_config(MappingConfig::new());
//! let sql = mapper.map_to_sql(&doc).unwrap();
//! assert_eq!(
//!     sql,
//!     "CREATE TYPE status_type AS ENUM ('ok','broken');\n\
//!      CREATE TABLE Streetlight (id TEXT, status status_type, dateModified TIMESTAMP);"
//! );
//! ```

mod config;
mod error;
mod mapper;
mod types;

pub use config::MappingConfig;
pub use error::{MappingError, MappingResult};
pub use mapper::SchemaMapper;
pub use types::{Format, JsonType};

use crate::models::DataModelDocument;

/// Generate the PostgreSQL schema text for a document with the default mapper
pub fn generate_sql(document: &DataModelDocument) -> MappingResult<String> {
    SchemaMapper::new().map_to_sql(document)
}
