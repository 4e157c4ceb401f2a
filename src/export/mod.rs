//! Export functionality
//!
//! Renders generated schemas as PostgreSQL DDL text.

pub mod sql;

pub use sql::PostgresExporter;
