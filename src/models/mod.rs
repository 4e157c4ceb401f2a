//! Models module
//!
//! Defines the input document wrapper and the SQL structures derived from it.
//! All types are plain values: they are produced by a single mapping call and
//! carry no state between calls.

pub mod column;
pub mod document;
pub mod enum_type;
pub mod schema;

pub use column::{SqlColumn, SqlType};
pub use document::DataModelDocument;
pub use enum_type::SqlEnumType;
pub use schema::GeneratedSchema;
