//! Generated schema

use serde::{Deserialize, Serialize};

use super::column::SqlColumn;
use super::enum_type::SqlEnumType;

/// The result of mapping one data model document
///
/// Holds the enum declarations in the order they were encountered and the
/// table columns in accumulation order. Rendering to text is done by
/// [`crate::export::PostgresExporter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSchema {
    /// Table name (the entity name)
    pub entity: String,
    pub enum_types: Vec<SqlEnumType>,
    pub columns: Vec<SqlColumn>,
}

impl GeneratedSchema {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            enum_types: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Look up a column by name (first match)
    pub fn column(&self, name: &str) -> Option<&SqlColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns whose type could not be mapped
    pub fn unmapped_columns(&self) -> impl Iterator<Item = &SqlColumn> {
        self.columns.iter().filter(|c| c.sql_type.is_unmapped())
    }

    /// Render the schema as PostgreSQL text
    pub fn to_sql(&self) -> String {
        crate::export::PostgresExporter::render(self)
    }
}
