//! Column model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder token written for a column whose type or format could not be mapped
pub const UNMAPPED_TYPE_TOKEN: &str = "NULL";

/// PostgreSQL column type produced by the mapper
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum SqlType {
    Text,
    Integer,
    Numeric,
    Boolean,
    Json,
    Timestamp,
    Date,
    Time,
    /// A named type created by a `CREATE TYPE ... AS ENUM` declaration
    Enum(String),
    /// The source `type` or `format` had no entry in the mapping tables
    Unmapped,
}

impl SqlType {
    /// The SQL token written into the `CREATE TABLE` column list
    pub fn as_sql(&self) -> &str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Integer => "INTEGER",
            SqlType::Numeric => "NUMERIC",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Json => "JSON",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Enum(name) => name,
            SqlType::Unmapped => UNMAPPED_TYPE_TOKEN,
        }
    }

    pub fn is_unmapped(&self) -> bool {
        matches!(self, SqlType::Unmapped)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A single column of the generated table
///
/// # Example
///
/// ```rust
/// use sdm_sql_schema::models::{SqlColumn, SqlType};
///
/// let column = SqlColumn::new("name", SqlType::Text);
/// assert_eq!(column.to_string(), "name TEXT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlColumn {
    /// Column name, taken verbatim from the attribute name
    pub name: String,
    /// Column type
    pub sql_type: SqlType,
}

impl SqlColumn {
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
        }
    }
}

impl fmt::Display for SqlColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.sql_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_type_renders_its_name() {
        let column = SqlColumn::new("status", SqlType::Enum("status_type".to_string()));
        assert_eq!(column.to_string(), "status status_type");
    }

    #[test]
    fn test_unmapped_renders_placeholder() {
        assert_eq!(SqlType::Unmapped.as_sql(), UNMAPPED_TYPE_TOKEN);
        assert!(SqlType::Unmapped.is_unmapped());
        assert!(!SqlType::Json.is_unmapped());
    }
}
