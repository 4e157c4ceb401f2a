//! PostgreSQL exporter for generated schemas.
//!
//! Output layout:
//!
//! ```text
//! CREATE TYPE a_type AS ENUM ('x','y');
//! CREATE TYPE b_type AS ENUM ('z');
//! CREATE TABLE Entity (a a_type, b b_type, c TEXT);
//! ```
//!
//! Enum declarations are joined by newlines and followed by a newline and the
//! table statement, so a schema without enums starts with an empty line.
//! Identifiers are written as they appear in the source document; enum
//! members are SQL string literals with embedded quotes doubled.

use crate::models::{GeneratedSchema, SqlEnumType};

/// Exporter for PostgreSQL `CREATE TYPE` / `CREATE TABLE` text.
pub struct PostgresExporter;

impl PostgresExporter {
    /// Render one enum declaration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sdm_sql_schema::export::PostgresExporter;
    /// use sdm_sql_schema::models::SqlEnumType;
    ///
    /// let decl = PostgresExporter::export_enum(&SqlEnumType::new(
    ///     "status_type",
    ///     vec!["a".to_string(), "it's".to_string()],
    /// ));
    /// assert_eq!(decl, "CREATE TYPE status_type AS ENUM ('a','it''s');");
    /// ```
    pub fn export_enum(enum_type: &SqlEnumType) -> String {
        let members: Vec<String> = enum_type
            .values
            .iter()
            .map(|v| Self::quote_literal(v))
            .collect();
        format!(
            "CREATE TYPE {} AS ENUM ({});",
            enum_type.name,
            members.join(",")
        )
    }

    /// Render the `CREATE TABLE` statement
    pub fn export_table(schema: &GeneratedSchema) -> String {
        let columns: Vec<String> = schema.columns.iter().map(|c| c.to_string()).collect();
        format!("CREATE TABLE {} ({});", schema.entity, columns.join(", "))
    }

    /// Render the complete schema text
    pub fn render(schema: &GeneratedSchema) -> String {
        let types: Vec<String> = schema.enum_types.iter().map(Self::export_enum).collect();
        let mut sql = types.join("\n");
        sql.push('\n');
        sql.push_str(&Self::export_table(schema));
        sql
    }

    /// Quote a value as a SQL string literal
    pub fn quote_literal(value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }
}
