//! Schema mapper
//!
//! Walks the `properties` of a data model document once, in document order,
//! and derives the enum declarations and table columns.
//!
//! Column type selection per attribute:
//! 1. `format` (looked up in the format table)
//! 2. `enum` (a new named enum type)
//! 3. `type` (looked up in the type table)
//! 4. nothing of the above: `JSON`
//!
//! An attribute named `id` is always `TEXT`. An attribute named `allOf` whose
//! value is a sequence is flattened into sibling columns at its position.

use serde_yaml::{Mapping, Value};
use tracing::{debug, info, warn};

use super::config::MappingConfig;
use super::error::{MappingError, MappingResult};
use super::types::{Format, JsonType};
use crate::models::{DataModelDocument, GeneratedSchema, SqlColumn, SqlEnumType, SqlType};

const ID_ATTRIBUTE: &str = "id";
const ALL_OF_ATTRIBUTE: &str = "allOf";

/// Which table an unmapped value was looked up in
#[derive(Debug, Clone, Copy)]
enum Lookup {
    Type,
    Format,
}

/// Maps data model documents to PostgreSQL schema definitions.
///
/// The mapper holds only its configuration and can be shared freely between
/// threads or requests.
///
/// # Example
///
/// ```rust
/// use sdm_sql_schema::mapping::SchemaMapper;
/// use sdm_sql_schema::models::DataModelDocument;
///
/// let doc = DataModelDocument::from_yaml_str(
///     "Building:\n  properties:\n    name:\n      type: string\n",
/// )
/// .unwrap();
/// let sql = SchemaMapper::new().map_to_sql(&doc).unwrap();
/// assert_eq!(sql, "\nCREATE TABLE Building (name TEXT);");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaMapper {
    config: MappingConfig,
}

impl SchemaMapper {
    /// Create a mapper with the default (tolerant) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with a custom configuration
    pub fn with_config(config: MappingConfig) -> Self {
        Self { config }
    }

    /// The configuration this mapper was built with
    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Map a document to its enum declarations and table columns.
    ///
    /// # Errors
    ///
    /// `InvalidDocument` when the entity key or `properties` is missing. In
    /// strict mode, `UnmappedType`/`UnmappedFormat` for values outside the
    /// tables.
    pub fn map(&self, document: &DataModelDocument) -> MappingResult<GeneratedSchema> {
        let entity = document.entity_name()?;
        let properties = document.properties()?;

        let mut schema = GeneratedSchema::new(entity);

        for (key, definition) in properties {
            let attribute = key_text(key);

            if attribute == ALL_OF_ATTRIBUTE
                && let Value::Sequence(parts) = definition
            {
                self.map_all_of(parts, &mut schema)?;
                continue;
            }

            let sql_type = self.map_attribute(entity, &attribute, definition, &mut schema)?;
            push_column(&mut schema, attribute, sql_type);
        }

        let unmapped = schema.unmapped_columns().count();
        if unmapped > 0 {
            warn!(
                "Entity {} has {} column(s) with unmapped types",
                schema.entity, unmapped
            );
        }
        info!(
            "Mapped entity {}: {} column(s), {} enum type(s)",
            schema.entity,
            schema.columns.len(),
            schema.enum_types.len()
        );

        Ok(schema)
    }

    /// Map a document and render it as PostgreSQL text
    pub fn map_to_sql(&self, document: &DataModelDocument) -> MappingResult<String> {
        self.map(document).map(|schema| schema.to_sql())
    }

    fn map_attribute(
        &self,
        entity: &str,
        attribute: &str,
        definition: &Value,
        schema: &mut GeneratedSchema,
    ) -> MappingResult<SqlType> {
        let Some(definition) = definition.as_mapping() else {
            debug!("Attribute {} has no definition mapping, using JSON", attribute);
            return Ok(SqlType::Json);
        };

        if let Some(format) = definition.get("format") {
            return self.lookup(attribute, format, Lookup::Format);
        }

        if let Some(members) = definition.get("enum") {
            let name = SqlEnumType::name_for(entity, attribute);
            let values = match members {
                Value::Sequence(items) => items.iter().map(enum_member_text).collect(),
                other => vec![enum_member_text(other)],
            };
            schema.enum_types.push(SqlEnumType::new(name.clone(), values));
            return Ok(SqlType::Enum(name));
        }

        match definition.get("type") {
            Some(json_type) => self.lookup(attribute, json_type, Lookup::Type),
            None => Ok(SqlType::Json),
        }
    }

    /// Flatten each `allOf` part into sibling columns. Only `format`/`type`
    /// are considered; nested entries carrying neither are skipped.
    fn map_all_of(&self, parts: &[Value], schema: &mut GeneratedSchema) -> MappingResult<()> {
        for part in parts {
            let Some(part) = part.as_mapping() else {
                debug!("Skipping non-mapping allOf element");
                continue;
            };

            for (key, nested) in part {
                let Some(nested) = nested.as_mapping() else {
                    continue;
                };
                let attribute = key_text(key);
                let Some(sql_type) = self.map_nested(&attribute, nested)? else {
                    debug!("Skipping allOf entry {} without type or format", attribute);
                    continue;
                };
                push_column(schema, attribute, sql_type);
            }
        }
        Ok(())
    }

    fn map_nested(&self, attribute: &str, nested: &Mapping) -> MappingResult<Option<SqlType>> {
        if let Some(format) = nested.get("format") {
            return self.lookup(attribute, format, Lookup::Format).map(Some);
        }
        match nested.get("type") {
            Some(json_type) => self.lookup(attribute, json_type, Lookup::Type).map(Some),
            None => Ok(None),
        }
    }

    fn lookup(&self, attribute: &str, value: &Value, table: Lookup) -> MappingResult<SqlType> {
        // `id` is TEXT whatever it declares, so it can never be unmapped
        if attribute == ID_ATTRIBUTE {
            return Ok(SqlType::Text);
        }

        let mapped = value.as_str().and_then(|text| match table {
            Lookup::Type => text.parse::<JsonType>().ok().map(|t| t.sql_type()),
            Lookup::Format => text.parse::<Format>().ok().map(|f| f.sql_type()),
        });
        if let Some(sql_type) = mapped {
            return Ok(sql_type);
        }

        let value = enum_member_text(value);
        if self.config.is_strict() {
            let attribute = attribute.to_string();
            return Err(match table {
                Lookup::Type => MappingError::UnmappedType { attribute, value },
                Lookup::Format => MappingError::UnmappedFormat { attribute, value },
            });
        }

        warn!(
            "Attribute {} has unmapped {:?} value '{}', emitting placeholder",
            attribute, table, value
        );
        Ok(SqlType::Unmapped)
    }
}

fn push_column(schema: &mut GeneratedSchema, attribute: String, sql_type: SqlType) {
    let sql_type = if attribute == ID_ATTRIBUTE {
        SqlType::Text
    } else {
        sql_type
    };
    debug!("Column {} {}", attribute, sql_type);
    schema.columns.push(SqlColumn::new(attribute, sql_type));
}

fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => enum_member_text(other),
    }
}

/// Stringify a YAML value the way it appears in an enum member list.
///
/// Scalars render as `True`/`False`/`None` and plain numbers; nested
/// sequences and mappings render as `[1, 'a']` / `{'k': 'v'}`.
fn enum_member_text(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => enum_member_text(&tagged.value),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(nested_member_text).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", nested_member_text(k), nested_member_text(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

/// Inside a collection, strings are quoted
fn nested_member_text(value: &Value) -> String {
    match value {
        Value::String(s) if s.contains('\'') && !s.contains('"') => format!("\"{}\"", s),
        Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        Value::Tagged(tagged) => nested_member_text(&tagged.value),
        other => enum_member_text(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> DataModelDocument {
        DataModelDocument::from_yaml_str(yaml).unwrap()
    }

    #[test]
    fn test_simple_entity() {
        let schema = SchemaMapper::new()
            .map(&doc("Building:\n  properties:\n    name:\n      type: string\n"))
            .unwrap();
        assert_eq!(schema.entity, "Building");
        assert!(schema.enum_types.is_empty());
        assert_eq!(schema.columns, vec![SqlColumn::new("name", SqlType::Text)]);
    }

    #[test]
    fn test_format_wins_over_type_and_enum() {
        let schema = SchemaMapper::new()
            .map(&doc(
                r#"
Sensor:
  properties:
    observedAt:
      type: string
      format: date-time
      enum: [a, b]
"#,
            ))
            .unwrap();
        assert_eq!(schema.columns[0].sql_type, SqlType::Timestamp);
        assert!(schema.enum_types.is_empty());
    }

    #[test]
    fn test_enum_without_type() {
        let schema = SchemaMapper::new()
            .map(&doc("E:\n  properties:\n    status:\n      enum: [on, off]\n"))
            .unwrap();
        assert_eq!(
            schema.columns[0].sql_type,
            SqlType::Enum("status_type".to_string())
        );
        assert_eq!(schema.enum_types[0].values, vec!["on", "off"]);
    }

    #[test]
    fn test_missing_type_defaults_to_json() {
        let schema = SchemaMapper::new()
            .map(&doc("E:\n  properties:\n    location:\n      description: geo\n    raw: 3\n"))
            .unwrap();
        assert_eq!(schema.columns[0].sql_type, SqlType::Json);
        assert_eq!(schema.columns[1].sql_type, SqlType::Json);
    }

    #[test]
    fn test_unknown_type_is_placeholder_when_tolerant() {
        let schema = SchemaMapper::new()
            .map(&doc("E:\n  properties:\n    kind:\n      type: 'null'\n"))
            .unwrap();
        assert_eq!(schema.columns[0].sql_type, SqlType::Unmapped);
    }

    #[test]
    fn test_multi_typed_attribute_is_unmapped() {
        let schema = SchemaMapper::new()
            .map(&doc("E:\n  properties:\n    value:\n      type: [string, number]\n"))
            .unwrap();
        assert_eq!(schema.columns[0].sql_type, SqlType::Unmapped);
    }

    #[test]
    fn test_unknown_format_rejected_when_strict() {
        let err = SchemaMapper::with_config(MappingConfig::strict())
            .map(&doc("E:\n  properties:\n    ip:\n      type: string\n      format: ipv4\n"))
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::UnmappedFormat {
                attribute: "ip".to_string(),
                value: "ipv4".to_string(),
            }
        );
    }

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_strict_mapping_accepts_any_id_declaration() {
        let mapper = SchemaMapper::with_config(MappingConfig::strict());
        let schema = mapper
            .map(&doc(
                "E:\n  properties:\n    id:\n      type: string\n      format: uuid\n    \
                 allOf:\n      - id:\n          type: [string, number]\n",
            ))
            .unwrap();
        assert_eq!(
            schema.columns,
            vec![
                SqlColumn::new("id", SqlType::Text),
                SqlColumn::new("id", SqlType::Text),
            ]
        );
        assert_eq!(mapper.config(), &MappingConfig::strict());
    }

    #[test]
    fn test_enum_member_text() {
        assert_eq!(enum_member_text(&Value::Bool(true)), "True");
        assert_eq!(enum_member_text(&Value::Bool(false)), "False");
        assert_eq!(enum_member_text(&Value::Null), "None");
        assert_eq!(enum_member_text(&yaml("1.5")), "1.5");
        assert_eq!(enum_member_text(&yaml("it's")), "it's");
        assert_eq!(enum_member_text(&yaml("[1, a, true, null]")), "[1, 'a', True, None]");
        assert_eq!(enum_member_text(&yaml("{k: v}")), "{'k': 'v'}");
        assert_eq!(enum_member_text(&yaml(r#"["it's"]"#)), r#"["it's"]"#);
    }

    #[test]
    fn test_enum_declaration_with_mixed_members() {
        let sql = SchemaMapper::new()
            .map_to_sql(&doc("E:\n  properties:\n    flag:\n      enum: [true, false, null, [1, a]]\n"))
            .unwrap();
        assert_eq!(
            sql,
            "CREATE TYPE flag_type AS ENUM ('True','False','None','[1, ''a'']');\nCREATE TABLE E (flag flag_type);"
        );
    }
}
