//! Parsed data model document
//!
//! A `model.yaml` document has exactly one top-level key, the entity name,
//! whose value holds a `properties` mapping. `serde_yaml::Mapping` keeps
//! insertion order, so iterating `properties` follows the source document.

use serde_yaml::{Mapping, Value};

use crate::mapping::MappingError;

/// A parsed data model document.
///
/// Construction does not validate the structure; that happens when the
/// entity or its properties are requested, so the mapper can report
/// `InvalidDocument` with a precise message.
///
/// # Example
///
/// ```rust
/// use sdm_sql_schema::models::DataModelDocument;
///
/// let doc = DataModelDocument::from_yaml_str(
///     "Building:\n  properties:\n    name:\n      type: string\n",
/// )
/// .unwrap();
/// assert_eq!(doc.entity_name().unwrap(), "Building");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DataModelDocument {
    root: Value,
}

impl DataModelDocument {
    /// Wrap an already parsed YAML value
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse YAML (or JSON, which is valid YAML) text into a document
    pub fn from_yaml_str(content: &str) -> Result<Self, MappingError> {
        let root: Value = serde_yaml::from_str(content)
            .map_err(|e| MappingError::InvalidDocument(format!("failed to parse document: {}", e)))?;
        Ok(Self::new(root))
    }

    /// Access the underlying YAML value
    pub fn root(&self) -> &Value {
        &self.root
    }

    fn top_level(&self) -> Result<&Mapping, MappingError> {
        self.root.as_mapping().ok_or_else(|| {
            MappingError::InvalidDocument("document root must be a mapping".to_string())
        })
    }

    /// The entity name: the first top-level key, by document order
    pub fn entity_name(&self) -> Result<&str, MappingError> {
        let (key, _) = self.top_level()?.iter().next().ok_or_else(|| {
            MappingError::InvalidDocument("document has no top-level entity key".to_string())
        })?;
        key.as_str().ok_or_else(|| {
            MappingError::InvalidDocument(format!("entity key must be a string, found {:?}", key))
        })
    }

    /// The entity's `properties` mapping
    pub fn properties(&self) -> Result<&Mapping, MappingError> {
        let entity = self.entity_name()?;
        let body = self
            .top_level()?
            .get(entity)
            .and_then(Value::as_mapping)
            .ok_or_else(|| {
                MappingError::InvalidDocument(format!("entity '{}' must be a mapping", entity))
            })?;

        match body.get("properties") {
            Some(Value::Mapping(properties)) => Ok(properties),
            Some(_) => Err(MappingError::InvalidDocument(format!(
                "'properties' of entity '{}' must be a mapping",
                entity
            ))),
            None => Err(MappingError::InvalidDocument(format!(
                "missing required field 'properties' in entity '{}'",
                entity
            ))),
        }
    }
}

impl From<Value> for DataModelDocument {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}
