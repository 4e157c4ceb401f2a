//! Named enum type declarations

use serde::{Deserialize, Serialize};

/// A `CREATE TYPE <name> AS ENUM (...)` declaration
///
/// Values keep their source order and are not deduplicated. An empty list is
/// allowed and renders as an empty parenthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlEnumType {
    /// Type name, `<attribute>_type` or `<entity>_type` for an attribute named `type`
    pub name: String,
    /// Stringified enum members
    pub values: Vec<String>,
}

impl SqlEnumType {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Derive the type name for an attribute of an entity
    pub fn name_for(entity: &str, attribute: &str) -> String {
        if attribute == "type" {
            format!("{}_type", entity)
        } else {
            format!("{}_type", attribute)
        }
    }
}
