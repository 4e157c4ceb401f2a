//! Configuration for schema mapping

use serde::{Deserialize, Serialize};

/// Configuration for the schema mapper
///
/// With `strict` unset, `type`/`format` values missing from the mapping
/// tables produce a placeholder column type and mapping continues. With
/// `strict` set, they fail the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingConfig {
    pub strict: bool,
}

impl MappingConfig {
    /// Create a new config with default values (tolerant)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a strict config that rejects unmapped types and formats
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Enable/disable strict handling of unmapped values
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}
