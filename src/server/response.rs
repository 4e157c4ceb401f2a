//! Response body for the schema endpoint

use serde::{Deserialize, Serialize};

/// `{"success": true, "sql_schema": "..."}` or `{"success": false, "error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SchemaResponse {
    pub fn ok(sql_schema: impl Into<String>) -> Self {
        Self {
            success: true,
            sql_schema: Some(sql_schema.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            sql_schema: None,
            error: Some(error.into()),
        }
    }
}
