//! Request handlers

use axum::Json;
use axum::extract::{Path, State};
use tracing::{info, warn};

use super::AppState;
use super::response::SchemaResponse;
use crate::convert::{ConversionError, convert_location};

/// `POST /sql-schema/:subject/:datamodel`
pub async fn generate_schema(
    State(state): State<AppState>,
    Path((subject, datamodel)): Path<(String, String)>,
) -> Json<SchemaResponse> {
    match generate(&state, &subject, &datamodel).await {
        Ok(sql) => {
            info!(%subject, %datamodel, "Generated SQL schema");
            Json(SchemaResponse::ok(sql))
        }
        Err(e) => {
            warn!(%subject, %datamodel, "Schema generation failed: {}", e);
            Json(SchemaResponse::failure(e.to_string()))
        }
    }
}

async fn generate(state: &AppState, subject: &str, datamodel: &str) -> Result<String, ConversionError> {
    let location = state.template.expand(subject, datamodel)?;
    convert_location(state.loader.as_ref(), &state.mapper, &location).await
}
