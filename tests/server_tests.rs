//! HTTP endpoint tests

#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sdm_sql_schema::loader::{MemoryDocumentLoader, UrlTemplate};
use sdm_sql_schema::mapping::{MappingConfig, SchemaMapper};
use sdm_sql_schema::server::{AppState, SchemaResponse, create_router};
use std::sync::Arc;
use tower::ServiceExt;

const TEMPLATE: &str = "mem://dataModel.{subject}/{datamodel}/model.yaml";

fn state(mapper: SchemaMapper) -> AppState {
    let loader = MemoryDocumentLoader::new()
        .with_document(
            "mem://dataModel.Streetlighting/Streetlight/model.yaml",
            "Streetlight:\n  properties:\n    status:\n      type: string\n      enum: [ok, defectiveLamp]\n    dateLastLampChange:\n      type: string\n      format: date-time\n",
        )
        .with_document(
            "mem://dataModel.Streetlighting/Broken/model.yaml",
            "Broken:\n  description: missing properties\n",
        )
        .with_document(
            "mem://dataModel.Streetlighting/Device/model.yaml",
            "Device:\n  properties:\n    ipAddress:\n      type: string\n      format: ipv4\n",
        );
    AppState::new(Arc::new(loader), UrlTemplate::new(TEMPLATE), mapper)
}

async fn post(state: AppState, uri: &str) -> (StatusCode, SchemaResponse) {
    let response = create_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

mod endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_generates_schema() {
        let (status, body) = post(state(SchemaMapper::new()), "/sql-schema/Streetlighting/Streetlight").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert!(body.error.is_none());
        assert_eq!(
            body.sql_schema.unwrap(),
            "CREATE TYPE status_type AS ENUM ('ok','defectiveLamp');\n\
             CREATE TABLE Streetlight (status status_type, dateLastLampChange TIMESTAMP);"
        );
    }

    #[tokio::test]
    async fn test_missing_model_is_reported_in_body() {
        let (status, body) = post(state(SchemaMapper::new()), "/sql-schema/Streetlighting/Unknown").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.success);
        assert!(body.sql_schema.is_none());
        assert!(body.error.unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn test_invalid_document_is_reported_in_body() {
        let (status, body) = post(state(SchemaMapper::new()), "/sql-schema/Streetlighting/Broken").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.success);
        assert!(body.error.unwrap().contains("properties"));
    }

    #[tokio::test]
    async fn test_encoded_traversal_is_rejected() {
        let (status, body) = post(state(SchemaMapper::new()), "/sql-schema/..%2F..%2Fetc/passwd").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.success);
        assert!(body.error.unwrap().contains("Invalid location"));
    }

    #[tokio::test]
    async fn test_strict_mapping_through_endpoint() {
        let (_, tolerant) = post(state(SchemaMapper::new()), "/sql-schema/Streetlighting/Device").await;
        assert!(tolerant.success);
        assert_eq!(
            tolerant.sql_schema.unwrap(),
            "\nCREATE TABLE Device (ipAddress NULL);"
        );

        let strict = SchemaMapper::with_config(MappingConfig::strict());
        let (status, body) = post(state(strict), "/sql-schema/Streetlighting/Device").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.success);
        assert!(body.error.unwrap().contains("ipv4"));
    }

    #[tokio::test]
    async fn test_get_is_not_allowed() {
        let response = create_router(state(SchemaMapper::new()))
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/sql-schema/Streetlighting/Streetlight")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
