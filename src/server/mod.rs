//! HTTP endpoint
//!
//! `POST /sql-schema/:subject/:datamodel` loads the model document derived
//! from the endpoint template and answers with the generated schema. The
//! status is always 200; failures are reported in the body.

use axum::Router;
use axum::routing::post;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::loader::{DocumentLoader, UrlTemplate};
use crate::mapping::SchemaMapper;

pub mod handlers;
pub mod response;

pub use response::SchemaResponse;

/// Errors starting or running the server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {message}")]
    Bind { addr: SocketAddr, message: String },
    #[error("Server error: {0}")]
    Serve(String),
}

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<dyn DocumentLoader>,
    pub template: UrlTemplate,
    pub mapper: SchemaMapper,
}

impl AppState {
    pub fn new(loader: Arc<dyn DocumentLoader>, template: UrlTemplate, mapper: SchemaMapper) -> Self {
        Self {
            loader,
            template,
            mapper,
        }
    }
}

/// Build the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/sql-schema/:subject/:datamodel", post(handlers::generate_schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind {
            addr,
            message: e.to_string(),
        })?;

    tracing::info!(%addr, "Starting SQL schema endpoint");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
