//! Health check route

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health check route - public, no envelope
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// ok | error
    status: &'static str,
    version: &'static str,
    /// Configured upstream base URL
    upstream: String,
    environment: String,
}

/// GET /health - liveness and basic configuration
async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        upstream: state.upstream.base_url().to_string(),
        environment: state.config.environment.clone(),
    })
}
