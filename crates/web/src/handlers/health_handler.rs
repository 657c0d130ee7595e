//! Health check handler.

use axum::{extract::State, response::Json};
use serde::Serialize;

use domain::HashAlgorithm;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Algorithm chosen by the startup probe
    pub algorithm: HashAlgorithm,
}

/// Health check endpoint - reports the selected hashing algorithm.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        algorithm: state.password_service.algorithm(),
    })
}
