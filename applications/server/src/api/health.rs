/// Health check API routes
use crate::{config::CatalogSource, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// "remote" or "fixture"
    pub catalog: String,
}

/// GET /api/health - Health check endpoint
pub async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let catalog = match app_state.config.catalog.source() {
        Ok(CatalogSource::Remote(_)) => "remote",
        Ok(CatalogSource::Fixture(_)) => "fixture",
        Err(_) => "unconfigured",
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog: catalog.to_string(),
    })
}
