//! Podcastr Server Library
//!
//! HTTP service exposing the episode catalog and player settings to the
//! browser front end.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::Router;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

// Re-export commonly used types for convenience
pub use config::{CatalogSettings, CatalogSource, ServerConfig, ServerSettings};
pub use error::{Result, ServerError};
pub use state::AppState;

/// Full application router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", api::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
