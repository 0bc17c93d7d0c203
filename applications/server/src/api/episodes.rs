/// Episodes API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use podcastr_catalog::{CatalogEpisode, HomeListing};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EpisodesQuery {
    /// Overrides the configured number of episodes fetched
    #[serde(default)]
    pub limit: Option<usize>,

    /// Overrides the configured number of "latest" cards
    #[serde(default)]
    pub latest: Option<usize>,
}

/// GET /api/episodes
///
/// Homepage listing: newest episodes split into `latest` and `all`.
pub async fn list_episodes(
    State(app_state): State<AppState>,
    Query(query): Query<EpisodesQuery>,
) -> Result<Json<HomeListing>> {
    let settings = &app_state.config.catalog;
    let limit = query.limit.unwrap_or(settings.limit);
    let latest_count = query.latest.unwrap_or(settings.latest_count);

    if limit == 0 {
        return Err(ServerError::BadRequest(
            "limit must be greater than zero".to_string(),
        ));
    }

    let listing = HomeListing::fetch(app_state.catalog.as_ref(), limit, latest_count).await?;
    tracing::debug!(
        latest = listing.latest.len(),
        all = listing.all.len(),
        "Serving homepage listing"
    );
    Ok(Json(listing))
}

/// GET /api/episodes/:id
pub async fn get_episode(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<CatalogEpisode>> {
    let episode = app_state.catalog.episode(&id).await?;
    Ok(Json(episode))
}
