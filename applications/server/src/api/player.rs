/// Player settings API routes
use crate::state::AppState;
use axum::{extract::State, Json};
use podcastr_playback::PlaybackConfig;

/// GET /api/player/config - initial flags for a browser player session
pub async fn player_config(State(app_state): State<AppState>) -> Json<PlaybackConfig> {
    Json(app_state.config.player)
}
