/// API route modules
pub mod episodes;
pub mod health;
pub mod player;

use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes served under `/api`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/episodes", get(episodes::list_episodes))
        .route("/episodes/:id", get(episodes::get_episode))
        .route("/player/config", get(player::player_config))
}
