/// Shared application state
use crate::{
    config::{CatalogSource, ServerConfig},
    error::Result,
};
use podcastr_catalog::{CatalogClient, EpisodeProvider, StaticCatalog};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn EpisodeProvider>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn EpisodeProvider>, config: Arc<ServerConfig>) -> Self {
        Self { catalog, config }
    }

    /// Build the configured episode catalog
    pub async fn from_config(config: ServerConfig) -> Result<Self> {
        let catalog: Arc<dyn EpisodeProvider> = match config.catalog.source()? {
            CatalogSource::Remote(catalog_config) => {
                tracing::info!(base_url = %catalog_config.base_url, "Using remote episode catalog");
                Arc::new(CatalogClient::new(catalog_config)?)
            }
            CatalogSource::Fixture(path) => Arc::new(StaticCatalog::load(path).await?),
        };

        Ok(Self::new(catalog, Arc::new(config)))
    }
}
