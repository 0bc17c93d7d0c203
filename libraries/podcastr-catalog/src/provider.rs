//! Episode provider abstraction and the file-backed catalog.

use crate::error::{CatalogError, Result};
use crate::types::{ApiEpisode, CatalogEpisode};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Source of catalog episodes.
#[async_trait]
pub trait EpisodeProvider: Send + Sync {
    /// Most recent episodes, newest first, at most `limit` of them.
    async fn latest_episodes(&self, limit: usize) -> Result<Vec<CatalogEpisode>>;

    /// A single episode by id.
    async fn episode(&self, id: &str) -> Result<CatalogEpisode>;
}

/// json-server style database file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    episodes: Vec<ApiEpisode>,
}

/// In-memory catalog loaded from a `{ "episodes": [...] }` JSON document.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    /// Sorted newest first
    episodes: Vec<CatalogEpisode>,
}

impl StaticCatalog {
    /// Build from already normalized episodes.
    pub fn new(mut episodes: Vec<CatalogEpisode>) -> Self {
        episodes.sort_by(|a, b| b.published_on.cmp(&a.published_on));
        Self { episodes }
    }

    /// Parse a catalog document.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let episodes = file
            .episodes
            .into_iter()
            .map(ApiEpisode::normalize)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(episodes))
    }

    /// Read and parse a catalog file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading catalog file");

        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;

        info!(path = %path.display(), episodes = catalog.len(), "Catalog file loaded");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

#[async_trait]
impl EpisodeProvider for StaticCatalog {
    async fn latest_episodes(&self, limit: usize) -> Result<Vec<CatalogEpisode>> {
        Ok(self.episodes.iter().take(limit).cloned().collect())
    }

    async fn episode(&self, id: &str) -> Result<CatalogEpisode> {
        self.episodes
            .iter()
            .find(|e| e.episode.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}
