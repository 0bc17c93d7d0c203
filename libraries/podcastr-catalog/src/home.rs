//! Homepage listing
//!
//! The homepage shows the newest episodes as "latest" cards and the rest
//! in an "all episodes" table. Both sections play from one combined queue,
//! so a click in the table starts after the latest cards.

use crate::error::Result;
use crate::provider::EpisodeProvider;
use crate::types::CatalogEpisode;
use podcastr_playback::Episode;
use serde::{Deserialize, Serialize};

/// Episodes fetched for the homepage
pub const DEFAULT_LIMIT: usize = 12;

/// Episodes shown as "latest" cards
pub const DEFAULT_LATEST_COUNT: usize = 2;

/// Homepage sections
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HomeListing {
    pub latest: Vec<CatalogEpisode>,
    pub all: Vec<CatalogEpisode>,
}

impl HomeListing {
    /// Split newest-first episodes into the two sections.
    pub fn split(mut episodes: Vec<CatalogEpisode>, latest_count: usize) -> Self {
        let all = episodes.split_off(latest_count.min(episodes.len()));
        Self {
            latest: episodes,
            all,
        }
    }

    /// Fetch and split the homepage listing.
    pub async fn fetch(
        provider: &dyn EpisodeProvider,
        limit: usize,
        latest_count: usize,
    ) -> Result<Self> {
        let episodes = provider.latest_episodes(limit).await?;
        Ok(Self::split(episodes, latest_count))
    }

    /// Combined queue for either section: latest followed by all
    pub fn playlist(&self) -> Vec<Episode> {
        self.latest
            .iter()
            .chain(&self.all)
            .map(|e| e.episode.clone())
            .collect()
    }

    /// Queue start index for the `index`-th latest card
    pub fn queue_index_for_latest(&self, index: usize) -> usize {
        index
    }

    /// Queue start index for the `index`-th table row
    pub fn queue_index_for_all(&self, index: usize) -> usize {
        index + self.latest.len()
    }

    pub fn len(&self) -> usize {
        self.latest.len() + self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty() && self.all.is_empty()
    }
}
