//! Types for catalog records.

use chrono::NaiveDateTime;
use podcastr_playback::Episode;
use serde::{Deserialize, Serialize};

/// Configuration for the HTTP catalog client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog base URL (e.g., "http://localhost:3333")
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl CatalogConfig {
    /// Create a config with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Episode record as stored by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEpisode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub published_at: String,
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub file: ApiFile,
}

/// Media file as stored by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFile {
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    pub duration: ApiDuration,
}

/// Duration field, which some catalogs store as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiDuration {
    Seconds(f64),
    Text(String),
}

/// Normalized episode, ready for listing and playback.
///
/// The playback fields are flattened so the JSON form can be handed to the
/// browser player as an episode directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEpisode {
    #[serde(flatten)]
    pub episode: Episode,

    /// Publication date rendered for display, e.g. "8 jan 21"
    pub published_at: String,

    /// Publication timestamp, used for ordering
    pub published_on: NaiveDateTime,

    /// HTML description
    pub description: String,

    /// Media MIME type
    pub mime_type: String,
}
