//! HTTP catalog client.

use crate::error::{CatalogError, Result};
use crate::provider::EpisodeProvider;
use crate::types::{ApiEpisode, CatalogConfig, CatalogEpisode};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client for a json-server style episode catalog.
///
/// # Example
///
/// ```ignore
/// use podcastr_catalog::{CatalogClient, CatalogConfig, EpisodeProvider};
///
/// let client = CatalogClient::new(CatalogConfig::new("http://localhost:3333"))?;
/// let episodes = client.latest_episodes(12).await?;
/// println!("Found {} episodes", episodes.len());
/// ```
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(format!("Podcastr/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Catalog base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        self.http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    CatalogError::Unreachable(e.to_string())
                } else {
                    CatalogError::Request(e)
                }
            })
    }
}

async fn error_from_response(response: reqwest::Response) -> CatalogError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    CatalogError::ServerError { status, message }
}

#[async_trait]
impl EpisodeProvider for CatalogClient {
    async fn latest_episodes(&self, limit: usize) -> Result<Vec<CatalogEpisode>> {
        let url = format!("{}/episodes", self.base_url);
        debug!(url = %url, limit, "Fetching latest episodes");

        let response = self
            .get(
                &url,
                &[
                    ("_limit", limit.to_string()),
                    ("_sort", "published_at".to_string()),
                    ("_order", "desc".to_string()),
                ],
            )
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let records: Vec<ApiEpisode> = response
            .json()
            .await
            .map_err(|e| CatalogError::ParseError(format!("Failed to parse episodes: {}", e)))?;

        let episodes = records
            .into_iter()
            .map(ApiEpisode::normalize)
            .collect::<Result<Vec<_>>>()?;

        info!(count = episodes.len(), "Fetched latest episodes");
        Ok(episodes)
    }

    async fn episode(&self, id: &str) -> Result<CatalogEpisode> {
        let url = format!("{}/episodes/{}", self.base_url, id);
        debug!(url = %url, "Fetching episode");

        let response = self.get(&url, &[]).await?;

        match response.status() {
            status if status.is_success() => {
                let record: ApiEpisode = response.json().await.map_err(|e| {
                    CatalogError::ParseError(format!("Failed to parse episode: {}", e))
                })?;
                record.normalize()
            }
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound(id.to_string())),
            _ => Err(error_from_response(response).await),
        }
    }
}
