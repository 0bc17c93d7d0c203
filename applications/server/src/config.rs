/// Server configuration
use crate::error::{Result, ServerError};
use podcastr_catalog::{CatalogConfig, DEFAULT_LATEST_COUNT, DEFAULT_LIMIT};
use podcastr_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    /// Initial settings handed to browser player sessions
    #[serde(default)]
    pub player: PlaybackConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// json-server style catalog API
    #[serde(default)]
    pub base_url: Option<String>,

    /// Local `{ "episodes": [...] }` document, used instead of `base_url`
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,

    /// Episodes fetched for the homepage
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Episodes shown as "latest" cards
    #[serde(default = "default_latest_count")]
    pub latest_count: usize,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Where episodes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(CatalogConfig),
    Fixture(PathBuf),
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` (or `config.toml` when absent) if the file exists, then
    /// applies `PODCASTR_`-prefixed environment variables, with `__`
    /// between nesting levels (e.g. `PODCASTR_CATALOG__BASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = path.map_or_else(|| PathBuf::from("config.toml"), Path::to_path_buf);
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        } else if path.is_some() {
            return Err(ServerError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        // Override with environment variables (prefixed with PODCASTR_)
        settings = settings.add_source(
            config::Environment::with_prefix("PODCASTR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.catalog.source()?;

        if self.catalog.limit == 0 {
            return Err(ServerError::Config(
                "Catalog limit must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

impl CatalogSettings {
    /// Resolve the configured episode source
    pub fn source(&self) -> Result<CatalogSource> {
        match (&self.base_url, &self.fixture_path) {
            (Some(base_url), None) => Ok(CatalogSource::Remote(CatalogConfig {
                timeout_secs: self.timeout_secs,
                ..CatalogConfig::new(base_url.clone())
            })),
            (None, Some(path)) => Ok(CatalogSource::Fixture(path.clone())),
            (Some(_), Some(_)) => Err(ServerError::Config(
                "Set either catalog.base_url or catalog.fixture_path, not both".to_string(),
            )),
            (None, None) => Err(ServerError::Config(
                "An episode catalog is required (set PODCASTR_CATALOG__BASE_URL or PODCASTR_CATALOG__FIXTURE_PATH)"
                    .to_string(),
            )),
        }
    }
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_latest_count() -> usize {
    DEFAULT_LATEST_COUNT
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            fixture_path: None,
            limit: default_limit(),
            latest_count: default_latest_count(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
