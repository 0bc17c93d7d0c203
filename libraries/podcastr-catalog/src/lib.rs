//! Podcastr Episode Catalog
//!
//! Episode provider for the Podcastr player.
//!
//! # Features
//!
//! - **HTTP catalog**: fetch episodes from a json-server style API
//! - **Static catalog**: serve episodes from a local JSON document
//! - **Normalization**: numeric durations, `HH:MM:SS` labels, pt-BR dates
//! - **Homepage listing**: latest/all split with queue start indexes
//!
//! # Example
//!
//! ```ignore
//! use podcastr_catalog::{CatalogClient, CatalogConfig, HomeListing};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::new("http://localhost:3333"))?;
//!
//!     let home = HomeListing::fetch(&client, 12, 2).await?;
//!     for episode in &home.latest {
//!         println!("{} ({})", episode.episode.title, episode.published_at);
//!     }
//!
//!     // Queue handed to the player when the first table row is clicked
//!     let queue = home.playlist();
//!     let start = home.queue_index_for_all(0);
//!     println!("Playing {} from {}", queue.len(), start);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod home;
mod normalize;
mod provider;
mod types;

// Re-export main types
pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use home::{HomeListing, DEFAULT_LATEST_COUNT, DEFAULT_LIMIT};
pub use normalize::{format_published_at, parse_duration, parse_published_at};
pub use provider::{EpisodeProvider, StaticCatalog};
pub use types::{ApiDuration, ApiEpisode, ApiFile, CatalogConfig, CatalogEpisode};
