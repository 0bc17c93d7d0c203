/// Common test utilities and fixtures
use axum::Router;
use async_trait::async_trait;
use podcastr_catalog::{CatalogEpisode, CatalogError, EpisodeProvider, StaticCatalog};
use podcastr_server::{config::ServerConfig, create_router, state::AppState};
use std::path::PathBuf;
use std::sync::Arc;

/// json-server style catalog with five episodes, deliberately out of order
pub const CATALOG_JSON: &str = r#"{
    "episodes": [
        {
            "id": "como-comecar-na-programacao-em-2021-do-jeito-certo",
            "title": "Como começar na programação em 2021 do jeito certo",
            "members": "Diego Fernandes, Tiago Luchtenberg e Rodrigo Gonçalves",
            "published_at": "2021-01-14 16:00:00",
            "thumbnail": "https://cdn.example.com/comecar.jpg",
            "description": "<p>Episódio sobre carreira</p>",
            "file": { "url": "https://cdn.example.com/comecar.m4a", "type": "audio/x-m4a", "duration": 3390 }
        },
        {
            "id": "a-importancia-da-contribuicao-em-open-source",
            "title": "Faladev #30 | A importância da contribuição em Open Source",
            "members": "Diego Fernandes, João Pedro, Diego Haz e Bruno Lemos",
            "published_at": "2021-01-22 15:00:00",
            "thumbnail": "https://cdn.example.com/opensource.jpg",
            "description": "<p>Episódio sobre open source</p>",
            "file": { "url": "https://cdn.example.com/opensource.m4a", "type": "audio/x-m4a", "duration": "3981" }
        },
        {
            "id": "uma-conversa-sobre-programacao-funcional-e-orientacao-a-objetos",
            "title": "Uma conversa sobre programação funcional e orientação a objetos",
            "members": "Diego Fernandes e Richard Hendricks",
            "published_at": "2021-01-21 15:00:00",
            "thumbnail": "https://cdn.example.com/funcional.jpg",
            "description": "",
            "file": { "url": "https://cdn.example.com/funcional.m4a", "type": "audio/x-m4a", "duration": 2422 }
        },
        {
            "id": "typescript-vale-a-pena",
            "title": "TypeScript vale a pena? Quais as vantagens de usar?",
            "members": "Diego Fernandes, Rodrigo Gonçalves e Maria Dias",
            "published_at": "2021-01-08 15:00:00",
            "thumbnail": "https://cdn.example.com/typescript.jpg",
            "description": "",
            "file": { "url": "https://cdn.example.com/typescript.m4a", "type": "audio/x-m4a", "duration": 2709 }
        },
        {
            "id": "whiteboard-e-entrevistas",
            "title": "Whiteboard e entrevistas técnicas",
            "members": "Diego Fernandes e Guilherme Rodz",
            "published_at": "2021-01-04 15:00:00",
            "thumbnail": "https://cdn.example.com/whiteboard.jpg",
            "description": "",
            "file": { "url": "https://cdn.example.com/whiteboard.m4a", "type": "audio/x-m4a", "duration": 1948 }
        }
    ]
}"#;

pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.catalog.fixture_path = Some(PathBuf::from("server.json"));
    config
}

/// Create a test app backed by the fixture catalog
pub fn create_test_app(config: ServerConfig) -> Router {
    let catalog = StaticCatalog::from_json(CATALOG_JSON).unwrap();
    create_router(AppState::new(Arc::new(catalog), Arc::new(config)))
}

/// Create a test app whose catalog always fails
pub fn create_failing_app() -> Router {
    create_router(AppState::new(Arc::new(FailingCatalog), Arc::new(test_config())))
}

/// Provider standing in for an unreachable catalog
pub struct FailingCatalog;

#[async_trait]
impl EpisodeProvider for FailingCatalog {
    async fn latest_episodes(&self, _limit: usize) -> podcastr_catalog::Result<Vec<CatalogEpisode>> {
        Err(CatalogError::Unreachable("connection refused".to_string()))
    }

    async fn episode(&self, _id: &str) -> podcastr_catalog::Result<CatalogEpisode> {
        Err(CatalogError::Unreachable("connection refused".to_string()))
    }
}
