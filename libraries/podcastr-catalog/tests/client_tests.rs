//! Tests for the HTTP catalog client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real catalog.

use podcastr_catalog::{
    CatalogClient, CatalogConfig, CatalogError, EpisodeProvider, HomeListing,
};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn episode_record(id: &str, published_at: &str, duration: Value) -> Value {
    json!({
        "id": id,
        "title": format!("Faladev | {}", id),
        "members": "Diego Fernandes, Richard Hendricks",
        "published_at": published_at,
        "thumbnail": format!("https://cdn.example.com/{}.jpg", id),
        "description": "<p>Episódio</p>",
        "file": {
            "url": format!("https://cdn.example.com/{}.m4a", id),
            "type": "audio/x-m4a",
            "duration": duration
        }
    })
}

async fn create_client(server: &MockServer) -> CatalogClient {
    CatalogClient::new(CatalogConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_valid_http_url() {
        assert!(CatalogClient::new(CatalogConfig::new("http://localhost:3333")).is_ok());
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        let result = CatalogClient::new(CatalogConfig::new("localhost:3333"));
        assert!(matches!(result, Err(CatalogError::InvalidUrl(_))));
    }

    #[test]
    fn test_url_normalization_multiple_trailing_slashes() {
        let client = CatalogClient::new(CatalogConfig::new("https://catalog.example.com///")).unwrap();
        assert_eq!(client.base_url(), "https://catalog.example.com");
    }
}

// =============================================================================
// Latest Episodes Tests
// =============================================================================

mod latest_episodes {
    use super::*;

    #[tokio::test]
    async fn test_sends_sort_and_limit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .and(query_param("_limit", "12"))
            .and(query_param("_sort", "published_at"))
            .and(query_param("_order", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                episode_record("newest", "2021-01-22 15:00:00", json!(2422)),
                episode_record("older", "2021-01-08 15:00:00", json!("3981")),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let episodes = client.latest_episodes(12).await.unwrap();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].episode.id, "newest");
        assert_eq!(episodes[1].episode.file.duration_secs, 3981);
        assert_eq!(episodes[1].episode.file.duration_display, "01:06:21");
        assert_eq!(episodes[1].published_at, "8 jan 21");
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let result = client.latest_episodes(12).await;

        match result {
            Err(CatalogError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected ServerError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        assert!(matches!(
            client.latest_episodes(12).await,
            Err(CatalogError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_bad_duration_names_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                episode_record("broken", "2021-01-08 15:00:00", json!("unknown")),
            ])))
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        match client.latest_episodes(12).await {
            Err(CatalogError::InvalidRecord { id, .. }) => assert_eq!(id, "broken"),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_catalog() {
        // Nothing listens on the discard port
        let client = CatalogClient::new(CatalogConfig::new("http://127.0.0.1:9")).unwrap();
        assert!(matches!(
            client.latest_episodes(12).await,
            Err(CatalogError::Unreachable(_))
        ));
    }
}

// =============================================================================
// Single Episode Tests
// =============================================================================

mod single_episode {
    use super::*;

    #[tokio::test]
    async fn test_get_episode() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes/a-importancia-da-contribuicao-em-open-source"))
            .respond_with(ResponseTemplate::new(200).set_body_json(episode_record(
                "a-importancia-da-contribuicao-em-open-source",
                "2021-01-08T15:00:00-03:00",
                json!(3981),
            )))
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let episode = client
            .episode("a-importancia-da-contribuicao-em-open-source")
            .await
            .unwrap();

        assert_eq!(episode.published_at, "8 jan 21");
        assert_eq!(episode.description, "<p>Episódio</p>");
    }

    #[tokio::test]
    async fn test_missing_episode() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        assert!(matches!(
            client.episode("missing").await,
            Err(CatalogError::NotFound(id)) if id == "missing"
        ));
    }
}

// =============================================================================
// Homepage Listing Tests
// =============================================================================

mod home_listing {
    use super::*;

    #[tokio::test]
    async fn test_fetch_splits_latest() {
        let server = MockServer::start().await;

        let records: Vec<Value> = (1..=5)
            .map(|day| {
                episode_record(
                    &format!("ep-{}", day),
                    &format!("2021-01-{:02} 15:00:00", 20 - day),
                    json!(600),
                )
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .and(query_param("_limit", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(records)))
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let home = HomeListing::fetch(&client, 12, 2).await.unwrap();

        assert_eq!(home.latest.len(), 2);
        assert_eq!(home.all.len(), 3);
        assert_eq!(home.playlist().len(), 5);
        assert_eq!(home.playlist()[home.queue_index_for_all(0)].id, "ep-3");
    }
}
