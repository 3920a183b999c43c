use radarr_sonarr_mcp::mcp::{ArrMcpServer, MOVIES_RESOURCE_URI, SERIES_RESOURCE_URI};
use rmcp::ServerHandler;
use rmcp::model::ErrorCode;
use serde_json::{Value, json};

use crate::McpTestFixture;

#[test]
fn test_resource_list() {
    let resources = ArrMcpServer::resource_list();
    let uris: Vec<&str> = resources.iter().map(|r| r.raw.uri.as_str()).collect();

    assert_eq!(uris, vec!["radarr://movies", "sonarr://series"]);
    assert!(
        resources
            .iter()
            .all(|r| r.raw.mime_type.as_deref() == Some("application/json"))
    );
}

#[tokio::test]
async fn test_server_advertises_tools_and_resources() {
    let fixture = McpTestFixture::new().await;
    let info = fixture.server().get_info();

    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.resources.is_some());
    assert!(info.instructions.unwrap().contains("radarr://movies"));
}

#[tokio::test]
async fn test_read_movies_resource() {
    let fixture = McpTestFixture::new().await;
    fixture
        .radarr_get(
            "movie",
            json!([
                {"id": 1, "title": "Alien", "year": 1979, "monitored": true, "hasFile": true,
                 "status": "released", "overview": "In space no one can hear you scream."}
            ]),
        )
        .await;

    let text = fixture
        .server()
        .read_resource_uri(MOVIES_RESOURCE_URI)
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["count"], 1);
    assert_eq!(
        value["movies"][0],
        json!({"id": 1, "title": "Alien", "year": 1979, "monitored": true, "hasFile": true, "status": "released"})
    );
}

#[tokio::test]
async fn test_read_series_resource() {
    let fixture = McpTestFixture::new().await;
    fixture
        .sonarr_get(
            "series",
            json!([
                {"id": 10, "title": "Lost", "year": 2004, "monitored": true, "status": "ended",
                 "statistics": {"episodeCount": 121, "episodeFileCount": 100}}
            ]),
        )
        .await;

    let text = fixture
        .server()
        .read_resource_uri(SERIES_RESOURCE_URI)
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["series"][0]["episodeCount"], 121);
    assert_eq!(value["series"][0]["episodeFileCount"], 100);
}

#[tokio::test]
async fn test_read_unknown_resource() {
    let fixture = McpTestFixture::new().await;

    let err = fixture
        .server()
        .read_resource_uri("radarr://queue")
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
}

#[tokio::test]
async fn test_read_resource_remote_failure() {
    let fixture = McpTestFixture::new().await;

    // No mock mounted: the server answers 404
    let err = fixture
        .server()
        .read_resource_uri(SERIES_RESOURCE_URI)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    assert!(err.message.contains("Sonarr API returned 404"));
}
