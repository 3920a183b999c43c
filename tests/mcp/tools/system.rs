use radarr_sonarr_mcp::arr::{Service, ServiceSelection};
use radarr_sonarr_mcp::mcp::types::{
    CollectionsParams, CommandName, ExecuteCommandParams, RefreshMonitoredParams,
    ServiceSelectionParams,
};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::{McpTestFixture, extract_tool_result_json, extract_tool_result_text};

fn queued(name: &str) -> serde_json::Value {
    json!({
        "id": 42, "name": name, "status": "queued", "trigger": "manual",
        "queued": "2024-01-05T10:00:00Z", "stateChangeTime": "2024-01-05T10:00:00Z"
    })
}

// ============================================================================
// get_system_status / get_disk_space
// ============================================================================

#[tokio::test]
async fn test_system_status_both() {
    let fixture = McpTestFixture::new().await;
    fixture
        .radarr_get("system/status", json!({"version": "5.2.6.8376", "osName": "ubuntu"}))
        .await;
    fixture
        .radarr_get(
            "health",
            json!([{"source": "IndexerStatusCheck", "type": "warning",
                    "message": "Indexers unavailable", "wikiUrl": "https://wiki.servarr.com"}]),
        )
        .await;
    fixture
        .sonarr_get("system/status", json!({"version": "4.0.1.929"}))
        .await;
    fixture.sonarr_get("health", json!([])).await;

    let server = fixture.server();
    let result = server
        .get_system_status(Parameters(ServiceSelectionParams {
            service: ServiceSelection::Both,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"]["radarr"]["version"], "5.2.6.8376");
    assert_eq!(json_result["status"]["radarr"]["health"][0]["type"], "warning");
    assert_eq!(json_result["status"]["sonarr"]["health"], json!([]));

    let result = fixture
        .text_server()
        .get_system_status(Parameters(ServiceSelectionParams {
            service: ServiceSelection::Both,
        }))
        .await
        .unwrap();
    assert_eq!(
        extract_tool_result_text(&result),
        "System Status:\n\nRADARR: v5.2.6.8376\n  WARNING: Indexers unavailable\n\nSONARR: v4.0.1.929\n  All systems healthy"
    );
}

#[tokio::test]
async fn test_disk_space_percent_used() {
    let fixture = McpTestFixture::new().await;
    fixture
        .sonarr_get(
            "diskspace",
            json!([
                {"path": "/tv", "label": "media", "freeSpace": 250, "totalSpace": 1000},
                {"path": "/boot", "freeSpace": 0, "totalSpace": 0}
            ]),
        )
        .await;

    let result = fixture
        .server()
        .get_disk_space(Parameters(ServiceSelectionParams {
            service: ServiceSelection::Sonarr,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    let disks = &json_result["diskSpace"]["sonarr"];
    assert_eq!(disks[0]["percentUsed"], 75.0);
    assert_eq!(disks[0]["label"], "media");
    assert_eq!(disks[1]["percentUsed"], 0.0);
    assert!(json_result["diskSpace"].get("radarr").is_none());
}

// ============================================================================
// execute_command / refresh_monitored
// ============================================================================

#[tokio::test]
async fn test_execute_movie_command_sends_movie_ids() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/command"))
        .and(body_json(json!({"name": "RefreshMovie", "movieIds": [1]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(queued("RefreshMovie")))
        .expect(1)
        .mount(&fixture.radarr)
        .await;

    let result = fixture
        .server()
        .execute_command(Parameters(ExecuteCommandParams {
            service: Service::Radarr,
            command: CommandName::RefreshMovie,
            movie_id: Some(1),
            series_id: Some(10),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["message"], "Command 'RefreshMovie' has been queued");
    assert_eq!(json_result["command"]["id"], 42);
    assert_eq!(json_result["command"]["stateChangeTime"], "2024-01-05T10:00:00Z");
}

#[tokio::test]
async fn test_execute_shared_command_on_sonarr() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/command"))
        .and(body_json(json!({"name": "RssSync"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(queued("RssSync")))
        .expect(1)
        .mount(&fixture.sonarr)
        .await;

    let result = fixture
        .text_server()
        .execute_command(Parameters(ExecuteCommandParams {
            service: Service::Sonarr,
            command: CommandName::RssSync,
            movie_id: None,
            series_id: None,
        }))
        .await
        .unwrap();

    assert_eq!(
        extract_tool_result_text(&result),
        "Command 'RssSync' has been queued"
    );
}

#[tokio::test]
async fn test_execute_command_rejects_wrong_service() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(queued("RefreshSeries")))
        .expect(0)
        .mount(&fixture.radarr)
        .await;

    let err = fixture
        .server()
        .execute_command(Parameters(ExecuteCommandParams {
            service: Service::Radarr,
            command: CommandName::RefreshSeries,
            movie_id: None,
            series_id: Some(10),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("sonarr"));
}

#[tokio::test]
async fn test_refresh_monitored_picks_command_per_service() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/command"))
        .and(body_json(json!({"name": "RefreshSeries"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(queued("RefreshSeries")))
        .expect(1)
        .mount(&fixture.sonarr)
        .await;

    let result = fixture
        .server()
        .refresh_monitored(Parameters(RefreshMonitoredParams {
            service: Service::Sonarr,
        }))
        .await
        .unwrap();

    assert_eq!(extract_tool_result_json(&result)["command"]["name"], "RefreshSeries");
}

// ============================================================================
// get_collections
// ============================================================================

#[tokio::test]
async fn test_get_collections_by_tmdb_id() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/collection"))
        .and(query_param("tmdbId", "8091"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Alien Collection", "tmdbId": 8091, "monitored": true,
             "qualityProfileId": 4, "rootFolderPath": "/movies",
             "movies": [{"tmdbId": 348, "title": "Alien", "year": 1979},
                        {"tmdbId": 679, "title": "Aliens", "year": 1986}]}
        ])))
        .expect(1)
        .mount(&fixture.radarr)
        .await;

    let result = fixture
        .server()
        .get_collections(Parameters(CollectionsParams {
            tmdb_id: Some(8091),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["count"], 1);
    assert_eq!(json_result["collections"][0]["title"], "Alien Collection");
    assert_eq!(json_result["collections"][0]["movies"][1]["title"], "Aliens");
}
