use radarr_sonarr_mcp::arr::{Service, ServiceSelection};
use radarr_sonarr_mcp::mcp::types::{
    HistoryEventType, HistoryParams, ManualImportParams, QueueParams, RemoveFromQueueParams,
};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::{
    McpTestFixture, extract_tool_error_text, extract_tool_result_json, extract_tool_result_text,
};

// ============================================================================
// get_download_queue
// ============================================================================

#[tokio::test]
async fn test_queue_both_services() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/queue"))
        .and(query_param("includeUnknownMovieItems", "true"))
        .and(query_param("pageSize", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1, "pageSize": 50, "totalRecords": 1,
            "records": [{"id": 31, "title": "Alien.1979.1080p", "status": "downloading",
                         "trackedDownloadStatus": "ok", "size": 2000.0, "sizeleft": 500.0,
                         "timeleft": "00:10:00"}]
        })))
        .expect(1)
        .mount(&fixture.radarr)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/queue"))
        .and(query_param("includeUnknownSeriesItems", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1, "pageSize": 50, "totalRecords": 0, "records": []
        })))
        .expect(1)
        .mount(&fixture.sonarr)
        .await;

    let result = fixture
        .server()
        .get_download_queue(Parameters(QueueParams {
            service: ServiceSelection::Both,
            include_unknown_items: Some(true),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    let radarr = &json_result["queues"]["radarr"];
    assert_eq!(radarr["count"], 1);
    assert_eq!(radarr["items"][0]["id"], 31);
    assert_eq!(radarr["items"][0]["progress"], 75.0);
    assert_eq!(radarr["items"][0]["trackedDownloadStatus"], "ok");
    assert_eq!(json_result["queues"]["sonarr"]["count"], 0);
}

#[tokio::test]
async fn test_queue_single_service_text() {
    let fixture = McpTestFixture::new().await;
    fixture
        .sonarr_get(
            "queue",
            json!({
                "totalRecords": 1,
                "records": [{"id": 8, "title": "Lost.S01E01", "status": "queued", "size": 0, "sizeleft": 0}]
            }),
        )
        .await;

    let result = fixture
        .text_server()
        .get_download_queue(Parameters(QueueParams {
            service: ServiceSelection::Sonarr,
            include_unknown_items: None,
        }))
        .await
        .unwrap();

    assert_eq!(
        extract_tool_result_text(&result),
        "Download Queue:\n\nSONARR (1 items):\n  Lost.S01E01 - queued"
    );
}

#[tokio::test]
async fn test_queue_both_fails_when_one_service_fails() {
    let fixture = McpTestFixture::new().await;
    fixture
        .radarr_get("queue", json!({"totalRecords": 0, "records": []}))
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/queue"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&fixture.sonarr)
        .await;

    let result = fixture
        .server()
        .get_download_queue(Parameters(QueueParams {
            service: ServiceSelection::Both,
            include_unknown_items: None,
        }))
        .await
        .unwrap();

    assert_eq!(
        extract_tool_error_text(&result),
        "Error: Sonarr API returned 500 Internal Server Error: Internal Server Error"
    );
}

// ============================================================================
// remove_from_queue
// ============================================================================

#[tokio::test]
async fn test_remove_from_queue_defaults() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/queue/31"))
        .and(query_param("removeFromClient", "true"))
        .and(query_param("blocklist", "false"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&fixture.radarr)
        .await;

    let result = fixture
        .server()
        .remove_from_queue(Parameters(RemoveFromQueueParams {
            service: Service::Radarr,
            id: 31,
            remove_from_client: None,
            blocklist: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    assert_eq!(
        json_result["message"],
        "Queue item 31 has been removed from radarr"
    );
    assert_eq!(json_result["removeFromClient"], true);
    assert_eq!(json_result["blocklist"], false);
}

#[tokio::test]
async fn test_remove_from_queue_with_blocklist() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/queue/8"))
        .and(query_param("removeFromClient", "false"))
        .and(query_param("blocklist", "true"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&fixture.sonarr)
        .await;

    let result = fixture
        .server()
        .remove_from_queue(Parameters(RemoveFromQueueParams {
            service: Service::Sonarr,
            id: 8,
            remove_from_client: Some(false),
            blocklist: Some(true),
        }))
        .await
        .unwrap();

    assert_eq!(extract_tool_result_json(&result)["blocklist"], true);
}

// ============================================================================
// get_history
// ============================================================================

#[tokio::test]
async fn test_history_query_and_clamping() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/history"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "250"))
        .and(query_param("sortKey", "date"))
        .and(query_param("sortDirection", "descending"))
        .and(query_param("eventType", "downloadFolderImported"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1, "pageSize": 250, "totalRecords": 1,
            "records": [{"id": 1, "movieId": 1, "sourceTitle": "Alien.1979.1080p",
                         "eventType": "downloadFolderImported", "date": "2024-01-05T10:00:00Z",
                         "quality": {"quality": {"name": "Bluray-1080p"}}}]
        })))
        .expect(1)
        .mount(&fixture.radarr)
        .await;

    let result = fixture
        .server()
        .get_history(Parameters(HistoryParams {
            service: Service::Radarr,
            page_size: Some(1000),
            page: Some(0),
            event_type: Some(HistoryEventType::DownloadFolderImported),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["pageSize"], 250);
    assert_eq!(json_result["totalRecords"], 1);
    assert_eq!(json_result["records"][0]["sourceTitle"], "Alien.1979.1080p");
    assert_eq!(
        json_result["records"][0]["quality"]["quality"]["name"],
        "Bluray-1080p"
    );
}

// ============================================================================
// manual_import
// ============================================================================

#[tokio::test]
async fn test_manual_import_sends_service_specific_id() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/manualimport"))
        .and(query_param("path", "/downloads/Lost.S01"))
        .and(query_param("seriesId", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"path": "/downloads/Lost.S01/Lost.S01E01.mkv", "relativePath": "Lost.S01E01.mkv",
             "size": 1000, "rejections": []}
        ])))
        .expect(1)
        .mount(&fixture.sonarr)
        .await;

    let result = fixture
        .server()
        .manual_import(Parameters(ManualImportParams {
            service: Service::Sonarr,
            path: "/downloads/Lost.S01".to_string(),
            // Radarr-only parameter, ignored for Sonarr
            movie_id: Some(99),
            series_id: Some(10),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["count"], 1);
    assert_eq!(json_result["items"][0]["relativePath"], "Lost.S01E01.mkv");
}

#[tokio::test]
async fn test_manual_import_rejects_blank_path() {
    let fixture = McpTestFixture::new().await;

    let err = fixture
        .server()
        .manual_import(Parameters(ManualImportParams {
            service: Service::Radarr,
            path: "".to_string(),
            movie_id: None,
            series_id: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}
