use radarr_sonarr_mcp::mcp::types::{
    EpisodesParams, IdParams, LibraryFilterParams, SearchParams,
};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::{
    McpTestFixture, extract_tool_error_text, extract_tool_result_json, extract_tool_result_text,
};

fn sample_movies() -> Value {
    json!([
        {"id": 1, "title": "Alien", "year": 1979, "tmdbId": 348, "monitored": true, "hasFile": true, "status": "released"},
        {"id": 2, "title": "Aliens", "year": 1986, "tmdbId": 679, "monitored": true, "hasFile": false, "status": "released"},
        {"id": 3, "title": "Alien 3", "year": 1992, "tmdbId": 8077, "monitored": false, "hasFile": false, "status": "released"}
    ])
}

fn sample_series() -> Value {
    json!([
        {"id": 10, "title": "Lost", "year": 2004, "monitored": true,
         "statistics": {"episodeCount": 121, "episodeFileCount": 121}},
        {"id": 11, "title": "Severance", "year": 2022, "monitored": true,
         "statistics": {"episodeCount": 19, "episodeFileCount": 0}},
        {"id": 12, "title": "Dark", "year": 2017, "monitored": false}
    ])
}

// ============================================================================
// get_radarr_movies / get_sonarr_series
// ============================================================================

#[tokio::test]
async fn test_get_radarr_movies_unfiltered() {
    let fixture = McpTestFixture::new().await;
    fixture.radarr_get("movie", sample_movies()).await;

    let result = fixture
        .server()
        .get_radarr_movies(Parameters(LibraryFilterParams::default()))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["count"], 3);
    assert_eq!(json_result["movies"][0]["title"], "Alien");
    assert_eq!(json_result["movies"][0]["tmdbId"], 348);
    assert_eq!(json_result["movies"][0]["hasFile"], true);
}

#[tokio::test]
async fn test_get_radarr_movies_filters() {
    let fixture = McpTestFixture::new().await;
    fixture.radarr_get("movie", sample_movies()).await;
    let server = fixture.server();

    let result = server
        .get_radarr_movies(Parameters(LibraryFilterParams {
            monitored: Some(true),
            downloaded: Some(false),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["count"], 1);
    assert_eq!(json_result["movies"][0]["title"], "Aliens");

    let result = server
        .get_radarr_movies(Parameters(LibraryFilterParams {
            monitored: Some(false),
            downloaded: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["count"], 1);
    assert_eq!(json_result["movies"][0]["id"], 3);
}

#[tokio::test]
async fn test_get_radarr_movies_limit_and_truncation() {
    let fixture = McpTestFixture::new().await;
    let movies: Vec<Value> = (1..=60)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Movie {}", i),
                "overview": "x".repeat(300)
            })
        })
        .collect();
    fixture.radarr_get("movie", Value::Array(movies)).await;

    let result = fixture
        .server()
        .get_radarr_movies(Parameters(LibraryFilterParams::default()))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    // count reflects the library, the list is capped
    assert_eq!(json_result["count"], 60);
    assert_eq!(json_result["movies"].as_array().unwrap().len(), 50);
    let overview = json_result["movies"][0]["overview"].as_str().unwrap();
    assert_eq!(overview.len(), 203);
    assert!(overview.ends_with("..."));
}

#[tokio::test]
async fn test_get_sonarr_series_downloaded_filter() {
    let fixture = McpTestFixture::new().await;
    fixture.sonarr_get("series", sample_series()).await;
    let server = fixture.server();

    let result = server
        .get_sonarr_series(Parameters(LibraryFilterParams {
            monitored: None,
            downloaded: Some(true),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["count"], 1);
    assert_eq!(json_result["series"][0]["title"], "Lost");
    assert_eq!(json_result["series"][0]["episodeFileCount"], 121);

    // Series without statistics count as not downloaded
    let result = server
        .get_sonarr_series(Parameters(LibraryFilterParams {
            monitored: None,
            downloaded: Some(false),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["count"], 2);
    assert_eq!(json_result["series"][1]["episodeCount"], 0);
}

#[tokio::test]
async fn test_get_radarr_movies_text_format() {
    let fixture = McpTestFixture::new().await;
    fixture.radarr_get("movie", sample_movies()).await;

    let result = fixture
        .text_server()
        .get_radarr_movies(Parameters(LibraryFilterParams {
            monitored: Some(true),
            downloaded: None,
        }))
        .await
        .unwrap();

    assert_eq!(
        extract_tool_result_text(&result),
        "2 movies:\n  [1] Alien (1979) - TMDB: 348\n  [2] Aliens (1986) - TMDB: 679"
    );
}

#[tokio::test]
async fn test_remote_failure_is_tool_error() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/movie"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .mount(&fixture.radarr)
        .await;

    let result = fixture
        .server()
        .get_radarr_movies(Parameters(LibraryFilterParams::default()))
        .await
        .unwrap();

    assert_eq!(
        extract_tool_error_text(&result),
        "Error: Radarr API returned 401 Unauthorized: Unauthorized"
    );
}

#[tokio::test]
async fn test_missing_api_key_is_tool_error() {
    let fixture = McpTestFixture::new().await;
    let mut config = fixture.config();
    config.sonarr_config.api_key = String::new();
    let server = radarr_sonarr_mcp::mcp::ArrMcpServer::new(&config).unwrap();

    let result = server
        .get_sonarr_series(Parameters(LibraryFilterParams::default()))
        .await
        .unwrap();

    assert_eq!(
        extract_tool_error_text(&result),
        "Error: Sonarr API key not configured"
    );
}

// ============================================================================
// search
// ============================================================================

#[tokio::test]
async fn test_search_radarr_movies() {
    let fixture = McpTestFixture::new().await;
    let results: Vec<Value> = (0..25)
        .map(|i| json!({"title": format!("Alien {}", i), "tmdbId": 1000 + i, "imdbId": format!("tt{}", i)}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/api/v3/movie/lookup"))
        .and(query_param("term", "alien"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results))
        .expect(1)
        .mount(&fixture.radarr)
        .await;

    let result = fixture
        .server()
        .search_radarr_movies(Parameters(SearchParams {
            term: "  alien ".to_string(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["count"], 25);
    assert_eq!(json_result["movies"].as_array().unwrap().len(), 20);
    assert_eq!(json_result["movies"][0]["tmdbId"], 1000);
    assert_eq!(json_result["movies"][0]["imdbId"], "tt0");
}

#[tokio::test]
async fn test_search_sonarr_series() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/series/lookup"))
        .and(query_param("term", "the wire"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"title": "The Wire", "year": 2002, "tvdbId": 79126}
        ])))
        .mount(&fixture.sonarr)
        .await;

    let result = fixture
        .server()
        .search_sonarr_series(Parameters(SearchParams {
            term: "the wire".to_string(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["count"], 1);
    assert_eq!(json_result["series"][0]["tvdbId"], 79126);
    assert_eq!(json_result["series"][0]["overview"], "");
}

#[tokio::test]
async fn test_search_rejects_blank_term() {
    let fixture = McpTestFixture::new().await;

    let err = fixture
        .server()
        .search_radarr_movies(Parameters(SearchParams {
            term: "   ".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("term"));
}

// ============================================================================
// details & episodes
// ============================================================================

#[tokio::test]
async fn test_get_radarr_movie_by_id() {
    let fixture = McpTestFixture::new().await;
    fixture
        .radarr_get(
            "movie/1",
            json!({
                "id": 1, "title": "Alien", "year": 1979, "runtime": 117,
                "genres": ["Horror", "Science Fiction"], "sizeOnDisk": 1024,
                "path": "/movies/Alien (1979)", "hasFile": true
            }),
        )
        .await;

    let result = fixture
        .server()
        .get_radarr_movie_by_id(Parameters(IdParams { id: 1 }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["movie"]["runtime"], 117);
    assert_eq!(json_result["movie"]["genres"][1], "Science Fiction");
    assert_eq!(json_result["movie"]["path"], "/movies/Alien (1979)");
}

#[tokio::test]
async fn test_get_sonarr_series_by_id() {
    let fixture = McpTestFixture::new().await;
    fixture
        .sonarr_get(
            "series/10",
            json!({
                "id": 10, "title": "Lost", "year": 2004, "network": "ABC",
                "seasons": [{"seasonNumber": 0}, {"seasonNumber": 1}, {"seasonNumber": 2}],
                "statistics": {"episodeCount": 40, "episodeFileCount": 38, "totalEpisodeCount": 45, "sizeOnDisk": 5000}
            }),
        )
        .await;

    let result = fixture
        .server()
        .get_sonarr_series_by_id(Parameters(IdParams { id: 10 }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["series"]["seasonCount"], 3);
    assert_eq!(json_result["series"]["totalEpisodeCount"], 45);
    assert_eq!(json_result["series"]["network"], "ABC");
}

#[tokio::test]
async fn test_get_sonarr_episodes_for_season() {
    let fixture = McpTestFixture::new().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/episode"))
        .and(query_param("seriesId", "10"))
        .and(query_param("seasonNumber", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 100, "seasonNumber": 1, "episodeNumber": 1, "title": "Pilot (1)", "airDate": "2004-09-22", "hasFile": true, "monitored": true},
            {"id": 101, "seasonNumber": 1, "episodeNumber": 2, "title": "Pilot (2)", "airDate": "2004-09-29", "hasFile": false, "monitored": true}
        ])))
        .expect(1)
        .mount(&fixture.sonarr)
        .await;

    let result = fixture
        .text_server()
        .get_sonarr_episodes(Parameters(EpisodesParams {
            series_id: 10,
            season_number: Some(1),
        }))
        .await
        .unwrap();

    assert_eq!(
        extract_tool_result_text(&result),
        "2 episodes:\n  S01E01: Pilot (1) (September 22, 2004) - Downloaded, Monitored\n  S01E02: Pilot (2) (September 29, 2004) - Missing, Monitored"
    );
}
