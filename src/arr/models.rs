//! Remote JSON shapes for the Radarr and Sonarr v3 APIs.
//!
//! Only the fields the tools use are modelled. Everything is defaulted so a
//! field missing on one server version never fails a whole listing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================
// Radarr
// ============================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movie {
    /// Absent on lookup results that are not in the library yet
    pub id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub overview: Option<String>,
    pub monitored: bool,
    pub has_file: bool,
    pub status: Option<String>,
    pub tmdb_id: Option<i64>,
    pub imdb_id: Option<String>,
    pub runtime: Option<i64>,
    pub genres: Vec<String>,
    pub size_on_disk: Option<i64>,
    pub path: Option<String>,
    pub minimum_availability: Option<String>,
    pub in_cinemas: Option<String>,
    pub physical_release: Option<String>,
    pub digital_release: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieRequest {
    pub title: String,
    pub year: i32,
    pub tmdb_id: i64,
    pub quality_profile_id: i64,
    pub root_folder_path: String,
    pub monitored: bool,
    pub add_options: AddMovieOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieOptions {
    pub search_for_movie: bool,
    pub monitor: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Collection {
    pub id: Option<i64>,
    pub title: String,
    pub tmdb_id: Option<i64>,
    pub monitored: bool,
    pub quality_profile_id: Option<i64>,
    pub root_folder_path: Option<String>,
    pub minimum_availability: Option<String>,
    pub movies: Vec<CollectionMovie>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionMovie {
    pub tmdb_id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub runtime: Option<i64>,
    pub overview: Option<String>,
}

// ============================================================
// Sonarr
// ============================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Series {
    pub id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub overview: Option<String>,
    pub monitored: bool,
    pub status: Option<String>,
    pub network: Option<String>,
    pub tvdb_id: Option<i64>,
    pub imdb_id: Option<String>,
    pub genres: Vec<String>,
    pub seasons: Vec<Season>,
    pub statistics: Option<SeriesStatistics>,
}

impl Series {
    pub fn episode_count(&self) -> i64 {
        self.statistics.as_ref().map_or(0, |s| s.episode_count)
    }

    pub fn episode_file_count(&self) -> i64 {
        self.statistics.as_ref().map_or(0, |s| s.episode_file_count)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Season {
    pub season_number: i32,
    pub monitored: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeriesStatistics {
    pub season_count: i64,
    pub episode_file_count: i64,
    pub episode_count: i64,
    pub total_episode_count: i64,
    pub size_on_disk: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Episode {
    pub id: Option<i64>,
    pub series_id: Option<i64>,
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,
    pub title: Option<String>,
    pub air_date: Option<String>,
    pub air_date_utc: Option<String>,
    pub overview: Option<String>,
    pub has_file: bool,
    pub monitored: bool,
    /// Embedded when the request asks for `includeSeries=true`
    pub series: Option<EpisodeSeries>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EpisodeSeries {
    pub title: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSeriesRequest {
    pub title: String,
    pub year: i32,
    pub tvdb_id: i64,
    pub quality_profile_id: i64,
    pub root_folder_path: String,
    pub monitored: bool,
    pub season_folder: bool,
    pub add_options: AddSeriesOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSeriesOptions {
    pub search_for_missing_episodes: bool,
    pub monitor: String,
}

// ============================================================
// Shared
// ============================================================

/// Paged envelope used by `queue`, `history` and `wanted/*`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_records: Option<u64>,
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueueRecord {
    pub id: Option<i64>,
    pub movie_id: Option<i64>,
    pub series_id: Option<i64>,
    pub episode_id: Option<i64>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub tracked_download_status: Option<String>,
    pub size: f64,
    pub sizeleft: f64,
    pub timeleft: Option<String>,
    pub estimated_completion_time: Option<String>,
    pub protocol: Option<String>,
    pub download_client: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryRecord {
    pub id: Option<i64>,
    pub movie_id: Option<i64>,
    pub series_id: Option<i64>,
    pub episode_id: Option<i64>,
    pub source_title: Option<String>,
    pub quality: Value,
    pub date: Option<String>,
    pub event_type: Option<String>,
    pub data: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManualImportCandidate {
    pub path: Option<String>,
    pub relative_path: Option<String>,
    pub name: Option<String>,
    pub size: i64,
    pub quality: Value,
    pub movie: Option<Value>,
    pub series: Option<Value>,
    pub episodes: Vec<Value>,
    pub rejections: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemStatus {
    pub version: Option<String>,
    pub build_time: Option<String>,
    pub is_debug: Option<bool>,
    pub is_production: Option<bool>,
    pub is_admin: Option<bool>,
    pub is_user_interactive: Option<bool>,
    pub startup_path: Option<String>,
    pub app_data: Option<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub branch: Option<String>,
    pub authentication: Option<String>,
    pub url_base: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthCheck {
    pub source: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
    pub wiki_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiskSpace {
    pub path: Option<String>,
    pub label: Option<String>,
    pub free_space: i64,
    pub total_space: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandStatus {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub queued: Option<String>,
    pub started: Option<String>,
    pub trigger: Option<String>,
    pub state_change_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityProfile {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RootFolder {
    pub id: Option<i64>,
    pub path: String,
    pub free_space: Option<i64>,
}
