use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::arr::{Service, ServiceSelection};

// ============================================================
// Library Types (get_radarr_movies, get_sonarr_series)
// ============================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LibraryFilterParams {
    /// Filter by monitored status
    pub monitored: Option<bool>,
    /// Filter by downloaded status
    pub downloaded: Option<bool>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieListResult {
    /// Number of movies matching the filters (may exceed the items returned)
    pub count: usize,
    pub movies: Vec<MovieSummary>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub tmdb_id: Option<i64>,
    pub monitored: bool,
    pub has_file: bool,
    pub status: Option<String>,
    pub overview: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesListResult {
    pub count: usize,
    pub series: Vec<SeriesSummary>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub monitored: bool,
    pub status: Option<String>,
    pub episode_count: i64,
    pub episode_file_count: i64,
    pub overview: String,
}

// ============================================================
// Search Types (search_radarr_movies, search_sonarr_series)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Search term for the title
    pub term: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieSearchResult {
    pub count: usize,
    pub movies: Vec<MovieLookupItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieLookupItem {
    pub title: String,
    pub year: Option<i32>,
    pub tmdb_id: Option<i64>,
    pub imdb_id: Option<String>,
    pub overview: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSearchResult {
    pub count: usize,
    pub series: Vec<SeriesLookupItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesLookupItem {
    pub title: String,
    pub year: Option<i32>,
    pub tvdb_id: Option<i64>,
    pub imdb_id: Option<String>,
    pub overview: String,
}

// ============================================================
// Detail Types (get_radarr_movie_by_id, get_sonarr_series_by_id, get_sonarr_episodes)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdParams {
    /// Library id of the movie or series
    pub id: i64,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailsResult {
    pub movie: MovieDetails,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub status: Option<String>,
    pub monitored: bool,
    pub has_file: bool,
    pub tmdb_id: Option<i64>,
    pub imdb_id: Option<String>,
    pub runtime: Option<i64>,
    pub genres: Vec<String>,
    pub size_on_disk: Option<i64>,
    pub path: Option<String>,
    pub overview: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDetailsResult {
    pub series: SeriesDetails,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDetails {
    pub id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub status: Option<String>,
    pub monitored: bool,
    pub network: Option<String>,
    pub genres: Vec<String>,
    pub season_count: usize,
    pub episode_count: i64,
    pub episode_file_count: i64,
    pub total_episode_count: i64,
    pub size_on_disk: i64,
    pub overview: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EpisodesParams {
    /// Series id in Sonarr
    pub series_id: i64,
    /// Only return episodes of this season
    pub season_number: Option<i32>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeListResult {
    pub count: usize,
    pub episodes: Vec<EpisodeSummary>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeSummary {
    pub id: Option<i64>,
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,
    pub title: Option<String>,
    pub air_date: Option<String>,
    pub has_file: bool,
    pub monitored: bool,
}

// ============================================================
// Add Types (add_radarr_movie, add_sonarr_series)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieParams {
    /// TMDB ID of the movie to add
    pub tmdb_id: i64,
    /// Movie title
    pub title: String,
    /// Release year
    pub year: i32,
    /// Quality profile ID (uses the first profile if not provided)
    pub quality_profile_id: Option<i64>,
    /// Root folder path (uses the first root folder if not provided)
    pub root_folder_path: Option<String>,
    /// Whether to monitor the movie (default: true)
    pub monitored: Option<bool>,
    /// Whether to search for the movie immediately (default: true)
    pub search_for_movie: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddSeriesParams {
    /// TVDB ID of the series to add
    pub tvdb_id: i64,
    /// Series title
    pub title: String,
    /// First air year
    pub year: i32,
    /// Quality profile ID (uses the first profile if not provided)
    pub quality_profile_id: Option<i64>,
    /// Root folder path (uses the first root folder if not provided)
    pub root_folder_path: Option<String>,
    /// Whether to monitor the series (default: true)
    pub monitored: Option<bool>,
    /// Whether to search for missing episodes immediately (default: true)
    pub search_for_missing_episodes: Option<bool>,
    /// Whether to use season folders (default: true)
    pub season_folder: Option<bool>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieResult {
    pub success: bool,
    pub message: String,
    pub movie: AddedMovie,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddedMovie {
    pub id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub tmdb_id: Option<i64>,
    pub monitored: bool,
    pub has_file: bool,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddSeriesResult {
    pub success: bool,
    pub message: String,
    pub series: AddedSeries,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddedSeries {
    pub id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub tvdb_id: Option<i64>,
    pub monitored: bool,
    pub status: Option<String>,
    pub season_count: usize,
}

// ============================================================
// Queue Types (get_download_queue, remove_from_queue)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueParams {
    /// Which service to query
    pub service: ServiceSelection,
    /// Include items with an unknown series/movie (default: false)
    pub include_unknown_items: Option<bool>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueResult {
    /// Keyed by service name ("radarr", "sonarr")
    pub queues: BTreeMap<String, QueueSummary>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueSummary {
    pub count: u64,
    pub items: Vec<QueueItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    /// Queue item id, used by remove_from_queue
    pub id: Option<i64>,
    pub title: String,
    pub status: String,
    pub tracked_download_status: Option<String>,
    pub size: f64,
    pub sizeleft: f64,
    /// Download progress in percent, when the size is known
    pub progress: Option<f64>,
    pub timeleft: Option<String>,
    pub estimated_completion_time: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromQueueParams {
    /// Which service to use
    pub service: Service,
    /// Queue item ID to remove
    pub id: i64,
    /// Remove from download client (default: true)
    pub remove_from_client: Option<bool>,
    /// Add to blocklist to prevent re-download (default: false)
    pub blocklist: Option<bool>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromQueueResult {
    pub success: bool,
    pub message: String,
    pub remove_from_client: bool,
    pub blocklist: bool,
}

// ============================================================
// History Types (get_history)
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum HistoryEventType {
    Grabbed,
    DownloadFolderImported,
    DownloadFailed,
    Deleted,
    Renamed,
}

impl HistoryEventType {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryEventType::Grabbed => "grabbed",
            HistoryEventType::DownloadFolderImported => "downloadFolderImported",
            HistoryEventType::DownloadFailed => "downloadFailed",
            HistoryEventType::Deleted => "deleted",
            HistoryEventType::Renamed => "renamed",
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryParams {
    /// Which service to query
    pub service: Service,
    /// Number of items per page (default: 50, max: 250)
    pub page_size: Option<u32>,
    /// Page number (default: 1)
    pub page: Option<u32>,
    /// Filter by event type
    pub event_type: Option<HistoryEventType>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResult {
    pub page: u32,
    pub page_size: u32,
    pub total_records: u64,
    pub records: Vec<HistoryItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
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

// ============================================================
// Manual Import Types (manual_import)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManualImportParams {
    /// Which service to use
    pub service: Service,
    /// Path to scan for importable files
    pub path: String,
    /// Movie ID (Radarr only)
    pub movie_id: Option<i64>,
    /// Series ID (Sonarr only)
    pub series_id: Option<i64>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManualImportResult {
    pub count: usize,
    pub items: Vec<ManualImportItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManualImportItem {
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

// ============================================================
// Calendar Types (get_radarr_calendar, get_sonarr_calendar)
// ============================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarParams {
    /// Start date (ISO format, default: now)
    pub start: Option<String>,
    /// End date (ISO format, default: 30 days after start)
    pub end: Option<String>,
    /// Include unmonitored items (default: false)
    pub unmonitored: Option<bool>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieCalendarResult {
    pub count: usize,
    pub movies: Vec<CalendarMovie>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMovie {
    pub id: Option<i64>,
    pub title: String,
    pub release_date: Option<String>,
    pub in_cinemas: Option<String>,
    pub physical_release: Option<String>,
    pub digital_release: Option<String>,
    pub monitored: bool,
    pub has_file: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeCalendarResult {
    pub count: usize,
    pub episodes: Vec<CalendarEpisode>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEpisode {
    pub id: Option<i64>,
    pub series_id: Option<i64>,
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,
    pub title: Option<String>,
    pub air_date: Option<String>,
    pub air_date_utc: Option<String>,
    pub monitored: bool,
    pub has_file: bool,
    pub series: SeriesRef,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRef {
    pub title: Option<String>,
    pub year: Option<i32>,
}

// ============================================================
// Wanted Types (get_wanted_missing, get_wanted_cutoff)
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WantedSortKey {
    Title,
    AirDateUtc,
    ReleaseDate,
    Year,
}

impl WantedSortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            WantedSortKey::Title => "title",
            WantedSortKey::AirDateUtc => "airDateUtc",
            WantedSortKey::ReleaseDate => "releaseDate",
            WantedSortKey::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Value understood by the `sortDirection` query parameter.
    pub fn as_api_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ascending",
            SortDirection::Desc => "descending",
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WantedMissingParams {
    /// Which service to query
    pub service: Service,
    /// Number of items per page (default: 50, max: 250)
    pub page_size: Option<u32>,
    /// Page number (default: 1)
    pub page: Option<u32>,
    /// Sort by field
    pub sort_key: Option<WantedSortKey>,
    /// Sort direction
    pub sort_dir: Option<SortDirection>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WantedCutoffParams {
    /// Which service to query
    pub service: Service,
    /// Number of items per page (default: 50, max: 250)
    pub page_size: Option<u32>,
    /// Page number (default: 1)
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WantedResultKind {
    Missing,
    CutoffUnmet,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WantedResult {
    pub kind: WantedResultKind,
    pub page: u32,
    pub page_size: u32,
    pub total_records: u64,
    pub records: Vec<WantedItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum WantedItem {
    Movie(WantedMovie),
    Episode(WantedEpisode),
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WantedMovie {
    pub id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub monitored: bool,
    pub status: Option<String>,
    pub minimum_availability: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WantedEpisode {
    pub id: Option<i64>,
    pub series_id: Option<i64>,
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,
    pub title: Option<String>,
    pub air_date: Option<String>,
    pub monitored: bool,
    pub series: SeriesRef,
}

// ============================================================
// System Types (get_system_status, get_disk_space)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSelectionParams {
    /// Which service to query
    pub service: ServiceSelection,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatusResult {
    pub status: BTreeMap<String, ServiceStatus>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
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
    pub health: Vec<HealthItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthItem {
    pub source: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
    pub wiki_url: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiskSpaceResult {
    pub disk_space: BTreeMap<String, Vec<DiskInfo>>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiskInfo {
    pub path: Option<String>,
    pub label: Option<String>,
    pub free_space: i64,
    pub total_space: i64,
    pub percent_used: f64,
}

// ============================================================
// Command Types (execute_command, refresh_monitored)
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum CommandName {
    RefreshMovie,
    RefreshSeries,
    RescanMovie,
    RescanSeries,
    RssSync,
    Backup,
    MissingMoviesSearch,
    MissingEpisodeSearch,
}

impl CommandName {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::RefreshMovie => "RefreshMovie",
            CommandName::RefreshSeries => "RefreshSeries",
            CommandName::RescanMovie => "RescanMovie",
            CommandName::RescanSeries => "RescanSeries",
            CommandName::RssSync => "RssSync",
            CommandName::Backup => "Backup",
            CommandName::MissingMoviesSearch => "MissingMoviesSearch",
            CommandName::MissingEpisodeSearch => "MissingEpisodeSearch",
        }
    }

    /// The only service that understands this command, if it is not shared.
    pub fn required_service(self) -> Option<Service> {
        match self {
            CommandName::RefreshMovie
            | CommandName::RescanMovie
            | CommandName::MissingMoviesSearch => Some(Service::Radarr),
            CommandName::RefreshSeries
            | CommandName::RescanSeries
            | CommandName::MissingEpisodeSearch => Some(Service::Sonarr),
            CommandName::RssSync | CommandName::Backup => None,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCommandParams {
    /// Which service to use
    pub service: Service,
    /// Command to execute
    pub command: CommandName,
    /// Movie ID (for movie-specific commands)
    pub movie_id: Option<i64>,
    /// Series ID (for series-specific commands)
    pub series_id: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshMonitoredParams {
    /// Which service to use
    pub service: Service,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    pub success: bool,
    pub message: String,
    pub command: CommandInfo,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommandInfo {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub queued: Option<String>,
    pub started: Option<String>,
    pub trigger: Option<String>,
    pub state_change_time: Option<String>,
}

// ============================================================
// Collection Types (get_collections)
// ============================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionsParams {
    /// Filter by collection TMDB ID
    pub tmdb_id: Option<i64>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionsResult {
    pub count: usize,
    pub collections: Vec<CollectionSummary>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub id: Option<i64>,
    pub title: String,
    pub tmdb_id: Option<i64>,
    pub monitored: bool,
    pub quality_profile_id: Option<i64>,
    pub root_folder_path: Option<String>,
    pub minimum_availability: Option<String>,
    pub movies: Vec<CollectionMovieSummary>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMovieSummary {
    pub tmdb_id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub runtime: Option<i64>,
    pub overview: String,
}

// ============================================================
// Resource Types (radarr://movies, sonarr://series)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieResource {
    pub count: usize,
    pub movies: Vec<MovieResourceEntry>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieResourceEntry {
    pub id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub monitored: bool,
    pub has_file: bool,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResource {
    pub count: usize,
    pub series: Vec<SeriesResourceEntry>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResourceEntry {
    pub id: Option<i64>,
    pub title: String,
    pub year: Option<i32>,
    pub monitored: bool,
    pub status: Option<String>,
    pub episode_count: i64,
    pub episode_file_count: i64,
}
