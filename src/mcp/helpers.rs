//! Helper functions for MCP server operations: input validation and
//! reshaping of remote records into tool results.

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};

use crate::arr::models::{
    Collection, DiskSpace, Episode, HealthCheck, HistoryRecord, ManualImportCandidate, Movie,
    QueueRecord, Series, SystemStatus,
};

use super::types::{
    CalendarEpisode, CalendarMovie, CollectionMovieSummary, CollectionSummary, DiskInfo,
    EpisodeSummary, HealthItem, HistoryItem, ManualImportItem, MovieDetails, MovieLookupItem,
    MovieResourceEntry, MovieSummary, QueueItem, SeriesDetails, SeriesLookupItem, SeriesRef,
    SeriesResourceEntry, SeriesSummary, ServiceStatus, WantedEpisode, WantedMovie,
};

pub const OVERVIEW_MAX_CHARS: usize = 200;
pub const LIST_LIMIT: usize = 50;
pub const SEARCH_LIMIT: usize = 20;
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 250;
pub const CALENDAR_WINDOW_DAYS: i64 = 30;

/// Truncate an overview to [`OVERVIEW_MAX_CHARS`] characters, appending `...`.
pub fn truncate_overview(overview: Option<&str>) -> String {
    let overview = overview.unwrap_or_default();
    match overview.char_indices().nth(OVERVIEW_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &overview[..cut]),
        None => overview.to_string(),
    }
}

/// Clamp paging input: page ≥ 1, 1 ≤ page size ≤ [`MAX_PAGE_SIZE`].
pub fn clamp_page(page: Option<u32>, page_size: Option<u32>) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    (page, page_size)
}

/// Require a string parameter to contain something other than whitespace.
pub fn require_non_blank<'a>(value: &'a str, field: &str) -> Result<&'a str, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("'{}' cannot be empty", field))
    } else {
        Ok(trimmed)
    }
}

/// Parse a calendar bound: an RFC 3339 timestamp or a plain `YYYY-MM-DD`
/// date (midnight UTC).
pub fn parse_calendar_date(value: &str, field: &str) -> Result<DateTime<Utc>, String> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        && let Some(dt) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(dt.and_utc());
    }
    Err(format!(
        "Invalid '{}' date \"{}\": expected ISO format (YYYY-MM-DD or RFC 3339)",
        field, value
    ))
}

/// Resolve the calendar window. `start` defaults to `now` and `end` to
/// [`CALENDAR_WINDOW_DAYS`] days after the start, so an end given without a
/// start must not lie in the past.
pub fn calendar_window(
    start: Option<&str>,
    end: Option<&str>,
    now: DateTime<Utc>,
) -> Result<(String, String), String> {
    let start = match start {
        Some(s) => parse_calendar_date(s, "start")?,
        None => now,
    };
    let end = match end {
        Some(e) => parse_calendar_date(e, "end")?,
        None => start + Duration::days(CALENDAR_WINDOW_DAYS),
    };
    if end < start {
        return Err("'end' must not be before 'start'".to_string());
    }
    Ok((
        start.to_rfc3339_opts(SecondsFormat::Secs, true),
        end.to_rfc3339_opts(SecondsFormat::Secs, true),
    ))
}

/// Used share of a disk in percent, rounded to two decimals.
pub fn percent_used(free_space: i64, total_space: i64) -> f64 {
    if total_space <= 0 {
        return 0.0;
    }
    let used = 1.0 - free_space as f64 / total_space as f64;
    (used * 10_000.0).round() / 100.0
}

/// Download progress in percent, or `None` when the size is unknown.
pub fn download_progress(size: f64, sizeleft: f64) -> Option<f64> {
    (size > 0.0).then(|| (size - sizeleft) / size * 100.0)
}

// ============================================================
// Reshaping
// ============================================================

impl From<&Movie> for MovieSummary {
    fn from(m: &Movie) -> Self {
        Self {
            id: m.id,
            title: m.title.clone(),
            year: m.year,
            tmdb_id: m.tmdb_id,
            monitored: m.monitored,
            has_file: m.has_file,
            status: m.status.clone(),
            overview: truncate_overview(m.overview.as_deref()),
        }
    }
}

impl From<&Movie> for MovieLookupItem {
    fn from(m: &Movie) -> Self {
        Self {
            title: m.title.clone(),
            year: m.year,
            tmdb_id: m.tmdb_id,
            imdb_id: m.imdb_id.clone(),
            overview: truncate_overview(m.overview.as_deref()),
        }
    }
}

impl From<Movie> for MovieDetails {
    fn from(m: Movie) -> Self {
        let overview = truncate_overview(m.overview.as_deref());
        Self {
            id: m.id,
            title: m.title,
            year: m.year,
            status: m.status,
            monitored: m.monitored,
            has_file: m.has_file,
            tmdb_id: m.tmdb_id,
            imdb_id: m.imdb_id,
            runtime: m.runtime,
            genres: m.genres,
            size_on_disk: m.size_on_disk,
            path: m.path,
            overview,
        }
    }
}

impl From<&Movie> for CalendarMovie {
    fn from(m: &Movie) -> Self {
        Self {
            id: m.id,
            title: m.title.clone(),
            release_date: m.release_date.clone(),
            in_cinemas: m.in_cinemas.clone(),
            physical_release: m.physical_release.clone(),
            digital_release: m.digital_release.clone(),
            monitored: m.monitored,
            has_file: m.has_file,
        }
    }
}

impl From<&Movie> for WantedMovie {
    fn from(m: &Movie) -> Self {
        Self {
            id: m.id,
            title: m.title.clone(),
            year: m.year,
            monitored: m.monitored,
            status: m.status.clone(),
            minimum_availability: m.minimum_availability.clone(),
        }
    }
}

impl From<&Movie> for MovieResourceEntry {
    fn from(m: &Movie) -> Self {
        Self {
            id: m.id,
            title: m.title.clone(),
            year: m.year,
            monitored: m.monitored,
            has_file: m.has_file,
            status: m.status.clone(),
        }
    }
}

impl From<&Series> for SeriesSummary {
    fn from(s: &Series) -> Self {
        Self {
            id: s.id,
            title: s.title.clone(),
            year: s.year,
            monitored: s.monitored,
            status: s.status.clone(),
            episode_count: s.episode_count(),
            episode_file_count: s.episode_file_count(),
            overview: truncate_overview(s.overview.as_deref()),
        }
    }
}

impl From<&Series> for SeriesLookupItem {
    fn from(s: &Series) -> Self {
        Self {
            title: s.title.clone(),
            year: s.year,
            tvdb_id: s.tvdb_id,
            imdb_id: s.imdb_id.clone(),
            overview: truncate_overview(s.overview.as_deref()),
        }
    }
}

impl From<Series> for SeriesDetails {
    fn from(s: Series) -> Self {
        let stats = s.statistics.clone().unwrap_or_default();
        Self {
            id: s.id,
            year: s.year,
            status: s.status,
            monitored: s.monitored,
            network: s.network,
            genres: s.genres,
            season_count: s.seasons.len(),
            episode_count: stats.episode_count,
            episode_file_count: stats.episode_file_count,
            total_episode_count: stats.total_episode_count,
            size_on_disk: stats.size_on_disk,
            overview: truncate_overview(s.overview.as_deref()),
            title: s.title,
        }
    }
}

impl From<&Series> for SeriesResourceEntry {
    fn from(s: &Series) -> Self {
        Self {
            id: s.id,
            title: s.title.clone(),
            year: s.year,
            monitored: s.monitored,
            status: s.status.clone(),
            episode_count: s.episode_count(),
            episode_file_count: s.episode_file_count(),
        }
    }
}

fn series_ref(e: &Episode) -> SeriesRef {
    SeriesRef {
        title: e.series.as_ref().and_then(|s| s.title.clone()),
        year: e.series.as_ref().and_then(|s| s.year),
    }
}

impl From<&Episode> for EpisodeSummary {
    fn from(e: &Episode) -> Self {
        Self {
            id: e.id,
            season_number: e.season_number,
            episode_number: e.episode_number,
            title: e.title.clone(),
            air_date: e.air_date.clone(),
            has_file: e.has_file,
            monitored: e.monitored,
        }
    }
}

impl From<&Episode> for CalendarEpisode {
    fn from(e: &Episode) -> Self {
        Self {
            id: e.id,
            series_id: e.series_id,
            season_number: e.season_number,
            episode_number: e.episode_number,
            title: e.title.clone(),
            air_date: e.air_date.clone(),
            air_date_utc: e.air_date_utc.clone(),
            monitored: e.monitored,
            has_file: e.has_file,
            series: series_ref(e),
        }
    }
}

impl From<&Episode> for WantedEpisode {
    fn from(e: &Episode) -> Self {
        Self {
            id: e.id,
            series_id: e.series_id,
            season_number: e.season_number,
            episode_number: e.episode_number,
            title: e.title.clone(),
            air_date: e.air_date.clone(),
            monitored: e.monitored,
            series: series_ref(e),
        }
    }
}

impl From<QueueRecord> for QueueItem {
    fn from(q: QueueRecord) -> Self {
        Self {
            id: q.id,
            title: q.title.unwrap_or_else(|| "Unknown".to_string()),
            status: q.status.unwrap_or_else(|| "Unknown".to_string()),
            tracked_download_status: q.tracked_download_status,
            progress: download_progress(q.size, q.sizeleft),
            size: q.size,
            sizeleft: q.sizeleft,
            timeleft: q.timeleft,
            estimated_completion_time: q.estimated_completion_time,
        }
    }
}

impl From<HistoryRecord> for HistoryItem {
    fn from(h: HistoryRecord) -> Self {
        Self {
            id: h.id,
            movie_id: h.movie_id,
            series_id: h.series_id,
            episode_id: h.episode_id,
            source_title: h.source_title,
            quality: h.quality,
            date: h.date,
            event_type: h.event_type,
            data: h.data,
        }
    }
}

impl From<ManualImportCandidate> for ManualImportItem {
    fn from(c: ManualImportCandidate) -> Self {
        Self {
            path: c.path,
            relative_path: c.relative_path,
            name: c.name,
            size: c.size,
            quality: c.quality,
            movie: c.movie,
            series: c.series,
            episodes: c.episodes,
            rejections: c.rejections,
        }
    }
}

impl From<HealthCheck> for HealthItem {
    fn from(h: HealthCheck) -> Self {
        Self {
            source: h.source,
            kind: h.kind,
            message: h.message,
            wiki_url: h.wiki_url,
        }
    }
}

pub fn service_status(status: SystemStatus, health: Vec<HealthCheck>) -> ServiceStatus {
    ServiceStatus {
        version: status.version,
        build_time: status.build_time,
        is_debug: status.is_debug,
        is_production: status.is_production,
        is_admin: status.is_admin,
        is_user_interactive: status.is_user_interactive,
        startup_path: status.startup_path,
        app_data: status.app_data,
        os_name: status.os_name,
        os_version: status.os_version,
        branch: status.branch,
        authentication: status.authentication,
        url_base: status.url_base,
        health: health.into_iter().map(HealthItem::from).collect(),
    }
}

impl From<DiskSpace> for DiskInfo {
    fn from(d: DiskSpace) -> Self {
        Self {
            percent_used: percent_used(d.free_space, d.total_space),
            path: d.path,
            label: d.label,
            free_space: d.free_space,
            total_space: d.total_space,
        }
    }
}

impl From<Collection> for CollectionSummary {
    fn from(c: Collection) -> Self {
        Self {
            id: c.id,
            title: c.title,
            tmdb_id: c.tmdb_id,
            monitored: c.monitored,
            quality_profile_id: c.quality_profile_id,
            root_folder_path: c.root_folder_path,
            minimum_availability: c.minimum_availability,
            movies: c
                .movies
                .into_iter()
                .map(|m| CollectionMovieSummary {
                    overview: truncate_overview(m.overview.as_deref()),
                    tmdb_id: m.tmdb_id,
                    title: m.title,
                    year: m.year,
                    runtime: m.runtime,
                })
                .collect(),
        }
    }
}
