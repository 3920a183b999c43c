use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::Utc;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{
        AnnotateAble, CallToolResult, Content, Implementation, ListResourcesResult,
        PaginatedRequestParam, RawResource, ReadResourceRequestParam, ReadResourceResult, Resource,
        ResourceContents, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::arr::models::{
    AddMovieOptions, AddMovieRequest, AddSeriesOptions, AddSeriesRequest, CommandRequest, Episode,
    Movie,
};
use crate::arr::{
    ArrClient, ClientError, HistoryQuery, PageQuery, Radarr, Service, Sonarr, WantedKind,
    build_http_client,
};
use crate::config::{Config, ResponseFormat};

use super::format::Render;
use super::helpers::{
    LIST_LIMIT, SEARCH_LIMIT, calendar_window, clamp_page, require_non_blank, service_status,
};
use super::types::{
    AddMovieParams, AddMovieResult, AddSeriesParams, AddSeriesResult, AddedMovie, AddedSeries,
    CalendarEpisode, CalendarMovie, CalendarParams, CollectionSummary, CollectionsParams,
    CollectionsResult, CommandInfo, CommandName, CommandResult, DiskInfo, DiskSpaceResult,
    EpisodeCalendarResult, EpisodeListResult, EpisodeSummary, EpisodesParams,
    ExecuteCommandParams, HistoryItem, HistoryParams, HistoryResult, IdParams,
    LibraryFilterParams, ManualImportItem, ManualImportParams, ManualImportResult,
    MovieCalendarResult, MovieDetails, MovieDetailsResult, MovieListResult, MovieLookupItem,
    MovieResource, MovieResourceEntry, MovieSearchResult, MovieSummary, QueueItem, QueueParams,
    QueueResult, QueueSummary, RefreshMonitoredParams, RemoveFromQueueParams,
    RemoveFromQueueResult, SearchParams, SeriesDetails, SeriesDetailsResult, SeriesListResult,
    SeriesLookupItem, SeriesResource, SeriesResourceEntry, SeriesSearchResult, SeriesSummary,
    ServiceSelectionParams, SystemStatusResult, WantedCutoffParams, WantedEpisode, WantedItem,
    WantedMissingParams, WantedMovie, WantedResult, WantedResultKind,
};

pub const MOVIES_RESOURCE_URI: &str = "radarr://movies";
pub const SERIES_RESOURCE_URI: &str = "sonarr://series";

const DEFAULT_MOVIES_ROOT: &str = "/movies";
const DEFAULT_SERIES_ROOT: &str = "/tv";
const DEFAULT_QUALITY_PROFILE_ID: i64 = 1;

/// Why a tool call did not produce a result.
#[derive(Debug)]
enum ToolFailure {
    InvalidParams(String),
    Remote(ClientError),
}

impl From<ClientError> for ToolFailure {
    fn from(err: ClientError) -> Self {
        ToolFailure::Remote(err)
    }
}

type ToolOutcome<T> = std::result::Result<T, ToolFailure>;

#[derive(Clone)]
pub struct ArrMcpServer {
    tool_router: ToolRouter<Self>,
    radarr: Radarr,
    sonarr: Sonarr,
    format: ResponseFormat,
}

#[tool_router]
impl ArrMcpServer {
    pub fn new(config: &Config) -> Result<Self> {
        let http = build_http_client(config.server.request_timeout_secs)
            .context("Failed to build HTTP client")?;
        let radarr = Radarr::new(ArrClient::new(
            http.clone(),
            Service::Radarr,
            &config.radarr_config,
        ));
        let sonarr = Sonarr::new(ArrClient::new(
            http,
            Service::Sonarr,
            &config.sonarr_config,
        ));
        Ok(Self {
            tool_router: Self::tool_router(),
            radarr,
            sonarr,
            format: config.server.response_format,
        })
    }

    /// Replace the response format picked up from the configuration.
    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    // ============================================================
    // Library
    // ============================================================

    #[tool(
        description = "Get all movies from the Radarr library, optionally filtered by monitored or downloaded status. Returns at most 50 movies."
    )]
    pub async fn get_radarr_movies(
        &self,
        params: Parameters<LibraryFilterParams>,
    ) -> Result<CallToolResult, McpError> {
        let filter = params.0;
        let outcome = async {
            let movies: Vec<Movie> = self
                .radarr
                .movies()
                .await?
                .into_iter()
                .filter(|m| filter.monitored.is_none_or(|want| m.monitored == want))
                .filter(|m| filter.downloaded.is_none_or(|want| m.has_file == want))
                .collect();
            Ok::<_, ToolFailure>(MovieListResult {
                count: movies.len(),
                movies: movies
                    .iter()
                    .take(LIST_LIMIT)
                    .map(MovieSummary::from)
                    .collect(),
            })
        }
        .await;
        self.respond("get_radarr_movies", outcome)
    }

    #[tool(
        description = "Get all TV series from the Sonarr library, optionally filtered by monitored or downloaded status (any episode file present). Returns at most 50 series."
    )]
    pub async fn get_sonarr_series(
        &self,
        params: Parameters<LibraryFilterParams>,
    ) -> Result<CallToolResult, McpError> {
        let filter = params.0;
        let outcome = async {
            let series: Vec<_> = self
                .sonarr
                .series()
                .await?
                .into_iter()
                .filter(|s| filter.monitored.is_none_or(|want| s.monitored == want))
                .filter(|s| {
                    filter
                        .downloaded
                        .is_none_or(|want| (s.episode_file_count() > 0) == want)
                })
                .collect();
            Ok::<_, ToolFailure>(SeriesListResult {
                count: series.len(),
                series: series
                    .iter()
                    .take(LIST_LIMIT)
                    .map(SeriesSummary::from)
                    .collect(),
            })
        }
        .await;
        self.respond("get_sonarr_series", outcome)
    }

    // ============================================================
    // Search & details
    // ============================================================

    #[tool(description = "Search for movies to add to Radarr. Returns at most 20 results.")]
    pub async fn search_radarr_movies(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = async {
            let term = require_non_blank(&params.0.term, "term")
                .map_err(ToolFailure::InvalidParams)?;
            let results = self.radarr.lookup(term).await?;
            Ok::<_, ToolFailure>(MovieSearchResult {
                count: results.len(),
                movies: results
                    .iter()
                    .take(SEARCH_LIMIT)
                    .map(MovieLookupItem::from)
                    .collect(),
            })
        }
        .await;
        self.respond("search_radarr_movies", outcome)
    }

    #[tool(description = "Search for TV series to add to Sonarr. Returns at most 20 results.")]
    pub async fn search_sonarr_series(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = async {
            let term = require_non_blank(&params.0.term, "term")
                .map_err(ToolFailure::InvalidParams)?;
            let results = self.sonarr.lookup(term).await?;
            Ok::<_, ToolFailure>(SeriesSearchResult {
                count: results.len(),
                series: results
                    .iter()
                    .take(SEARCH_LIMIT)
                    .map(SeriesLookupItem::from)
                    .collect(),
            })
        }
        .await;
        self.respond("search_sonarr_series", outcome)
    }

    #[tool(description = "Get detailed information about a movie in the Radarr library.")]
    pub async fn get_radarr_movie_by_id(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = async {
            let movie = self.radarr.movie(params.0.id).await?;
            Ok::<_, ToolFailure>(MovieDetailsResult {
                movie: MovieDetails::from(movie),
            })
        }
        .await;
        self.respond("get_radarr_movie_by_id", outcome)
    }

    #[tool(description = "Get detailed information about a series in the Sonarr library.")]
    pub async fn get_sonarr_series_by_id(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = async {
            let series = self.sonarr.series_by_id(params.0.id).await?;
            Ok::<_, ToolFailure>(SeriesDetailsResult {
                series: SeriesDetails::from(series),
            })
        }
        .await;
        self.respond("get_sonarr_series_by_id", outcome)
    }

    #[tool(description = "Get the episodes of a Sonarr series, optionally for one season only.")]
    pub async fn get_sonarr_episodes(
        &self,
        params: Parameters<EpisodesParams>,
    ) -> Result<CallToolResult, McpError> {
        let EpisodesParams {
            series_id,
            season_number,
        } = params.0;
        let outcome = async {
            let episodes = self.sonarr.episodes(series_id, season_number).await?;
            Ok::<_, ToolFailure>(EpisodeListResult {
                count: episodes.len(),
                episodes: episodes.iter().map(EpisodeSummary::from).collect(),
            })
        }
        .await;
        self.respond("get_sonarr_episodes", outcome)
    }

    // ============================================================
    // Adding media
    // ============================================================

    #[tool(
        description = "Add a movie to Radarr by TMDB ID. Uses the first quality profile and root folder when none are given."
    )]
    pub async fn add_radarr_movie(
        &self,
        params: Parameters<AddMovieParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let outcome = async {
            let client = self.radarr.client();
            let quality_profile_id = resolve_quality_profile(client, p.quality_profile_id).await?;
            let root_folder_path =
                resolve_root_folder(client, p.root_folder_path, DEFAULT_MOVIES_ROOT).await?;
            let request = AddMovieRequest {
                title: p.title.clone(),
                year: p.year,
                tmdb_id: p.tmdb_id,
                quality_profile_id,
                root_folder_path,
                monitored: p.monitored.unwrap_or(true),
                add_options: AddMovieOptions {
                    search_for_movie: p.search_for_movie.unwrap_or(true),
                    monitor: "movieOnly".to_string(),
                },
            };
            let added = self.radarr.add_movie(&request).await?;
            info!(tmdb_id = p.tmdb_id, "Added movie to Radarr");
            Ok::<_, ToolFailure>(AddMovieResult {
                success: true,
                message: format!("Movie '{} ({})' has been added to Radarr", p.title, p.year),
                movie: AddedMovie {
                    id: added.id,
                    title: added.title,
                    year: added.year,
                    tmdb_id: added.tmdb_id,
                    monitored: added.monitored,
                    has_file: added.has_file,
                    status: added.status,
                },
            })
        }
        .await;
        self.respond("add_radarr_movie", outcome)
    }

    #[tool(
        description = "Add a series to Sonarr by TVDB ID. Uses the first quality profile and root folder when none are given."
    )]
    pub async fn add_sonarr_series(
        &self,
        params: Parameters<AddSeriesParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let outcome = async {
            let client = self.sonarr.client();
            let quality_profile_id = resolve_quality_profile(client, p.quality_profile_id).await?;
            let root_folder_path =
                resolve_root_folder(client, p.root_folder_path, DEFAULT_SERIES_ROOT).await?;
            let request = AddSeriesRequest {
                title: p.title.clone(),
                year: p.year,
                tvdb_id: p.tvdb_id,
                quality_profile_id,
                root_folder_path,
                monitored: p.monitored.unwrap_or(true),
                season_folder: p.season_folder.unwrap_or(true),
                add_options: AddSeriesOptions {
                    search_for_missing_episodes: p.search_for_missing_episodes.unwrap_or(true),
                    monitor: "all".to_string(),
                },
            };
            let added = self.sonarr.add_series(&request).await?;
            info!(tvdb_id = p.tvdb_id, "Added series to Sonarr");
            Ok::<_, ToolFailure>(AddSeriesResult {
                success: true,
                message: format!("Series '{} ({})' has been added to Sonarr", p.title, p.year),
                series: AddedSeries {
                    id: added.id,
                    season_count: added.seasons.len(),
                    title: added.title,
                    year: added.year,
                    tvdb_id: added.tvdb_id,
                    monitored: added.monitored,
                    status: added.status,
                },
            })
        }
        .await;
        self.respond("add_sonarr_series", outcome)
    }

    // ============================================================
    // Queue, history & import
    // ============================================================

    #[tool(
        description = "Get the download queue of Radarr, Sonarr or both, with download progress. Returns at most 50 items per service."
    )]
    pub async fn get_download_queue(
        &self,
        params: Parameters<QueueParams>,
    ) -> Result<CallToolResult, McpError> {
        let QueueParams {
            service,
            include_unknown_items,
        } = params.0;
        let outcome = async {
            let mut queues = BTreeMap::new();
            for &svc in service.services() {
                let page = self
                    .client(svc)
                    .queue(
                        PageQuery::new(1, LIST_LIMIT as u32),
                        include_unknown_items.unwrap_or(false),
                    )
                    .await?;
                let count = page.total_records.unwrap_or(page.records.len() as u64);
                let items: Vec<QueueItem> = page
                    .records
                    .into_iter()
                    .take(LIST_LIMIT)
                    .map(QueueItem::from)
                    .collect();
                queues.insert(svc.as_str().to_string(), QueueSummary { count, items });
            }
            Ok::<_, ToolFailure>(QueueResult { queues })
        }
        .await;
        self.respond("get_download_queue", outcome)
    }

    #[tool(
        description = "Remove an item from the Radarr or Sonarr download queue, optionally removing it from the download client and blocklisting the release."
    )]
    pub async fn remove_from_queue(
        &self,
        params: Parameters<RemoveFromQueueParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let remove_from_client = p.remove_from_client.unwrap_or(true);
        let blocklist = p.blocklist.unwrap_or(false);
        let outcome = async {
            self.client(p.service)
                .remove_queue_item(p.id, remove_from_client, blocklist)
                .await?;
            Ok::<_, ToolFailure>(RemoveFromQueueResult {
                success: true,
                message: format!(
                    "Queue item {} has been removed from {}",
                    p.id,
                    p.service.as_str()
                ),
                remove_from_client,
                blocklist,
            })
        }
        .await;
        self.respond("remove_from_queue", outcome)
    }

    #[tool(description = "Get download and import history from Radarr or Sonarr, newest first.")]
    pub async fn get_history(
        &self,
        params: Parameters<HistoryParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let (page, page_size) = clamp_page(p.page, p.page_size);
        let outcome = async {
            let query = HistoryQuery {
                page: PageQuery::new(page, page_size),
                event_type: p.event_type.map(|e| e.as_str().to_string()),
            };
            let history = self.client(p.service).history(&query).await?;
            Ok::<_, ToolFailure>(HistoryResult {
                page: history.page.unwrap_or(page),
                page_size: history.page_size.unwrap_or(page_size),
                total_records: history.total_records.unwrap_or(0),
                records: history.records.into_iter().map(HistoryItem::from).collect(),
            })
        }
        .await;
        self.respond("get_history", outcome)
    }

    #[tool(
        description = "List files under a path that Radarr or Sonarr could import manually. Returns at most 50 candidates."
    )]
    pub async fn manual_import(
        &self,
        params: Parameters<ManualImportParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let outcome = async {
            let path = require_non_blank(&p.path, "path").map_err(ToolFailure::InvalidParams)?;
            let media_id = match p.service {
                Service::Radarr => p.movie_id,
                Service::Sonarr => p.series_id,
            };
            let candidates = self.client(p.service).manual_import(path, media_id).await?;
            Ok::<_, ToolFailure>(ManualImportResult {
                count: candidates.len(),
                items: candidates
                    .into_iter()
                    .take(LIST_LIMIT)
                    .map(ManualImportItem::from)
                    .collect(),
            })
        }
        .await;
        self.respond("manual_import", outcome)
    }

    // ============================================================
    // Calendar & wanted
    // ============================================================

    #[tool(
        description = "Get upcoming movie releases from Radarr. Defaults to the next 30 days; dates are ISO format."
    )]
    pub async fn get_radarr_calendar(
        &self,
        params: Parameters<CalendarParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let outcome = async {
            let (start, end) = calendar_window(p.start.as_deref(), p.end.as_deref(), Utc::now())
                .map_err(ToolFailure::InvalidParams)?;
            let movies = self
                .radarr
                .calendar(&start, &end, p.unmonitored.unwrap_or(false))
                .await?;
            Ok::<_, ToolFailure>(MovieCalendarResult {
                count: movies.len(),
                movies: movies.iter().map(CalendarMovie::from).collect(),
            })
        }
        .await;
        self.respond("get_radarr_calendar", outcome)
    }

    #[tool(
        description = "Get upcoming episodes from Sonarr. Defaults to the next 30 days; dates are ISO format."
    )]
    pub async fn get_sonarr_calendar(
        &self,
        params: Parameters<CalendarParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let outcome = async {
            let (start, end) = calendar_window(p.start.as_deref(), p.end.as_deref(), Utc::now())
                .map_err(ToolFailure::InvalidParams)?;
            let episodes = self
                .sonarr
                .calendar(&start, &end, p.unmonitored.unwrap_or(false))
                .await?;
            Ok::<_, ToolFailure>(EpisodeCalendarResult {
                count: episodes.len(),
                episodes: episodes.iter().map(CalendarEpisode::from).collect(),
            })
        }
        .await;
        self.respond("get_sonarr_calendar", outcome)
    }

    #[tool(description = "Get monitored movies or episodes that are missing files.")]
    pub async fn get_wanted_missing(
        &self,
        params: Parameters<WantedMissingParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let outcome = self
            .wanted(
                p.service,
                WantedKind::Missing,
                clamp_page(p.page, p.page_size),
                p.sort_key.map(|k| k.as_str()),
                p.sort_dir.map(|d| d.as_api_str()),
            )
            .await;
        self.respond("get_wanted_missing", outcome)
    }

    #[tool(
        description = "Get movies or episodes whose files do not meet the quality profile cutoff."
    )]
    pub async fn get_wanted_cutoff(
        &self,
        params: Parameters<WantedCutoffParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let outcome = self
            .wanted(
                p.service,
                WantedKind::Cutoff,
                clamp_page(p.page, p.page_size),
                None,
                None,
            )
            .await;
        self.respond("get_wanted_cutoff", outcome)
    }

    // ============================================================
    // System
    // ============================================================

    #[tool(description = "Get version and health information for Radarr, Sonarr or both.")]
    pub async fn get_system_status(
        &self,
        params: Parameters<ServiceSelectionParams>,
    ) -> Result<CallToolResult, McpError> {
        let selection = params.0.service;
        let outcome = async {
            let mut status = BTreeMap::new();
            for &svc in selection.services() {
                let client = self.client(svc);
                let system = client.system_status().await?;
                let health = client.health().await?;
                status.insert(svc.as_str().to_string(), service_status(system, health));
            }
            Ok::<_, ToolFailure>(SystemStatusResult { status })
        }
        .await;
        self.respond("get_system_status", outcome)
    }

    #[tool(description = "Get disk space usage as seen by Radarr, Sonarr or both.")]
    pub async fn get_disk_space(
        &self,
        params: Parameters<ServiceSelectionParams>,
    ) -> Result<CallToolResult, McpError> {
        let selection = params.0.service;
        let outcome = async {
            let mut disk_space = BTreeMap::new();
            for &svc in selection.services() {
                let disks = self.client(svc).disk_space().await?;
                disk_space.insert(
                    svc.as_str().to_string(),
                    disks.into_iter().map(DiskInfo::from).collect::<Vec<_>>(),
                );
            }
            Ok::<_, ToolFailure>(DiskSpaceResult { disk_space })
        }
        .await;
        self.respond("get_disk_space", outcome)
    }

    #[tool(
        description = "Queue a command on Radarr or Sonarr (refresh, rescan, RSS sync, backup, missing search). Movie commands need service radarr, series commands need service sonarr."
    )]
    pub async fn execute_command(
        &self,
        params: Parameters<ExecuteCommandParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let outcome = async {
            if let Some(required) = p.command.required_service()
                && required != p.service
            {
                return Err(ToolFailure::InvalidParams(format!(
                    "Command '{}' is only supported by {}",
                    p.command.as_str(),
                    required.as_str()
                )));
            }
            self.run_command(p.service, p.command, p.movie_id, p.series_id)
                .await
        }
        .await;
        self.respond("execute_command", outcome)
    }

    #[tool(
        description = "Get Radarr movie collections, optionally filtered by collection TMDB ID."
    )]
    pub async fn get_collections(
        &self,
        params: Parameters<CollectionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let tmdb_id = params.0.tmdb_id;
        let outcome = async {
            let collections = self.radarr.collections(tmdb_id).await?;
            Ok::<_, ToolFailure>(CollectionsResult {
                count: collections.len(),
                collections: collections
                    .into_iter()
                    .map(CollectionSummary::from)
                    .collect(),
            })
        }
        .await;
        self.respond("get_collections", outcome)
    }

    #[tool(
        description = "Refresh metadata of all monitored items (RefreshMovie on Radarr, RefreshSeries on Sonarr)."
    )]
    pub async fn refresh_monitored(
        &self,
        params: Parameters<RefreshMonitoredParams>,
    ) -> Result<CallToolResult, McpError> {
        let service = params.0.service;
        let command = match service {
            Service::Radarr => CommandName::RefreshMovie,
            Service::Sonarr => CommandName::RefreshSeries,
        };
        let outcome = self.run_command(service, command, None, None).await;
        self.respond("refresh_monitored", outcome)
    }
}

impl ArrMcpServer {
    fn client(&self, service: Service) -> &ArrClient {
        match service {
            Service::Radarr => self.radarr.client(),
            Service::Sonarr => self.sonarr.client(),
        }
    }

    /// Serialize a tool outcome in the configured response format.
    fn respond<T: Serialize + Render>(
        &self,
        tool: &str,
        outcome: ToolOutcome<T>,
    ) -> Result<CallToolResult, McpError> {
        match outcome {
            Ok(result) => {
                let text = match self.format {
                    ResponseFormat::Json => serde_json::to_string_pretty(&result).map_err(|e| {
                        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
                    })?,
                    ResponseFormat::Text => result.render(),
                };
                debug!(tool, "Tool call succeeded");
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(ToolFailure::InvalidParams(message)) => {
                debug!(tool, %message, "Rejected tool parameters");
                Err(McpError::invalid_params(message, None))
            }
            Err(ToolFailure::Remote(err)) => {
                error!(tool, service = %err.service(), "Tool call failed: {}", err);
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {}",
                    err
                ))]))
            }
        }
    }

    async fn wanted(
        &self,
        service: Service,
        kind: WantedKind,
        (page, page_size): (u32, u32),
        sort_key: Option<&str>,
        sort_direction: Option<&str>,
    ) -> ToolOutcome<WantedResult> {
        let query = PageQuery::new(page, page_size);
        let client = self.client(service);
        let (total_records, records, page_info) = match service {
            Service::Radarr => {
                let result = client
                    .wanted::<Movie>(kind, query, sort_key, sort_direction)
                    .await?;
                let records = result
                    .records
                    .iter()
                    .map(|m| WantedItem::Movie(WantedMovie::from(m)))
                    .collect::<Vec<_>>();
                (result.total_records, records, (result.page, result.page_size))
            }
            Service::Sonarr => {
                let result = client
                    .wanted::<Episode>(kind, query, sort_key, sort_direction)
                    .await?;
                let records = result
                    .records
                    .iter()
                    .map(|e| WantedItem::Episode(WantedEpisode::from(e)))
                    .collect::<Vec<_>>();
                (result.total_records, records, (result.page, result.page_size))
            }
        };
        Ok(WantedResult {
            kind: match kind {
                WantedKind::Missing => WantedResultKind::Missing,
                WantedKind::Cutoff => WantedResultKind::CutoffUnmet,
            },
            page: page_info.0.unwrap_or(page),
            page_size: page_info.1.unwrap_or(page_size),
            total_records: total_records.unwrap_or(records.len() as u64),
            records,
        })
    }

    async fn run_command(
        &self,
        service: Service,
        command: CommandName,
        movie_id: Option<i64>,
        series_id: Option<i64>,
    ) -> ToolOutcome<CommandResult> {
        let request = CommandRequest {
            name: command.as_str().to_string(),
            movie_ids: movie_id
                .filter(|_| service == Service::Radarr)
                .map(|id| vec![id]),
            series_id: series_id.filter(|_| service == Service::Sonarr),
        };
        let status = self.client(service).command(&request).await?;
        info!(command = command.as_str(), %service, "Queued command");
        Ok(CommandResult {
            success: true,
            message: format!("Command '{}' has been queued", command.as_str()),
            command: CommandInfo {
                id: status.id,
                name: status.name,
                status: status.status,
                queued: status.queued,
                started: status.started,
                trigger: status.trigger,
                state_change_time: status.state_change_time,
            },
        })
    }

    // ============================================================
    // Resources
    // ============================================================

    /// The resources advertised to clients.
    pub fn resource_list() -> Vec<Resource> {
        let mut movies = RawResource::new(MOVIES_RESOURCE_URI, "Radarr Movies");
        movies.description = Some("All movies in the Radarr library".to_string());
        movies.mime_type = Some("application/json".to_string());

        let mut series = RawResource::new(SERIES_RESOURCE_URI, "Sonarr Series");
        series.description = Some("All TV series in the Sonarr library".to_string());
        series.mime_type = Some("application/json".to_string());

        vec![movies.no_annotation(), series.no_annotation()]
    }

    /// Read one of the resources from [`Self::resource_list`] as JSON text.
    pub async fn read_resource_uri(&self, uri: &str) -> Result<String, McpError> {
        let value = match uri {
            MOVIES_RESOURCE_URI => {
                let movies = self.radarr.movies().await.map_err(resource_error)?;
                serde_json::to_value(MovieResource {
                    count: movies.len(),
                    movies: movies.iter().map(MovieResourceEntry::from).collect(),
                })
            }
            SERIES_RESOURCE_URI => {
                let series = self.sonarr.series().await.map_err(resource_error)?;
                serde_json::to_value(SeriesResource {
                    count: series.len(),
                    series: series.iter().map(SeriesResourceEntry::from).collect(),
                })
            }
            _ => {
                return Err(McpError::resource_not_found(
                    format!("Unknown resource: {}", uri),
                    None,
                ));
            }
        };
        let value = value.map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;
        serde_json::to_string_pretty(&value)
            .map_err(|e| McpError::internal_error(format!("JSON serialization failed: {}", e), None))
    }
}

fn resource_error(err: ClientError) -> McpError {
    error!(service = %err.service(), "Resource read failed: {}", err);
    McpError::internal_error(err.to_string(), None)
}

/// A positive explicit id, else the first profile the service reports.
async fn resolve_quality_profile(
    client: &ArrClient,
    requested: Option<i64>,
) -> Result<i64, ClientError> {
    if let Some(id) = requested.filter(|id| *id > 0) {
        return Ok(id);
    }
    let profiles = client.quality_profiles().await?;
    Ok(profiles
        .first()
        .map_or(DEFAULT_QUALITY_PROFILE_ID, |p| p.id))
}

/// A non-blank explicit path, else the first root folder the service reports.
async fn resolve_root_folder(
    client: &ArrClient,
    requested: Option<String>,
    fallback: &str,
) -> Result<String, ClientError> {
    if let Some(path) = requested.filter(|p| !p.trim().is_empty()) {
        return Ok(path);
    }
    let folders = client.root_folders().await?;
    Ok(folders
        .into_iter()
        .next()
        .map_or_else(|| fallback.to_string(), |f| f.path))
}

#[tool_handler]
impl ServerHandler for ArrMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Radarr/Sonarr MCP lets AI assistants manage a movie (Radarr) and TV series (Sonarr) library.\n\n\
                 Library: get_radarr_movies, get_sonarr_series, get_radarr_movie_by_id,\n\
                 get_sonarr_series_by_id, get_sonarr_episodes, get_collections\n\
                 Adding: search_radarr_movies / search_sonarr_series to find TMDB/TVDB ids,\n\
                 then add_radarr_movie / add_sonarr_series\n\
                 Downloads: get_download_queue, remove_from_queue, get_history, manual_import\n\
                 Planning: get_radarr_calendar, get_sonarr_calendar, get_wanted_missing, get_wanted_cutoff\n\
                 Maintenance: get_system_status, get_disk_space, execute_command, refresh_monitored\n\n\
                 Resources radarr://movies and sonarr://series list the full libraries."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(Self::resource_list()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let text = self.read_resource_uri(&request.uri).await?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, request.uri)],
        })
    }
}

/// Entry point for MCP server
pub fn run_server(config: &Config, format: Option<ResponseFormat>) -> Result<()> {
    let mut service = ArrMcpServer::new(config)?;
    if let Some(format) = format {
        service = service.with_format(format);
    }
    info!(format = ?service.format, "Starting MCP server on stdio");
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
