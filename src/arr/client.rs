use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use super::error::error_message_from_body;
use super::models::{
    CommandRequest, CommandStatus, DiskSpace, HealthCheck, HistoryRecord, ManualImportCandidate,
    Page, QualityProfile, QueueRecord, RootFolder, SystemStatus,
};
use super::{ClientError, Service};
use crate::config::ServiceConfig;

/// A single query-string pair.
pub type QueryParam = (&'static str, String);

/// Build the HTTP client shared by both services.
pub fn build_http_client(timeout_secs: u64) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("radarr-sonarr-mcp/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Thin REST client for one Radarr or Sonarr instance.
#[derive(Debug, Clone)]
pub struct ArrClient {
    http: reqwest::Client,
    service: Service,
    api_root: String,
    api_key: Option<String>,
}

impl ArrClient {
    pub fn new(http: reqwest::Client, service: Service, config: &ServiceConfig) -> Self {
        Self {
            http,
            service,
            api_root: config.api_root(),
            api_key: config
                .has_api_key()
                .then(|| config.api_key.trim().to_string()),
        }
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_root, endpoint.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[QueryParam],
    ) -> Result<T, ClientError> {
        let request = self.request(Method::GET, endpoint)?.query(query);
        let response = self.send(request, endpoint).await?;
        self.decode(response, endpoint).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let request = self.request(Method::POST, endpoint)?.json(body);
        let response = self.send(request, endpoint).await?;
        self.decode(response, endpoint).await
    }

    /// DELETE requests answer with an empty body, so nothing is decoded.
    pub async fn delete(
        &self,
        endpoint: &str,
        query: &[QueryParam],
    ) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, endpoint)?.query(query);
        self.send(request, endpoint).await?;
        Ok(())
    }

    fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder, ClientError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ClientError::NotConfigured(self.service))?;

        Ok(self
            .http
            .request(method, self.endpoint_url(endpoint))
            .header("X-Api-Key", api_key)
            .header("Content-Type", "application/json"))
    }

    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Response, ClientError> {
        debug!(service = self.service.as_str(), endpoint, "sending request");

        let response = request.send().await.map_err(|source| {
            error!(service = self.service.as_str(), endpoint, %source, "request failed");
            ClientError::Request {
                service: self.service,
                source,
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message_from_body(status, &body);
        error!(
            service = self.service.as_str(),
            endpoint,
            status = status.as_u16(),
            %message,
            "API returned an error"
        );
        Err(ClientError::Status {
            service: self.service,
            status,
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<T, ClientError> {
        let bytes = response.bytes().await.map_err(|source| ClientError::Request {
            service: self.service,
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            service: self.service,
            endpoint: endpoint.to_string(),
            source,
        })
    }

    // ============================================================
    // Endpoints shared by Radarr and Sonarr
    // ============================================================

    pub async fn quality_profiles(&self) -> Result<Vec<QualityProfile>, ClientError> {
        self.get("qualityprofile", &[]).await
    }

    pub async fn root_folders(&self) -> Result<Vec<RootFolder>, ClientError> {
        self.get("rootfolder", &[]).await
    }

    pub async fn queue(
        &self,
        page: PageQuery,
        include_unknown: bool,
    ) -> Result<Page<QueueRecord>, ClientError> {
        let unknown_param = match self.service {
            Service::Radarr => "includeUnknownMovieItems",
            Service::Sonarr => "includeUnknownSeriesItems",
        };
        let mut query = page.to_query();
        query.push((unknown_param, include_unknown.to_string()));
        self.get("queue", &query).await
    }

    pub async fn remove_queue_item(
        &self,
        id: i64,
        remove_from_client: bool,
        blocklist: bool,
    ) -> Result<(), ClientError> {
        let query = [
            ("removeFromClient", remove_from_client.to_string()),
            ("blocklist", blocklist.to_string()),
        ];
        self.delete(&format!("queue/{}", id), &query).await
    }

    pub async fn history(&self, query: &HistoryQuery) -> Result<Page<HistoryRecord>, ClientError> {
        let mut params = query.page.to_query();
        params.push(("sortKey", "date".to_string()));
        params.push(("sortDirection", "descending".to_string()));
        if let Some(event_type) = &query.event_type {
            params.push(("eventType", event_type.clone()));
        }
        self.get("history", &params).await
    }

    /// List importable files under `path`. `media_id` is the movie id on
    /// Radarr and the series id on Sonarr.
    pub async fn manual_import(
        &self,
        path: &str,
        media_id: Option<i64>,
    ) -> Result<Vec<ManualImportCandidate>, ClientError> {
        let mut query: Vec<QueryParam> = vec![("path", path.to_string())];
        if let Some(id) = media_id {
            let key = match self.service {
                Service::Radarr => "movieId",
                Service::Sonarr => "seriesId",
            };
            query.push((key, id.to_string()));
        }
        self.get("manualimport", &query).await
    }

    pub async fn wanted<T: DeserializeOwned>(
        &self,
        kind: WantedKind,
        page: PageQuery,
        sort_key: Option<&str>,
        sort_direction: Option<&str>,
    ) -> Result<Page<T>, ClientError> {
        let mut query = page.to_query();
        if let Some(sort_key) = sort_key {
            query.push(("sortKey", sort_key.to_string()));
        }
        if let Some(sort_direction) = sort_direction {
            query.push(("sortDirection", sort_direction.to_string()));
        }
        if self.service == Service::Sonarr {
            query.push(("includeSeries", "true".to_string()));
        }
        self.get(kind.endpoint(), &query).await
    }

    pub async fn system_status(&self) -> Result<SystemStatus, ClientError> {
        self.get("system/status", &[]).await
    }

    pub async fn health(&self) -> Result<Vec<HealthCheck>, ClientError> {
        self.get("health", &[]).await
    }

    pub async fn disk_space(&self) -> Result<Vec<DiskSpace>, ClientError> {
        self.get("diskspace", &[]).await
    }

    pub async fn command(&self, command: &CommandRequest) -> Result<CommandStatus, ClientError> {
        self.post("command", command).await
    }
}

/// Page selection for paged endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    fn to_query(self) -> Vec<QueryParam> {
        vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub page: PageQuery,
    pub event_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WantedKind {
    Missing,
    Cutoff,
}

impl WantedKind {
    fn endpoint(self) -> &'static str {
        match self {
            WantedKind::Missing => "wanted/missing",
            WantedKind::Cutoff => "wanted/cutoff",
        }
    }
}
