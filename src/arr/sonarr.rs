use super::models::{AddSeriesRequest, Episode, Series};
use super::{ArrClient, ClientError};

/// Series-specific Sonarr endpoints.
#[derive(Debug, Clone)]
pub struct Sonarr {
    client: ArrClient,
}

impl Sonarr {
    pub fn new(client: ArrClient) -> Self {
        Self { client }
    }

    /// Endpoints shared with Radarr (queue, history, commands...).
    pub fn client(&self) -> &ArrClient {
        &self.client
    }

    pub async fn series(&self) -> Result<Vec<Series>, ClientError> {
        self.client.get("series", &[]).await
    }

    pub async fn series_by_id(&self, id: i64) -> Result<Series, ClientError> {
        self.client.get(&format!("series/{}", id), &[]).await
    }

    pub async fn lookup(&self, term: &str) -> Result<Vec<Series>, ClientError> {
        self.client
            .get("series/lookup", &[("term", term.to_string())])
            .await
    }

    pub async fn add_series(&self, request: &AddSeriesRequest) -> Result<Series, ClientError> {
        self.client.post("series", request).await
    }

    pub async fn episodes(
        &self,
        series_id: i64,
        season_number: Option<i32>,
    ) -> Result<Vec<Episode>, ClientError> {
        let mut query = vec![("seriesId", series_id.to_string())];
        if let Some(season) = season_number {
            query.push(("seasonNumber", season.to_string()));
        }
        self.client.get("episode", &query).await
    }

    /// Episodes airing between `start` and `end` (RFC 3339), with the parent
    /// series embedded.
    pub async fn calendar(
        &self,
        start: &str,
        end: &str,
        unmonitored: bool,
    ) -> Result<Vec<Episode>, ClientError> {
        let query = [
            ("start", start.to_string()),
            ("end", end.to_string()),
            ("unmonitored", unmonitored.to_string()),
            ("includeSeries", "true".to_string()),
        ];
        self.client.get("calendar", &query).await
    }
}
