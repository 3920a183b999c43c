use super::client::QueryParam;
use super::models::{AddMovieRequest, Collection, Movie};
use super::{ArrClient, ClientError};

/// Movie-specific Radarr endpoints.
#[derive(Debug, Clone)]
pub struct Radarr {
    client: ArrClient,
}

impl Radarr {
    pub fn new(client: ArrClient) -> Self {
        Self { client }
    }

    /// Endpoints shared with Sonarr (queue, history, commands...).
    pub fn client(&self) -> &ArrClient {
        &self.client
    }

    pub async fn movies(&self) -> Result<Vec<Movie>, ClientError> {
        self.client.get("movie", &[]).await
    }

    pub async fn movie(&self, id: i64) -> Result<Movie, ClientError> {
        self.client.get(&format!("movie/{}", id), &[]).await
    }

    pub async fn lookup(&self, term: &str) -> Result<Vec<Movie>, ClientError> {
        self.client
            .get("movie/lookup", &[("term", term.to_string())])
            .await
    }

    pub async fn add_movie(&self, request: &AddMovieRequest) -> Result<Movie, ClientError> {
        self.client.post("movie", request).await
    }

    /// Movies with a release between `start` and `end` (RFC 3339).
    pub async fn calendar(
        &self,
        start: &str,
        end: &str,
        unmonitored: bool,
    ) -> Result<Vec<Movie>, ClientError> {
        let query = [
            ("start", start.to_string()),
            ("end", end.to_string()),
            ("unmonitored", unmonitored.to_string()),
        ];
        self.client.get("calendar", &query).await
    }

    pub async fn collections(&self, tmdb_id: Option<i64>) -> Result<Vec<Collection>, ClientError> {
        let query: Vec<QueryParam> = tmdb_id
            .map(|id| ("tmdbId", id.to_string()))
            .into_iter()
            .collect();
        self.client.get("collection", &query).await
    }
}
