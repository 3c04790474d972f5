use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use super::catalog::CatalogService;
use crate::{
    error::{DumpError, Result},
    types::{Page, Playlist, TrackItem},
    warning,
};

/// Longest `Retry-After` the client is willing to sit out.
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Pause before retrying a 502, or a 429 that names no usable `Retry-After`.
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(10);

/// Web API client bound to one access token.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    access_token: String,
    retry_delay: Duration,
}

impl SpotifyClient {
    /// Retries spent on 502 and 429 answers before the status is returned as an error.
    pub const MAX_RETRIES: usize = 5;

    pub fn new(api_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            access_token: access_token.into(),
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Replaces the fallback pause used between retries.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Appends `segments` to the API base, percent-encoding each one.
    fn endpoint(&self, segments: &[&str], limit: u32) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| DumpError::Config(format!("Invalid API url {}: {}", self.api_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| DumpError::Config(format!("API url cannot take a path: {}", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        Ok(url)
    }

    async fn get<T: DeserializeOwned + Send>(&self, api_url: &str) -> Result<T> {
        let mut retries = 0;
        loop {
            let response = self
                .http
                .get(api_url)
                .bearer_auth(&self.access_token)
                .send()
                .await?;

            let can_retry = retries < Self::MAX_RETRIES;
            match response.status() {
                StatusCode::BAD_GATEWAY if can_retry => {
                    retries += 1;
                    sleep(self.retry_delay).await;
                    continue; // retry
                }
                StatusCode::TOO_MANY_REQUESTS if can_retry => {
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .map(Duration::from_secs)
                        .unwrap_or(self.retry_delay);
                    if retry_after.as_secs() <= MAX_RETRY_AFTER_SECS {
                        retries += 1;
                        sleep(retry_after).await;
                        continue;
                    }
                    warning!(
                        "Retry after has reached an abnormal high of {} seconds. Try again later.",
                        retry_after.as_secs()
                    );
                }
                _ => {}
            }

            let response = response.error_for_status()?;
            return Ok(response.json::<T>().await?);
        }
    }
}

#[async_trait]
impl CatalogService for SpotifyClient {
    async fn saved_tracks(&self, limit: u32) -> Result<Page<TrackItem>> {
        let api_url = self.endpoint(&["me", "tracks"], limit)?;
        self.get(api_url.as_str()).await
    }

    async fn playlist_tracks(&self, playlist_id: &str, limit: u32) -> Result<Page<TrackItem>> {
        let api_url = self.endpoint(&["playlists", playlist_id, "tracks"], limit)?;
        self.get(api_url.as_str()).await
    }

    async fn user_playlists(&self, user: &str, limit: u32) -> Result<Page<Playlist>> {
        let api_url = self.endpoint(&["users", user, "playlists"], limit)?;
        self.get(api_url.as_str()).await
    }

    async fn next_page<T>(&self, next: Option<&str>) -> Result<Option<Page<T>>>
    where
        T: DeserializeOwned + Send,
    {
        match next {
            Some(api_url) => self.get(api_url).await.map(Some),
            None => Ok(None),
        }
    }
}
