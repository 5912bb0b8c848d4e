//! TMDB API client.

use super::auth::Credential;
use super::SeasonSource;
use crate::models::config::ProviderEndpoints;
use crate::models::episode::Episode;
use crate::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// TMDB API client.
pub struct TmdbClient {
    client: reqwest::Client,
    endpoints: ProviderEndpoints,
    credential: Credential,
}

/// TV show details.
#[derive(Debug, Deserialize)]
pub struct TvDetails {
    pub id: u64,
    pub name: String,
    pub number_of_seasons: u32,
}

/// Season details.
#[derive(Debug, Deserialize)]
pub struct SeasonDetails {
    pub episodes: Vec<EpisodeInfo>,
}

/// Title used when TMDB has no episode name.
pub const UNKNOWN_EPISODE_NAME: &str = "Unknown";

/// Episode info within a season.
#[derive(Debug, Deserialize)]
pub struct EpisodeInfo {
    #[serde(default)]
    pub name: Option<String>,
    pub episode_number: u32,
    #[serde(default)]
    pub still_path: Option<String>,
}

impl TmdbClient {
    /// Create a new TMDB client. The key is sent as a query parameter.
    pub fn new(client: reqwest::Client, endpoints: ProviderEndpoints, api_key: &str) -> Self {
        Self {
            client,
            endpoints,
            credential: Credential::ApiKey(api_key.to_string()),
        }
    }

    /// Build a request with proper authentication.
    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.credential.apply(self.client.get(url))
    }

    /// Get TV show details.
    pub async fn get_tv_details(&self, tv_id: u64) -> Result<TvDetails> {
        let url = format!("{}/tv/{}", self.endpoints.api_base_url, tv_id);
        tracing::debug!("GET {}", url);

        let resp = self
            .build_request(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp)
    }

    /// Get season details.
    pub async fn get_season_details(&self, tv_id: u64, season_number: u32) -> Result<SeasonDetails> {
        let url = format!(
            "{}/tv/{}/season/{}",
            self.endpoints.api_base_url, tv_id, season_number
        );
        tracing::debug!("GET {}", url);

        let resp = self
            .build_request(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp)
    }
}

impl SeasonDetails {
    /// Convert to episodes of the given season.
    pub fn into_episodes(self, season_number: u32) -> Vec<Episode> {
        self.episodes
            .into_iter()
            .map(|info| Episode {
                season_number,
                episode_number: info.episode_number,
                name: info
                    .name
                    .unwrap_or_else(|| UNKNOWN_EPISODE_NAME.to_string()),
                image: info.still_path,
            })
            .collect()
    }
}

#[async_trait]
impl SeasonSource for TmdbClient {
    async fn fetch_season_episodes(
        &self,
        show_id: u64,
        season_number: u32,
    ) -> Result<Vec<Episode>> {
        let season = self.get_season_details(show_id, season_number).await?;
        Ok(season.into_episodes(season_number))
    }
}
