//! TheTVDB v4 API client.

use super::auth::Credential;
use super::EpisodePageSource;
use crate::models::config::ProviderEndpoints;
use crate::models::episode::{EpisodePage, ListedEpisode};
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Season type used for the episode listing.
pub const DEFAULT_SEASON_TYPE: &str = "default";

/// Login request body.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    apikey: &'a str,
}

/// Login response.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    data: Option<LoginData>,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    #[serde(default)]
    token: Option<String>,
}

impl LoginResponse {
    /// The bearer token, or [`crate::Error::TokenMissing`].
    fn into_token(self) -> Result<String> {
        self.data
            .and_then(|data| data.token)
            .filter(|token| !token.is_empty())
            .ok_or(crate::Error::TokenMissing)
    }
}

/// Series details response.
#[derive(Debug, Deserialize)]
struct SeriesResponse {
    data: SeriesDetails,
}

/// Series details (extended record, only the fields we use).
#[derive(Debug, Deserialize)]
pub struct SeriesDetails {
    pub id: u64,
    pub name: String,
}

/// Episode listing response.
#[derive(Debug, Default, Deserialize)]
pub struct EpisodesResponse {
    #[serde(default)]
    pub data: Option<EpisodesData>,
    #[serde(default)]
    pub links: Option<Links>,
}

/// Episode listing payload.
#[derive(Debug, Default, Deserialize)]
pub struct EpisodesData {
    #[serde(default)]
    pub episodes: Option<Vec<TvdbEpisode>>,
}

/// Pagination links.
#[derive(Debug, Default, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: Option<serde_json::Value>,
}

/// A single listed episode.
#[derive(Debug, Deserialize)]
pub struct TvdbEpisode {
    #[serde(rename = "seasonNumber", default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<TvdbEpisode> for ListedEpisode {
    fn from(episode: TvdbEpisode) -> Self {
        ListedEpisode {
            season_number: episode.season_number,
            episode_number: episode.number.unwrap_or(0),
            name: episode.name.unwrap_or_else(|| "Unknown".to_string()),
            image: episode.image,
        }
    }
}

impl EpisodesResponse {
    /// Convert to an [`EpisodePage`].
    pub fn into_page(self) -> EpisodePage {
        let has_next = self
            .links
            .and_then(|links| links.next)
            .map(|next| is_truthy(&next))
            .unwrap_or(false);

        let episodes = self
            .data
            .and_then(|data| data.episodes)
            .unwrap_or_default()
            .into_iter()
            .map(ListedEpisode::from)
            .collect();

        EpisodePage { episodes, has_next }
    }
}

/// JSON truthiness: null, false, 0, "" and empty containers are false.
fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// TheTVDB API client holding a bearer token.
pub struct TvdbClient {
    client: reqwest::Client,
    endpoints: ProviderEndpoints,
    credential: Credential,
}

impl TvdbClient {
    /// Exchange the API key for a bearer token.
    ///
    /// A rejected login is fatal: there is no retry.
    pub async fn login(
        client: reqwest::Client,
        endpoints: ProviderEndpoints,
        api_key: &str,
    ) -> Result<Self> {
        let url = format!("{}/login", endpoints.api_base_url);
        tracing::debug!("POST {}", url);

        let response = client
            .post(&url)
            .json(&LoginRequest { apikey: api_key })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(crate::Error::AuthenticationFailed(response.status()));
        }

        let login: LoginResponse = response.json().await?;
        let token = login.into_token()?;

        Ok(Self {
            client,
            endpoints,
            credential: Credential::Bearer(token),
        })
    }

    /// Build an authorized GET request.
    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.credential.apply(self.client.get(url))
    }

    /// Get series details.
    pub async fn get_series_details(&self, series_id: u64) -> Result<SeriesDetails> {
        let url = format!("{}/series/{}/extended", self.endpoints.api_base_url, series_id);
        tracing::debug!("GET {}", url);

        let resp: SeriesResponse = self
            .build_request(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp.data)
    }

    /// Get one page of a series' episodes for a season type.
    pub async fn get_series_episodes(
        &self,
        series_id: u64,
        season_type: &str,
        page: u32,
    ) -> Result<EpisodesResponse> {
        let url = format!(
            "{}/series/{}/episodes/{}",
            self.endpoints.api_base_url, series_id, season_type
        );
        tracing::debug!("GET {} (page {})", url, page);

        let resp = self
            .build_request(&url)
            .query(&[("page", page)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp)
    }
}

#[async_trait]
impl EpisodePageSource for TvdbClient {
    async fn fetch_episode_page(&self, series_id: u64, page: u32) -> Result<EpisodePage> {
        let resp = self
            .get_series_episodes(series_id, DEFAULT_SEASON_TYPE, page)
            .await?;
        Ok(resp.into_page())
    }
}
