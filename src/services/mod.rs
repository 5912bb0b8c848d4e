//! External services: metadata APIs and the image hosts.
//!
//! The collectors and the downloader only see the traits below, so tests can
//! feed them in-memory data.

pub mod auth;
pub mod images;
pub mod tmdb;
pub mod tvdb;

use crate::models::episode::{Episode, EpisodePage};
use crate::Result;
use async_trait::async_trait;

/// A paged episode listing (TheTVDB style).
#[async_trait]
pub trait EpisodePageSource: Send + Sync {
    /// Fetch one zero-based page of a series' episodes.
    async fn fetch_episode_page(&self, series_id: u64, page: u32) -> Result<EpisodePage>;
}

/// A per-season episode listing (TMDB style).
#[async_trait]
pub trait SeasonSource: Send + Sync {
    /// Fetch all episodes of one season.
    async fn fetch_season_episodes(&self, show_id: u64, season_number: u32)
        -> Result<Vec<Episode>>;
}

/// Something that can fetch raw image bytes by absolute URL.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch the image at `url`.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>>;
}
