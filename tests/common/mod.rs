//! In-memory metadata and image sources shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use episode_thumbs::models::episode::{Episode, EpisodePage, ListedEpisode};
use episode_thumbs::services::{EpisodePageSource, ImageSource, SeasonSource};
use episode_thumbs::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Scripted page listing. `None` entries fail.
pub struct ScriptedPages {
    pages: Vec<Option<EpisodePage>>,
    pub requested: Mutex<Vec<u32>>,
}

impl ScriptedPages {
    pub fn new(pages: Vec<Option<EpisodePage>>) -> Self {
        Self {
            pages,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl EpisodePageSource for ScriptedPages {
    async fn fetch_episode_page(&self, _series_id: u64, page: u32) -> Result<EpisodePage> {
        self.requested.lock().unwrap().push(page);
        match self.pages.get(page as usize) {
            Some(Some(p)) => Ok(p.clone()),
            Some(None) => Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                format!("connection reset on page {}", page),
            ))),
            None => panic!("page {} requested past the scripted end", page),
        }
    }
}

/// Scripted per-season listing. Seasons in `failing` return an error.
#[derive(Default)]
pub struct ScriptedSeasons {
    pub seasons: HashMap<u32, Vec<Episode>>,
    pub failing: HashSet<u32>,
    pub requested: Mutex<Vec<u32>>,
}

#[async_trait]
impl SeasonSource for ScriptedSeasons {
    async fn fetch_season_episodes(&self, _show_id: u64, season_number: u32) -> Result<Vec<Episode>> {
        self.requested.lock().unwrap().push(season_number);
        if self.failing.contains(&season_number) {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("HTTP 500 for season {}", season_number),
            )));
        }
        Ok(self.seasons.get(&season_number).cloned().unwrap_or_default())
    }
}

/// Serves fixed bytes per URL; unknown URLs fail like a 404.
#[derive(Default)]
pub struct FakeImages {
    pub images: HashMap<String, Vec<u8>>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeImages {
    pub fn with(mut self, url: &str, bytes: &[u8]) -> Self {
        self.images.insert(url.to_string(), bytes.to_vec());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSource for FakeImages {
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        self.requested.lock().unwrap().push(url.to_string());
        self.images
            .get(url)
            .cloned()
            .ok_or(Error::DownloadStatus(reqwest::StatusCode::NOT_FOUND))
    }
}

pub fn episode(season: u32, number: u32, name: &str, image: Option<&str>) -> Episode {
    Episode {
        season_number: season,
        episode_number: number,
        name: name.to_string(),
        image: image.map(str::to_string),
    }
}

pub fn listed(season: Option<u32>, number: u32, name: &str, image: Option<&str>) -> ListedEpisode {
    ListedEpisode {
        season_number: season,
        episode_number: number,
        name: name.to_string(),
        image: image.map(str::to_string),
    }
}

pub fn page(episodes: Vec<ListedEpisode>, has_next: bool) -> Option<EpisodePage> {
    Some(EpisodePage { episodes, has_next })
}
