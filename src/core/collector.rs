//! Episode collection.
//!
//! Two strategies build a [`Catalog`]:
//! - paged: follow page numbers until a page is empty or has no next link
//! - per season: fetch seasons `1..=N` one by one
//!
//! Neither fails as a whole. A failing page stops paging; a failing season is
//! left out. Both are recorded as [`CollectionGap`]s on the catalog.

use crate::models::episode::{Catalog, CollectionGap, SeasonGroups};
use crate::services::{EpisodePageSource, SeasonSource};

/// Collect a series by following its paged episode listing.
///
/// Pages are requested from 0 upward. Paging stops after the first page that
/// is empty or has no next link, and never requests past it. Episodes without
/// a season number are dropped.
pub async fn collect_paged<S>(source: &S, series_id: u64, series_name: &str) -> Catalog
where
    S: EpisodePageSource + ?Sized,
{
    let mut seasons = SeasonGroups::new();
    let mut gaps = Vec::new();
    let mut page = 0u32;

    loop {
        let result = match source.fetch_episode_page(series_id, page).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Error fetching page {}: {}", page, e);
                gaps.push(CollectionGap::PageFailed {
                    page,
                    reason: e.to_string(),
                });
                break;
            }
        };

        if result.episodes.is_empty() {
            break;
        }

        let received = result.episodes.len();
        let mut dropped = 0usize;
        for listed in result.episodes {
            match listed.into_episode() {
                Some(episode) => seasons
                    .entry(episode.season_number)
                    .or_default()
                    .push(episode),
                None => dropped += 1,
            }
        }
        tracing::debug!(
            "Page {}: {} episodes ({} without season)",
            page,
            received,
            dropped
        );

        if !result.has_next {
            break;
        }

        page += 1;
    }

    Catalog {
        series_name: series_name.to_string(),
        seasons,
        gaps,
    }
}

/// Collect a show season by season, for seasons `1..=season_count`.
///
/// A failing season is skipped and collection carries on with the next one.
/// Successfully fetched seasons are present even when they have no episodes.
pub async fn collect_by_season<S>(
    source: &S,
    show_id: u64,
    series_name: &str,
    season_count: u32,
) -> Catalog
where
    S: SeasonSource + ?Sized,
{
    let mut seasons = SeasonGroups::new();
    let mut gaps = Vec::new();

    for season_number in 1..=season_count {
        match source.fetch_season_episodes(show_id, season_number).await {
            Ok(episodes) => {
                tracing::debug!("Season {}: {} episodes", season_number, episodes.len());
                seasons.insert(season_number, episodes);
            }
            Err(e) => {
                tracing::warn!("Error processing season {}: {}", season_number, e);
                gaps.push(CollectionGap::SeasonFailed {
                    season: season_number,
                    reason: e.to_string(),
                });
            }
        }
    }

    Catalog {
        series_name: series_name.to_string(),
        seasons,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::episode::{Episode, EpisodePage, ListedEpisode};
    use crate::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Pages {
        pages: Vec<EpisodePage>,
        requested: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl EpisodePageSource for Pages {
        async fn fetch_episode_page(&self, _series_id: u64, page: u32) -> Result<EpisodePage> {
            self.requested.lock().unwrap().push(page);
            match self.pages.get(page as usize) {
                Some(p) => Ok(p.clone()),
                None => panic!("requested page {} past the end", page),
            }
        }
    }

    fn listed(season: Option<u32>, number: u32) -> ListedEpisode {
        ListedEpisode {
            season_number: season,
            episode_number: number,
            name: format!("Episode {}", number),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_stops_without_next_link() {
        let source = Pages {
            pages: vec![EpisodePage {
                episodes: vec![listed(Some(1), 1), listed(Some(2), 1)],
                has_next: false,
            }],
            requested: Mutex::new(Vec::new()),
        };

        let catalog = collect_paged(&source, 1, "Show").await;
        assert_eq!(*source.requested.lock().unwrap(), vec![0]);
        assert_eq!(catalog.seasons.len(), 2);
        assert!(!catalog.is_partial());
    }

    #[tokio::test]
    async fn test_drops_episodes_without_season() {
        let source = Pages {
            pages: vec![EpisodePage {
                episodes: vec![listed(None, 1), listed(Some(0), 2), listed(None, 3)],
                has_next: false,
            }],
            requested: Mutex::new(Vec::new()),
        };

        let catalog = collect_paged(&source, 1, "Show").await;
        assert_eq!(catalog.episode_count(), 1);
        assert_eq!(catalog.seasons[&0][0].episode_number, 2);
    }

    #[tokio::test]
    async fn test_season_source_failure_recorded() {
        struct Failing;

        #[async_trait]
        impl SeasonSource for Failing {
            async fn fetch_season_episodes(&self, _id: u64, season: u32) -> Result<Vec<Episode>> {
                Err(crate::Error::Io(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    format!("season {} unavailable", season),
                )))
            }
        }

        let catalog = collect_by_season(&Failing, 1, "Show", 2).await;
        assert!(catalog.seasons.is_empty());
        assert_eq!(catalog.gaps.len(), 2);
    }
}
