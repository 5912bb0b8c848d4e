//! Episode and catalog models.

use std::collections::BTreeMap;

/// A single episode, after its season number is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Season number (0 for specials on TheTVDB).
    pub season_number: u32,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Episode title as delivered by the API.
    pub name: String,
    /// Image path or absolute URL. `None` when the API has no thumbnail.
    pub image: Option<String>,
}

impl Episode {
    /// The image reference, if it is present and non-empty.
    pub fn image_ref(&self) -> Option<&str> {
        self.image.as_deref().filter(|path| !path.is_empty())
    }
}

/// An episode as listed by a paged endpoint, before grouping.
///
/// The season number may be missing; such episodes never reach a season group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEpisode {
    pub season_number: Option<u32>,
    pub episode_number: u32,
    pub name: String,
    pub image: Option<String>,
}

impl ListedEpisode {
    /// Convert to an [`Episode`] if the season number is known.
    pub fn into_episode(self) -> Option<Episode> {
        let season_number = self.season_number?;
        Some(Episode {
            season_number,
            episode_number: self.episode_number,
            name: self.name,
            image: self.image,
        })
    }
}

/// One page of a paged episode listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodePage {
    pub episodes: Vec<ListedEpisode>,
    /// Whether the server advertised a next page.
    pub has_next: bool,
}

/// Episodes grouped by season number, seasons in ascending order.
///
/// Episodes keep the order the API delivered them in.
pub type SeasonGroups = BTreeMap<u32, Vec<Episode>>;

/// Part of the catalog that could not be collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionGap {
    /// Paging stopped at this page because the request failed.
    PageFailed { page: u32, reason: String },
    /// This season could not be fetched and was left out.
    SeasonFailed { season: u32, reason: String },
}

impl std::fmt::Display for CollectionGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionGap::PageFailed { page, reason } => {
                write!(f, "episode listing stopped at page {}: {}", page, reason)
            }
            CollectionGap::SeasonFailed { season, reason } => {
                write!(f, "season {} skipped: {}", season, reason)
            }
        }
    }
}

/// Everything collected for one series.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Series display name.
    pub series_name: String,
    /// Episodes per season.
    pub seasons: SeasonGroups,
    /// Pages or seasons that failed during collection.
    pub gaps: Vec<CollectionGap>,
}

impl Catalog {
    /// Total number of grouped episodes.
    pub fn episode_count(&self) -> usize {
        self.seasons.values().map(Vec::len).sum()
    }

    /// Whether collection hit any failure.
    pub fn is_partial(&self) -> bool {
        !self.gaps.is_empty()
    }
}
