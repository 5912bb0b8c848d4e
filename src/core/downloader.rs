//! Thumbnail downloader.
//!
//! Walks a [`Catalog`] season by season and fetches at most one image per
//! episode. Per-episode failures become [`DownloadOutcome::Failed`]; only a
//! season folder that cannot be created aborts the run.

use super::progress::ProgressEvent;
use crate::generators::Layout;
use crate::models::episode::{Catalog, CollectionGap, Episode};
use crate::models::summary::{DownloadOutcome, RunSummary};
use crate::services::images::resolve_image_url;
use crate::services::ImageSource;
use crate::utils::fs;
use crate::Result;
use futures::stream::{self, StreamExt};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Downloads episode thumbnails into season folders.
pub struct ThumbnailDownloader<'a, S: ImageSource + ?Sized> {
    source: &'a S,
    layout: Layout,
    image_base_url: String,
    output_dir: PathBuf,
    concurrency: usize,
}

impl<'a, S: ImageSource + ?Sized> ThumbnailDownloader<'a, S> {
    /// Create a sequential downloader.
    pub fn new(
        source: &'a S,
        layout: Layout,
        image_base_url: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source,
            layout,
            image_base_url: image_base_url.into(),
            output_dir: output_dir.into(),
            concurrency: 1,
        }
    }

    /// Allow up to `concurrency` downloads in flight within a season.
    ///
    /// Results are still reported in episode order.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Download every thumbnail in the catalog.
    ///
    /// Seasons are processed in ascending order, episodes in catalog order.
    pub async fn download_catalog<F>(&self, catalog: &Catalog, mut progress: F) -> Result<RunSummary>
    where
        F: FnMut(ProgressEvent),
    {
        let mut summary = RunSummary::default();

        // Failed seasons are reported where they would have been processed.
        let mut failed: BTreeMap<u32, &str> = catalog
            .gaps
            .iter()
            .filter_map(|gap| match gap {
                CollectionGap::SeasonFailed { season, reason } => Some((*season, reason.as_str())),
                CollectionGap::PageFailed { .. } => None,
            })
            .collect();

        for (&season_number, episodes) in &catalog.seasons {
            report_failed_seasons(&mut failed, Some(season_number), &mut progress);

            let season_dir = self.output_dir.join(self.layout.season_folder(season_number));
            fs::create_dir_all(&season_dir)?;

            progress(ProgressEvent::SeasonStarted {
                season_number,
                episode_count: episodes.len(),
                folder: season_dir.clone(),
            });

            summary += self
                .download_season(episodes, &season_dir, &mut progress)
                .await;
        }
        report_failed_seasons(&mut failed, None, &mut progress);

        tracing::debug!(
            "Run finished: {} episodes ({} downloaded, {} skipped, {} failed)",
            summary.total(),
            summary.downloaded,
            summary.skipped,
            summary.failed
        );
        Ok(summary)
    }

    /// Download one season's thumbnails into an existing folder.
    pub async fn download_season<F>(
        &self,
        episodes: &[Episode],
        season_dir: &Path,
        progress: &mut F,
    ) -> RunSummary
    where
        F: FnMut(ProgressEvent),
    {
        let mut summary = RunSummary::default();

        let results = stream::iter(episodes)
            .map(|episode| async move {
                let outcome = self.fetch_thumbnail(episode, season_dir).await;
                (episode, outcome)
            })
            .buffered(self.concurrency);
        futures::pin_mut!(results);

        while let Some((episode, outcome)) = results.next().await {
            summary.record(&outcome);
            progress(ProgressEvent::EpisodeFinished {
                code: self.layout.episode_code(episode),
                title: self.layout.display_title(episode),
                outcome,
            });
        }

        summary
    }

    /// Download one episode's thumbnail, or skip it when it has none.
    ///
    /// Existing files are overwritten.
    pub async fn fetch_thumbnail(&self, episode: &Episode, season_dir: &Path) -> DownloadOutcome {
        let Some(image) = episode.image_ref() else {
            return DownloadOutcome::Skipped;
        };

        let path = season_dir.join(self.layout.thumbnail_filename(episode, image));
        let url = resolve_image_url(image, &self.image_base_url);

        match self.save_image(&url, &path).await {
            Ok(()) => {
                tracing::debug!("Downloaded: {:?}", path);
                DownloadOutcome::Downloaded(path)
            }
            Err(e) => {
                tracing::debug!("Download failed: {} - {}", url, e);
                DownloadOutcome::Failed(e.to_string())
            }
        }
    }

    async fn save_image(&self, url: &str, path: &Path) -> Result<()> {
        let bytes = self.source.fetch_image(url).await?;
        fs::write_file(path, &bytes)
    }
}

/// Emit `SeasonFailed` for failed seasons numbered below `before` (all when `None`).
fn report_failed_seasons<F>(failed: &mut BTreeMap<u32, &str>, before: Option<u32>, progress: &mut F)
where
    F: FnMut(ProgressEvent),
{
    let remaining = match before {
        Some(season_number) => failed.split_off(&season_number),
        None => BTreeMap::new(),
    };
    for (season_number, reason) in std::mem::replace(failed, remaining) {
        progress(ProgressEvent::SeasonFailed {
            season_number,
            reason: reason.to_string(),
        });
    }
}
