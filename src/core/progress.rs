//! Progress events emitted while downloading.

use crate::models::summary::DownloadOutcome;
use std::path::PathBuf;

/// Progress event emitted during a download run.
///
/// The library never prints; the binary turns these into console lines.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// A season folder is ready and its episodes are about to be processed.
    SeasonStarted {
        season_number: u32,
        episode_count: usize,
        folder: PathBuf,
    },

    /// A season listed by the show could not be fetched; it has no folder.
    SeasonFailed { season_number: u32, reason: String },

    /// One episode is done.
    EpisodeFinished {
        /// Short code such as `s01e02` or `S01E02`.
        code: String,
        /// Title as shown on the console.
        title: String,
        outcome: DownloadOutcome,
    },
}
