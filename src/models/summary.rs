//! Per-episode outcomes and the run summary.

use std::path::PathBuf;

/// What happened to one episode's thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The image was written to this path.
    Downloaded(PathBuf),
    /// The episode has no image reference. No request was made.
    Skipped,
    /// The download was attempted and failed.
    Failed(String),
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Count one outcome. Each outcome bumps exactly one counter.
    pub fn record(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Downloaded(_) => self.downloaded += 1,
            DownloadOutcome::Skipped => self.skipped += 1,
            DownloadOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Number of episodes seen.
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }
}

impl std::ops::AddAssign for RunSummary {
    fn add_assign(&mut self, other: Self) {
        self.downloaded += other.downloaded;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_bumps_one_counter() {
        let mut summary = RunSummary::default();
        summary.record(&DownloadOutcome::Downloaded(PathBuf::from("a.jpg")));
        summary.record(&DownloadOutcome::Skipped);
        summary.record(&DownloadOutcome::Skipped);
        summary.record(&DownloadOutcome::Failed("timeout".to_string()));

        assert_eq!(
            summary,
            RunSummary {
                downloaded: 1,
                skipped: 2,
                failed: 1
            }
        );
        assert_eq!(summary.total(), 4);
    }
}
