//! Console output for download runs.

use crate::core::ProgressEvent;
use crate::generators::Layout;
use crate::models::episode::Catalog;
use crate::models::summary::{DownloadOutcome, RunSummary};
use colored::Colorize;
use std::path::Path;

/// Print one progress event.
pub fn print_event(layout: Layout, event: ProgressEvent) {
    match event {
        ProgressEvent::SeasonStarted {
            season_number,
            episode_count,
            folder,
        } => {
            print_season_header(layout, season_number);
            tracing::debug!("{} episodes -> {}", episode_count, folder.display());
        }
        ProgressEvent::SeasonFailed {
            season_number,
            reason,
        } => {
            print_season_header(layout, season_number);
            println!(
                "  {} Error processing season {}: {}",
                "✗".red(),
                season_number,
                reason
            );
        }
        ProgressEvent::EpisodeFinished {
            code,
            title,
            outcome,
        } => match outcome {
            DownloadOutcome::Downloaded(_) => {
                let label = match layout {
                    Layout::Tvdb => format!("{} {}", code, title),
                    Layout::Tmdb => format!("{} - {}", code, title),
                };
                println!("  {} Downloaded: {}", "✓".green(), label);
            }
            DownloadOutcome::Skipped => {
                println!("  {} No thumbnail for {} - {}", "-".yellow(), code, title);
            }
            DownloadOutcome::Failed(reason) => {
                println!("  {} Failed to download {}: {}", "✗".red(), code, reason);
            }
        },
    }
}

fn print_season_header(layout: Layout, season_number: u32) {
    if layout == Layout::Tvdb && season_number == 0 {
        println!("{}", "Processing Specials...".bold());
    } else {
        println!("{}", format!("Processing Season {}...", season_number).bold());
    }
}

/// Print the end-of-run summary.
pub fn print_summary(summary: &RunSummary, catalog: &Catalog, output_dir: &Path) {
    println!();
    println!("{}", "=".repeat(50));
    println!("{}", "Download complete!".bold().green());
    println!("Total downloaded: {}", summary.downloaded);
    println!("Total skipped (no thumbnail): {}", summary.skipped);
    if summary.failed > 0 {
        println!("{}", format!("Total failed: {}", summary.failed).red());
    }
    if catalog.is_partial() {
        println!(
            "{}",
            "[WARNING] The episode list is incomplete:".bold().yellow()
        );
        for gap in &catalog.gaps {
            println!("  {} {}", "->".yellow(), gap);
        }
    }
    println!("Saved to: {}", output_dir.display());
}
