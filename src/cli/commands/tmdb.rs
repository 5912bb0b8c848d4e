//! TMDB job.
//!
//! Reads the declared season count, fetches seasons one by one, then downloads
//! every still into `Season_NN` folders.

use crate::cli::output;
use crate::core::collector;
use crate::core::ThumbnailDownloader;
use crate::generators::Layout;
use crate::models::config::{JobConfig, ProviderEndpoints};
use crate::models::summary::RunSummary;
use crate::services::images::HttpImageSource;
use crate::services::tmdb::TmdbClient;
use crate::utils::fs;
use crate::Result;

/// Run the TMDB job.
pub async fn run(config: &JobConfig) -> Result<RunSummary> {
    let endpoints = ProviderEndpoints::tmdb();
    fs::create_dir_all(&config.output_dir)?;

    let http = reqwest::Client::new();
    let client = TmdbClient::new(http.clone(), endpoints.clone(), &config.api_key);

    println!("Fetching TV show details...");
    let show = client.get_tv_details(config.series_id).await?;
    println!("Show: {}", show.name);
    println!("Total seasons: {}", show.number_of_seasons);
    println!();

    let catalog = collector::collect_by_season(
        &client,
        config.series_id,
        &show.name,
        show.number_of_seasons,
    )
    .await;

    let images = HttpImageSource::new(http);
    let downloader = ThumbnailDownloader::new(
        &images,
        Layout::Tmdb,
        endpoints.image_base_url,
        config.output_dir.clone(),
    )
    .with_concurrency(config.concurrency);

    let summary = downloader
        .download_catalog(&catalog, |event| output::print_event(Layout::Tmdb, event))
        .await?;

    output::print_summary(&summary, &catalog, &config.output_dir);
    Ok(summary)
}
