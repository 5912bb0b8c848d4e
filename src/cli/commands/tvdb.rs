//! TheTVDB job.
//!
//! Logs in, follows the paged episode listing, then downloads every thumbnail
//! into `Season NN` folders.

use crate::cli::output;
use crate::core::collector;
use crate::core::ThumbnailDownloader;
use crate::generators::Layout;
use crate::models::config::{JobConfig, ProviderEndpoints};
use crate::models::summary::RunSummary;
use crate::services::images::HttpImageSource;
use crate::services::tvdb::TvdbClient;
use crate::utils::fs;
use crate::Result;

/// Run the TheTVDB job.
pub async fn run(config: &JobConfig) -> Result<RunSummary> {
    let endpoints = ProviderEndpoints::tvdb();
    fs::create_dir_all(&config.output_dir)?;

    let http = reqwest::Client::new();

    println!("Authenticating with TheTVDB API...");
    let client = TvdbClient::login(http.clone(), endpoints.clone(), &config.api_key).await?;
    println!("Authentication successful!");
    println!();

    println!("Fetching TV series details...");
    let series = client.get_series_details(config.series_id).await?;
    println!("Series: {}", series.name);
    println!("Series ID: {}", config.series_id);
    println!();

    println!("Fetching all episodes...");
    let catalog = collector::collect_paged(&client, config.series_id, &series.name).await;
    println!("Found {} seasons", catalog.seasons.len());
    println!();

    let images = HttpImageSource::new(http);
    let downloader = ThumbnailDownloader::new(
        &images,
        Layout::Tvdb,
        endpoints.image_base_url,
        config.output_dir.clone(),
    )
    .with_concurrency(config.concurrency);

    let summary = downloader
        .download_catalog(&catalog, |event| output::print_event(Layout::Tvdb, event))
        .await?;

    output::print_summary(&summary, &catalog, &config.output_dir);
    Ok(summary)
}
