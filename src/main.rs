//! Episode Thumbs CLI
//!
//! A command-line tool for mirroring TV episode thumbnails from TheTVDB or TMDB.

use clap::Parser;
use episode_thumbs::cli::{
    args::{Cli, Commands, JobArgs},
    commands::{tmdb, tvdb},
};
use episode_thumbs::models::config::{self, EnvKeys, JobConfig, TMDB_ENV, TVDB_ENV};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Pick up API keys from .env before reading the environment
    if config::load_dotenv()? {
        tracing::debug!("Loaded .env file");
    }

    // Run the appropriate command
    match cli.command {
        Commands::Tvdb(args) => {
            let config = build_config(&TVDB_ENV, args)?;
            tvdb::run(&config).await?;
        }
        Commands::Tmdb(args) => {
            let config = build_config(&TMDB_ENV, args)?;
            tmdb::run(&config).await?;
        }
    }

    Ok(())
}

/// Build the job configuration from the environment and CLI overrides.
fn build_config(keys: &EnvKeys, args: JobArgs) -> anyhow::Result<JobConfig> {
    let config = JobConfig::from_env(keys)?.with_overrides(
        args.series_id,
        args.output,
        usize::from(args.concurrency),
    );
    tracing::debug!(
        "Series {} -> {} (concurrency {})",
        config.series_id,
        config.output_dir.display(),
        config.concurrency
    );
    Ok(config)
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("episode_thumbs=debug")
    } else {
        EnvFilter::new("episode_thumbs=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
