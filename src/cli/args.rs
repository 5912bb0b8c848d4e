//! Command line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Episode Thumbs - Mirror TV episode thumbnails into season folders
#[derive(Parser, Debug)]
#[command(name = "episode-thumbs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download thumbnails from TheTVDB (reads THETVDB_* variables)
    Tvdb(JobArgs),

    /// Download thumbnails from TMDB (reads TMDB_* variables)
    Tmdb(JobArgs),
}

/// Overrides shared by both jobs.
#[derive(Args, Debug)]
pub struct JobArgs {
    /// Series or show id (overrides the environment)
    #[arg(long, value_name = "ID")]
    pub series_id: Option<u64>,

    /// Output directory for season folders (overrides the environment)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Maximum thumbnail downloads in flight
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,
}
