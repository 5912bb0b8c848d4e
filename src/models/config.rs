//! Configuration model.

use crate::Result;
use std::path::PathBuf;

/// Environment variable names and defaults for one provider.
#[derive(Debug, Clone, Copy)]
pub struct EnvKeys {
    pub api_key: &'static str,
    pub series_id: &'static str,
    pub output_dir: &'static str,
    pub default_series_id: u64,
    pub default_output_dir: &'static str,
}

/// TheTVDB environment (`tvdb` job).
pub const TVDB_ENV: EnvKeys = EnvKeys {
    api_key: "THETVDB_API_KEY",
    series_id: "THETVDB_SERIES_ID",
    output_dir: "THETVDB_OUTPUT_DIR",
    default_series_id: 72474,
    default_output_dir: "thetvdb_thumbnails",
};

/// TMDB environment (`tmdb` job).
pub const TMDB_ENV: EnvKeys = EnvKeys {
    api_key: "TMDB_API_KEY",
    series_id: "TMDB_TV_SHOW_ID",
    output_dir: "TMDB_OUTPUT_DIR",
    default_series_id: 1570,
    default_output_dir: "thumbnails",
};

/// Fixed API and image hosts for one provider.
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub api_base_url: String,
    pub image_base_url: String,
}

impl ProviderEndpoints {
    /// TheTVDB v4 endpoints.
    pub fn tvdb() -> Self {
        Self {
            api_base_url: "https://api4.thetvdb.com/v4".to_string(),
            image_base_url: "https://artworks.thetvdb.com".to_string(),
        }
    }

    /// TMDB v3 endpoints.
    pub fn tmdb() -> Self {
        Self {
            api_base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/original".to_string(),
        }
    }
}

/// Job configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// API key for the metadata provider.
    pub api_key: String,
    /// Series (TheTVDB) or show (TMDB) id.
    pub series_id: u64,
    /// Root directory for season folders.
    pub output_dir: PathBuf,
    /// Maximum thumbnail downloads in flight.
    pub concurrency: usize,
}

impl JobConfig {
    /// Build configuration from the process environment.
    pub fn from_env(keys: &EnvKeys) -> Result<Self> {
        Self::from_lookup(keys, |name| std::env::var(name).ok())
    }

    /// Build configuration from any variable lookup.
    ///
    /// An empty API key counts as missing. The series id must parse as an
    /// unsigned integer when set.
    pub fn from_lookup<F>(keys: &EnvKeys, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(keys.api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| crate::Error::ApiKeyMissing(keys.api_key.to_string()))?;

        let series_id = match lookup(keys.series_id) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| crate::Error::InvalidSeriesId {
                name: keys.series_id.to_string(),
                value: raw.clone(),
            })?,
            None => keys.default_series_id,
        };

        let output_dir = lookup(keys.output_dir)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(keys.default_output_dir));

        Ok(Self {
            api_key,
            series_id,
            output_dir,
            concurrency: 1,
        })
    }

    /// Apply command line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        series_id: Option<u64>,
        output_dir: Option<PathBuf>,
        concurrency: usize,
    ) -> Self {
        if let Some(id) = series_id {
            self.series_id = id;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self.concurrency = concurrency.max(1);
        self
    }
}

/// Load a `.env` file from the working directory, if there is one.
///
/// Returns whether a file was loaded. A missing file is fine; a malformed one
/// is an error.
pub fn load_dotenv() -> Result<bool> {
    dotenv_loaded(dotenvy::dotenv())
}

/// Map a dotenv load result: only a missing file is tolerated.
fn dotenv_loaded<T>(result: dotenvy::Result<T>) -> Result<bool> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e.into()),
    }
}
