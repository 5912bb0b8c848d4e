//! Episode Thumbs Library
//!
//! Mirrors TV episode thumbnails from TheTVDB or TMDB into per-season folders.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
