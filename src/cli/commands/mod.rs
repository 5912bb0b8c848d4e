//! CLI command implementations.

pub mod tmdb;
pub mod tvdb;
