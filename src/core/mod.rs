//! Core business logic modules.

pub mod collector;
pub mod downloader;
pub mod progress;

pub use downloader::ThumbnailDownloader;
pub use progress::ProgressEvent;
