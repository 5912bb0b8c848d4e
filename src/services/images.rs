//! Thumbnail download over HTTP.

use super::ImageSource;
use crate::Result;
use async_trait::async_trait;

/// Resolve an image reference to an absolute URL.
///
/// References that already carry an `http://` or `https://` scheme are used
/// as-is; anything else is a path on the provider's image host.
pub fn resolve_image_url(reference: &str, image_base_url: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        reference.to_string()
    } else {
        format!("{}{}", image_base_url, reference)
    }
}

/// Image source backed by a plain, unauthenticated HTTP client.
pub struct HttpImageSource {
    client: reqwest::Client,
}

impl HttpImageSource {
    /// Create a new image source sharing the given client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(crate::Error::DownloadStatus(response.status()));
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
