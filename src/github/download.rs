// src/github/download.rs
// =============================================================================
// Downloads raw file bytes from a download URL.
//
// The contents API hands us a download_url for every file
// (usually on raw.githubusercontent.com). Fetching it is a plain GET.
// A non-2xx status is an error carrying the status text.
// =============================================================================

use reqwest::Client;
use tracing::debug;

use super::FetchError;

/// Fetches the bytes behind a download location.
pub trait ByteFetcher {
    async fn fetch_bytes(&self, location: &str) -> Result<Vec<u8>, FetchError>;
}

impl<T: ByteFetcher> ByteFetcher for &T {
    async fn fetch_bytes(&self, location: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch_bytes(location).await
    }
}

/// ByteFetcher over plain HTTP GET requests.
#[derive(Debug, Clone)]
pub struct RawDownloader {
    client: Client,
}

impl RawDownloader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ByteFetcher for RawDownloader {
    async fn fetch_bytes(&self, location: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| FetchError::download(location, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::download(location, status.to_string()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::download(location, e.to_string()))?;

        debug!(location, size = bytes.len(), "downloaded");
        Ok(bytes.to_vec())
    }
}
