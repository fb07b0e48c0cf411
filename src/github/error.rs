// src/github/error.rs
// =============================================================================
// Errors raised at the network boundary.
//
// Every contents-API problem (not found, unauthorized, bad JSON, network
// fault) collapses into RemoteQueryFailed; every raw download problem into
// ByteFetchFailed. Nothing is retried.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The contents API could not describe `path`.
    #[error("failed to query '{path}': {message}")]
    RemoteQueryFailed { path: String, message: String },

    /// Downloading the bytes behind `location` failed.
    #[error("failed to download {location}: {message}")]
    ByteFetchFailed { location: String, message: String },
}

impl FetchError {
    pub fn remote(path: &str, message: impl Into<String>) -> Self {
        // The repository root is the empty path
        let path = if path.is_empty() { "/" } else { path };
        FetchError::RemoteQueryFailed {
            path: path.to_string(),
            message: message.into(),
        }
    }

    pub fn download(location: &str, message: impl Into<String>) -> Self {
        FetchError::ByteFetchFailed {
            location: location.to_string(),
            message: message.into(),
        }
    }
}
