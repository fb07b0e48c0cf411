// src/config.rs
// =============================================================================
// Runtime settings that aren't worth a command-line flag.
//
// Read from environment variables:
// - GH_SUBTREE_API_URL       contents API base (default https://api.github.com)
//                            point it at a GitHub Enterprise /api/v3 endpoint
// - GH_SUBTREE_CONCURRENCY   requests in flight per directory (default 8)
// - GH_SUBTREE_TIMEOUT_SECS  per-request timeout in seconds (default 30)
//
// Log verbosity is controlled separately through RUST_LOG (see logging.rs).
// =============================================================================

use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

use crate::tree::DEFAULT_CONCURRENCY;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_URL_VAR: &str = "GH_SUBTREE_API_URL";
const CONCURRENCY_VAR: &str = "GH_SUBTREE_CONCURRENCY";
const TIMEOUT_VAR: &str = "GH_SUBTREE_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the contents API.
    pub api_base: Url,
    /// Sibling entries fetched at once per directory.
    pub concurrency: usize,
    /// Timeout applied to every HTTP request.
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key -> value source (the environment, or a
    /// map in tests). Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_base = Url::parse(&api_url)
            .with_context(|| format!("{} is not a valid URL: {}", API_URL_VAR, api_url))?;

        let concurrency = match lookup(CONCURRENCY_VAR) {
            Some(value) => parse_positive(CONCURRENCY_VAR, &value)? as usize,
            None => DEFAULT_CONCURRENCY,
        };

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(value) => parse_positive(TIMEOUT_VAR, &value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base,
            concurrency,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    let parsed: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("{} must be a positive integer, got '{}'", key, value))?;

    if parsed == 0 {
        bail!("{} must be a positive integer, got '{}'", key, value);
    }
    Ok(parsed)
}
