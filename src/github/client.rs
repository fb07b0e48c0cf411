// src/github/client.rs
// =============================================================================
// Builds the one reqwest client shared by the contents API and raw downloads.
//
// GitHub rejects API requests without a User-Agent header, so we always send
// one. Cloning a reqwest::Client is cheap (it is reference counted), which
// lets GitHubApi and RawDownloader share a connection pool.
// =============================================================================

use reqwest::Client;

use crate::config::Config;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn build_client(config: &Config) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout)
        .build()
}
