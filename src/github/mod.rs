// src/github/mod.rs
// =============================================================================
// This module talks to GitHub.
//
// Two narrow interfaces sit at the network boundary:
// - ContentFetcher: "what is at this path?" (a file, or a directory listing)
// - ByteFetcher: "give me the raw bytes behind this download URL"
//
// The tree builder only depends on these traits, so tests can swap in an
// in-memory remote instead of hitting the network.
//
// Implementations:
// - GitHubApi: the REST contents API (api.github.com/repos/.../contents/...)
// - RawDownloader: plain GET of raw.githubusercontent.com download URLs
// =============================================================================

mod client;
mod contents;
mod download;
mod error;

#[cfg(test)]
pub mod fake;

pub use client::build_client;
pub use contents::{ContentFetcher, Contents, Entry, EntryKind, GitHubApi};
pub use download::{ByteFetcher, RawDownloader};
pub use error::FetchError;
