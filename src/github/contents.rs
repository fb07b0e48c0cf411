// src/github/contents.rs
// =============================================================================
// Queries the GitHub contents API.
//
//   GET {api}/repos/{owner}/{repo}/contents/{path}?ref={ref}
//
// The response is either:
// - a JSON object describing a single file (the path is a file), or
// - a JSON array of entries (the path is a directory)
//
// Directory entries only carry their name, path, type and (for files) a
// download URL. A subdirectory's own children need another query.
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::FetchError;

/// A path that turned out to be a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub download_url: String,
}

/// What kind of thing a directory entry is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file; the listing already tells us where to download it.
    File { download_url: String },
    /// A directory; its children require a further query.
    Dir,
    /// Symlinks, submodules and anything else we don't download.
    Other(String),
}

impl EntryKind {
    pub fn label(&self) -> &str {
        match self {
            EntryKind::File { .. } => "file",
            EntryKind::Dir => "dir",
            EntryKind::Other(kind) => kind,
        }
    }
}

/// One immediate child in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name, e.g. "lib.rs"
    pub name: String,
    /// Full path inside the repository, e.g. "src/lib.rs"
    pub path: String,
    pub kind: EntryKind,
}

/// Result of asking "what is at this path?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    File(FileDescriptor),
    /// Immediate children in the order the API returned them.
    Directory(Vec<Entry>),
}

/// Describes a path inside a repository.
///
/// An empty `path` is the repository root; `reference: None` is the
/// repository's default branch.
pub trait ContentFetcher {
    async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: Option<&str>,
    ) -> Result<Contents, FetchError>;
}

impl<T: ContentFetcher> ContentFetcher for &T {
    async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: Option<&str>,
    ) -> Result<Contents, FetchError> {
        (**self).fetch(owner, repo, path, reference).await
    }
}

/// ContentFetcher backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubApi {
    client: Client,
    api_base: Url,
}

impl GitHubApi {
    pub fn new(client: Client, api_base: Url) -> Self {
        Self { client, api_base }
    }

    // Builds the contents URL, percent-encoding every path segment
    fn contents_url(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: Option<&str>,
    ) -> Result<Url, FetchError> {
        let mut url = self.api_base.clone();

        url.path_segments_mut()
            .map_err(|_| FetchError::remote(path, format!("unusable API base URL {}", self.api_base)))?
            .pop_if_empty()
            .extend(["repos", owner, repo, "contents"])
            .extend(path.split('/').filter(|segment| !segment.is_empty()));

        if let Some(reference) = reference {
            url.query_pairs_mut().append_pair("ref", reference);
        }

        Ok(url)
    }
}

impl ContentFetcher for GitHubApi {
    async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: Option<&str>,
    ) -> Result<Contents, FetchError> {
        let url = self.contents_url(owner, repo, path, reference)?;
        debug!(%url, "querying contents API");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| FetchError::remote(path, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::remote(path, format!("HTTP {}", status)));
        }

        let raw: RawContents = response
            .json()
            .await
            .map_err(|e| FetchError::remote(path, format!("unexpected response: {}", e)))?;

        into_contents(path, raw)
    }
}

// Shape of one item in the API's JSON. Fields we don't need (sha, size,
// html_url, content, ...) are ignored by serde.
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
    download_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawContents {
    Listing(Vec<RawEntry>),
    Single(RawEntry),
}

impl RawEntry {
    fn into_entry(self) -> Result<Entry, FetchError> {
        let kind = match self.kind.as_str() {
            "file" => match self.download_url {
                Some(download_url) => EntryKind::File { download_url },
                None => {
                    return Err(FetchError::remote(
                        &self.path,
                        format!("file '{}' has no download URL", self.name),
                    ))
                }
            },
            "dir" => EntryKind::Dir,
            other => EntryKind::Other(other.to_string()),
        };

        Ok(Entry {
            name: self.name,
            path: self.path,
            kind,
        })
    }
}

fn into_contents(path: &str, raw: RawContents) -> Result<Contents, FetchError> {
    match raw {
        RawContents::Listing(items) => {
            let entries = items
                .into_iter()
                .map(RawEntry::into_entry)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Contents::Directory(entries))
        }
        RawContents::Single(item) => {
            let entry = item.into_entry()?;
            match entry.kind {
                EntryKind::File { download_url } => Ok(Contents::File(FileDescriptor {
                    name: entry.name,
                    download_url,
                })),
                other => Err(FetchError::remote(
                    path,
                    format!("unsupported content type '{}'", other.label()),
                )),
            }
        }
    }
}
