// src/tree/build.rs
// =============================================================================
// Walks a remote directory and downloads everything below it.
//
// How it works:
// 1. Ask the ContentFetcher what lives at the target path
// 2. A file? Download its bytes and we're done
// 3. A directory? For each entry in the listing:
//    - file entries are downloaded directly (the listing has the URL)
//    - dir entries are walked recursively, starting again at step 1
//    - anything else (symlinks, submodules) is skipped
//
// Sibling entries are fetched concurrently through an *ordered* buffered
// stream: up to `concurrency` requests are in flight per directory, but
// results come back in listing order. The first failure in listing order
// stops the directory, and dropping the stream cancels the rest. With
// concurrency = 1 this is a plain sequential depth-first walk.
// =============================================================================

use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use super::TreeNode;
use crate::github::{ByteFetcher, ContentFetcher, Contents, Entry, EntryKind, FetchError};
use crate::target::Target;

/// Requests in flight per directory unless configured otherwise.
pub const DEFAULT_CONCURRENCY: usize = 8;

type NodeFuture<'a> = LocalBoxFuture<'a, Result<TreeNode, FetchError>>;

pub struct TreeBuilder<C, B> {
    contents: C,
    bytes: B,
    concurrency: usize,
}

impl<C: ContentFetcher, B: ByteFetcher> TreeBuilder<C, B> {
    pub fn new(contents: C, bytes: B) -> Self {
        Self {
            contents,
            bytes,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Sets how many sibling entries are fetched at once (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Downloads the file or directory `target` points at.
    ///
    /// Any failure aborts the whole build: no partial tree is returned.
    pub async fn build(&self, target: &Target) -> Result<TreeNode, FetchError> {
        info!(%target, concurrency = self.concurrency, "building tree");

        let root = self.fetch_node(target, target.path().to_string()).await?;

        info!(
            files = root.file_count(),
            bytes = root.total_bytes(),
            "tree complete"
        );
        Ok(root)
    }

    // Boxed so the recursion through fetch_directory has a known size
    fn fetch_node<'a>(&'a self, target: &'a Target, path: String) -> NodeFuture<'a> {
        async move {
            let contents = self
                .contents
                .fetch(target.owner(), target.repository(), &path, target.reference())
                .await?;

            match contents {
                Contents::File(file) => self.fetch_file(file.name, file.download_url).await,
                Contents::Directory(entries) => {
                    let name = directory_name(target, &path);
                    debug!(path = %path, entries = entries.len(), "listed directory");
                    self.fetch_directory(target, name, entries).await
                }
            }
        }
        .boxed_local()
    }

    async fn fetch_directory<'a>(
        &'a self,
        target: &'a Target,
        name: String,
        entries: Vec<Entry>,
    ) -> Result<TreeNode, FetchError> {
        let pending = entries
            .into_iter()
            .filter_map(move |entry| -> Option<NodeFuture<'a>> {
                match entry.kind {
                    EntryKind::File { download_url } => {
                        Some(self.fetch_file(entry.name, download_url).boxed_local())
                    }
                    EntryKind::Dir => Some(self.fetch_node(target, entry.path)),
                    EntryKind::Other(kind) => {
                        debug!(path = %entry.path, %kind, "skipping unsupported entry");
                        None
                    }
                }
            });

        let children: Vec<TreeNode> = stream::iter(pending)
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        Ok(TreeNode::Directory { name, children })
    }

    async fn fetch_file(&self, name: String, location: String) -> Result<TreeNode, FetchError> {
        let content = self.bytes.fetch_bytes(&location).await?;
        Ok(TreeNode::File { name, content })
    }
}

// A directory is named after its last path segment; the repository root
// is named after the repository.
fn directory_name(target: &Target, path: &str) -> String {
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(target.repository())
        .to_string()
}
