// src/github/fake.rs
// =============================================================================
// An in-memory remote repository for tests.
//
// Implements both ContentFetcher and ByteFetcher so the tree builder can be
// exercised without a network. Files are served from "raw://<path>".
// Downloads can be made to fail or to take a while, which lets tests check
// ordering and fail-fast behaviour under concurrency.
//
// serve_once() is for the real reqwest-backed fetchers: a local socket that
// answers exactly one request with a canned HTTP response.
// =============================================================================

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::contents::FileDescriptor;
use super::{ByteFetcher, ContentFetcher, Contents, Entry, EntryKind, FetchError};

pub fn location(path: &str) -> String {
    format!("raw://{}", path)
}

fn base_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}

pub fn file_entry(path: &str) -> Entry {
    Entry {
        name: base_name(path),
        path: path.to_string(),
        kind: EntryKind::File {
            download_url: location(path),
        },
    }
}

pub fn dir_entry(path: &str) -> Entry {
    Entry {
        name: base_name(path),
        path: path.to_string(),
        kind: EntryKind::Dir,
    }
}

pub fn other_entry(path: &str, kind: &str) -> Entry {
    Entry {
        name: base_name(path),
        path: path.to_string(),
        kind: EntryKind::Other(kind.to_string()),
    }
}

#[derive(Default)]
pub struct FakeRemote {
    contents: HashMap<String, Contents>,
    blobs: HashMap<String, Result<Vec<u8>, String>>,
    delays: HashMap<String, Duration>,
    downloads: Mutex<Vec<String>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a directory listing at `path` ("" is the root).
    pub fn dir(mut self, path: &str, entries: Vec<Entry>) -> Self {
        self.contents
            .insert(path.to_string(), Contents::Directory(entries));
        self
    }

    /// Registers a file at `path` with the given bytes.
    pub fn file(mut self, path: &str, bytes: &[u8]) -> Self {
        self.register_file(path);
        self.blobs.insert(location(path), Ok(bytes.to_vec()));
        self
    }

    /// Registers a file whose download fails with `message`.
    pub fn broken_file(mut self, path: &str, message: &str) -> Self {
        self.register_file(path);
        self.blobs.insert(location(path), Err(message.to_string()));
        self
    }

    /// Makes the download of `path` take `delay`.
    pub fn slow(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(location(path), delay);
        self
    }

    /// Locations downloaded so far, in call order.
    pub fn downloads(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }

    fn register_file(&mut self, path: &str) {
        self.contents.insert(
            path.to_string(),
            Contents::File(FileDescriptor {
                name: base_name(path),
                download_url: location(path),
            }),
        );
    }
}

impl ContentFetcher for FakeRemote {
    async fn fetch(
        &self,
        _owner: &str,
        _repo: &str,
        path: &str,
        _reference: Option<&str>,
    ) -> Result<Contents, FetchError> {
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::remote(path, "HTTP 404 Not Found"))
    }
}

impl ByteFetcher for FakeRemote {
    async fn fetch_bytes(&self, location: &str) -> Result<Vec<u8>, FetchError> {
        if let Some(delay) = self.delays.get(location) {
            tokio::time::sleep(*delay).await;
        }

        self.downloads.lock().unwrap().push(location.to_string());

        match self.blobs.get(location) {
            Some(Ok(bytes)) => Ok(bytes.clone()),
            Some(Err(message)) => Err(FetchError::download(location, message.clone())),
            None => Err(FetchError::download(location, "404 Not Found")),
        }
    }
}

/// Builds a complete HTTP/1.1 response, e.g. `http_response("404 Not Found", "")`.
pub fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
}

/// Serves `response` to the first connection on 127.0.0.1 and returns the
/// base URL ("http://127.0.0.1:PORT").
pub async fn serve_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Read the request head; the body of a GET is empty
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}
