// src/target/resolve.rs
// =============================================================================
// Parses hosting-service URLs into a `Target`.
//
// Grammar:
//   <prefix><owner>/<repo>[/tree/<ref>[/<path-segment>/...]]
//
// A sub-path is only allowed after an explicit "tree/<ref>" segment, even when
// the ref happens to be the default branch.
// =============================================================================

use std::fmt;

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// The URL prefix every github.com browse URL starts with.
pub const GITHUB_PREFIX: &str = "https://github.com/";

/// Errors produced while parsing a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Missing prefix, too few segments, or a missing "tree" token.
    #[error("invalid GitHub URL: {url}")]
    InvalidUrl { url: String },
}

/// What to download: a repository, an optional ref and an optional sub-path.
///
/// Built once by [`resolve`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    owner: String,
    repository: String,
    reference: Option<String>,
    path: String,
}

impl Target {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Branch name or commit hash; `None` means the default branch.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Path inside the repository; empty means the repository root.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repository)?;
        if let Some(reference) = &self.reference {
            write!(f, "@{}", reference)?;
        }
        if !self.path.is_empty() {
            write!(f, ":{}", self.path)?;
        }
        Ok(())
    }
}

/// Parses a `https://github.com/...` URL.
///
/// Example:
///   "https://github.com/rust-lang/rust/tree/master/src/tools"
///   -> owner "rust-lang", repository "rust", ref "master", path "src/tools"
pub fn resolve(url: &str) -> Result<Target, ParseError> {
    resolve_with_prefix(url, GITHUB_PREFIX)
}

/// Same as [`resolve`] but for any origin that uses GitHub's URL layout.
pub fn resolve_with_prefix(url: &str, prefix: &str) -> Result<Target, ParseError> {
    let invalid = || ParseError::InvalidUrl {
        url: url.to_string(),
    };

    let rest = url.strip_prefix(prefix).ok_or_else(invalid)?;

    // Split by '/' to get owner, repo and whatever follows
    let parts: Vec<&str> = rest.split('/').collect();

    if parts.len() < 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(invalid());
    }

    let owner = parts[0].to_string();
    let repository = parts[1].to_string();

    // Root of the repository on the default branch
    if parts.len() == 2 {
        return Ok(Target {
            owner,
            repository,
            reference: None,
            path: String::new(),
        });
    }

    // Anything longer must continue with "tree/<ref>"
    if parts.len() < 4 || parts[2] != "tree" || parts[3].is_empty() {
        return Err(invalid());
    }

    // Browser URLs are percent-encoded ("my%20dir"); the API layer encodes
    // again, so keep the decoded form here
    let decode = |segment: &str| -> Result<String, ParseError> {
        percent_decode_str(segment)
            .decode_utf8()
            .map(|decoded| decoded.into_owned())
            .map_err(|_| invalid())
    };

    let reference = Some(decode(parts[3])?);

    let path = if parts.len() > 4 {
        let trailing = parts[4..].strip_suffix(&[""]).unwrap_or(&parts[4..]);
        trailing
            .iter()
            .map(|segment| decode(segment))
            .collect::<Result<Vec<_>, _>>()?
            .join("/")
    } else {
        String::new()
    };

    Ok(Target {
        owner,
        repository,
        reference,
        path,
    })
}
