// src/target/mod.rs
// =============================================================================
// This module turns a GitHub URL into a description of what to download.
//
// Supported URL shapes:
// - https://github.com/owner/repo                   (whole repo, default branch)
// - https://github.com/owner/repo/tree/REF          (whole repo at REF)
// - https://github.com/owner/repo/tree/REF/a/b/c    (sub-path a/b/c at REF)
//
// Parsing is a pure string operation: no network access happens here.
// Invalid owner/repo names are reported later by the contents API.
// =============================================================================

mod resolve;

pub use resolve::{resolve, Target};
