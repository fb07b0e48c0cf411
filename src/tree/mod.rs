// src/tree/mod.rs
// =============================================================================
// This module builds an in-memory copy of a remote file or directory.
//
// Submodules:
// - node: the TreeNode type (a file with bytes, or a directory with children)
// - build: the recursive traversal that queries GitHub and downloads files
// =============================================================================

mod build;
mod node;

pub use build::{TreeBuilder, DEFAULT_CONCURRENCY};
pub use node::TreeNode;
