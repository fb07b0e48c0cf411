// src/save/mod.rs
// =============================================================================
// This module writes a downloaded tree to the local filesystem.
//
// The walk is depth-first and fail-fast: a directory is created before any
// of its children are written, and the first error stops everything.
// The output directory itself is created if missing, for file and
// directory downloads alike.
//
// Known limitation: files and directories written before a failure are left
// on disk. There is no rollback.
// =============================================================================

mod materialize;

pub use materialize::materialize;
