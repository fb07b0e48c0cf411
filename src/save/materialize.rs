// src/save/materialize.rs
// =============================================================================
// Replays a TreeNode onto disk under an output directory.
//
//   materialize(Some(&tree), "out")
//
// writes "out/<tree name>" (a file, or a directory and everything below it).
// Node names come from the remote side, so each one must be a single plain
// path segment before it is joined onto a local path.
// =============================================================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::tree::TreeNode;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no files to save")]
    NothingToSave,

    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `tree` under `root`.
///
/// `root` and every directory in the tree are created (with any missing
/// ancestors) before their children. Existing files are truncated and
/// overwritten.
pub fn materialize(tree: Option<&TreeNode>, root: &Path) -> Result<(), SaveError> {
    let tree = tree.ok_or(SaveError::NothingToSave)?;

    info!(root = %root.display(), name = tree.name(), "saving tree");
    fs::create_dir_all(root).map_err(|source| SaveError::WriteFailed {
        path: root.to_path_buf(),
        source,
    })?;
    save_node(tree, root)
}

fn save_node(node: &TreeNode, base: &Path) -> Result<(), SaveError> {
    let path = base.join(checked_name(node.name(), base)?);

    match node {
        TreeNode::File { content, .. } => {
            debug!(path = %path.display(), size = content.len(), "writing file");
            fs::write(&path, content).map_err(|source| SaveError::WriteFailed { path, source })
        }
        TreeNode::Directory { children, .. } => {
            fs::create_dir_all(&path).map_err(|source| SaveError::WriteFailed {
                path: path.clone(),
                source,
            })?;

            for child in children {
                save_node(child, &path)?;
            }
            Ok(())
        }
    }
}

// Refuses names that would land outside `base` or that aren't a name at all
fn checked_name<'n>(name: &'n str, base: &Path) -> Result<&'n str, SaveError> {
    let unusable = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');

    if unusable {
        return Err(SaveError::WriteFailed {
            path: base.join(name),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unusable file name '{}'", name),
            ),
        });
    }

    Ok(name)
}
