// src/tree/node.rs
// =============================================================================
// In-memory representation of a downloaded file or directory.
//
// A node is either a File (with its bytes) or a Directory (with its
// children), never both. Names are single path segments, not full paths.
// =============================================================================

/// One file or directory, recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File { name: String, content: Vec<u8> },
    /// Children keep the order of the remote listing.
    Directory { name: String, children: Vec<TreeNode> },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } | TreeNode::Directory { name, .. } => name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }

    /// Number of files in this subtree.
    pub fn file_count(&self) -> usize {
        match self {
            TreeNode::File { .. } => 1,
            TreeNode::Directory { children, .. } => {
                children.iter().map(TreeNode::file_count).sum()
            }
        }
    }

    /// Total size of all file contents in this subtree.
    pub fn total_bytes(&self) -> usize {
        match self {
            TreeNode::File { content, .. } => content.len(),
            TreeNode::Directory { children, .. } => {
                children.iter().map(TreeNode::total_bytes).sum()
            }
        }
    }
}
