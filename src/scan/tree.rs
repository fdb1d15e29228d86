//! Nested directory tree built from a flat set of relative paths

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::StructureError;

/// A node in the repository tree: a directory with sorted children, or a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Directory { children: BTreeMap<String, TreeNode> },
    File { path: String },
}

impl TreeNode {
    /// An empty directory node.
    pub fn directory() -> Self {
        TreeNode::Directory { children: BTreeMap::new() }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }

    /// Children in lexicographic order by name; empty for files.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        let children = match self {
            TreeNode::Directory { children } => Some(children),
            TreeNode::File { .. } => None,
        };
        children.into_iter().flat_map(|c| c.iter().map(|(name, node)| (name.as_str(), node)))
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        match self {
            TreeNode::Directory { children } => children.get(name),
            TreeNode::File { .. } => None,
        }
    }

    /// Number of file leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::File { .. } => 1,
            TreeNode::Directory { children } => children.values().map(TreeNode::leaf_count).sum(),
        }
    }
}

/// Build the tree for a set of repository-relative paths.
///
/// The returned node is the synthetic repository root. Fails when a path would
/// have to be both a file and a directory (e.g. `a` and `a/b`), regardless of
/// the order the paths arrive in.
pub fn build_tree<I, S>(paths: I) -> Result<TreeNode, StructureError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = BTreeMap::new();
    for path in paths {
        insert_path(&mut root, path.as_ref())?;
    }
    Ok(TreeNode::Directory { children: root })
}

fn insert_path(root: &mut BTreeMap<String, TreeNode>, path: &str) -> Result<(), StructureError> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(StructureError::EmptySegment { path: path.to_string() });
    }

    let (leaf, dirs) = segments.split_last().ok_or_else(|| StructureError::EmptySegment {
        path: path.to_string(),
    })?;

    let mut current = root;
    for (depth, segment) in dirs.iter().enumerate() {
        let node = current.entry(segment.to_string()).or_insert_with(TreeNode::directory);
        current = match node {
            TreeNode::Directory { children } => children,
            TreeNode::File { .. } => {
                return Err(StructureError::Conflict { path: segments[..=depth].join("/") });
            }
        };
    }

    if current.contains_key(*leaf) {
        return Err(StructureError::Conflict { path: path.to_string() });
    }
    current.insert(leaf.to_string(), TreeNode::File { path: path.to_string() });
    Ok(())
}
