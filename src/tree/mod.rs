//! In-memory directory tree and the builders that assemble it

pub mod index;
pub mod search;

pub use index::IndexedTreeBuilder;
pub use search::insert_by_segments;

use serde::{Deserialize, Serialize};

/// One filesystem entry and everything below it.
///
/// Field order is the serialized order: `Name`, `IsDir`, `Path`, `Children`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TreeNode {
    pub name: String,
    pub is_dir: bool,
    pub path: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a directory node with no children
    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            path: path.into(),
            children: Vec::new(),
        }
    }

    /// Create a file node
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            path: path.into(),
            children: Vec::new(),
        }
    }

    /// Find a direct child by name
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Follow a chain of child names from this node
    pub fn descendant(&self, names: &[&str]) -> Option<&TreeNode> {
        names
            .iter()
            .try_fold(self, |node, name| node.child(name))
    }

    /// Number of nodes below this one
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Count (directories, files) below this node
    pub fn count_kinds(&self) -> (usize, usize) {
        self.children.iter().fold((0, 0), |(dirs, files), child| {
            let (sub_dirs, sub_files) = child.count_kinds();
            if child.is_dir {
                (dirs + 1 + sub_dirs, files + sub_files)
            } else {
                (dirs, files + 1 + sub_files)
            }
        })
    }

    /// Depth of the deepest descendant; 0 for a leaf
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }
}
