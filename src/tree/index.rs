//! Path-indexed tree builder.
//!
//! Nodes live in an arena while the walk is running and are addressed through
//! a map from full entry path to slot. Parent lookup is a single hash lookup,
//! so repeated names in different branches cannot be confused.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::TreeNode;
use crate::error::{TreeError, TreeResult};

#[derive(Debug)]
struct Slot {
    name: String,
    is_dir: bool,
    path: String,
    children: Vec<usize>,
}

/// Builds a [`TreeNode`] from entries keyed by their full paths
#[derive(Debug)]
pub struct IndexedTreeBuilder {
    slots: Vec<Slot>,
    index: HashMap<PathBuf, usize>,
}

impl IndexedTreeBuilder {
    /// Start a tree whose root is registered under `root_path`
    pub fn new(root_name: impl Into<String>, root_path: &Path) -> Self {
        let root = Slot {
            name: root_name.into(),
            is_dir: true,
            path: root_path.to_string_lossy().into_owned(),
            children: Vec::new(),
        };
        let mut index = HashMap::new();
        index.insert(root_path.to_path_buf(), 0);

        Self {
            slots: vec![root],
            index,
        }
    }

    /// Attach the entry at `path` to its parent directory
    pub fn insert(&mut self, path: &Path, name: impl Into<String>, is_dir: bool) -> TreeResult<()> {
        if self.index.contains_key(path) {
            return Err(TreeError::DuplicateEntry(path.to_path_buf()));
        }

        let parent = path
            .parent()
            .and_then(|p| self.index.get(p).copied())
            .ok_or_else(|| TreeError::OrphanEntry(path.to_path_buf()))?;

        if !self.slots[parent].is_dir {
            return Err(TreeError::ParentNotDirectory(path.to_path_buf()));
        }

        let slot = self.slots.len();
        self.slots.push(Slot {
            name: name.into(),
            is_dir,
            path: path.to_string_lossy().into_owned(),
            children: Vec::new(),
        });
        self.slots[parent].children.push(slot);
        self.index.insert(path.to_path_buf(), slot);

        Ok(())
    }

    /// Convert the arena into an owned tree, keeping insertion order.
    ///
    /// A child is always pushed after its parent, so sweeping the arena from
    /// the back completes every subtree before it is moved into its parent.
    pub fn finish(self) -> TreeNode {
        let mut child_slots = Vec::with_capacity(self.slots.len());
        let mut nodes: Vec<TreeNode> = self
            .slots
            .into_iter()
            .map(|slot| {
                child_slots.push(slot.children);
                TreeNode {
                    name: slot.name,
                    is_dir: slot.is_dir,
                    path: slot.path,
                    children: Vec::new(),
                }
            })
            .collect();

        for (slot, children) in child_slots.into_iter().enumerate().rev() {
            let built: Vec<TreeNode> = children
                .into_iter()
                .map(|child| std::mem::take(&mut nodes[child]))
                .collect();
            nodes[slot].children = built;
        }

        std::mem::take(&mut nodes[0])
    }
}
