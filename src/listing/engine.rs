//! Walk a directory, assemble the tree, and write it out

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::{TreeError, TreeResult};
use crate::formatter::{persist, serialize_tree};
use crate::listing::config::{InsertStrategy, ListingConfig};
use crate::listing::stats::ListingStats;
use crate::tree::{insert_by_segments, IndexedTreeBuilder, TreeNode};
use crate::walker::{self, parent_segments, root_name, WalkEntry};

/// A tree assembled from one walk
#[derive(Debug, Clone)]
pub struct BuiltTree {
    pub root: TreeNode,
    /// Entries that matched no branch (segment strategy only)
    pub orphaned: usize,
}

/// Output of a full walk-and-write cycle
#[derive(Debug, Clone)]
pub struct ListingResult {
    pub tree: TreeNode,
    pub json: Vec<u8>,
    pub bytes_written: usize,
    pub stats: ListingStats,
}

impl ListingResult {
    /// The rendered document as text
    pub fn json_str(&self) -> &str {
        // serde_json only emits UTF-8
        std::str::from_utf8(&self.json).unwrap_or_default()
    }
}

/// Main listing engine
#[derive(Debug)]
pub struct ListingEngine {
    config: ListingConfig,
}

impl ListingEngine {
    /// Create a new engine; the configuration is validated up front
    pub fn new(config: ListingConfig) -> TreeResult<Self> {
        config.validate().map_err(TreeError::configuration)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// Walk `root` and build the in-memory tree.
    ///
    /// Any traversal error aborts the whole build.
    pub fn build_tree(&self, root: &Path) -> TreeResult<BuiltTree> {
        walker::check_root(root)?;

        let name = root_name(root);
        let entries = walker::walk_entries(root, self.config.walk_options());
        info!(root = %root.display(), strategy = self.config.strategy.as_str(), "walking directory");

        match self.config.strategy {
            InsertStrategy::Index => build_indexed(root, name, entries),
            InsertStrategy::Segment => build_by_segments(root, name, entries),
        }
    }

    /// Build, serialize and persist; returns everything the caller may print.
    ///
    /// The output file is only touched once the tree and its JSON are complete.
    pub fn run(&self, root: &Path) -> TreeResult<ListingResult> {
        let start_time = Instant::now();

        let built = self.build_tree(root)?;
        let json = serialize_tree(&built.root, self.config.indent_size)?;
        let bytes_written = persist(&json, &self.config.output_path)?;
        info!(
            output = %self.config.output_path.display(),
            bytes = bytes_written,
            "wrote listing"
        );

        let stats = ListingStats::for_tree(
            &built.root,
            built.orphaned,
            bytes_written,
            start_time.elapsed(),
        );

        Ok(ListingResult {
            tree: built.root,
            json,
            bytes_written,
            stats,
        })
    }
}

fn build_indexed(
    root: &Path,
    name: String,
    entries: impl Iterator<Item = TreeResult<WalkEntry>>,
) -> TreeResult<BuiltTree> {
    let mut builder = IndexedTreeBuilder::new(name, root);

    for entry in entries {
        let entry = entry?;
        debug!(path = %entry.path.display(), is_dir = entry.is_dir, "insert");
        builder.insert(&entry.path, entry.name, entry.is_dir)?;
    }

    Ok(BuiltTree {
        root: builder.finish(),
        orphaned: 0,
    })
}

fn build_by_segments(
    root: &Path,
    name: String,
    entries: impl Iterator<Item = TreeResult<WalkEntry>>,
) -> TreeResult<BuiltTree> {
    let mut tree = TreeNode::directory(name.clone(), root.to_string_lossy());
    let mut orphaned = 0;

    for entry in entries {
        let entry = entry?;
        let segments = parent_segments(root, &name, &entry.path);
        let node = TreeNode {
            name: entry.name,
            is_dir: entry.is_dir,
            path: entry.path.to_string_lossy().into_owned(),
            children: Vec::new(),
        };
        debug!(path = %node.path, segments = ?segments, "insert");

        match insert_by_segments(&mut tree, &segments, &node) {
            0 => {
                warn!(path = %node.path, "no matching branch, entry dropped");
                orphaned += 1;
            }
            1 => {}
            n => warn!(path = %node.path, copies = n, "ambiguous segment path, entry duplicated"),
        }
    }

    Ok(BuiltTree {
        root: tree,
        orphaned,
    })
}
