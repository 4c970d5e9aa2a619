//! Depth-first directory enumeration

pub mod segments;

pub use segments::{parent_segments, root_name};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{TreeError, TreeResult};

/// One entry discovered below the walk root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    /// Distance from the root; direct children are at depth 1
    pub depth: usize,
}

/// Traversal options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    pub max_depth: Option<usize>,
    pub follow_links: bool,
}

/// Verify that `root` is a directory. A symlink to a directory is accepted;
/// walkdir always follows the root.
pub fn check_root(root: &Path) -> TreeResult<()> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(TreeError::NotADirectory(root.to_path_buf())),
        // Let walkdir produce the traversal error with its own context.
        Err(_) => Ok(()),
    }
}

/// Enumerate every descendant of `root`, depth-first, sorted by name.
///
/// The root itself is not yielded. The first error ends the useful part of
/// the walk; callers are expected to stop on it.
pub fn walk_entries(
    root: &Path,
    options: WalkOptions,
) -> impl Iterator<Item = TreeResult<WalkEntry>> {
    let mut walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    walker.into_iter().filter_map(|entry| match entry {
        Ok(entry) if entry.depth() == 0 => None,
        Ok(entry) => Some(Ok(WalkEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: entry.file_type().is_dir(),
            depth: entry.depth(),
            path: entry.into_path(),
        })),
        Err(err) => Some(Err(TreeError::traversal(err))),
    })
}
