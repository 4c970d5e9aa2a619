//! Directory tree to JSON snapshot tool
//!
//! Walks a directory depth-first, rebuilds its hierarchy in memory, and
//! writes it out as indented JSON.

pub mod cli;
pub mod error;
pub mod formatter;
pub mod listing;
pub mod logging;
pub mod tree;
pub mod walker;

// Re-export commonly used types
pub use error::{TreeError, TreeResult};
pub use formatter::{deserialize_tree, persist, serialize_tree};
pub use listing::{InsertStrategy, ListingConfig, ListingEngine, ListingResult};
pub use tree::TreeNode;

/// Build the tree for `root` with default configuration, without writing it
pub fn build_tree(root: &std::path::Path) -> TreeResult<TreeNode> {
    build_tree_with_config(root, &ListingConfig::default())
}

/// Build the tree for `root` with custom configuration, without writing it
pub fn build_tree_with_config(
    root: &std::path::Path,
    config: &ListingConfig,
) -> TreeResult<TreeNode> {
    let engine = ListingEngine::new(config.clone())?;
    Ok(engine.build_tree(root)?.root)
}
