//! JSON rendering and persistence for directory trees

pub mod writer;

pub use writer::persist;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::TreeResult;
use crate::tree::TreeNode;

/// Render `root` as indented JSON using `indent_size` spaces per level
pub fn serialize_tree(root: &TreeNode, indent_size: u8) -> TreeResult<Vec<u8>> {
    let indent = vec![b' '; indent_size as usize];
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    root.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Parse a document produced by [`serialize_tree`]
pub fn deserialize_tree(bytes: &[u8]) -> TreeResult<TreeNode> {
    Ok(serde_json::from_slice(bytes)?)
}
