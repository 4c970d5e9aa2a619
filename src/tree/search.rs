//! Name-driven insertion: locate the parent by walking segment names.
//!
//! No lookup table is kept; every insertion re-walks the tree from the root,
//! comparing names level by level. When a name repeats across sibling
//! subtrees the search follows every match, so a node can land in more than
//! one branch. Callers get the attachment count back and decide what to do.

use super::TreeNode;

/// Insert `new_node` under the node reached by `segments`.
///
/// `segments` starts with the current node's own name and ends with the name
/// of the intended parent. Returns how many times `new_node` was attached:
/// 0 means no branch matched, more than 1 means the name path was ambiguous.
pub fn insert_by_segments<S: AsRef<str>>(
    node: &mut TreeNode,
    segments: &[S],
    new_node: &TreeNode,
) -> usize {
    let Some((first, rest)) = segments.split_first() else {
        return 0;
    };

    if first.as_ref() != node.name {
        return 0;
    }

    if rest.is_empty() {
        node.children.push(new_node.clone());
        return 1;
    }

    node.children
        .iter_mut()
        .map(|child| insert_by_segments(child, rest, new_node))
        .sum()
}
