use std::path::{Component, Path};

/// Name used for the root node: the last segment of the path as typed.
///
/// A trailing `..` or a bare `.` or `/` is kept as the segment text.
pub fn root_name(root: &Path) -> String {
    match root.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(other) => other.as_os_str().to_string_lossy().into_owned(),
        None => root.to_string_lossy().into_owned(),
    }
}

/// Segments leading from the root down to the parent of `entry`.
///
/// The first segment is always `root_name`; the rest are the components of
/// `entry` relative to `root`, excluding the entry's own name.
pub fn parent_segments(root: &Path, root_name: &str, entry: &Path) -> Vec<String> {
    let mut segments = vec![root_name.to_string()];

    let relative = entry.strip_prefix(root).unwrap_or(entry);
    if let Some(parent) = relative.parent() {
        segments.extend(parent.components().filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        }));
    }

    segments
}
