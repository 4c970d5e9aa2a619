//! Statistics for a listing run

use std::time::Duration;

use crate::tree::TreeNode;

/// Summary of one walk-and-write cycle
#[derive(Debug, Clone)]
pub struct ListingStats {
    /// Directories below the root
    pub directory_count: usize,
    /// Files below the root
    pub file_count: usize,
    /// Deepest level reached; direct children of the root are level 1
    pub max_depth: usize,
    /// Entries the segment search could not place
    pub orphaned_entries: usize,
    /// Bytes written to the output file
    pub bytes_written: usize,
    /// Walk, build and serialize time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ListingStats {
    fn default() -> Self {
        Self {
            directory_count: 0,
            file_count: 0,
            max_depth: 0,
            orphaned_entries: 0,
            bytes_written: 0,
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ListingStats {
    /// Collect counts from a finished tree
    pub fn for_tree(
        root: &TreeNode,
        orphaned_entries: usize,
        bytes_written: usize,
        processing_time: Duration,
    ) -> Self {
        let (directory_count, file_count) = root.count_kinds();

        Self {
            directory_count,
            file_count,
            max_depth: root.depth(),
            orphaned_entries,
            bytes_written,
            processing_time_ms: processing_time.as_millis() as u64,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Multi-line report for the console
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Directories: {}", self.directory_count),
            format!("Files: {}", self.file_count),
            format!("Max depth: {}", self.max_depth),
            format!("Output size: {}", format_file_size(self.bytes_written as u64)),
            format!("Processing time: {}ms", self.processing_time_ms),
        ];
        if self.orphaned_entries > 0 {
            lines.push(format!("Orphaned entries: {}", self.orphaned_entries));
        }
        lines.push(format!(
            "Collected at: {}",
            self.collected_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        lines.join("\n")
    }
}

/// Format a byte count in human-readable form
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
