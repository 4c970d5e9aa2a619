//! Configuration options for directory listing

use std::path::PathBuf;

use crate::walker::WalkOptions;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "fileList.json";

/// How entries are placed into the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertStrategy {
    /// Look the parent up by full path
    #[default]
    Index,
    /// Re-walk the tree matching segment names
    Segment,
}

impl InsertStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertStrategy::Index => "index",
            InsertStrategy::Segment => "segment",
        }
    }
}

/// Listing configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ListingConfig {
    /// Where the JSON document is written
    pub output_path: PathBuf,
    /// Spaces per indentation level (0-8)
    pub indent_size: u8,
    /// Tree insertion strategy
    pub strategy: InsertStrategy,
    /// Maximum depth below the root
    pub max_depth: Option<usize>,
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            indent_size: 4,
            strategy: InsertStrategy::Index,
            max_depth: None,
            follow_links: false,
        }
    }
}

impl ListingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output file
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        self.indent_size = size;
        Ok(self)
    }

    /// Set insertion strategy
    pub fn with_strategy(mut self, strategy: InsertStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set maximum traversal depth
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Follow symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Options handed to the walker
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            max_depth: self.max_depth,
            follow_links: self.follow_links,
        }
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }

        if self.output_path.as_os_str().is_empty() {
            return Err("Output path must not be empty".to_string());
        }

        if let Some(depth) = self.max_depth {
            if depth == 0 {
                return Err("Max depth must be at least 1".to_string());
            }
        }

        Ok(())
    }
}
