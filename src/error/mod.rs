//! Error types and handling infrastructure for directory listing

use std::io;
use std::path::PathBuf;

/// Main error type for listing operations
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Traversal error at {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No directory path provided")]
    EmptyInput,

    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("No parent node registered for {}", .0.display())]
    OrphanEntry(PathBuf),

    #[error("Entry already inserted: {}", .0.display())]
    DuplicateEntry(PathBuf),

    #[error("Parent of {} is not a directory", .0.display())]
    ParentNotDirectory(PathBuf),
}

impl TreeError {
    pub fn traversal(source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();
        Self::Traversal { path, source }
    }

    pub fn persistence(path: PathBuf, source: io::Error) -> Self {
        Self::Persistence { path, source }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Traversal { path, source } => {
                if let Some(io_err) = source.io_error() {
                    format!("Cannot read {}: {}", path.display(), io_err)
                } else if source.loop_ancestor().is_some() {
                    format!("Symbolic link loop detected at {}", path.display())
                } else {
                    format!("Traversal failed at {}: {}", path.display(), source)
                }
            }
            Self::Persistence { path, source } => {
                format!("Could not write output file {}: {}", path.display(), source)
            }
            Self::OrphanEntry(_) | Self::DuplicateEntry(_) | Self::ParentNotDirectory(_) => {
                format!("Tree construction failed: {}", self)
            }
            _ => self.to_string(),
        }
    }

    /// Short hint printed under the error, if one applies
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Traversal { .. } | Self::NotADirectory(_) => {
                Some("Check that the path exists and is a readable directory")
            }
            Self::EmptyInput => Some("Pass the directory as an argument or type it at the prompt"),
            Self::Persistence { .. } => Some("Use --output to choose a writable location"),
            Self::Configuration { .. } => Some("Try 'dirjson --help' for usage information."),
            _ => None,
        }
    }
}

/// Result type for listing operations
pub type TreeResult<T> = Result<T, TreeError>;
