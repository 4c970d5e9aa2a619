//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::{TreeError, TreeResult};
use crate::listing::{InsertStrategy, ListingConfig, DEFAULT_OUTPUT};

pub mod input;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "dirjson")]
#[command(about = "Snapshot a directory tree into an indented JSON document")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Directory to walk (prompted on stdin when omitted)
    #[arg()]
    pub root: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Spaces per indentation level (0-8, default: 4)
    #[arg(long)]
    pub indent: Option<u8>,

    /// How entries are placed into the tree (default: index)
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Do not descend more than this many levels below the root
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Follow symbolic links
    #[arg(long)]
    pub follow_links: bool,

    /// Print a summary after writing
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Insertion strategies for CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Strategy {
    /// Look the parent up by its full path
    #[value(name = "index")]
    Index,
    /// Match path segment names from the root down
    #[value(name = "segment")]
    Segment,
}

impl From<Strategy> for InsertStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Index => InsertStrategy::Index,
            Strategy::Segment => InsertStrategy::Segment,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub listing_config: ListingConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> TreeResult<Self> {
        let listing_config = Self::create_listing_config(&args)?;

        Ok(Self {
            args,
            listing_config,
        })
    }

    /// Create listing configuration from CLI arguments
    fn create_listing_config(args: &Args) -> TreeResult<ListingConfig> {
        let config = ListingConfig {
            output_path: args.output.clone(),
            indent_size: args.indent.unwrap_or(4),
            strategy: args.strategy.map(Into::into).unwrap_or_default(),
            max_depth: args.max_depth,
            follow_links: args.follow_links,
        };

        config.validate().map_err(TreeError::configuration)?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }
}

/// Show a success message (if not in quiet mode)
pub fn show_success(message: &str, quiet: bool) {
    if !quiet {
        println!("✓ {}", message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &TreeError) {
    eprintln!("✗ {}", error.user_message());

    if let Some(hint) = error.hint() {
        eprintln!("\nTip: {}", hint);
    }
}
