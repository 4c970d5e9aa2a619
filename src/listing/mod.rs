//! Directory listing module
//!
//! This module contains the walk-build-write pipeline, its configuration, and statistics.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{InsertStrategy, ListingConfig, DEFAULT_OUTPUT};
pub use engine::{BuiltTree, ListingEngine, ListingResult};
pub use stats::ListingStats;
